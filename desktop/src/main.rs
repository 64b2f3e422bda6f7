#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use api::ClientConfig;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::dashboard::use_dashboard_environment;
use ui::views::{MeanTimeWeekday, PresenceDays, PresenceStartEnd, PresenceWeekday};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[redirect("/", || Route::PresenceWeekday {})]
    #[route("/presence_weekday")]
    PresenceWeekday {},
    #[route("/mean_time_weekday")]
    MeanTimeWeekday {},
    #[route("/presence_start_end")]
    PresenceStartEnd {},
    #[route("/presence_days")]
    PresenceDays {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Presence Analyzer – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_presence_weekday(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::PresenceWeekday {}, "{label}" })
}
fn nav_mean_time_weekday(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::MeanTimeWeekday {}, "{label}" })
}
fn nav_presence_start_end(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::PresenceStartEnd {}, "{label}" })
}
fn nav_presence_days(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::PresenceDays {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // API base URL from PRESENCE_API_URL, read once at launch.
    use_dashboard_environment(ClientConfig::from_env());

    register_nav(NavBuilder {
        presence_weekday: nav_presence_weekday,
        mean_time_weekday: nav_mean_time_weekday,
        presence_start_end: nav_presence_start_end,
        presence_days: nav_presence_days,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount of the routed subtree on language change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
