use dioxus::prelude::*;

use api::ClientConfig;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::dashboard::use_dashboard_environment;
use ui::views::{MeanTimeWeekday, PresenceDays, PresenceStartEnd, PresenceWeekday};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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
));

fn nav_presence_weekday(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::PresenceWeekday {},
        "{label}"
    })
}
fn nav_mean_time_weekday(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::MeanTimeWeekday {},
        "{label}"
    })
}
fn nav_presence_start_end(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::PresenceStartEnd {},
        "{label}"
    })
}
fn nav_presence_days(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::PresenceDays {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // The browser build is served next to the API.
    use_dashboard_environment(ClientConfig::same_origin());

    register_nav(NavBuilder {
        presence_weekday: nav_presence_weekday,
        mean_time_weekday: nav_mean_time_weekday,
        presence_start_end: nav_presence_start_end,
        presence_days: nav_presence_days,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
