use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet; inlined as well for release native builds.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform crates (web/desktop) own the `Route` enum, so they register a
/// `NavBuilder` whose closures wrap a localized label in the matching `Link`.
///
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         presence_weekday: |label| rsx!( Link { class: "navbar__link", to: Route::PresenceWeekday {}, "{label}" } ),
///         mean_time_weekday: |label| rsx!( Link { class: "navbar__link", to: Route::MeanTimeWeekday {}, "{label}" } ),
///         presence_start_end: |label| rsx!( Link { class: "navbar__link", to: Route::PresenceStartEnd {}, "{label}" } ),
///         presence_days: |label| rsx!( Link { class: "navbar__link", to: Route::PresenceDays {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a registered builder `AppNavbar` renders its `children` instead.
pub struct NavBuilder {
    pub presence_weekday: fn(label: &str) -> Element,
    pub mean_time_weekday: fn(label: &str) -> Element,
    pub presence_start_end: fn(label: &str) -> Element,
    pub presence_days: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        dioxus::logger::tracing::trace!(lang = %_lang_marker, "[i18n] AppNavbar render");
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => {
                dioxus::logger::tracing::warn!(%err, lang = %val, "language switch failed");
            }
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let weekday = (b.presence_weekday)(&t!("nav-presence-weekday"));
        let mean_time = (b.mean_time_weekday)(&t!("nav-mean-time-weekday"));
        let start_end = (b.presence_start_end)(&t!("nav-presence-start-end"));
        let days = (b.presence_days)(&t!("nav-presence-days"));

        rsx! {
            nav { class: "navbar__links",
                {weekday}
                {mean_time}
                {start_end}
                {days}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Presence Analyzer" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
