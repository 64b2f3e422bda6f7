use dioxus::prelude::*;

use crate::charts::ChartKind;
use crate::dashboard::PresenceChartPage;

#[cfg(debug_assertions)]
fn log_page_render(kind: ChartKind, lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    dioxus::logger::tracing::trace!(page = kind.slug(), lang, "[i18n] chart page render");
}

/// Mount the page for `kind`, re-rendering when the global language changes.
fn localized_page(kind: ChartKind) -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        log_page_render(kind, &lang_marker);
    }

    rsx! {
        // Hidden marker node ensures reactive dependency on language signal.
        div { style: "display:none", "{lang_marker}" }
        PresenceChartPage { kind }
    }
}

#[component]
pub fn PresenceWeekday() -> Element {
    localized_page(ChartKind::PresenceWeekday)
}

#[component]
pub fn MeanTimeWeekday() -> Element {
    localized_page(ChartKind::MeanTimeWeekday)
}

#[component]
pub fn PresenceStartEnd() -> Element {
    localized_page(ChartKind::PresenceStartEnd)
}

#[component]
pub fn PresenceDays() -> Element {
    localized_page(ChartKind::PresenceDays)
}
