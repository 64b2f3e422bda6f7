use dioxus::logger::tracing;
use dioxus::prelude::*;
use futures_util::StreamExt;

use super::controller::ChartController;
use super::pipeline::load_chart;
use super::setup::DashboardEnvironment;
use crate::charts::{ChartCanvas, ChartKind};
use crate::core::Collation;
use crate::directory::{load_directory, sort_entries, DirectoryEntry, DirectoryState, UserSelect};
use crate::{i18n, t};

fn page_title(kind: ChartKind) -> String {
    match kind {
        ChartKind::PresenceWeekday => t!("page-presence-weekday-title"),
        ChartKind::MeanTimeWeekday => t!("page-mean-time-weekday-title"),
        ChartKind::PresenceStartEnd => t!("page-presence-start-end-title"),
        ChartKind::PresenceDays => t!("page-presence-days-title"),
    }
}

/// One dashboard page: user selection, avatar and the chart of `kind` for
/// the selected user.
#[component]
pub fn PresenceChartPage(kind: ChartKind) -> Element {
    let env = use_context::<DashboardEnvironment>();
    let mut directory = use_signal(DirectoryState::default);
    let controller = use_signal(ChartController::default);

    // Subscribe to the global language so the list re-sorts on a switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|c| c()).unwrap_or_default();
    let collation = Collation::for_language(&i18n::current_language());

    let directory_source = env.source.clone();
    use_future(move || {
        let source = directory_source.clone();
        async move {
            let state = match load_directory(source.as_ref(), collation).await {
                Ok(entries) => DirectoryState::Ready(entries),
                Err(err) => {
                    tracing::warn!(%err, "user directory failed to load");
                    DirectoryState::Failed(err.to_string())
                }
            };
            directory.set(state);
        }
    });

    let chart_source = env.source.clone();
    let selection = use_coroutine(move |mut rx: UnboundedReceiver<Option<DirectoryEntry>>| {
        let source = chart_source.clone();
        let mut controller = controller;
        async move {
            while let Some(entry) = rx.next().await {
                let Some(ticket) = controller.with_mut(|c| c.select(entry)) else {
                    continue;
                };
                let source = source.clone();
                spawn(async move {
                    let outcome = load_chart(source.as_ref(), kind, ticket.user_id).await;
                    controller.with_mut(|c| c.resolve(ticket.token, outcome));
                });
            }
        }
    });

    let snapshot = controller();
    let visible = snapshot.visibility();
    let avatar = snapshot.avatar().map(|uri| env.avatar_src(uri));
    let selected_id = snapshot.selected().map(|entry| entry.id);
    let selected_name = snapshot
        .selected()
        .map(|entry| entry.display_name.clone())
        .unwrap_or_default();

    let selector = match directory() {
        DirectoryState::Loading => rsx! {
            p { class: "chart-loading", {t!("loading")} }
        },
        DirectoryState::Ready(mut entries) => {
            sort_entries(&mut entries, collation);
            rsx! {
                UserSelect {
                    entries,
                    selected: selected_id,
                    on_select: move |entry| selection.send(entry),
                }
            }
        }
        // Logged by the loader task; the control stays hidden.
        DirectoryState::Failed(_) => rsx! {},
    };

    rsx! {
        section { class: "page page-chart page-chart--{kind.slug()}",
            h1 { {page_title(kind)} }

            div { class: "chart-toolbar",
                {selector}

                if visible.avatar {
                    if let Some(src) = avatar {
                        img {
                            class: "chart-toolbar__avatar",
                            src: "{src}",
                            alt: "{selected_name}",
                        }
                    }
                }
            }

            ChartPanel { kind, controller: snapshot }
        }
    }
}

/// The area below the toolbar: loading indicator, no-data placeholder,
/// error banner or the chart, whichever the controller says is visible.
#[component]
pub fn ChartPanel(kind: ChartKind, controller: ChartController) -> Element {
    let visible = controller.visibility();

    rsx! {
        div { class: "chart-panel",
            if visible.loading {
                p { class: "chart-loading", {t!("loading")} }
            }
            if visible.placeholder {
                p { class: "chart-placeholder", {t!("chart-no-data")} }
            }
            if visible.error {
                div { class: "chart-error",
                    "⚠️ "
                    {t!("chart-error", reason = controller.error().unwrap_or_default().to_string())}
                }
            }
            if visible.chart {
                if let Some(table) = controller.table().cloned() {
                    ChartCanvas { style: kind.style(), table }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::charts::{build_table, ChartEnvironment, PresenceSeries};
    use crate::dashboard::pipeline::ChartError;
    use api::{ApiError, ClientConfig, Endpoint, MemorySource, PresenceSource};
    use futures::executor::block_on;
    use serde_json::json;

    #[derive(Clone)]
    struct Fixture(Rc<MemorySource>);

    impl PartialEq for Fixture {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    #[component]
    fn PageHarness(fixture: Fixture) -> Element {
        let source: Rc<dyn PresenceSource> = fixture.0.clone();
        use_context_provider(|| DashboardEnvironment::with_source(source, ClientConfig::same_origin()));
        use_context_provider(ChartEnvironment::default);
        rsx! {
            PresenceChartPage { kind: ChartKind::PresenceWeekday }
        }
    }

    #[component]
    fn PanelHarness(controller: ChartController) -> Element {
        use_context_provider(ChartEnvironment::default);
        rsx! {
            ChartPanel { kind: ChartKind::MeanTimeWeekday, controller }
        }
    }

    fn page_dom(source: &Rc<MemorySource>) -> VirtualDom {
        crate::i18n::init();
        let mut dom = VirtualDom::new_with_props(
            PageHarness,
            PageHarnessProps {
                fixture: Fixture(source.clone()),
            },
        );
        dom.rebuild_in_place();
        dom
    }

    /// Let spawned tasks run once and apply what they changed.
    fn settle(dom: &mut VirtualDom) -> String {
        block_on(dom.wait_for_work());
        let _ = dom.render_immediate_to_vec();
        dioxus_ssr::render(dom)
    }

    fn render_panel(controller: ChartController) -> String {
        crate::i18n::init();
        let mut dom = VirtualDom::new_with_props(PanelHarness, PanelHarnessProps { controller });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn entry(id: u32) -> DirectoryEntry {
        DirectoryEntry {
            id,
            display_name: format!("user {id}"),
            avatar_uri: None,
        }
    }

    #[test]
    fn loading_indicator_gives_way_to_the_selection_control() {
        let source = Rc::new(MemorySource::new().with_json(
            Endpoint::UsersData,
            json!([
                {"user_id": 2, "name": "Zenon", "avatar": "/img/2.png"},
                {"user_id": 1, "name": "Adam", "avatar": "/img/1.png"}
            ]),
        ));
        let mut dom = page_dom(&source);

        let before = dioxus_ssr::render(&dom);
        assert!(before.contains("chart-loading"), "{before}");
        assert!(!before.contains("id=\"user_id\""), "{before}");

        let after = settle(&mut dom);
        assert!(!after.contains("chart-loading"), "{after}");
        assert!(after.contains("id=\"user_id\""), "{after}");
        let adam = after.find("Adam").unwrap();
        let zenon = after.find("Zenon").unwrap();
        assert!(adam < zenon);
        assert!(after.contains("data-avatar=\"/img/1.png\""), "{after}");
        assert_eq!(source.requests(), vec![Endpoint::UsersData]);
    }

    #[test]
    fn failed_directory_keeps_the_control_hidden() {
        let source = Rc::new(
            MemorySource::new().with_error(Endpoint::UsersData, ApiError::Status { code: 503 }),
        );
        let mut dom = page_dom(&source);

        let after = settle(&mut dom);
        assert!(!after.contains("id=\"user_id\""), "{after}");
        assert!(!after.contains("chart-loading"), "{after}");
        assert!(!after.contains("<svg"), "{after}");
    }

    #[test]
    fn idle_panel_is_empty() {
        let html = render_panel(ChartController::default());
        assert!(html.contains("chart-panel"));
        for hidden in ["chart-loading", "chart-placeholder", "chart-error", "<svg"] {
            assert!(!html.contains(hidden), "{hidden} in {html}");
        }
    }

    #[test]
    fn panel_shows_only_the_placeholder_after_404() {
        let mut controller = ChartController::default();
        let ticket = controller.select(Some(entry(7))).unwrap();
        controller.resolve(ticket.token, Err(ChartError::Api(ApiError::NotFound)));

        let html = render_panel(controller);
        assert!(html.contains("chart-placeholder"), "{html}");
        for hidden in ["chart-loading", "chart-error", "<svg"] {
            assert!(!html.contains(hidden), "{hidden} in {html}");
        }
    }

    #[test]
    fn panel_shows_only_the_loading_indicator_while_fetching() {
        let mut controller = ChartController::default();
        controller.select(Some(entry(3)));

        let html = render_panel(controller);
        assert!(html.contains("chart-loading"), "{html}");
        assert!(!html.contains("chart-placeholder"), "{html}");
        assert!(!html.contains("<svg"), "{html}");
    }

    #[test]
    fn panel_draws_the_chart_with_formatted_times() {
        let table =
            build_table(&PresenceSeries::WeekdayMean(vec![("Mon".into(), 3600.0)])).unwrap();
        let mut controller = ChartController::default();
        let ticket = controller.select(Some(entry(3))).unwrap();
        controller.resolve(ticket.token, Ok(table));

        let html = render_panel(controller);
        assert!(html.contains("chart--column"), "{html}");
        assert!(html.contains("Mon: 01:00:00"), "{html}");
        assert!(!html.contains("chart-loading"), "{html}");
    }

    #[test]
    fn panel_reports_other_failures() {
        let mut controller = ChartController::default();
        let ticket = controller.select(Some(entry(1))).unwrap();
        controller.resolve(
            ticket.token,
            Err(ChartError::Api(ApiError::Status { code: 502 })),
        );

        let html = render_panel(controller);
        assert!(html.contains("chart-error"), "{html}");
        assert!(html.contains("unexpected status 502"), "{html}");
        assert!(!html.contains("chart-placeholder"), "{html}");
    }
}
