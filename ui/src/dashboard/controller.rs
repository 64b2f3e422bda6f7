//! View state of a chart page.
//!
//! Each selection issues a fresh [`RequestToken`]; only the response carrying
//! the latest token may change what is shown. Late responses for an earlier
//! selection, or for a selection that has since been cleared, are dropped.

use dioxus::logger::tracing;

use super::pipeline::ChartError;
use crate::charts::DataTable;
use crate::directory::DirectoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    ShowingChart,
    ShowingNoData,
    /// Transport, status or shape failure other than "no data".
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// What the page has to fetch after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub user_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied(ViewState),
    /// Superseded by a later selection (or a cleared one); nothing changed.
    Stale,
}

/// Which page elements are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub loading: bool,
    pub chart: bool,
    pub placeholder: bool,
    pub error: bool,
    pub avatar: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartController {
    state: ViewState,
    issued: u64,
    latest: Option<RequestToken>,
    selected: Option<DirectoryEntry>,
    table: Option<DataTable>,
    error: Option<String>,
}

impl ChartController {
    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn selected(&self) -> Option<&DirectoryEntry> {
        self.selected.as_ref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.selected.as_ref()?.avatar_uri.as_deref()
    }

    /// The drawn table, present only while the chart is shown.
    pub fn table(&self) -> Option<&DataTable> {
        self.table.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest == Some(token)
    }

    /// React to a change of the selection control. A user moves the page to
    /// `Loading` and returns the fetch to perform; `None` returns to `Idle`.
    pub fn select(&mut self, entry: Option<DirectoryEntry>) -> Option<FetchTicket> {
        self.table = None;
        self.error = None;

        let Some(entry) = entry else {
            self.selected = None;
            self.latest = None;
            self.state = ViewState::Idle;
            return None;
        };

        self.issued += 1;
        let token = RequestToken(self.issued);
        let user_id = entry.id;
        tracing::debug!(user_id, token = token.0, "selection changed");

        self.selected = Some(entry);
        self.latest = Some(token);
        self.state = ViewState::Loading;
        Some(FetchTicket { token, user_id })
    }

    /// Apply the outcome of the fetch identified by `token`.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        outcome: Result<DataTable, ChartError>,
    ) -> Resolution {
        if !self.is_latest(token) || self.state != ViewState::Loading {
            tracing::debug!(token = token.0, "discarding stale chart response");
            return Resolution::Stale;
        }

        self.state = match outcome {
            Ok(table) => {
                self.table = Some(table);
                ViewState::ShowingChart
            }
            Err(err) if err.is_no_data() => ViewState::ShowingNoData,
            Err(err) => {
                tracing::warn!(%err, "chart failed to load");
                self.error = Some(err.to_string());
                ViewState::Failed
            }
        };
        Resolution::Applied(self.state)
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            loading: self.state == ViewState::Loading,
            chart: self.state == ViewState::ShowingChart,
            placeholder: self.state == ViewState::ShowingNoData,
            error: self.state == ViewState::Failed,
            avatar: self.state != ViewState::Idle && self.avatar().is_some(),
        }
    }
}
