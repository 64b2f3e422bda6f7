//! Fetch → table, the data half of a chart page.

use api::{ApiError, PresenceSource};
use dioxus::logger::tracing;
use thiserror::Error;

use crate::charts::{build_table, fetch_series, ChartKind, DataTable, TableError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("cannot chart response: {0}")]
    Table(#[from] TableError),
}

impl ChartError {
    /// The backend has nothing for this user; shown as the placeholder
    /// rather than as a failure.
    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartError::Api(ApiError::NotFound))
    }
}

/// Fetch the series for `kind` and map it into its typed table.
pub async fn load_chart(
    source: &dyn PresenceSource,
    kind: ChartKind,
    user_id: u32,
) -> Result<DataTable, ChartError> {
    tracing::debug!(user_id, chart = kind.slug(), "fetching presence series");
    let series = fetch_series(source, kind, user_id).await?;
    let table = build_table(&series)?;
    tracing::debug!(user_id, rows = table.row_count(), "chart table ready");
    Ok(table)
}
