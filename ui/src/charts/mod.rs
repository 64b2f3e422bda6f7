//! Chart kinds, typed data tables and the SVG renderers that draw them.

mod calendar;
mod column;
mod environment;
mod kind;
mod pie;
mod series;
mod table;
mod timeline;

pub use calendar::{layout_calendar, CalendarCell, CalendarChart, CalendarYear};
pub use column::{layout_columns, AxisTick, ColumnBar, ColumnChart, ColumnLayout};
pub use environment::{ChartEnvironment, DEFAULT_PALETTE};
pub use kind::{ChartKind, ChartStyle};
pub use pie::{layout_pie, PieChart, PieSlice};
pub use series::{build_table, fetch_series, PresenceSeries};
pub use table::{Cell, Column, ColumnType, DataTable, FormatPattern, TableError};
pub use timeline::{layout_timeline, TimelineChart, TimelineLayout, TimelineSpan};

use dioxus::prelude::*;

/// Draw a table with the renderer of the given style.
#[component]
pub fn ChartCanvas(style: ChartStyle, table: DataTable) -> Element {
    match style {
        ChartStyle::Column => rsx! { ColumnChart { table } },
        ChartStyle::Pie => rsx! { PieChart { table } },
        ChartStyle::Timeline => rsx! { TimelineChart { table } },
        ChartStyle::Calendar => rsx! { CalendarChart { table } },
    }
}
