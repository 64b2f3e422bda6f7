//! Timeline chart: one start..end bar per row on a shared clock axis.

use dioxus::prelude::*;

use super::environment::ChartEnvironment;
use super::table::DataTable;
use crate::core::interval::SECONDS_PER_DAY;
use crate::core::TimeOfDay;

const LABEL_WIDTH: f64 = 64.0;
const PAD_RIGHT: f64 = 16.0;
const AXIS_HEIGHT: f64 = 24.0;
const HOUR: u32 = 3600;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSpan {
    pub label: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub tooltip: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub spans: Vec<TimelineSpan>,
    /// `(x, label)` per axis tick.
    pub ticks: Vec<(f64, String)>,
    /// Visible window in seconds since midnight.
    pub domain: (u32, u32),
    pub height: f64,
}

/// Rows with a missing or non-time start/end are skipped. The domain snaps
/// outward to whole hours around all spans.
pub fn layout_timeline(table: &DataTable, width: f64, row_height: f64) -> TimelineLayout {
    let rows: Vec<(usize, TimeOfDay, TimeOfDay)> = (0..table.row_count())
        .filter_map(|row| {
            let start = table.cell(row, 1)?.as_time()?;
            let end = table.cell(row, 2)?.as_time()?;
            Some((row, start, end))
        })
        .collect();

    let domain = match (
        rows.iter().map(|(_, start, _)| start.seconds_since_midnight()).min(),
        rows.iter()
            .map(|(_, start, end)| end.max(start).seconds_since_midnight())
            .max(),
    ) {
        (Some(min), Some(max)) => {
            let lower = min / HOUR * HOUR;
            let upper = (max.div_ceil(HOUR) * HOUR).min(SECONDS_PER_DAY as u32);
            if upper > lower {
                (lower, upper)
            } else {
                (lower, (lower + HOUR).min(SECONDS_PER_DAY as u32))
            }
        }
        _ => (0, SECONDS_PER_DAY as u32),
    };

    let plot_width = (width - LABEL_WIDTH - PAD_RIGHT).max(1.0);
    let span_seconds = f64::from(domain.1 - domain.0).max(1.0);
    let scale = |seconds: u32| {
        LABEL_WIDTH + f64::from(seconds.saturating_sub(domain.0)) / span_seconds * plot_width
    };

    let spans = rows
        .into_iter()
        .enumerate()
        .map(|(index, (row, start, end))| {
            let x = scale(start.seconds_since_midnight());
            let x_end = scale(end.max(start).seconds_since_midnight());
            TimelineSpan {
                label: table.formatted_value(row, 0).unwrap_or_default(),
                start,
                end,
                tooltip: format!(
                    "{} – {}",
                    table.formatted_value(row, 1).unwrap_or_default(),
                    table.formatted_value(row, 2).unwrap_or_default()
                ),
                x,
                y: AXIS_HEIGHT + index as f64 * row_height + row_height * 0.15,
                width: x_end - x,
                height: row_height * 0.7,
            }
        })
        .collect::<Vec<_>>();

    let hours = (domain.1 - domain.0) / HOUR;
    let step = if hours > 12 { 2 * HOUR } else { HOUR };
    let ticks = (domain.0..=domain.1)
        .step_by(step as usize)
        .map(|seconds| {
            let label = if seconds >= SECONDS_PER_DAY as u32 {
                "24:00".to_string()
            } else {
                let time = TimeOfDay::from_seconds(i64::from(seconds)).format();
                time.get(..5).unwrap_or(&time).to_string()
            };
            (scale(seconds), label)
        })
        .collect();

    TimelineLayout {
        height: AXIS_HEIGHT + spans.len() as f64 * row_height + 8.0,
        spans,
        ticks,
        domain,
    }
}

#[component]
pub fn TimelineChart(table: DataTable) -> Element {
    let env = use_context::<ChartEnvironment>();
    let width = env.width;
    let layout = layout_timeline(&table, width, env.timeline_row_height);
    let height = layout.height;
    let label_x = LABEL_WIDTH - 8.0;

    rsx! {
        svg {
            class: "chart chart--timeline",
            view_box: "0 0 {width} {height}",
            "preserveAspectRatio": "xMidYMid meet",

            for (i, (x, label)) in layout.ticks.iter().enumerate() {
                g { key: "tick-{i}",
                    line {
                        class: "chart__grid",
                        x1: "{x}",
                        y1: "{AXIS_HEIGHT}",
                        x2: "{x}",
                        y2: "{height}",
                    }
                    text {
                        class: "chart__tick",
                        x: "{x}",
                        y: "{AXIS_HEIGHT - 8.0}",
                        "text-anchor": "middle",
                        "{label}"
                    }
                }
            }

            for (i, span) in layout.spans.iter().enumerate() {
                g { key: "span-{i}",
                    text {
                        class: "chart__category",
                        x: "{label_x}",
                        y: "{span.y + span.height / 2.0 + 4.0}",
                        "text-anchor": "end",
                        "{span.label}"
                    }
                    rect {
                        class: "chart__span",
                        x: "{span.x}",
                        y: "{span.y}",
                        width: "{span.width}",
                        height: "{span.height}",
                        rx: "3",
                        fill: "{env.color(i)}",
                        title { "{span.label}: {span.tooltip}" }
                    }
                }
            }
        }
    }
}
