//! Pie chart over a label/value table.

use std::f64::consts::TAU;

use dioxus::prelude::*;

use super::environment::ChartEnvironment;
use super::table::DataTable;
use crate::core::format::{format_duration, format_percent};

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    /// Clockwise from twelve o'clock, radians.
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub color: &'static str,
}

/// Lay out one slice per row with a positive value. Rows with zero or
/// negative values are left out; an all-zero table yields no slices.
pub fn layout_pie(
    table: &DataTable,
    cx: f64,
    cy: f64,
    radius: f64,
    env: &ChartEnvironment,
) -> Vec<PieSlice> {
    let entries: Vec<(String, f64)> = (0..table.row_count())
        .filter_map(|row| {
            let value = table.cell(row, 1)?.as_number()?;
            (value > 0.0).then(|| (table.formatted_value(row, 0).unwrap_or_default(), value))
        })
        .collect();
    let total: f64 = entries.iter().map(|(_, value)| value).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let fraction = value / total;
            let start_angle = angle;
            let end_angle = angle + fraction * TAU;
            angle = end_angle;
            PieSlice {
                label,
                value,
                fraction,
                start_angle,
                end_angle,
                path: slice_path(cx, cy, radius, start_angle, end_angle),
                color: env.color(index),
            }
        })
        .collect()
}

fn point(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

fn slice_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    if end - start >= TAU - 1e-9 {
        // A single arc cannot close on itself; draw the circle as two halves.
        let (x0, y0) = point(cx, cy, radius, 0.0);
        let (x1, y1) = point(cx, cy, radius, TAU / 2.0);
        return format!(
            "M {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 1 1 {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 1 1 {x0:.2} {y0:.2} Z"
        );
    }
    let (x0, y0) = point(cx, cy, radius, start);
    let (x1, y1) = point(cx, cy, radius, end);
    let large_arc = if end - start > TAU / 2.0 { 1 } else { 0 };
    format!(
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    )
}

#[component]
pub fn PieChart(table: DataTable) -> Element {
    let env = use_context::<ChartEnvironment>();
    let radius = (env.height / 2.0 - 16.0).max(8.0);
    let cx = radius + 16.0;
    let cy = env.height / 2.0;
    let slices = layout_pie(&table, cx, cy, radius, &env);
    let legend_x = cx + radius + 32.0;
    let (width, height) = (env.width, env.height);
    let legend: Vec<(f64, f64, &PieSlice)> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| (24.0 + i as f64 * 24.0, 34.0 + i as f64 * 24.0, slice))
        .collect();
    let label_x = legend_x + 20.0;

    rsx! {
        svg {
            class: "chart chart--pie",
            view_box: "0 0 {width} {height}",
            "preserveAspectRatio": "xMidYMid meet",

            for (i, slice) in slices.iter().enumerate() {
                path {
                    key: "slice-{i}",
                    class: "chart__slice",
                    d: "{slice.path}",
                    fill: "{slice.color}",
                    title { "{slice.label}: {format_duration(slice.value)} ({format_percent(slice.fraction)})" }
                }
            }

            for (i, (swatch_y, label_y, slice)) in legend.iter().enumerate() {
                g { key: "legend-{i}",
                    rect {
                        x: "{legend_x}",
                        y: "{swatch_y}",
                        width: "12",
                        height: "12",
                        fill: "{slice.color}",
                    }
                    text {
                        class: "chart__legend",
                        x: "{label_x}",
                        y: "{label_y}",
                        "{slice.label} · {format_percent(slice.fraction)}"
                    }
                }
            }
        }
    }
}
