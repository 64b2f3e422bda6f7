//! Column chart (one bar per row, value from the second column).

use dioxus::prelude::*;

use super::environment::ChartEnvironment;
use super::table::{ColumnType, DataTable};
use crate::core::format::format_number;
use crate::core::TimeOfDay;

const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 48.0;
const TICKS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBar {
    pub label: String,
    pub value: f64,
    pub value_label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub bars: Vec<ColumnBar>,
    pub ticks: Vec<AxisTick>,
    pub baseline: f64,
    pub axis_title: String,
}

pub fn layout_columns(table: &DataTable, width: f64, height: f64) -> ColumnLayout {
    let plot_width = (width - PAD_LEFT - PAD_RIGHT).max(1.0);
    let plot_height = (height - PAD_TOP - PAD_BOTTOM).max(1.0);
    let baseline = PAD_TOP + plot_height;

    let values: Vec<f64> = table
        .rows()
        .iter()
        .map(|row| row.get(1).and_then(|cell| cell.as_number()).unwrap_or(0.0).max(0.0))
        .collect();
    let max_value = values.iter().copied().fold(0.0_f64, f64::max);
    let scale_max = if max_value > 0.0 { max_value } else { 1.0 };

    let slot = plot_width / values.len().max(1) as f64;
    let bars = values
        .iter()
        .enumerate()
        .map(|(row, value)| {
            let bar_height = value / scale_max * plot_height;
            ColumnBar {
                label: table.formatted_value(row, 0).unwrap_or_default(),
                value: *value,
                value_label: table.formatted_value(row, 1).unwrap_or_default(),
                x: PAD_LEFT + slot * row as f64 + slot * 0.2,
                y: baseline - bar_height,
                width: slot * 0.6,
                height: bar_height,
            }
        })
        .collect();

    let times = table
        .columns()
        .get(1)
        .is_some_and(|column| column.kind == ColumnType::TimeOfDay);
    let ticks = (0..=TICKS)
        .map(|step| {
            let value = scale_max * step as f64 / TICKS as f64;
            AxisTick {
                position: baseline - plot_height * step as f64 / TICKS as f64,
                label: if times {
                    TimeOfDay::from_seconds(value as i64).format()
                } else {
                    format_number(value)
                },
            }
        })
        .collect();

    ColumnLayout {
        bars,
        ticks,
        baseline,
        axis_title: table
            .columns()
            .first()
            .map(|column| column.title().to_string())
            .unwrap_or_default(),
    }
}

#[component]
pub fn ColumnChart(table: DataTable) -> Element {
    let env = use_context::<ChartEnvironment>();
    let (width, height) = (env.width, env.height);
    let layout = layout_columns(&table, width, height);
    let color = env.color(0);
    let axis_right = width - PAD_RIGHT;
    let title_y = height - 8.0;
    let center_x = PAD_LEFT + (width - PAD_LEFT - PAD_RIGHT) / 2.0;

    rsx! {
        svg {
            class: "chart chart--column",
            view_box: "0 0 {width} {height}",
            "preserveAspectRatio": "xMidYMid meet",

            for (i, tick) in layout.ticks.iter().enumerate() {
                g { key: "tick-{i}",
                    line {
                        class: "chart__grid",
                        x1: "{PAD_LEFT}",
                        y1: "{tick.position}",
                        x2: "{axis_right}",
                        y2: "{tick.position}",
                    }
                    text {
                        class: "chart__tick",
                        x: "{PAD_LEFT - 6.0}",
                        y: "{tick.position + 4.0}",
                        "text-anchor": "end",
                        "{tick.label}"
                    }
                }
            }

            for (i, bar) in layout.bars.iter().enumerate() {
                g { key: "bar-{i}",
                    rect {
                        class: "chart__bar",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: "{color}",
                        title { "{bar.label}: {bar.value_label}" }
                    }
                    text {
                        class: "chart__category",
                        x: "{bar.x + bar.width / 2.0}",
                        y: "{layout.baseline + 16.0}",
                        "text-anchor": "middle",
                        "{bar.label}"
                    }
                }
            }

            text {
                class: "chart__axis-title",
                x: "{center_x}",
                y: "{title_y}",
                "text-anchor": "middle",
                "{layout.axis_title}"
            }
        }
    }
}
