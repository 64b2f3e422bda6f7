//! Year calendar heatmap: weeks as columns, weekdays (Sunday first) as rows.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use time::{Date, Month};

use super::environment::ChartEnvironment;
use super::table::DataTable;
use crate::core::format::{format_date, format_duration};

const LEFT_MARGIN: f64 = 24.0;
const TOP_MARGIN: f64 = 20.0;
const EMPTY_FILL: &str = "#f1f3f4";
const LOW: (u8, u8, u8) = (0xd2, 0xe3, 0xfc);
const HIGH: (u8, u8, u8) = (0x1a, 0x4f, 0xb8);

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: Date,
    pub value: Option<f64>,
    /// `0.0..=1.0` relative to the largest value in the table.
    pub intensity: f64,
    pub x: f64,
    pub y: f64,
    pub fill: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarYear {
    pub year: i32,
    pub cells: Vec<CalendarCell>,
    /// `(x, label)` at the first week of each month.
    pub month_labels: Vec<(f64, String)>,
    pub width: f64,
    pub height: f64,
}

/// One block per year present in the table. Every day of those years gets a
/// cell; days without a row stay unfilled. Duplicate dates keep the last row.
pub fn layout_calendar(table: &DataTable, cell_size: f64) -> Vec<CalendarYear> {
    let mut values: BTreeMap<Date, f64> = BTreeMap::new();
    for row in 0..table.row_count() {
        let (Some(date), Some(value)) = (
            table.cell(row, 0).and_then(|cell| cell.as_date()),
            table.cell(row, 1).and_then(|cell| cell.as_number()),
        ) else {
            continue;
        };
        values.insert(date, value);
    }

    let max_value = values.values().copied().fold(0.0_f64, f64::max);
    let mut years: Vec<i32> = values.keys().map(|date| date.year()).collect();
    years.dedup();

    years
        .into_iter()
        .filter_map(|year| layout_year(year, &values, max_value, cell_size))
        .collect()
}

fn layout_year(
    year: i32,
    values: &BTreeMap<Date, f64>,
    max_value: f64,
    cell_size: f64,
) -> Option<CalendarYear> {
    let first = Date::from_ordinal_date(year, 1).ok()?;
    let offset = u16::from(first.weekday().number_days_from_sunday());
    let week_of = |date: Date| f64::from((date.ordinal() - 1 + offset) / 7);

    let mut cells = Vec::with_capacity(366);
    let mut month_labels = Vec::with_capacity(12);
    let mut day = first;
    loop {
        let x = LEFT_MARGIN + week_of(day) * cell_size;
        if day.day() == 1 {
            month_labels.push((x, month_abbr(day.month()).to_string()));
        }

        let value = values.get(&day).copied();
        let intensity = match value {
            Some(v) if max_value > 0.0 => (v / max_value).clamp(0.0, 1.0),
            _ => 0.0,
        };
        cells.push(CalendarCell {
            date: day,
            value,
            intensity,
            x,
            y: TOP_MARGIN + f64::from(day.weekday().number_days_from_sunday()) * cell_size,
            fill: match value {
                Some(_) => shade(intensity),
                None => EMPTY_FILL.to_string(),
            },
            tooltip: match value {
                Some(v) => format!("{}: {}", format_date(day), format_duration(v)),
                None => format_date(day),
            },
        });

        match day.next_day() {
            Some(next) if next.year() == year => day = next,
            _ => break,
        }
    }

    let weeks = cells.last().map(|cell| week_of(cell.date) + 1.0).unwrap_or(0.0);
    Some(CalendarYear {
        year,
        cells,
        month_labels,
        width: LEFT_MARGIN + weeks * cell_size + cell_size,
        height: TOP_MARGIN + 7.0 * cell_size + 4.0,
    })
}

fn month_abbr(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Linear blend between the low and high heat colours.
pub fn shade(intensity: f64) -> String {
    let t = if intensity.is_finite() {
        intensity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        mix(LOW.0, HIGH.0),
        mix(LOW.1, HIGH.1),
        mix(LOW.2, HIGH.2)
    )
}

#[component]
pub fn CalendarChart(table: DataTable) -> Element {
    let env = use_context::<ChartEnvironment>();
    let cell = env.calendar_cell_size;
    let inner = (cell - 1.0).max(1.0);
    let years = layout_calendar(&table, cell);

    rsx! {
        div { class: "chart chart--calendar",
            for block in years.iter() {
                svg {
                    key: "{block.year}",
                    class: "chart-calendar__year",
                    view_box: "0 0 {block.width} {block.height}",
                    width: "{block.width}",
                    height: "{block.height}",

                    text {
                        class: "chart__tick",
                        x: "0",
                        y: "{TOP_MARGIN - 6.0}",
                        "{block.year}"
                    }
                    for (i, (x, label)) in block.month_labels.iter().enumerate() {
                        text {
                            key: "month-{i}",
                            class: "chart__tick",
                            x: "{x}",
                            y: "{TOP_MARGIN - 6.0}",
                            "{label}"
                        }
                    }
                    for day in block.cells.iter() {
                        rect {
                            key: "{day.date}",
                            class: "chart-calendar__day",
                            x: "{day.x}",
                            y: "{day.y}",
                            width: "{inner}",
                            height: "{inner}",
                            fill: "{day.fill}",
                            title { "{day.tooltip}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::series::{build_table, PresenceSeries};
    use time::macros::date;

    fn days(rows: &[(&str, f64)]) -> DataTable {
        build_table(&PresenceSeries::Daily(
            rows.iter().map(|(d, v)| (d.to_string(), *v)).collect(),
        ))
        .unwrap()
    }

    #[test]
    fn one_block_per_year_covering_every_day() {
        let table = days(&[("2012-12-31", 100.0), ("2013-01-02", 200.0)]);
        let years = layout_calendar(&table, 13.0);
        assert_eq!(years.iter().map(|y| y.year).collect::<Vec<_>>(), vec![2012, 2013]);
        assert_eq!(years[0].cells.len(), 366);
        assert_eq!(years[1].cells.len(), 365);
        assert_eq!(years[1].month_labels.len(), 12);
    }

    #[test]
    fn cells_are_placed_by_week_and_weekday() {
        // 2013-01-01 was a Tuesday.
        let table = days(&[("2013-01-01", 10.0), ("2013-01-06", 20.0)]);
        let year = &layout_calendar(&table, 13.0)[0];
        let jan1 = &year.cells[0];
        let jan6 = &year.cells[5];
        assert_eq!(jan1.date, date!(2013 - 01 - 01));
        assert_eq!(jan1.y, TOP_MARGIN + 2.0 * 13.0);
        assert_eq!(jan1.x, LEFT_MARGIN);
        // Sunday starts the second week column.
        assert_eq!(jan6.y, TOP_MARGIN);
        assert_eq!(jan6.x, LEFT_MARGIN + 13.0);
    }

    #[test]
    fn intensity_is_relative_to_the_busiest_day() {
        let table = days(&[("2013-09-09", 14_400.0), ("2013-09-10", 28_800.0)]);
        let year = &layout_calendar(&table, 13.0)[0];
        let by_date = |d: Date| year.cells.iter().find(|c| c.date == d).unwrap();
        assert_eq!(by_date(date!(2013 - 09 - 09)).intensity, 0.5);
        assert_eq!(by_date(date!(2013 - 09 - 10)).intensity, 1.0);
        assert_eq!(by_date(date!(2013 - 09 - 10)).fill, shade(1.0));
        assert_eq!(by_date(date!(2013 - 09 - 10)).tooltip, "10-09-2013: 8h 00m");
        let empty = by_date(date!(2013 - 09 - 11));
        assert_eq!(empty.value, None);
        assert_eq!(empty.fill, EMPTY_FILL);
    }

    #[test]
    fn shade_endpoints() {
        assert_eq!(shade(0.0), "#d2e3fc");
        assert_eq!(shade(1.0), "#1a4fb8");
        assert_eq!(shade(f64::NAN), "#d2e3fc");
    }

    #[test]
    fn empty_table_has_no_years() {
        assert!(layout_calendar(&days(&[]), 13.0).is_empty());
    }
}
