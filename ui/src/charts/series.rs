//! Fetched presence series and their mapping into typed tables.

use api::{ApiResult, MeanTimeRow, PresenceDayRow, PresenceSource, StartEndRow, TableValue};

use super::kind::ChartKind;
use super::table::{Cell, ColumnType, DataTable, FormatPattern, TableError};
use crate::core::format::parse_date;
use crate::core::parse_interval;

/// Raw series as delivered by the backend, one variant per chart kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenceSeries {
    WeekdayMean(Vec<MeanTimeRow>),
    WeekdayDistribution(Vec<Vec<TableValue>>),
    StartEnd(Vec<StartEndRow>),
    Daily(Vec<PresenceDayRow>),
}

/// Request the series a chart kind is built from.
pub async fn fetch_series(
    source: &dyn PresenceSource,
    kind: ChartKind,
    user_id: u32,
) -> ApiResult<PresenceSeries> {
    Ok(match kind {
        ChartKind::MeanTimeWeekday => {
            PresenceSeries::WeekdayMean(source.mean_time_weekday(user_id).await?)
        }
        ChartKind::PresenceWeekday => {
            PresenceSeries::WeekdayDistribution(source.presence_weekday(user_id).await?)
        }
        ChartKind::PresenceStartEnd => {
            PresenceSeries::StartEnd(source.presence_start_end(user_id).await?)
        }
        ChartKind::PresenceDays => PresenceSeries::Daily(source.presence_days(user_id).await?),
    })
}

/// Apply the column typing and display patterns of the series' chart.
pub fn build_table(series: &PresenceSeries) -> Result<DataTable, TableError> {
    match series {
        PresenceSeries::WeekdayMean(rows) => {
            let mut table = DataTable::new();
            table.add_column(ColumnType::String, "Weekday");
            let mean = table.add_column(ColumnType::TimeOfDay, "Mean time (h:m:s)");
            table.add_rows(rows.iter().map(|(weekday, seconds)| {
                vec![Cell::Text(weekday.clone()), Cell::Time(parse_interval(*seconds))]
            }))?;
            table.format(mean, FormatPattern::Time)?;
            Ok(table)
        }
        PresenceSeries::WeekdayDistribution(array) => DataTable::from_array(array),
        PresenceSeries::StartEnd(rows) => {
            let mut table = DataTable::new();
            table.add_column(ColumnType::String, "Weekday");
            let start = table.add_column_with_id(ColumnType::TimeOfDay, "Start");
            let end = table.add_column_with_id(ColumnType::TimeOfDay, "End");
            table.add_rows(rows.iter().map(|(weekday, start, end)| {
                vec![
                    Cell::Text(weekday.clone()),
                    Cell::Time(parse_interval(*start)),
                    Cell::Time(parse_interval(*end)),
                ]
            }))?;
            table.format(start, FormatPattern::Time)?;
            table.format(end, FormatPattern::Time)?;
            Ok(table)
        }
        PresenceSeries::Daily(rows) => {
            let mut table = DataTable::new();
            let date = table.add_column_with_id(ColumnType::Date, "Date");
            table.add_column_with_id(ColumnType::Number, "Presence time");
            for (raw, seconds) in rows {
                let day = parse_date(raw).ok_or_else(|| TableError::InvalidDate(raw.clone()))?;
                table.add_row(vec![Cell::Date(day), Cell::Number(*seconds)])?;
            }
            table.format(date, FormatPattern::Date)?;
            Ok(table)
        }
    }
}
