//! Typed tabular data handed to the chart renderers.
//!
//! The shape follows the classic "data table" model of web charting: a list
//! of typed columns, rows of typed cells, and optional per-column display
//! patterns applied when values are shown.

use std::fmt;

use api::TableValue;
use thiserror::Error;
use time::Date;

use crate::core::format::{format_date, format_number};
use crate::core::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Number,
    TimeOfDay,
    Date,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::TimeOfDay => "timeofday",
            ColumnType::Date => "date",
        })
    }
}

/// Display patterns a column can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPattern {
    /// `HH:mm:ss`
    Time,
    /// `dd-MM-yyyy`
    Date,
}

impl FormatPattern {
    pub fn pattern(&self) -> &'static str {
        match self {
            FormatPattern::Time => "HH:mm:ss",
            FormatPattern::Date => "dd-MM-yyyy",
        }
    }

    pub fn applies_to(&self, column: ColumnType) -> bool {
        matches!(
            (self, column),
            (FormatPattern::Time, ColumnType::TimeOfDay) | (FormatPattern::Date, ColumnType::Date)
        )
    }

    fn apply(&self, cell: &Cell) -> Option<String> {
        match (self, cell) {
            (FormatPattern::Time, Cell::Time(time)) => Some(time.format()),
            (FormatPattern::Date, Cell::Date(date)) => Some(format_date(*date)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub kind: ColumnType,
    pub label: String,
    pub id: Option<String>,
    pub pattern: Option<FormatPattern>,
}

impl Column {
    /// Label if present, otherwise the id.
    pub fn title(&self) -> &str {
        if self.label.is_empty() {
            self.id.as_deref().unwrap_or_default()
        } else {
            &self.label
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Time(TimeOfDay),
    Date(Date),
}

impl Cell {
    pub fn kind(&self) -> ColumnType {
        match self {
            Cell::Text(_) => ColumnType::String,
            Cell::Number(_) => ColumnType::Number,
            Cell::Time(_) => ColumnType::TimeOfDay,
            Cell::Date(_) => ColumnType::Date,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric view used for scaling; times count seconds since midnight.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::Time(time) => Some(f64::from(time.seconds_since_midnight())),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<TimeOfDay> {
        match self {
            Cell::Time(time) => Some(*time),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Date> {
        match self {
            Cell::Date(date) => Some(*date),
            _ => None,
        }
    }

    fn display(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(value) => format_number(*value),
            Cell::Time(time) => time.format(),
            Cell::Date(date) => format_date(*date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Arity {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column}: expected {expected}, found {found}")]
    CellType {
        row: usize,
        column: usize,
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("no column {0}")]
    UnknownColumn(usize),

    #[error("pattern {pattern} cannot format a {column} column")]
    Pattern {
        pattern: &'static str,
        column: ColumnType,
    },

    #[error("first row must be a header of labels")]
    Header,

    #[error("invalid date `{0}`")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, kind: ColumnType, label: impl Into<String>) -> usize {
        self.columns.push(Column {
            kind,
            label: label.into(),
            id: None,
            pattern: None,
        });
        self.columns.len() - 1
    }

    /// Column identified by id only (no visible label).
    pub fn add_column_with_id(&mut self, kind: ColumnType, id: impl Into<String>) -> usize {
        self.columns.push(Column {
            kind,
            label: String::new(),
            id: Some(id.into()),
            pattern: None,
        });
        self.columns.len() - 1
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) -> Result<(), TableError> {
        let row = self.rows.len();
        if cells.len() != self.columns.len() {
            return Err(TableError::Arity {
                row,
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        for (column, (cell, def)) in cells.iter().zip(&self.columns).enumerate() {
            if cell.kind() != def.kind {
                return Err(TableError::CellType {
                    row,
                    column,
                    expected: def.kind,
                    found: cell.kind(),
                });
            }
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = Vec<Cell>>) -> Result<(), TableError> {
        rows.into_iter().try_for_each(|row| self.add_row(row))
    }

    /// Attach a display pattern to a column.
    pub fn format(&mut self, column: usize, pattern: FormatPattern) -> Result<(), TableError> {
        let def = self
            .columns
            .get_mut(column)
            .ok_or(TableError::UnknownColumn(column))?;
        if !pattern.applies_to(def.kind) {
            return Err(TableError::Pattern {
                pattern: pattern.pattern(),
                column: def.kind,
            });
        }
        def.pattern = Some(pattern);
        Ok(())
    }

    /// Build a table from a raw 2-D array whose first row holds the column
    /// labels. Column types are inferred from the first data row; a table
    /// with no data rows gets string columns.
    pub fn from_array(array: &[Vec<TableValue>]) -> Result<Self, TableError> {
        let (header, body) = array.split_first().ok_or(TableError::Header)?;
        let labels = header
            .iter()
            .map(|value| value.as_text().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or(TableError::Header)?;

        let mut table = DataTable::new();
        for (index, label) in labels.into_iter().enumerate() {
            let kind = match body.first().and_then(|row| row.get(index)) {
                Some(TableValue::Number(_)) => ColumnType::Number,
                _ => ColumnType::String,
            };
            table.add_column(kind, label);
        }

        table.add_rows(body.iter().map(|row| {
            row.iter()
                .map(|value| match value {
                    TableValue::Number(number) => Cell::Number(*number),
                    TableValue::Text(text) => Cell::Text(text.clone()),
                })
                .collect()
        }))?;
        Ok(table)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Value as shown to the user, honouring the column's pattern.
    pub fn formatted_value(&self, row: usize, column: usize) -> Option<String> {
        let cell = self.cell(row, column)?;
        let pattern = self.columns.get(column).and_then(|def| def.pattern);
        Some(
            pattern
                .and_then(|pattern| pattern.apply(cell))
                .unwrap_or_else(|| cell.display()),
        )
    }
}
