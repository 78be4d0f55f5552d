use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::StatsError;
use crate::model::stats::ActivityStats;

pub const WEEK_TOTAL: &str = "week_total";
pub const WEEK_TOTAL_PREFIX: &str = "week_total_";
pub const TOTAL_ACTIVITY: &str = "TOTAL";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map(Cell::Text).unwrap_or(Cell::Empty)
    }
}

/// Wide table: one row per week, columns discovered at build time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeeklyTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl WeeklyTable {
    /// Builds a table from explicit columns and rows. Every row must be as
    /// wide as the column list.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, StatsError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(StatsError::RowWidth {
                    row: i,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    pub fn number(&self, row: usize, column: &str) -> Option<f64> {
        self.cell(row, column).and_then(Cell::as_number)
    }

    /// Sum of a numeric column over every row. An absent column or an empty
    /// cell contributes 0; a text cell is an error.
    pub fn column_sum(&self, column: &str) -> Result<f64, StatsError> {
        let Some(idx) = self.column_index(column) else {
            return Ok(0.0);
        };
        let mut sum = 0.0;
        for (i, row) in self.rows.iter().enumerate() {
            match &row[idx] {
                Cell::Number(n) => sum += n,
                Cell::Empty => {}
                Cell::Text(value) => {
                    return Err(StatsError::NonNumericCell {
                        column: column.to_string(),
                        row: i,
                        value: value.clone(),
                    })
                }
            }
        }
        Ok(sum)
    }
}

// Serialised as a list of column-ordered objects.
impl Serialize for WeeklyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowView {
                columns: &self.columns,
                cells: row,
            })?;
        }
        seq.end()
    }
}

struct RowView<'a> {
    columns: &'a [String],
    cells: &'a [Cell],
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SportSummaryRow {
    pub activity: String,
    #[serde(flatten)]
    pub stats: ActivityStats,
}

/// Long table: one row per activity, optionally closed by a TOTAL row.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct SportSummaryTable {
    rows: Vec<SportSummaryRow>,
}

impl SportSummaryTable {
    pub(crate) fn from_rows(rows: Vec<SportSummaryRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SportSummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, activity: &str) -> Option<&ActivityStats> {
        self.rows
            .iter()
            .find(|r| r.activity == activity)
            .map(|r| &r.stats)
    }

    pub fn total(&self) -> Option<&ActivityStats> {
        self.rows
            .last()
            .filter(|r| r.activity == TOTAL_ACTIVITY)
            .map(|r| &r.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err =
            WeeklyTable::new(columns(&["a", "b"]), vec![vec![Cell::Number(1.0)]]).unwrap_err();
        assert_eq!(err, StatsError::RowWidth { row: 0, expected: 2, found: 1 });
    }

    #[test]
    fn test_column_sum_defaults() {
        let table = WeeklyTable::new(
            columns(&["run_time_min"]),
            vec![vec![Cell::Number(30.0)], vec![Cell::Empty], vec![Cell::Number(12.5)]],
        )
        .unwrap();

        assert_eq!(table.column_sum("run_time_min").unwrap(), 42.5);
        assert_eq!(table.column_sum("run_load").unwrap(), 0.0);
    }

    #[test]
    fn test_column_sum_rejects_text() {
        let table = WeeklyTable::new(
            columns(&["run_time_min"]),
            vec![vec![Cell::Number(30.0)], vec![Cell::from("long")]],
        )
        .unwrap();

        let err = table.column_sum("run_time_min").unwrap_err();
        assert!(matches!(err, StatsError::NonNumericCell { row: 1, .. }));
    }

    #[test]
    fn test_serialize_rows_as_objects() {
        let table = WeeklyTable::new(
            columns(&["week_first_day", "run_time_min"]),
            vec![vec![Cell::from("2024-12-30"), Cell::Number(92.0)]],
        )
        .unwrap();

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[0]["week_first_day"], "2024-12-30");
        assert_eq!(json[0]["run_time_min"], 92.0);
    }
}
