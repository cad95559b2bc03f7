//! Workbook, sheet and cell models.
//!
//! A [`Workbook`] is the in-memory form of the spreadsheet a batch arrives in:
//! an ordered list of named [`Sheet`]s, each a grid of loosely-typed [`Cell`]s.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single spreadsheet cell.
///
/// Cells deserialize from plain JSON values: `null`, booleans, numbers and
/// strings.
///
/// # Example
///
/// ```
/// use shipment_rating::models::Cell;
///
/// let cells: Vec<Cell> = serde_json::from_str(r#"[null, 12.5, "A1"]"#).unwrap();
/// assert_eq!(cells, vec![Cell::Empty, Cell::Number(12.5), Cell::Text("A1".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A blank cell.
    #[default]
    Empty,
    /// A boolean cell.
    Bool(bool),
    /// A numeric cell, including spreadsheet date serials.
    Number(f64),
    /// A text cell.
    Text(String),
}

impl Cell {
    /// Returns true if the cell is blank or holds only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Returns the cell's value as text, the way a spreadsheet displays it.
    ///
    /// Whole numbers render without a fractional part, so a numeric zone
    /// label `2.0` becomes `"2"`.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Bool(value) => value.to_string(),
            Cell::Number(value) => format_number(*value),
            Cell::Text(text) => text.clone(),
        }
    }

    /// Returns the cell's numeric value as a `Decimal`.
    ///
    /// Numbers convert through their shortest round-trip text so `0.07`
    /// stays exactly `0.07`. Numeric text is parsed; anything else is `None`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Cell::Number(value) if value.is_finite() => {
                Decimal::from_str(&value.to_string()).ok()
            }
            Cell::Text(text) => Decimal::from_str(text.trim()).ok(),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// A named grid of cells. Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// The sheet name, as shown on the workbook tab.
    pub name: String,
    /// The rows of the sheet, top to bottom.
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Creates a sheet from a name and rows.
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Returns the cell at (`row`, `col`), treating out-of-range positions as blank.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(EMPTY)
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// A workbook-like container of named sheets.
///
/// # Example
///
/// ```
/// use shipment_rating::models::{Cell, Sheet, Workbook};
///
/// let workbook = Workbook::new(vec![Sheet::new("分区表", vec![vec!["100".into(), "Z1".into()]])]);
/// assert!(workbook.sheet("分区表").is_some());
/// assert!(workbook.sheet("燃油费率").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// The sheets in tab order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Creates a workbook from its sheets.
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Looks up a sheet by exact name. The first sheet with that name wins.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}
