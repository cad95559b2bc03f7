//! Request types for the rating API.
//!
//! This module defines the JSON request structure for the `/rate` endpoint.
//! Cells arrive as arbitrary JSON values and are converted to workbook cells.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Cell, Sheet, Workbook};

/// Request body for the `/rate` endpoint.
///
/// # Example
///
/// ```
/// use shipment_rating::api::RatingRequest;
/// use shipment_rating::models::{Cell, Workbook};
///
/// let request: RatingRequest = serde_json::from_str(
///     r#"{"sheets": [{"name": "分区表", "rows": [["902", 8]]}]}"#,
/// ).unwrap();
/// let workbook: Workbook = request.into();
/// assert_eq!(workbook.sheets[0].rows[0][1], Cell::Number(8.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRequest {
    /// The workbook sheets in tab order.
    pub sheets: Vec<SheetRequest>,
}

/// One sheet in a rating request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRequest {
    /// The sheet name.
    pub name: String,
    /// The rows of the sheet.
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl From<RatingRequest> for Workbook {
    fn from(req: RatingRequest) -> Self {
        Workbook::new(req.sheets.into_iter().map(Into::into).collect())
    }
}

impl From<SheetRequest> for Sheet {
    fn from(req: SheetRequest) -> Self {
        let rows = req
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(cell_from_json).collect())
            .collect();
        Sheet::new(req.name, rows)
    }
}

fn cell_from_json(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Empty,
        Value::Bool(b) => Cell::Bool(b),
        Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
        Value::String(s) => Cell::Text(s),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_converts_to_workbook() {
        let request: RatingRequest = serde_json::from_value(json!({
            "sheets": [
                {"name": "订单明细", "rows": [[], ["邮编"], [null, true, 45600, "90210"]]},
                {"name": "空表"}
            ]
        }))
        .unwrap();

        let workbook: Workbook = request.into();

        assert_eq!(workbook.sheets.len(), 2);
        assert_eq!(
            workbook.sheets[0].rows[2],
            vec![
                Cell::Empty,
                Cell::Bool(true),
                Cell::Number(45600.0),
                Cell::Text("90210".to_string()),
            ]
        );
        assert!(workbook.sheets[1].rows.is_empty());
    }

    #[test]
    fn test_nested_values_become_text() {
        assert_eq!(
            cell_from_json(json!({"a": 1})),
            Cell::Text("{\"a\":1}".to_string())
        );
        assert_eq!(cell_from_json(json!([1])), Cell::Text("[1]".to_string()));
    }
}
