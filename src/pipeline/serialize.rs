//! Result table serialization.
//!
//! Writes rated orders back into the order sheet's own layout: the rows above
//! the data are copied, missing output headers are appended, and each order
//! row gets its computed columns and normalized auxiliary dates.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculation::{format_date, format_fuel_rate};
use crate::error::{EngineError, EngineResult};
use crate::models::{Cell, RatedOrder, ResultTable, Sheet};

use super::orders::{FIRST_DATA_ROW, HEADER_ROW, OrderSheetLayout};

/// Builds the output table from the order sheet and its rated orders.
///
/// Blank order rows were never rated and do not appear in the output.
/// Returns `ProcessingFailed` if a fuel rate is too large to format.
pub fn serialize_results(
    sheet: &Sheet,
    layout: &OrderSheetLayout,
    rated: &[RatedOrder],
    sheet_name: &str,
) -> EngineResult<ResultTable> {
    let mut rows: Vec<Vec<Cell>> = sheet.rows.iter().take(FIRST_DATA_ROW).cloned().collect();

    if let Some(header) = rows.get_mut(HEADER_ROW) {
        for (col, name) in &layout.appended_headers {
            set_cell(header, *col, Cell::Text(name.clone()));
        }
    }

    for order in rated {
        let fuel_percent =
            format_fuel_rate(order.fuel_rate).ok_or_else(|| EngineError::ProcessingFailed {
                message: format!(
                    "row {}: fuel rate {} overflows as a percentage",
                    order.order.sheet_row(),
                    order.fuel_rate
                ),
            })?;
        let mut row = sheet.rows[order.order.row_index].clone();

        set_cell(&mut row, layout.outbound_date, date_cell(order.outbound_date));
        set_cell(&mut row, layout.delivered_date, date_cell(order.delivered_date));
        set_cell(
            &mut row,
            layout.billable_weight,
            Cell::Number(order.billable_weight as f64),
        );
        set_cell(&mut row, layout.zone, Cell::Text(order.zone.label().to_string()));
        set_cell(&mut row, layout.fuel_rate, Cell::Text(fuel_percent));
        set_cell(&mut row, layout.total_charge, money_cell(order.total_charge));

        rows.push(row);
    }

    Ok(ResultTable {
        sheet_name: sheet_name.to_string(),
        rows,
    })
}

fn set_cell(row: &mut Vec<Cell>, col: usize, value: Cell) {
    if row.len() <= col {
        row.resize(col + 1, Cell::Empty);
    }
    row[col] = value;
}

fn date_cell(date: Option<chrono::NaiveDate>) -> Cell {
    date.map(|d| Cell::Text(format_date(d))).unwrap_or(Cell::Empty)
}

fn money_cell(amount: Decimal) -> Cell {
    amount.to_f64().map(Cell::Number).unwrap_or(Cell::Empty)
}
