//! Order sheet parsing.
//!
//! The order sheet has a reserved first row, a header row, and one order per
//! row after that. Columns are located by exact header match.

use crate::config::OrderColumns;
use crate::error::{EngineError, EngineResult};
use crate::models::{Order, Sheet};
use crate::reference::require_shape;

/// Index of the header row in the order sheet.
pub const HEADER_ROW: usize = 1;

/// Index of the first data row in the order sheet.
pub const FIRST_DATA_ROW: usize = 2;

/// Column positions of the order sheet.
///
/// Output columns missing from the header are assigned positions after the
/// widest row of the sheet, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSheetLayout {
    /// Physical weight column.
    pub physical_weight: usize,
    /// Postal code column.
    pub postal_code: usize,
    /// Order date column.
    pub order_date: usize,
    /// Outbound date column.
    pub outbound_date: usize,
    /// Delivered date column.
    pub delivered_date: usize,
    /// Billable weight column.
    pub billable_weight: usize,
    /// Zone column.
    pub zone: usize,
    /// Fuel rate column.
    pub fuel_rate: usize,
    /// Total charge column.
    pub total_charge: usize,
    /// Output headers missing from the header row, with their assigned columns.
    pub appended_headers: Vec<(usize, String)>,
}

impl OrderSheetLayout {
    /// Locates every configured column in the order sheet's header row.
    ///
    /// Returns `InvalidSheetFormat` if the sheet has no header row or an
    /// input column header is missing.
    pub fn from_sheet(sheet: &Sheet, columns: &OrderColumns) -> EngineResult<Self> {
        require_shape(sheet, FIRST_DATA_ROW, 1)?;

        let header: Vec<String> = sheet.rows[HEADER_ROW]
            .iter()
            .map(|cell| cell.as_text())
            .collect();

        let find_input = |name: &str| -> EngineResult<usize> {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| EngineError::InvalidSheetFormat {
                    sheet: sheet.name.clone(),
                    message: format!("missing column '{}' in header row", name),
                })
        };

        let mut inputs = [0; 5];
        for (slot, name) in inputs.iter_mut().zip(columns.required_inputs()) {
            *slot = find_input(name)?;
        }
        let [physical_weight, postal_code, order_date, outbound_date, delivered_date] = inputs;

        let width = sheet.column_count();
        let mut appended_headers = Vec::new();
        let mut find_output = |name: &str| -> usize {
            header.iter().position(|h| h == name).unwrap_or_else(|| {
                let col = width + appended_headers.len();
                appended_headers.push((col, name.to_string()));
                col
            })
        };

        let [billable_weight, zone, fuel_rate, total_charge] =
            columns.outputs().map(|name| find_output(name));

        Ok(Self {
            physical_weight,
            postal_code,
            order_date,
            outbound_date,
            delivered_date,
            billable_weight,
            zone,
            fuel_rate,
            total_charge,
            appended_headers,
        })
    }
}

/// Reads the orders from the data rows of the order sheet.
///
/// Rows whose cells are all blank are not orders and are skipped.
pub fn read_orders(sheet: &Sheet, layout: &OrderSheetLayout) -> Vec<Order> {
    sheet
        .rows
        .iter()
        .enumerate()
        .skip(FIRST_DATA_ROW)
        .filter(|(_, cells)| !cells.iter().all(|cell| cell.is_blank()))
        .map(|(row, _)| Order {
            row_index: row,
            physical_weight_kg: sheet.cell(row, layout.physical_weight).as_decimal(),
            postal_code: sheet.cell(row, layout.postal_code).as_text().trim().to_string(),
            order_date: sheet.cell(row, layout.order_date).clone(),
            outbound_date: sheet.cell(row, layout.outbound_date).clone(),
            delivered_date: sheet.cell(row, layout.delivered_date).clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use rust_decimal::Decimal;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn header(names: &[&str]) -> Vec<Cell> {
        names.iter().map(|n| text(n)).collect()
    }

    const INPUTS: [&str; 5] = ["实重(KG)", "邮编", "下单日期", "出库日期", "签收日期"];

    #[test]
    fn test_layout_appends_missing_output_columns() {
        let sheet = Sheet::new("订单明细", vec![vec![text("订单")], header(&INPUTS)]);
        let layout = OrderSheetLayout::from_sheet(&sheet, &OrderColumns::default()).unwrap();

        assert_eq!(layout.postal_code, 1);
        assert_eq!(layout.billable_weight, 5);
        assert_eq!(layout.zone, 6);
        assert_eq!(layout.fuel_rate, 7);
        assert_eq!(layout.total_charge, 8);
        assert_eq!(
            layout.appended_headers,
            vec![
                (5, "计费重(LB)".to_string()),
                (6, "分区".to_string()),
                (7, "燃油费率".to_string()),
                (8, "总运费".to_string()),
            ]
        );
    }

    #[test]
    fn test_layout_reuses_existing_output_columns() {
        let mut names = vec!["总运费", "分区"];
        names.extend(INPUTS);
        let sheet = Sheet::new("订单明细", vec![vec![], header(&names)]);
        let layout = OrderSheetLayout::from_sheet(&sheet, &OrderColumns::default()).unwrap();

        assert_eq!(layout.total_charge, 0);
        assert_eq!(layout.zone, 1);
        assert_eq!(layout.billable_weight, 7);
        assert_eq!(layout.fuel_rate, 8);
        assert_eq!(
            layout.appended_headers,
            vec![(7, "计费重(LB)".to_string()), (8, "燃油费率".to_string())]
        );
    }

    #[test]
    fn test_appended_columns_start_after_widest_row() {
        let sheet = Sheet::new(
            "订单明细",
            vec![vec![], header(&INPUTS), vec![Cell::Empty; 7]],
        );
        let layout = OrderSheetLayout::from_sheet(&sheet, &OrderColumns::default()).unwrap();

        assert_eq!(layout.billable_weight, 7);
        assert_eq!(layout.total_charge, 10);
    }

    #[test]
    fn test_missing_input_column_is_invalid_format() {
        let sheet = Sheet::new("订单明细", vec![vec![], header(&INPUTS[..4])]);

        match OrderSheetLayout::from_sheet(&sheet, &OrderColumns::default()) {
            Err(EngineError::InvalidSheetFormat { sheet, message }) => {
                assert_eq!(sheet, "订单明细");
                assert!(message.contains("签收日期"));
            }
            other => panic!("Expected InvalidSheetFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_sheet_without_header_row_is_invalid_format() {
        let sheet = Sheet::new("订单明细", vec![header(&INPUTS)]);
        assert!(matches!(
            OrderSheetLayout::from_sheet(&sheet, &OrderColumns::default()),
            Err(EngineError::InvalidSheetFormat { .. })
        ));
    }

    #[test]
    fn test_read_orders_skips_blank_rows() {
        let sheet = Sheet::new(
            "订单明细",
            vec![
                vec![],
                header(&INPUTS),
                vec![Cell::Number(10.0), Cell::Number(90210.0), Cell::Number(45600.0)],
                vec![Cell::Empty, text("  ")],
                vec![text("n/a"), text(" 10001 "), Cell::Empty],
            ],
        );
        let layout = OrderSheetLayout::from_sheet(&sheet, &OrderColumns::default()).unwrap();
        let orders = read_orders(&sheet, &layout);

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].row_index, 2);
        assert_eq!(orders[0].physical_weight_kg, Some(Decimal::from(10)));
        assert_eq!(orders[0].postal_code, "90210");
        assert_eq!(orders[0].order_date, Cell::Number(45600.0));
        assert_eq!(orders[0].delivered_date, Cell::Empty);
        assert_eq!(orders[1].row_index, 4);
        assert_eq!(orders[1].physical_weight_kg, None);
        assert_eq!(orders[1].postal_code, "10001");
    }
}
