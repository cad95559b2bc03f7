//! Per-order rating.
//!
//! Rating depends only on the order and the reference tables, so orders can
//! be rated in any order once validation has passed.

use crate::calculation::{
    billable_weight, normalize_auxiliary_date, resolve_fuel_rate, resolve_unit_rate, resolve_zone,
    total_charge,
};
use crate::error::{EngineError, EngineResult};
use crate::models::RatedOrder;
use crate::reference::ReferenceTables;

use super::validation::ValidatedOrder;

/// Rates one validated order against the reference tables.
///
/// Lookup misses never fail: an unmatched postal prefix gives the not-found
/// zone, a date outside every fuel window gives a zero surcharge, and a
/// missing rate-matrix cell gives a zero unit rate and so a zero charge.
///
/// Returns `ProcessingFailed` if the charge is too large to represent.
pub fn rate_order(validated: ValidatedOrder, tables: &ReferenceTables) -> EngineResult<RatedOrder> {
    let ValidatedOrder { order, order_date } = validated;

    let billable_weight = billable_weight(order.physical_weight_kg);
    let zone = resolve_zone(&order.postal_code, &tables.zone_partitions);
    let fuel_rate = resolve_fuel_rate(Some(order_date), &tables.fuel_schedule);
    let unit_rate = resolve_unit_rate(
        Some(order_date),
        billable_weight,
        &zone,
        &tables.base_matrix,
        &tables.month_overrides,
    );
    let total_charge =
        total_charge(unit_rate, fuel_rate).ok_or_else(|| EngineError::ProcessingFailed {
            message: format!(
                "row {}: charge for unit rate {} with fuel rate {} overflows",
                order.sheet_row(),
                unit_rate,
                fuel_rate
            ),
        })?;

    let outbound_date = normalize_auxiliary_date(&order.outbound_date);
    let delivered_date = normalize_auxiliary_date(&order.delivered_date);

    Ok(RatedOrder {
        order,
        order_date,
        billable_weight,
        zone,
        fuel_rate,
        unit_rate,
        total_charge,
        outbound_date,
        delivered_date,
    })
}
