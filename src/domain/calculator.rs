//! Freight calculation orchestration: validation, fitting, allocation,
//! result assembly. Stateless; every call is a pure function of its inputs
//! and the fixed reference tables.

use serde::Serialize;
use thiserror::Error;

use super::allocation::{allocate, CostBreakdown};
use super::entities::{CargoDetails, ContainerType, CostLine, ShippingRoute, TradeTerm};
use super::fitting::{fit_container, FittingResult};

#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("invalid cargo details: {0}")]
    InvalidCargo(String),
    #[error("invalid cost line: {0}")]
    InvalidCostLine(String),
}

/// Headline figures echoed back to the caller alongside the detailed result.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSummary {
    pub trade_term: TradeTerm,
    pub shipping_mode: &'static str,
    pub volume_cbm: f64,
    pub weight_kg: f64,
    pub declared_value: f64,
    pub route: ShippingRoute,
}

/// Complete costing result for one calculation request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub summary: CalculationSummary,
    pub container: FittingResult,
    pub cost_breakdown: CostBreakdown,
    pub seller_total: f64,
    pub buyer_total: f64,
}

/// Run one freight calculation.
///
/// Fitting and allocation are independent; neither sees the other's output.
/// The route is passed through unvalidated; port existence checks belong to
/// the reference catalog's callers.
pub fn calculate(
    trade_term: TradeTerm,
    cargo: &CargoDetails,
    route: &ShippingRoute,
    cost_lines: &[CostLine],
    containers: &[ContainerType],
) -> Result<CalculationResult, CalculationError> {
    validate_cargo(cargo)?;
    validate_costs(cost_lines)?;

    let container = fit_container(cargo, cost_lines, containers);
    let breakdown = allocate(trade_term, cost_lines);

    Ok(CalculationResult {
        summary: CalculationSummary {
            trade_term,
            shipping_mode: container.shipping_mode(),
            volume_cbm: cargo.volume_cbm,
            weight_kg: cargo.weight_kg,
            declared_value: cargo.declared_value,
            route: route.clone(),
        },
        container,
        seller_total: breakdown.seller_total,
        buyer_total: breakdown.buyer_total,
        cost_breakdown: breakdown,
    })
}

fn validate_cargo(cargo: &CargoDetails) -> Result<(), CalculationError> {
    for (field, value) in [
        ("volume", cargo.volume_cbm),
        ("weight", cargo.weight_kg),
        ("value", cargo.declared_value),
    ] {
        if !value.is_finite() {
            return Err(CalculationError::InvalidCargo(format!(
                "{field} must be a finite number"
            )));
        }
        if value < 0.0 {
            return Err(CalculationError::InvalidCargo(format!(
                "{field} must not be negative"
            )));
        }
    }
    Ok(())
}

fn validate_costs(cost_lines: &[CostLine]) -> Result<(), CalculationError> {
    for line in cost_lines {
        if !line.amount.is_finite() || line.amount < 0.0 {
            return Err(CalculationError::InvalidCostLine(format!(
                "amount for {} must be a non-negative number",
                line.cost_type.code()
            )));
        }
    }
    Ok(())
}
