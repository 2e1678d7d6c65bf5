//! Container fitting: LCL/FCL decision, container selection, capacity warnings.

use std::cmp::Ordering;

use serde::Serialize;

use super::entities::{CargoDetails, ContainerType, CostLine, CostType};

/// Below this volume the cargo ships as LCL (shared container space).
pub const LCL_THRESHOLD_CBM: f64 = 15.0;

/// Insurance rate applied to the declared value when no insurance cost line
/// is supplied.
pub const DEFAULT_INSURANCE_RATE: f64 = 0.001;

/// Weight ratio above which the near-limit warning fires.
pub const WEIGHT_WARNING_RATIO: f64 = 0.9;

pub const WARN_NEAR_WEIGHT_LIMIT: &str = "approaching weight limit, check for overweight";
pub const WARN_OVERWEIGHT: &str = "already overweight, split cargo or use a larger container";

/// Outcome of the fitting engine. Serialized with a `mode` tag so callers can
/// branch on the shipping mode without inspecting variant fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode")]
pub enum FittingResult {
    #[serde(rename = "LCL", rename_all = "camelCase")]
    Lcl {
        revenue_ton: f64,
        applied_rate: f64,
        freight_amount: f64,
        insurance_amount: f64,
        total_amount: f64,
    },
    #[serde(rename = "FCL", rename_all = "camelCase")]
    Fcl {
        container_type: String,
        container_count: u32,
        used_volume: f64,
        used_weight: f64,
        utilization_percent: f64,
        remaining_volume: f64,
        remaining_weight: f64,
        warnings: Vec<String>,
    },
    /// Cargo volume exceeds every single container. Splitting across
    /// containers is deliberately left to a human planner.
    #[serde(rename = "FCL_MULTI", rename_all = "camelCase")]
    FclMulti {
        message: String,
        required_volume: f64,
        max_single_container_volume: f64,
        warnings: Vec<String>,
    },
}

impl FittingResult {
    pub fn is_lcl(&self) -> bool {
        matches!(self, FittingResult::Lcl { .. })
    }

    /// The LCL/FCL flag used in result summaries.
    pub fn shipping_mode(&self) -> &'static str {
        if self.is_lcl() {
            "LCL"
        } else {
            "FCL"
        }
    }
}

/// Decide the shipping mode and, for full-container shipments, select the
/// smallest adequate container.
///
/// Overweight cargo never fails the fit; it degrades to an advisory warning
/// on the returned result.
pub fn fit_container(
    cargo: &CargoDetails,
    cost_lines: &[CostLine],
    containers: &[ContainerType],
) -> FittingResult {
    if cargo.volume_cbm < LCL_THRESHOLD_CBM {
        fit_lcl(cargo, cost_lines)
    } else {
        fit_fcl(cargo, containers)
    }
}

/// LCL billing: freight is charged per revenue ton, the greater of the
/// volumetric and the weight-based measure (1 CBM : 1 metric ton).
fn fit_lcl(cargo: &CargoDetails, cost_lines: &[CostLine]) -> FittingResult {
    let revenue_ton = round_up_two(cargo.volume_cbm.max(cargo.weight_tons()));
    let applied_rate = cost_amount(cost_lines, CostType::OceanFreight).unwrap_or(0.0);
    let insurance_amount = cost_amount(cost_lines, CostType::Insurance)
        .unwrap_or(cargo.declared_value * DEFAULT_INSURANCE_RATE);
    let freight_amount = revenue_ton * applied_rate;

    FittingResult::Lcl {
        revenue_ton,
        applied_rate,
        freight_amount,
        insurance_amount,
        total_amount: freight_amount + insurance_amount,
    }
}

fn fit_fcl(cargo: &CargoDetails, containers: &[ContainerType]) -> FittingResult {
    let mut by_volume: Vec<&ContainerType> = containers
        .iter()
        .filter(|c| c.fits_volume(cargo.volume_cbm))
        .collect();
    by_volume.sort_by(|a, b| {
        a.volume_capacity_cbm
            .partial_cmp(&b.volume_capacity_cbm)
            .unwrap_or(Ordering::Equal)
    });

    if by_volume.is_empty() {
        return overflow_result(cargo, containers);
    }

    // Smallest container adequate for both volume and payload; when the
    // payload disqualifies every volume-adequate container, fall back to the
    // smallest by volume and let the weight warnings carry the problem.
    let selected = by_volume
        .iter()
        .find(|c| c.fits(cargo.volume_cbm, cargo.weight_kg))
        .copied()
        .unwrap_or(by_volume[0]);

    let volume_ratio = cargo.volume_cbm / selected.volume_capacity_cbm;
    let weight_ratio = selected.weight_ratio(cargo.weight_kg);

    FittingResult::Fcl {
        container_type: selected.code.clone(),
        container_count: 1,
        used_volume: cargo.volume_cbm,
        used_weight: cargo.weight_kg,
        utilization_percent: volume_ratio.max(weight_ratio) * 100.0,
        remaining_volume: selected.volume_capacity_cbm - cargo.volume_cbm,
        remaining_weight: selected.max_weight_kg - cargo.weight_kg,
        warnings: weight_warnings(weight_ratio),
    }
}

fn overflow_result(cargo: &CargoDetails, containers: &[ContainerType]) -> FittingResult {
    let largest = containers.iter().max_by(|a, b| {
        a.volume_capacity_cbm
            .partial_cmp(&b.volume_capacity_cbm)
            .unwrap_or(Ordering::Equal)
    });

    let max_single = largest.map(|c| c.volume_capacity_cbm).unwrap_or(0.0);
    let warnings = largest
        .map(|c| weight_warnings(c.weight_ratio(cargo.weight_kg)))
        .unwrap_or_default();

    FittingResult::FclMulti {
        message: format!(
            "cargo volume {} CBM exceeds the largest single container ({} CBM); \
             plan a multi-container shipment manually",
            cargo.volume_cbm, max_single
        ),
        required_volume: cargo.volume_cbm,
        max_single_container_volume: max_single,
        warnings,
    }
}

/// At most one weight warning: overweight replaces the near-limit notice
/// once the ratio passes 1.0.
fn weight_warnings(weight_ratio: f64) -> Vec<String> {
    if weight_ratio > 1.0 {
        vec![WARN_OVERWEIGHT.to_string()]
    } else if weight_ratio > WEIGHT_WARNING_RATIO {
        vec![WARN_NEAR_WEIGHT_LIMIT.to_string()]
    } else {
        Vec::new()
    }
}

fn cost_amount(lines: &[CostLine], cost_type: CostType) -> Option<f64> {
    lines
        .iter()
        .find(|line| line.cost_type == cost_type)
        .map(|line| line.amount)
}

/// Round up to two decimals. Billing never rounds in the shipper's favor.
fn round_up_two(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}
