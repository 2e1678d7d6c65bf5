//! The freight calculation endpoint.

use std::sync::Arc;

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::app::AppState;
use crate::domain::{
    calculator, CalculationResult, CargoDetails, CostLine, CostType, ShippingRoute, TradeTerm,
};

/// Request body for `POST /api/freight/calculate`. Unknown fields and
/// unknown cost-type codes fail deserialization and come back as a 400.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalculateRequest {
    pub trade_term: TradeTerm,
    pub cargo_details: CargoDetailsDto,
    pub route: RouteDto,
    #[serde(default)]
    pub costs: Vec<CostLineDto>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CargoDetailsDto {
    pub volume: f64,
    pub weight: f64,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouteDto {
    pub origin_port: String,
    pub destination_port: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostLineDto {
    #[serde(rename = "type")]
    pub cost_type: CostType,
    pub amount: f64,
}

impl From<&CostLineDto> for CostLine {
    fn from(dto: &CostLineDto) -> Self {
        CostLine::new(dto.cost_type, dto.amount)
    }
}

pub async fn calculate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculationResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let cargo = CargoDetails {
        volume_cbm: request.cargo_details.volume,
        weight_kg: request.cargo_details.weight,
        declared_value: request.cargo_details.value,
    };
    let route = ShippingRoute {
        origin_port: request.route.origin_port,
        destination_port: request.route.destination_port,
    };
    let costs: Vec<CostLine> = request.costs.iter().map(CostLine::from).collect();

    let result = calculator::calculate(
        request.trade_term,
        &cargo,
        &route,
        &costs,
        state.catalog.containers(),
    )?;

    tracing::debug!(
        trade_term = request.trade_term.name(),
        mode = result.summary.shipping_mode,
        "freight calculation served"
    );

    Ok(Json(result))
}
