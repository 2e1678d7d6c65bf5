//! Read-only reference endpoints. Callers fetch these tables up front to
//! populate pickers and rate lookups before requesting a calculation.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app::AppState;
use crate::domain::{allocation, ContainerType, CostType, Payer, Port, TradeTerm};

pub async fn containers(State(state): State<Arc<AppState>>) -> Json<Vec<ContainerType>> {
    Json(state.catalog.containers().to_vec())
}

pub async fn ports(State(state): State<Arc<AppState>>) -> Json<Vec<Port>> {
    Json(state.catalog.ports().to_vec())
}

/// One row per cost type: wire code, display name, and the paying party
/// under each trade term.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostTypeInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub exw: Payer,
    pub fob: Payer,
    pub cif: Payer,
}

pub async fn cost_types() -> Json<Vec<CostTypeInfo>> {
    let rows = CostType::ALL
        .iter()
        .map(|&cost_type| CostTypeInfo {
            code: cost_type.code(),
            name: cost_type.display_name(),
            exw: allocation::payer_for(TradeTerm::Exw, cost_type),
            fob: allocation::payer_for(TradeTerm::Fob, cost_type),
            cif: allocation::payer_for(TradeTerm::Cif, cost_type),
        })
        .collect();
    Json(rows)
}
