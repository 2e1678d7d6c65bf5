//! Freight-cost simulation service: LCL/FCL container fitting, trade-term
//! cost allocation and quote totals behind a JSON API.

pub mod api;
pub mod app;
pub mod domain;
pub mod infra;
pub mod util;
