//! Domain logic for freight costing lives here.

pub mod allocation;
pub mod calculator;
pub mod entities;
pub mod fitting;

#[allow(unused_imports)]
pub use allocation::{allocate, payer_for, AllocatedCost, CostBreakdown};
#[allow(unused_imports)]
pub use calculator::{calculate, CalculationError, CalculationResult, CalculationSummary};
#[allow(unused_imports)]
pub use entities::{
    CargoDetails, ContainerType, CostLine, CostType, Payer, Port, ShippingRoute, TradeTerm,
};
#[allow(unused_imports)]
pub use fitting::{
    fit_container, FittingResult, DEFAULT_INSURANCE_RATE, LCL_THRESHOLD_CBM,
    WARN_NEAR_WEIGHT_LIMIT, WARN_OVERWEIGHT, WEIGHT_WARNING_RATIO,
};
