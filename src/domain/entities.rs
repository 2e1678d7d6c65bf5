use serde::{Deserialize, Serialize};

/// One container class from the reference table (e.g. "20GP").
///
/// Loaded from the embedded catalog at startup; never created or mutated at
/// runtime. Capacity and payload must both be positive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerType {
    pub code: String,
    pub volume_capacity_cbm: f64,
    pub max_weight_kg: f64,
}

impl ContainerType {
    /// Fraction of this container's payload consumed by the given weight.
    pub fn weight_ratio(&self, weight_kg: f64) -> f64 {
        weight_kg / self.max_weight_kg
    }

    /// Returns true if the cargo fits by volume alone.
    pub fn fits_volume(&self, volume_cbm: f64) -> bool {
        volume_cbm <= self.volume_capacity_cbm
    }

    /// Returns true if the cargo fits by both volume and payload.
    pub fn fits(&self, volume_cbm: f64, weight_kg: f64) -> bool {
        self.fits_volume(volume_cbm) && weight_kg <= self.max_weight_kg
    }
}

/// A port from the reference table. Consulted by callers when picking rates;
/// the calculation itself treats port codes as opaque.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub code: String,
    pub name: String,
    pub country: String,
}

/// Cargo figures for one calculation. Currency-agnostic declared value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoDetails {
    pub volume_cbm: f64,
    pub weight_kg: f64,
    pub declared_value: f64,
}

impl CargoDetails {
    /// Weight expressed in metric tons (the LCL billing convention).
    pub fn weight_tons(&self) -> f64 {
        self.weight_kg / 1000.0
    }
}

/// Origin/destination pair echoed back in the result summary.
/// Port existence checks belong to the reference catalog's callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRoute {
    pub origin_port: String,
    pub destination_port: String,
}

/// Categorized shipping expense. Closed set: unrecognized codes are rejected
/// when the request is parsed, not deep inside the allocation logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostType {
    Packing,
    InlandFreight,
    CustomsFee,
    PortCharges,
    OceanFreight,
    Insurance,
    DestinationFees,
}

impl CostType {
    pub const ALL: [CostType; 7] = [
        CostType::Packing,
        CostType::InlandFreight,
        CostType::CustomsFee,
        CostType::PortCharges,
        CostType::OceanFreight,
        CostType::Insurance,
        CostType::DestinationFees,
    ];

    /// Wire code as it appears in requests and reference listings.
    pub fn code(&self) -> &'static str {
        match self {
            CostType::Packing => "packing",
            CostType::InlandFreight => "inlandFreight",
            CostType::CustomsFee => "customsFee",
            CostType::PortCharges => "portCharges",
            CostType::OceanFreight => "oceanFreight",
            CostType::Insurance => "insurance",
            CostType::DestinationFees => "destinationFees",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CostType::Packing => "Packing",
            CostType::InlandFreight => "Inland freight",
            CostType::CustomsFee => "Customs clearance",
            CostType::PortCharges => "Port charges",
            CostType::OceanFreight => "Ocean freight",
            CostType::Insurance => "Insurance",
            CostType::DestinationFees => "Destination fees",
        }
    }
}

/// One caller-supplied cost entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub cost_type: CostType,
    pub amount: f64,
}

impl CostLine {
    pub fn new(cost_type: CostType, amount: f64) -> Self {
        Self { cost_type, amount }
    }
}

/// Incoterm-like trade term fixing which party bears which costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeTerm {
    Exw,
    Fob,
    Cif,
}

impl TradeTerm {
    pub fn name(&self) -> &'static str {
        match self {
            TradeTerm::Exw => "EXW",
            TradeTerm::Fob => "FOB",
            TradeTerm::Cif => "CIF",
        }
    }
}

/// Which party pays a given cost line under the active trade term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payer {
    Seller,
    Buyer,
}
