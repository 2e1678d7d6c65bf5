//! Trade-term cost allocation: which party bears which cost under EXW/FOB/CIF.

use serde::Serialize;

use super::entities::{CostLine, CostType, Payer, TradeTerm};

/// A cost line resolved to its payer and display name.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedCost {
    pub cost_type: CostType,
    pub name: &'static str,
    pub amount: f64,
    pub payer: Payer,
}

/// Seller- and buyer-borne cost lists with per-payer totals.
///
/// The totals are carried here for callers of the domain API; on the wire
/// they surface at the top level of the calculation result instead.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub seller: Vec<AllocatedCost>,
    pub buyer: Vec<AllocatedCost>,
    #[serde(skip_serializing)]
    pub seller_total: f64,
    #[serde(skip_serializing)]
    pub buyer_total: f64,
}

/// Seller-borne cost types per trade term. Everything else is buyer-borne.
fn seller_costs(term: TradeTerm) -> &'static [CostType] {
    match term {
        TradeTerm::Exw => &[CostType::Packing],
        TradeTerm::Fob => &[
            CostType::Packing,
            CostType::InlandFreight,
            CostType::CustomsFee,
            CostType::PortCharges,
        ],
        TradeTerm::Cif => &[
            CostType::Packing,
            CostType::InlandFreight,
            CostType::CustomsFee,
            CostType::PortCharges,
            CostType::OceanFreight,
            CostType::Insurance,
        ],
    }
}

/// Look up the paying party for a cost type under the given term.
pub fn payer_for(term: TradeTerm, cost_type: CostType) -> Payer {
    if seller_costs(term).contains(&cost_type) {
        Payer::Seller
    } else {
        Payer::Buyer
    }
}

/// Classify every cost line by payer and sum the two sides.
/// Pure classification; the input amounts pass through untouched.
pub fn allocate(term: TradeTerm, cost_lines: &[CostLine]) -> CostBreakdown {
    let mut seller = Vec::new();
    let mut buyer = Vec::new();
    let mut seller_total = 0.0;
    let mut buyer_total = 0.0;

    for line in cost_lines {
        let payer = payer_for(term, line.cost_type);
        let allocated = AllocatedCost {
            cost_type: line.cost_type,
            name: line.cost_type.display_name(),
            amount: line.amount,
            payer,
        };
        match payer {
            Payer::Seller => {
                seller_total += line.amount;
                seller.push(allocated);
            }
            Payer::Buyer => {
                buyer_total += line.amount;
                buyer.push(allocated);
            }
        }
    }

    CostBreakdown {
        seller,
        buyer,
        seller_total,
        buyer_total,
    }
}
