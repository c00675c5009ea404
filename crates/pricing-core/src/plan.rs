//! Plan Catalog
//!
//! The closed set of pricing tiers and their rate parameters.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// Flat monthly fee charged on every plan (USD)
pub const BASE_FEE: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Plan identifiers, in display order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanId {
    #[default]
    Now,
    Flow,
}

impl PlanId {
    /// Every plan, first one is the default selection
    pub const ALL: [Self; 2] = [Self::Now, Self::Flow];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Now => "Now",
            Self::Flow => "Flow",
        }
    }

    /// Rate parameters for this plan
    pub fn plan(self) -> &'static Plan {
        match self {
            Self::Now => &NOW,
            Self::Flow => &FLOW,
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PricingError::UnknownPlan(s.to_string()))
    }
}

static NOW: Plan = Plan {
    id: PlanId::Now,
    base_rate: Decimal::from_parts(2, 0, 0, false, 0),
    setup_fee: Decimal::from_parts(100, 0, 0, false, 0),
    additional_minute_rate: Decimal::from_parts(250, 0, 0, false, 2),
};

static FLOW: Plan = Plan {
    id: PlanId::Flow,
    base_rate: Decimal::from_parts(3, 0, 0, false, 0),
    setup_fee: Decimal::from_parts(500, 0, 0, false, 0),
    additional_minute_rate: Decimal::from_parts(350, 0, 0, false, 2),
};

/// Rate parameters of one pricing tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: PlanId,

    /// Price per selected minute (USD/min)
    pub base_rate: Decimal,

    /// One-time setup fee (USD)
    pub setup_fee: Decimal,

    /// Price per minute beyond the allotment (USD/min)
    pub additional_minute_rate: Decimal,
}
