//! Cost Calculator
//!
//! Monthly total for a plan and minute count:
//!
//! ```text
//! total = BASE_FEE + minutes * plan.base_rate
//! ```
//!
//! The setup fee and the additional-minute rate are shown to the user but are
//! not part of the total.

use rust_decimal::Decimal;

use crate::error::{PricingError, Result};
use crate::plan::{BASE_FEE, Plan, PlanId};

/// Total monthly cost for `minutes` on `plan`
pub fn compute_total(plan: PlanId, minutes: u32) -> Decimal {
    total_for(plan, Decimal::from(minutes))
}

/// Loosely-typed form of [`compute_total`] for callers holding raw input
pub fn compute_total_checked(plan: &str, minutes: i64) -> Result<Decimal> {
    let plan_id = plan
        .parse::<PlanId>()
        .map_err(|_| PricingError::InvalidInput(format!("plan {plan:?} is not in the catalog")))?;
    if minutes < 0 {
        return Err(PricingError::InvalidInput(format!(
            "minute count {minutes} is negative"
        )));
    }

    Ok(total_for(plan_id, Decimal::from(minutes)))
}

fn total_for(plan: PlanId, minutes: Decimal) -> Decimal {
    BASE_FEE + minutes * plan.plan().base_rate
}

/// Derived price for a selection, with the figures the widget displays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub plan: &'static Plan,
    pub minutes: u32,
    pub base_fee: Decimal,
    pub total: Decimal,
}

impl Quote {
    pub fn new(plan: PlanId, minutes: u32) -> Self {
        Self {
            plan: plan.plan(),
            minutes,
            base_fee: BASE_FEE,
            total: compute_total(plan, minutes),
        }
    }

    /// e.g. `$800.00/month`
    pub fn total_label(&self) -> String {
        format!("${:.2}/month", self.total)
    }

    /// e.g. `300 minutes`
    pub fn minutes_label(&self) -> String {
        format!("{} minutes", self.minutes)
    }

    /// e.g. `$200 base fee`
    pub fn base_fee_label(&self) -> String {
        format!("${} base fee", self.base_fee)
    }

    /// e.g. `$2/min`
    pub fn rate_label(&self) -> String {
        rate_label(self.plan.id)
    }

    /// e.g. `$2.50/min`
    pub fn additional_rate_label(&self) -> String {
        format!("${:.2}/min", self.plan.additional_minute_rate)
    }

    /// e.g. `$100`
    pub fn setup_fee_label(&self) -> String {
        format!("${}", self.plan.setup_fee)
    }
}

/// Per-minute price as shown on a plan tab
pub fn rate_label(plan: PlanId) -> String {
    format!("${}/min", plan.plan().base_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_formula_over_slider_range() {
        for plan in PlanId::ALL {
            for minutes in (0..=1000).step_by(100) {
                let expected = dec!(200) + Decimal::from(minutes) * plan.plan().base_rate;
                assert_eq!(compute_total(plan, minutes), expected);
            }
        }
    }

    #[test]
    fn test_monotonic_in_minutes() {
        for plan in PlanId::ALL {
            let mut previous = compute_total(plan, 0);
            for minutes in 1..=1000 {
                let total = compute_total(plan, minutes);
                assert!(total >= previous, "{plan} dropped at {minutes}");
                previous = total;
            }
        }
    }

    #[test]
    fn test_known_totals() {
        assert_eq!(compute_total(PlanId::Now, 300), dec!(800));
        assert_eq!(compute_total(PlanId::Flow, 1000), dec!(3200));
        assert_eq!(compute_total(PlanId::Now, 0), dec!(200));
    }

    #[test]
    fn test_fees_excluded_from_total() {
        // setup fee (500) and additional rate (3.50) do not contribute
        assert_eq!(compute_total(PlanId::Flow, 100), dec!(500));
    }

    #[test]
    fn test_checked_rejects_bad_input() {
        assert_eq!(compute_total_checked("Flow", 1000), Ok(dec!(3200)));
        assert!(matches!(
            compute_total_checked("Now", -100),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_total_checked("Enterprise", 100),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_checked_accepts_counts_beyond_u32() {
        assert_eq!(
            compute_total_checked("Now", 5_000_000_000),
            Ok(dec!(10_000_000_200))
        );
        assert_eq!(compute_total_checked("Now", 0), Ok(dec!(200)));
    }

    #[test]
    fn test_quote_labels() {
        let quote = Quote::new(PlanId::Now, 300);
        assert_eq!(quote.total_label(), "$800.00/month");
        assert_eq!(quote.minutes_label(), "300 minutes");
        assert_eq!(quote.base_fee_label(), "$200 base fee");
        assert_eq!(quote.rate_label(), "$2/min");
        assert_eq!(quote.additional_rate_label(), "$2.50/min");
        assert_eq!(quote.setup_fee_label(), "$100");

        let quote = Quote::new(PlanId::Flow, 1000);
        assert_eq!(quote.total_label(), "$3200.00/month");
        assert_eq!(quote.additional_rate_label(), "$3.50/min");
        assert_eq!(rate_label(PlanId::Flow), "$3/min");
    }
}
