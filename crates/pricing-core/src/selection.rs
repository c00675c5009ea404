//! Selection State
//!
//! The user's current plan and minute choice. Mutated only through the two
//! setters; the quote is recomputed on every read.

use crate::calculator::Quote;
use crate::error::{PricingError, Result};
use crate::plan::PlanId;

/// Lowest slider value
pub const MIN_MINUTES: u32 = 0;

/// Highest slider value
pub const MAX_MINUTES: u32 = 1000;

/// Slider increment
pub const MINUTE_STEP: u32 = 100;

/// Minutes shown when the widget first renders
pub const DEFAULT_MINUTES: u32 = 300;

/// Current plan + minute choice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    plan: PlanId,
    minutes: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            plan: PlanId::ALL[0],
            minutes: DEFAULT_MINUTES,
        }
    }
}

impl Selection {
    pub const fn plan(&self) -> PlanId {
        self.plan
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Switch plans; minutes are kept
    pub fn select_plan(&mut self, plan: PlanId) {
        self.plan = plan;
    }

    /// Set the minute count.
    ///
    /// Values outside `MIN_MINUTES..=MAX_MINUTES` or off the `MINUTE_STEP` grid
    /// are rejected and leave the selection unchanged.
    pub fn set_minutes(&mut self, minutes: i64) -> Result<()> {
        self.minutes = validate_minutes(minutes)?;
        Ok(())
    }

    /// Price for the current choice
    pub fn quote(&self) -> Quote {
        Quote::new(self.plan, self.minutes)
    }
}

fn validate_minutes(minutes: i64) -> Result<u32> {
    let in_range = u32::try_from(minutes)
        .ok()
        .filter(|m| (MIN_MINUTES..=MAX_MINUTES).contains(m));

    match in_range {
        Some(m) if m % MINUTE_STEP == 0 => Ok(m),
        Some(m) => Err(PricingError::InvalidInput(format!(
            "{m} minutes is not a multiple of {MINUTE_STEP}"
        ))),
        None => Err(PricingError::InvalidInput(format!(
            "{minutes} minutes is outside {MIN_MINUTES}..={MAX_MINUTES}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.plan(), PlanId::Now);
        assert_eq!(selection.minutes(), 300);
        assert_eq!(selection.quote().total, dec!(800));
        assert_eq!(selection.quote().total_label(), "$800.00/month");
    }

    #[test]
    fn test_select_plan_keeps_minutes() {
        let mut selection = Selection::default();
        selection.set_minutes(700).unwrap();
        selection.select_plan(PlanId::Flow);
        assert_eq!(selection.plan(), PlanId::Flow);
        assert_eq!(selection.minutes(), 700);
    }

    #[test]
    fn test_set_minutes_keeps_plan() {
        let mut selection = Selection::default();
        selection.select_plan(PlanId::Flow);
        selection.set_minutes(1000).unwrap();
        assert_eq!(selection.plan(), PlanId::Flow);
        assert_eq!(selection.quote().total, dec!(3200));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut selection = Selection::default();
        assert!(selection.set_minutes(0).is_ok());
        assert_eq!(selection.minutes(), 0);
        assert!(selection.set_minutes(1000).is_ok());
        assert_eq!(selection.minutes(), 1000);
    }

    #[test]
    fn test_rejected_values_leave_state_unchanged() {
        let mut selection = Selection::default();
        for bad in [-100, -1, 1100, 250, 999, i64::MAX] {
            let before = selection;
            let err = selection.set_minutes(bad).unwrap_err();
            assert!(matches!(err, PricingError::InvalidInput(_)), "{bad}: {err}");
            assert_eq!(selection, before);
        }
    }

    #[test]
    fn test_quote_tracks_every_change() {
        let mut selection = Selection::default();
        selection.set_minutes(500).unwrap();
        assert_eq!(selection.quote().total, dec!(1200));
        selection.select_plan(PlanId::Flow);
        assert_eq!(selection.quote().total, dec!(1700));
    }
}
