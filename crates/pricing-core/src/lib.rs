//! # pricing-core
//!
//! Pricing logic behind the CMR pricing calculator widget.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌────────────────────┐
//! │ Plan Catalog │────▶│ Cost Calculator  │────▶│ Quote (derived)    │
//! │ (PlanId)     │     │ compute_total    │     │ $800.00/month      │
//! └──────────────┘     └──────────────────┘     └────────────────────┘
//!         ▲                      ▲
//!         │                      │
//! ┌──────────────────────────────────────┐     ┌────────────────────┐
//! │ Selection (plan, minutes)            │────▶│ Checkout           │
//! │ select_plan / set_minutes            │     │ session + redirect │
//! └──────────────────────────────────────┘     └────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pricing_core::{Checkout, CheckoutConfig, HttpSessionClient, PlanId, Selection};
//!
//! let mut selection = Selection::default();
//! selection.select_plan(PlanId::Flow);
//! selection.set_minutes(1000)?;
//! assert_eq!(selection.quote().total_label(), "$3200.00/month");
//!
//! let sessions = HttpSessionClient::new(CheckoutConfig::for_origin("https://example.com"));
//! let checkout = Checkout::new(sessions, redirect);
//! checkout.get_started(&selection).await?;
//! ```

pub mod calculator;
pub mod checkout;
pub mod error;
pub mod plan;
pub mod selection;

pub use calculator::{Quote, compute_total, compute_total_checked};
pub use checkout::{
    Checkout, CheckoutConfig, CheckoutRequest, HttpSessionClient, PaymentRedirect,
    SessionCreator, SessionId,
};
pub use error::{PricingError, Result};
pub use plan::{BASE_FEE, Plan, PlanId};
pub use selection::{DEFAULT_MINUTES, MAX_MINUTES, MIN_MINUTES, MINUTE_STEP, Selection};
