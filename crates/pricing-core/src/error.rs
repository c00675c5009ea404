//! Pricing Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PricingError>;

/// Pricing and checkout errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Bad plan or minute count handed to the calculator or the selection
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Plan name outside the catalog
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    /// Session creation call failed or returned no session id
    #[error("Checkout request failed: {0}")]
    CheckoutRequestFailed(String),

    /// Payment redirect could not proceed with the session
    #[error("Redirect failed: {0}")]
    RedirectFailed(String),
}

impl PricingError {
    /// Check if the user can usefully click again
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::CheckoutRequestFailed(_) | Self::RedirectFailed(_)
        )
    }

    /// Get user-friendly message
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::CheckoutRequestFailed(_) => "We couldn't start checkout. Please try again.",
            Self::RedirectFailed(_) => "We couldn't open the payment page. Please try again.",
            Self::InvalidInput(_) | Self::UnknownPlan(_) => "That selection isn't available.",
        }
    }
}
