//! Checkout Initiator
//!
//! Turns the current selection into a hosted checkout:
//!
//! ```text
//! ┌───────────┐  CheckoutRequest  ┌──────────────────┐  SessionId  ┌─────────────────┐
//! │ Selection │──────────────────▶│ SessionCreator   │────────────▶│ PaymentRedirect │
//! │ (click)   │                   │ (remote service) │             │ (hosted page)   │
//! └───────────┘                   └──────────────────┘             └─────────────────┘
//! ```
//!
//! One attempt per click. The request is built from the selection as it was
//! when the user clicked, so later edits never leak into an in-flight call.

mod http;
mod mock;

pub use http::{CheckoutConfig, DEFAULT_ENDPOINT_PATH, DEFAULT_ORIGIN, HttpSessionClient};
pub use mock::{MockRedirect, MockSessionCreator};

use std::fmt;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::compute_total;
use crate::error::{PricingError, Result};
use crate::plan::PlanId;
use crate::selection::Selection;

/// Server-issued checkout session handle
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body sent to the session creation endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Plan being purchased
    pub product: PlanId,

    /// Selected monthly minutes
    pub minutes: u32,

    /// Quoted monthly total (USD), sent as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
}

impl CheckoutRequest {
    /// Snapshot a selection together with its computed total
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            product: selection.plan(),
            minutes: selection.minutes(),
            total_cost: compute_total(selection.plan(), selection.minutes()),
        }
    }
}

/// Creates a checkout session on the payment backend
#[async_trait(?Send)]
pub trait SessionCreator {
    /// Fails with `CheckoutRequestFailed` on any transport or response problem
    async fn create_session(&self, request: &CheckoutRequest) -> Result<SessionId>;
}

/// Hands a session over to the hosted payment page
#[async_trait(?Send)]
pub trait PaymentRedirect {
    /// Fails with `RedirectFailed` when the redirect cannot proceed
    async fn redirect(&self, session_id: &SessionId) -> Result<()>;
}

/// Checkout initiator wired to its two collaborators
pub struct Checkout<S, R> {
    sessions: S,
    redirect: R,
}

impl<S: SessionCreator, R: PaymentRedirect> Checkout<S, R> {
    pub const fn new(sessions: S, redirect: R) -> Self {
        Self { sessions, redirect }
    }

    pub const fn sessions(&self) -> &S {
        &self.sessions
    }

    pub const fn redirect(&self) -> &R {
        &self.redirect
    }

    /// Create a session for `selection` and redirect to it.
    ///
    /// Returns the session id that was handed to the redirect.
    pub async fn initiate(&self, selection: &Selection) -> Result<SessionId> {
        let request = CheckoutRequest::from_selection(selection);

        tracing::debug!(
            plan = %request.product,
            minutes = request.minutes,
            total_cost = %request.total_cost,
            "Creating checkout session"
        );

        let session_id = self.sessions.create_session(&request).await?;
        if session_id.as_str().is_empty() {
            return Err(PricingError::CheckoutRequestFailed(
                "empty session id".into(),
            ));
        }

        self.redirect.redirect(&session_id).await?;

        Ok(session_id)
    }

    /// "Get Started" click handler.
    ///
    /// Same as [`Checkout::initiate`], but every failure is logged here once.
    /// The result is returned so the caller can show a failure indication.
    pub async fn get_started(&self, selection: &Selection) -> Result<SessionId> {
        match self.initiate(selection).await {
            Ok(session_id) => {
                tracing::info!(
                    session_id = %session_id,
                    plan = %selection.plan(),
                    minutes = selection.minutes(),
                    "Handed off to payment redirect"
                );
                Ok(session_id)
            }
            Err(e) => {
                tracing::error!(
                    plan = %selection.plan(),
                    minutes = selection.minutes(),
                    error = %e,
                    "Error creating checkout session"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_wire_format() {
        let request = CheckoutRequest::from_selection(&Selection::default());
        assert_eq!(request.total_cost, dec!(800));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["product"], "Now");
        assert_eq!(json["minutes"], 300);
        assert_eq!(json["totalCost"].as_f64(), Some(800.0));
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_initiate_redirects_with_session() {
        let checkout = Checkout::new(MockSessionCreator::returning("cs_test_1"), MockRedirect::new());

        let session_id = checkout.initiate(&Selection::default()).await.unwrap();

        assert_eq!(session_id.as_str(), "cs_test_1");
        assert_eq!(checkout.redirect().redirects(), vec![SessionId::new("cs_test_1")]);
        assert_eq!(
            checkout.sessions().requests(),
            vec![CheckoutRequest {
                product: PlanId::Now,
                minutes: 300,
                total_cost: dec!(800),
            }]
        );
    }

    #[tokio::test]
    async fn test_request_uses_click_time_selection() {
        let checkout = Checkout::new(MockSessionCreator::returning("cs_test_2"), MockRedirect::new());
        let mut selection = Selection::default();
        selection.select_plan(PlanId::Flow);
        selection.set_minutes(1000).unwrap();

        checkout.initiate(&selection).await.unwrap();

        let sent = &checkout.sessions().requests()[0];
        assert_eq!(sent.product, PlanId::Flow);
        assert_eq!(sent.minutes, 1000);
        assert_eq!(sent.total_cost, dec!(3200));
    }

    #[tokio::test]
    async fn test_session_failure_skips_redirect() {
        let checkout = Checkout::new(
            MockSessionCreator::failing("connection refused"),
            MockRedirect::new(),
        );

        let err = checkout.initiate(&Selection::default()).await.unwrap_err();

        assert!(matches!(err, PricingError::CheckoutRequestFailed(_)));
        assert!(checkout.redirect().redirects().is_empty());
    }

    #[tokio::test]
    async fn test_empty_session_id_is_rejected() {
        let checkout = Checkout::new(MockSessionCreator::returning(""), MockRedirect::new());

        let err = checkout.initiate(&Selection::default()).await.unwrap_err();

        assert!(matches!(err, PricingError::CheckoutRequestFailed(_)));
        assert!(checkout.redirect().redirects().is_empty());
    }

    #[tokio::test]
    async fn test_redirect_failure_propagates() {
        let checkout = Checkout::new(
            MockSessionCreator::returning("cs_expired"),
            MockRedirect::failing("session expired"),
        );

        let err = checkout.get_started(&Selection::default()).await.unwrap_err();

        assert_eq!(err, PricingError::RedirectFailed("session expired".into()));
        assert_eq!(checkout.sessions().requests().len(), 1);
    }
}
