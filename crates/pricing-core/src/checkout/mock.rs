//! Mock Checkout Collaborators
//!
//! For testing and demo purposes. Both record every call they receive.

use std::cell::RefCell;

use async_trait::async_trait;

use super::{CheckoutRequest, PaymentRedirect, SessionCreator, SessionId};
use crate::error::{PricingError, Result};

/// Session creator with a canned outcome
pub struct MockSessionCreator {
    outcome: std::result::Result<String, String>,
    requests: RefCell<Vec<CheckoutRequest>>,
}

impl MockSessionCreator {
    /// Always succeeds with `session_id`
    pub fn returning(session_id: impl Into<String>) -> Self {
        Self {
            outcome: Ok(session_id.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Always fails with `CheckoutRequestFailed(reason)`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CheckoutRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SessionCreator for MockSessionCreator {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<SessionId> {
        self.requests.borrow_mut().push(request.clone());

        match &self.outcome {
            Ok(id) => Ok(SessionId::new(id.clone())),
            Err(reason) => Err(PricingError::CheckoutRequestFailed(reason.clone())),
        }
    }
}

/// Redirect that never navigates
#[derive(Default)]
pub struct MockRedirect {
    failure: Option<String>,
    redirects: RefCell<Vec<SessionId>>,
}

impl MockRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always fails with `RedirectFailed(reason)`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            redirects: RefCell::new(Vec::new()),
        }
    }

    /// Session ids handed over so far, including failed attempts
    pub fn redirects(&self) -> Vec<SessionId> {
        self.redirects.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PaymentRedirect for MockRedirect {
    async fn redirect(&self, session_id: &SessionId) -> Result<()> {
        self.redirects.borrow_mut().push(session_id.clone());

        match &self.failure {
            Some(reason) => Err(PricingError::RedirectFailed(reason.clone())),
            None => Ok(()),
        }
    }
}
