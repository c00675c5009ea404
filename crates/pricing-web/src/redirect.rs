//! Stripe.js Redirect
//!
//! Hands a checkout session to Stripe's hosted page through the global
//! `Stripe` object that Stripe.js installs on the page.

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use pricing_core::{PaymentRedirect, PricingError, Result, SessionId};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Publishable key baked into the bundle at build time
pub const PUBLISHABLE_KEY: Option<&str> = option_env!("STRIPE_PUBLISHABLE_KEY");

/// `PaymentRedirect` backed by `stripe.redirectToCheckout`
pub struct StripeRedirect {
    publishable_key: Option<String>,
}

impl StripeRedirect {
    pub fn new(publishable_key: impl Into<String>) -> Self {
        Self {
            publishable_key: Some(publishable_key.into()),
        }
    }

    /// Use the key from `STRIPE_PUBLISHABLE_KEY` at build time
    pub fn from_build_env() -> Self {
        Self {
            publishable_key: PUBLISHABLE_KEY.map(str::to_string),
        }
    }

    /// `Stripe(publishableKey)`
    fn stripe(&self) -> Result<JsValue> {
        let key = self
            .publishable_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| failed("Stripe publishable key not configured"))?;

        let factory = function_on(&js_sys::global(), "Stripe")
            .ok_or_else(|| failed("Stripe.js is not loaded"))?;

        factory
            .call1(&JsValue::NULL, &JsValue::from_str(key))
            .map_err(|e| failed(&describe(&e)))
    }
}

#[async_trait(?Send)]
impl PaymentRedirect for StripeRedirect {
    async fn redirect(&self, session_id: &SessionId) -> Result<()> {
        let stripe = self.stripe()?;
        let redirect_to_checkout = function_on(&stripe, "redirectToCheckout")
            .ok_or_else(|| failed("Stripe.js has no redirectToCheckout"))?;

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("sessionId"),
            &JsValue::from_str(session_id.as_str()),
        )
        .map_err(|e| failed(&describe(&e)))?;

        let promise: Promise = redirect_to_checkout
            .call1(&stripe, &options)
            .map_err(|e| failed(&describe(&e)))?
            .dyn_into()
            .map_err(|_| failed("redirectToCheckout did not return a promise"))?;

        let outcome = JsFuture::from(promise)
            .await
            .map_err(|e| failed(&describe(&e)))?;

        // resolves with `{ error }` when navigation could not start
        let error = Reflect::get(&outcome, &JsValue::from_str("error")).unwrap_or(JsValue::UNDEFINED);
        if error.is_undefined() || error.is_null() {
            Ok(())
        } else {
            Err(failed(&describe(&error)))
        }
    }
}

fn failed(reason: &str) -> PricingError {
    PricingError::RedirectFailed(reason.to_string())
}

fn function_on(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

/// Best-effort text for a JS error value
fn describe(value: &JsValue) -> String {
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
