//! UI Components

use std::rc::Rc;

use leptos::prelude::*;
use pricing_core::calculator::rate_label;
use pricing_core::{
    Checkout, CheckoutConfig, HttpSessionClient, MAX_MINUTES, MIN_MINUTES, MINUTE_STEP, PlanId,
    Selection, checkout::DEFAULT_ORIGIN,
};

use crate::redirect::StripeRedirect;

type WidgetCheckout = Checkout<HttpSessionClient, StripeRedirect>;

/// Checkout wired to this page's server and Stripe.js
fn page_checkout() -> WidgetCheckout {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_ORIGIN.into());

    Checkout::new(
        HttpSessionClient::new(CheckoutConfig::for_origin(&origin)),
        StripeRedirect::from_build_env(),
    )
}

/// Pricing calculator: plan tabs, minute slider, quote and "Get Started"
#[component]
pub fn PricingWidget() -> impl IntoView {
    let selection = RwSignal::new(Selection::default());
    let failure = RwSignal::new(None::<&'static str>);
    let checkout = StoredValue::new_local(Rc::new(page_checkout()));

    let quote = move || selection.with(Selection::quote);

    let on_minutes = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match raw.parse::<i64>() {
            Ok(minutes) => selection.update(|s| {
                if let Err(e) = s.set_minutes(minutes) {
                    leptos::logging::warn!("Ignoring slider value: {e}");
                }
            }),
            Err(_) => leptos::logging::warn!("Ignoring non-numeric slider value {raw:?}"),
        }
    };

    let get_started = move |_: leptos::ev::MouseEvent| {
        // request is built from the selection as of this click
        let snapshot = selection.get_untracked();
        let checkout = checkout.get_value();
        failure.set(None);

        leptos::task::spawn_local(async move {
            if let Err(e) = checkout.get_started(&snapshot).await {
                // browser console record; no tracing subscriber runs in the page
                leptos::logging::error!("Error creating checkout session: {e}");
                // widget may be gone by now
                let _ = failure.try_set(Some(e.user_message()));
            }
        });
    };

    view! {
        <div class="pricing-widget">
            <div class="plan-tabs">
                {PlanId::ALL
                    .into_iter()
                    .map(|plan| view! { <PlanTab plan=plan selection=selection /> })
                    .collect_view()}
            </div>

            <div class="pricing-body">
                <input
                    type="range"
                    class="minutes-slider"
                    min=MIN_MINUTES.to_string()
                    max=MAX_MINUTES.to_string()
                    step=MINUTE_STEP.to_string()
                    prop:value=move || selection.with(|s| s.minutes().to_string())
                    on:input=on_minutes
                />

                <div class="quote">
                    <p class="quote-minutes">{move || quote().minutes_label()}</p>
                    <p class="quote-total">{move || quote().total_label()}</p>
                </div>

                <ul class="breakdown">
                    <li><strong>{move || quote().base_fee_label()}</strong></li>
                    <li>
                        {move || quote().minutes_label()} " @ "
                        <strong>{move || quote().rate_label()}</strong>
                    </li>
                    <li>
                        "Additional minutes: "
                        <strong>{move || quote().additional_rate_label()}</strong>
                    </li>
                    <li>
                        "One-time setup fee: "
                        <strong>{move || quote().setup_fee_label()}</strong>
                    </li>
                </ul>

                <button class="btn btn-primary" on:click=get_started>
                    "Get Started"
                </button>

                {move || failure.get().map(|msg| view! { <p class="checkout-error">{msg}</p> })}

                <p class="note">"No long term commitment required"</p>
            </div>
        </div>
    }
}

/// One selectable plan header
#[component]
fn PlanTab(plan: PlanId, selection: RwSignal<Selection>) -> impl IntoView {
    let class = move || {
        if selection.with(|s| s.plan() == plan) {
            "plan-tab active"
        } else {
            "plan-tab"
        }
    };

    view! {
        <div class=class on:click=move |_| selection.update(|s| s.select_plan(plan))>
            <h2>{plan.as_str()}</h2>
            <p>{rate_label(plan)}</p>
        </div>
    }
}
