//! CMR Pricing Web Frontend
//!
//! Leptos-based WASM frontend rendering the pricing calculator widget.

mod app;
mod components;
mod pages;
mod redirect;

pub use app::App;
pub use components::PricingWidget;
pub use redirect::StripeRedirect;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
