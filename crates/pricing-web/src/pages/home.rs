//! Home Page

use leptos::prelude::*;

use crate::components::PricingWidget;

/// Centers the one pricing widget in the viewport
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen py-2">
            <PricingWidget />
        </div>
    }
}
