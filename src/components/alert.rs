//! Alert Components
//!
//! Inline banners for recoverable failures and cautions.

use leptos::prelude::*;

#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="rounded-md bg-red-50 p-4 my-2">
            <p class="text-sm font-medium text-red-800">{move || message.get()}</p>
        </div>
    }
}

#[component]
pub fn WarningAlert(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="rounded-md bg-yellow-50 p-4 my-2">
            <p class="text-sm font-medium text-yellow-800">{move || message.get()}</p>
        </div>
    }
}
