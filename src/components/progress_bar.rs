//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `percent` (0..=100).
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
    view! {
        <div class="w-full rounded-full bg-gray-200 h-2.5">
            <div
                class="h-2.5 rounded-full bg-indigo-600"
                style=move || format!("width: {:.0}%", percent.get().clamp(0.0, 100.0))
            ></div>
        </div>
    }
}
