//! Card Components
//!
//! Shared card chrome for form steps, results, and calc-sheet sections.

use leptos::prelude::*;

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="bg-white shadow sm:rounded-lg mt-5">
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! {
        <div class="border-b border-gray-200 px-4 py-4 sm:px-6">
            {children()}
        </div>
    }
}

#[component]
pub fn CardBody(children: Children) -> impl IntoView {
    view! {
        <div class="px-4 py-5 sm:p-6">
            {children()}
        </div>
    }
}
