//! Button Components

use leptos::prelude::*;

#[component]
pub fn Success(#[prop(into)] on_click: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <button
            type="button"
            class="rounded-md bg-green-600 px-3 py-2 mx-1 text-sm font-semibold text-white shadow-sm hover:bg-green-500"
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Cancel(#[prop(into)] on_click: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <button
            type="button"
            class="rounded-md bg-white px-3 py-2 mx-1 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
