//! Method Index Page
//!
//! Landing page of a fresh tab: the searchable catalogue of calculation
//! methods, grouped by source document. Picking one replaces the current
//! tab's state with that method.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::markdown::parse_markdown_inline;
use crate::models::{DocumentImplementations, Implementation};
use crate::search::filter_implementations;
use crate::store;

#[component]
fn MethodCard(implementation: Implementation) -> impl IntoView {
    let method_type = implementation.method_type;

    view! {
        <li class="col-span-1 divide-y divide-gray-200 rounded-lg shadow">
            <button
                class="bg-white hover:bg-gray-100 w-full"
                on:click=move |_| store::set_current_tab_method(method_type)
            >
                <div class="flex w-full space-x-6 p-6">
                    <div class="flex-1">
                        <div class="flex flex-col items-start mb-2">
                            <h3 class="text-sm font-medium text-gray-900">
                                {implementation.name.clone()}
                            </h3>
                            <p class="text-sm text-gray-500">
                                {implementation.search_reference.clone()}
                            </p>
                        </div>
                        <div
                            class="text-sm text-gray-500 text-left mb-2"
                            inner_html=parse_markdown_inline(&implementation.description)
                        ></div>
                        <div class="flex flex-row gap-2">
                            {implementation.tags.iter().map(|tag| view! {
                                <span class=format!(
                                    "inline-flex items-center rounded-full px-2 py-1 text-xs font-medium {}",
                                    implementation.colors
                                )>
                                    {tag.clone()}
                                </span>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </button>
        </li>
    }
}

#[component]
pub fn IndexPage() -> impl IntoView {
    let (catalogue, set_catalogue) = signal(Vec::<DocumentImplementations>::new());
    let (search, set_search) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::all_implementations().await {
                Ok(implementations) => set_catalogue.set(implementations),
                Err(e) => {
                    web_sys::console::error_1(&format!("all_implementations failed: {e}").into());
                }
            }
        });
    });

    let filtered = Memo::new(move |_| filter_implementations(&catalogue.get(), &search.get()));

    view! {
        <div class="max-w-5xl w-full">
            <form class="max-w-lg mx-auto mt-10" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
                <input
                    type="search"
                    class="block p-2.5 w-full text-sm text-gray-900 bg-gray-50 rounded-lg border border-gray-300"
                    placeholder="Search"
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </form>

            <div class="flex flex-col flex-1 w-full">
                <div class="flex pt-4 sm:pt-6 h-full">
                    <h1 class="text-2xl font-semibold leading-7 text-gray-900">"Methods"</h1>
                </div>
                <div class="flex items-center justify-between py-0">
                    <h1 class="text-xl font-semibold leading-7 text-gray-500">
                        "Individual calculations for isolated use"
                    </h1>
                </div>
            </div>

            <For
                each=move || filtered.get()
                key=|group| group.document.clone()
                children=move |group| {
                    view! {
                        <div class="mt-6">
                            <h2 class="text-lg font-semibold leading-7 text-gray-700">
                                {group.document.clone()}
                            </h2>
                            <ul class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3 mt-4">
                                {group.implementations.into_iter().map(|implementation| view! {
                                    <MethodCard implementation=implementation />
                                }).collect_view()}
                            </ul>
                        </div>
                    }
                }
            />
        </div>
    }
}
