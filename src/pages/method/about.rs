//! Method About Page
//!
//! Document and method descriptions, limitations, and the full citation,
//! all fetched from the backend and rendered as markdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::markdown::parse_markdown;
use crate::models::Document;

#[component]
pub fn About(document: Document, #[prop(into)] method_name: String) -> impl IntoView {
    let (doc_name, set_doc_name) = signal(String::new());
    let (document_description, set_document_description) = signal(String::new());
    let (method_description, set_method_description) = signal(String::new());
    let (limitations, set_limitations) = signal(String::new());
    let (citation, set_citation) = signal(String::new());

    Effect::new(move |_| {
        let doc = document.clone();
        spawn_local(async move {
            let fetches: [(&str, Result<String, _>, WriteSignal<String>); 5] = [
                ("document_title", commands::document_title(&doc).await, set_doc_name),
                (
                    "about_document",
                    commands::about_document(&doc).await,
                    set_document_description,
                ),
                (
                    "about_method",
                    commands::about_method(&doc).await,
                    set_method_description,
                ),
                (
                    "method_limitations",
                    commands::method_limitations(&doc).await,
                    set_limitations,
                ),
                (
                    "harvard_reference",
                    commands::harvard_reference(&doc).await,
                    set_citation,
                ),
            ];
            for (command, result, setter) in fetches {
                match result {
                    Ok(text) => setter.set(text),
                    Err(e) => {
                        web_sys::console::error_1(&format!("{command} failed: {e}").into());
                    }
                }
            }
        });
    });

    view! {
        <div class="flex flex-col gap-5 mt-10">
            <div class="flex flex-row items-center gap-10">
                <h1 class="text-2xl font-semibold leading-7 text-gray-900">
                    {move || doc_name.get()}
                </h1>
            </div>
            <div inner_html=move || parse_markdown(&document_description.get())></div>

            <div class="flex flex-row items-center gap-10">
                <h1 class="text-2xl font-semibold leading-7 text-gray-900">
                    "Method Description"
                </h1>
            </div>
            <h2 class="text-lg font-semibold leading-7 text-gray-700">{method_name}</h2>
            <div inner_html=move || parse_markdown(&method_description.get())></div>

            <div class="flex flex-row items-center gap-10">
                <h1 class="text-2xl font-semibold leading-7 text-gray-900">"Limitations"</h1>
            </div>
            <div inner_html=move || parse_markdown(&limitations.get())></div>

            <p class="text-sm text-gray-500 mt-5">{move || citation.get()}</p>
        </div>
    }
}
