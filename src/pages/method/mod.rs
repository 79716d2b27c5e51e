//! Method Page
//!
//! The working view for one calculation: the input form, the full
//! calculation sheet, and the method's background material, switched by a
//! local tab strip. The page reads the method out of the session store
//! reactively, so a `tabs_updated` refetch updates values in place
//! instead of remounting the page (which would reset the strip and drop
//! in-progress input). Form step sections are keyed by step name for the
//! same reason.

pub mod about;
pub mod calc_sheet;
pub mod calculation;
pub mod quick_results;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ErrorAlert, FieldInputSection};
use crate::models::TabState;
use crate::store::{use_session_store, SessionStateStoreFields};

use about::About;
use calc_sheet::CalcSheet;
use quick_results::QuickResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodTab {
    Input,
    Calculation,
    About,
}

impl MethodTab {
    fn label(self) -> &'static str {
        match self {
            MethodTab::Input => "Input",
            MethodTab::Calculation => "Calculation",
            MethodTab::About => "About",
        }
    }
}

#[component]
pub fn MethodPage() -> impl IntoView {
    let session = use_session_store();
    let method = Memo::new(move |_| match session.current_tab().get() {
        Some(tab) => match tab.state {
            TabState::Method(method) => Some(method),
            TabState::Index(_) => None,
        },
        None => None,
    });
    let name = Memo::new(move |_| method.get().map(|m| m.name).unwrap_or_default());
    let document = Memo::new(move |_| method.get().map(|m| m.reference));
    let quick_calc_compatible =
        Memo::new(move |_| method.get().map(|m| m.quick_calc_compatible).unwrap_or(false));
    let stale = Memo::new(move |_| method.get().map(|m| m.calc_sheet.stale).unwrap_or(true));

    let (active, set_active) = signal(MethodTab::Input);
    let (reference, set_reference) = signal(String::new());
    let (calc_error, set_calc_error) = signal(String::new());

    Effect::new(move |_| {
        let Some(doc) = document.get() else { return };
        spawn_local(async move {
            match commands::friendly_reference(&doc).await {
                Ok(text) => set_reference.set(text),
                Err(e) => {
                    web_sys::console::error_1(&format!("friendly_reference failed: {e}").into());
                }
            }
        });
    });

    // Field-level validation failures arrive over the validation events
    // and render next to the offending input, so only other backend
    // failures surface in the page-level alert.
    let do_quick_calc = Callback::new(move |_| {
        if !quick_calc_compatible.get_untracked() {
            return;
        }
        spawn_local(async move {
            match commands::calculate_form().await {
                Ok(()) => set_calc_error.set(String::new()),
                Err(e) => {
                    if e.validation_message().is_none() {
                        set_calc_error.set(format!("Calculation failed: {e}"));
                    }
                }
            }
        });
    });

    let tab_button = move |tab: MethodTab| {
        let disabled = move || tab == MethodTab::Calculation && stale.get();
        view! {
            <button
                class=move || {
                    if active.get() == tab {
                        "border-red-500 text-red-600 whitespace-nowrap border-b-2 py-4 px-1 text-sm font-medium"
                    } else if disabled() {
                        "border-transparent text-gray-300 whitespace-nowrap border-b-2 py-4 px-1 text-sm font-medium cursor-not-allowed"
                    } else {
                        "border-transparent text-gray-500 hover:border-gray-300 hover:text-gray-700 whitespace-nowrap border-b-2 py-4 px-1 text-sm font-medium"
                    }
                }
                disabled=disabled
                on:click=move |_| set_active.set(tab)
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="flex flex-col px-8 pb-10">
            <div class="mt-6">
                <h1 class="text-2xl font-semibold leading-7 text-gray-900">
                    {move || name.get()}
                </h1>
                <p class="mt-1 text-sm text-gray-500">{move || reference.get()}</p>
            </div>
            <div class="border-b border-gray-200">
                <nav class="-mb-px flex space-x-8">
                    {tab_button(MethodTab::Input)}
                    {tab_button(MethodTab::Calculation)}
                    {tab_button(MethodTab::About)}
                </nav>
            </div>
            <Show when=move || !calc_error.get().is_empty()>
                <div class="mt-4">
                    <ErrorAlert message=calc_error />
                </div>
            </Show>
            {move || match active.get() {
                MethodTab::Input => view! {
                    <div class="flex flex-col gap-6 mt-6">
                        <For
                            each=move || method.get().map(|m| m.form.steps).unwrap_or_default()
                            key=|step| step.name.clone()
                            children=move |step| view! {
                                <FieldInputSection step=step do_quick_calc=do_quick_calc />
                            }
                        />
                        {move || quick_calc_compatible.get().then(|| {
                            method.get().map(|m| view! {
                                <QuickResults results=m.calc_sheet />
                            })
                        })}
                    </div>
                }
                .into_any(),
                MethodTab::Calculation => view! {
                    <div class="mt-6">
                        {move || method.get().map(|m| view! { <CalcSheet method=m /> })}
                    </div>
                }
                .into_any(),
                MethodTab::About => view! {
                    {move || document.get().map(|doc| view! {
                        <About document=doc method_name=name.get() />
                    })}
                }
                .into_any(),
            }}
        </div>
    }
}
