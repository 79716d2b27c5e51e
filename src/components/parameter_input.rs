//! Validating Field Input
//!
//! Text input for one form field. Edits are debounced and pushed through
//! `update_field`; the backend is the sole validator. Inline error state
//! comes from two places: the call's own result, and the broadcast
//! `validation-error` / `validation-ok` events filtered to this field's
//! id. Responses race; the last one to arrive wins.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

use crate::commands;
use crate::components::InlineMath;
use crate::events;
use crate::format::FieldDisplay;
use crate::models::ValidationErrorEvent;

const DEBOUNCE_MS: u32 = 250;

#[component]
pub fn ParameterInput(
    field: FieldDisplay,
    #[prop(optional, into)] do_quick_calc: Option<Callback<()>>,
) -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);
    let (value, set_value) = signal(field.value.clone().unwrap_or_default());
    // Stale debounce timers bail out when a newer edit bumped this.
    let generation = StoredValue::new(0u64);

    let event_field_id = field.id.clone();
    let error_subscription = events::subscribe_to::<Vec<ValidationErrorEvent>>(
        events::VALIDATION_ERROR,
        move |errors| {
            match errors.into_iter().find(|e| e.field_id == event_field_id) {
                Some(e) => set_error.set(Some(e.error)),
                None => set_error.set(None),
            }
        },
    );
    let ok_subscription = events::subscribe(events::VALIDATION_OK, move |_| set_error.set(None));
    // JS handles are not Send; the cleanup runs on this same thread.
    let subscriptions = SendWrapper::new((error_subscription, ok_subscription));
    on_cleanup(move || drop(subscriptions));

    let update_field_id = field.id.clone();
    Effect::new(move |prev: Option<()>| {
        let current = value.get();
        // The first run only registers the dependency; the mount value
        // came from the backend and pushing it back would re-trigger
        // `tabs_updated` in a loop.
        if prev.is_none() {
            return;
        }
        let id = update_field_id.clone();
        generation.update_value(|g| *g += 1);
        let my_generation = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() != my_generation {
                return;
            }
            match commands::update_field(&id, Some(&current)).await {
                Ok(()) => {
                    set_error.set(None);
                    if let Some(quick_calc) = do_quick_calc {
                        quick_calc.run(());
                    }
                }
                Err(e) => match e.validation_message() {
                    Some(message) => set_error.set(Some(message.to_string())),
                    None => {
                        web_sys::console::error_1(&format!("update_field failed: {e}").into());
                    }
                },
            }
        });
    });

    let input_class = move || {
        let ring = if error.get().is_some() {
            "ring-red-300"
        } else {
            "ring-gray-300"
        };
        format!(
            "block w-full rounded-md border-0 py-1.5 px-3 text-gray-900 shadow-sm \
             ring-1 ring-inset placeholder:text-gray-400 focus:ring-2 focus:ring-inset \
             focus:ring-indigo-600 sm:text-sm sm:leading-6 {ring}"
        )
    };

    view! {
        <div class="w-full">
            <label class="block text-sm font-medium leading-6 text-gray-900">
                {field.name.clone()} ", " <InlineMath tex=field.id.clone() />
                {field.units.clone().map(|units| view! {
                    " " <InlineMath tex=format!("({units})") />
                })}
            </label>
            <div class="mt-2">
                <input
                    type="text"
                    class=input_class
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
            </div>
            {move || error.get().map(|message| view! {
                <p class="mt-1 ml-1 text-sm text-red-600">{message}</p>
            })}
        </div>
    }
}
