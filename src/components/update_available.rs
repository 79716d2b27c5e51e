//! Update Available Dialog
//!
//! Prompts when a newer version exists, unless the user skipped that
//! version. Also shows download progress while an install runs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{Cancel, Dialog, ProgressBar, Success};
use crate::update::{use_update_session, UpdatePhase};

/// Prompt only for a pending update whose skip flag is known and unset.
/// While the flag is still being fetched (`None`) the prompt stays
/// hidden, so a skipped version never flashes.
fn should_prompt(phase: UpdatePhase, skipped: Option<bool>) -> bool {
    phase == UpdatePhase::Available && skipped == Some(false)
}

#[component]
pub fn UpdateAvailable() -> impl IntoView {
    let session = use_update_session();
    // None until the skip flag for the offered version is known.
    let (skipped, set_skipped) = signal::<Option<bool>>(None);
    let (auto_update, set_auto_update) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_auto_update().await {
                Ok(enabled) => set_auto_update.set(enabled),
                Err(e) => {
                    web_sys::console::error_1(&format!("get_auto_update failed: {e}").into());
                }
            }
        });
    });

    Effect::new(move |_| match session.update.get() {
        Some(update) => {
            spawn_local(async move {
                match commands::get_update_skipped(&update.version).await {
                    Ok(s) => set_skipped.set(Some(s)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("get_update_skipped failed: {e}").into(),
                        );
                    }
                }
            });
        }
        None => set_skipped.set(None),
    });

    let prompt_open =
        Signal::derive(move || should_prompt(session.phase.get(), skipped.get()));
    let installing = Signal::derive(move || session.phase.get() == UpdatePhase::Installing);
    let version = move || {
        session
            .update
            .get()
            .map(|u| u.version)
            .unwrap_or_default()
    };

    let skip_version = move |_| {
        if let Some(update) = session.update.get_untracked() {
            spawn_local(async move {
                if let Err(e) = commands::set_update_skipped(&update.version).await {
                    web_sys::console::error_1(&format!("set_update_skipped failed: {e}").into());
                }
            });
        }
        set_skipped.set(Some(true));
    };

    view! {
        <Dialog title="Update Available" open=prompt_open>
            <div class="max-w-md flex flex-col gap-4">
                <div class="max-w-xl">
                    "A new version of OpenFire (v" {version} ") is available. "
                    "Would you like to update now?"
                </div>
                <label class="flex items-center gap-2 text-sm text-gray-600">
                    <input
                        type="checkbox"
                        prop:checked=move || auto_update.get()
                        on:change=move |ev| {
                            let enabled = event_target_checked(&ev);
                            set_auto_update.set(enabled);
                            spawn_local(async move {
                                if let Err(e) = commands::set_auto_update(enabled).await {
                                    web_sys::console::error_1(
                                        &format!("set_auto_update failed: {e}").into(),
                                    );
                                }
                            });
                        }
                    />
                    "Install future updates automatically"
                </label>
            </div>
            <div class="text-center mt-5">
                <Success on_click=move |_| session.do_update()>"Update now"</Success>
                <Cancel on_click=skip_version>"Skip version"</Cancel>
            </div>
        </Dialog>

        <Dialog title="Downloading Update" open=installing>
            <div class="max-w-md flex flex-col gap-4">
                <ProgressBar percent=session.progress />
            </div>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_only_when_available_and_not_skipped() {
        assert!(should_prompt(UpdatePhase::Available, Some(false)));
        assert!(!should_prompt(UpdatePhase::Available, Some(true)));
        assert!(!should_prompt(UpdatePhase::Installing, Some(false)));
        assert!(!should_prompt(UpdatePhase::Idle, Some(false)));
    }

    #[test]
    fn unresolved_skip_flag_suppresses_the_prompt() {
        assert!(!should_prompt(UpdatePhase::Available, None));
    }
}
