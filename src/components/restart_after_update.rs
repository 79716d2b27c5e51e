//! Restart Dialog
//!
//! Shown once an update has been staged: the new version only takes
//! effect after a relaunch, which the user may defer.

use leptos::prelude::*;

use crate::components::{Cancel, Dialog, Success};
use crate::update::{use_update_session, UpdatePhase};

#[component]
pub fn RestartAfterUpdate() -> impl IntoView {
    let session = use_update_session();
    let (deferred, set_deferred) = signal(false);

    let open = Signal::derive(move || {
        session.phase.get() == UpdatePhase::AwaitingRestart && !deferred.get()
    });

    view! {
        <Dialog title="Restart Required" open=open>
            <div class="max-w-md flex flex-col gap-4">
                <div class="max-w-xl">
                    "OpenFire has been updated. To apply the changes, you need to "
                    "restart the application."
                </div>
            </div>
            <div class="text-center mt-5">
                <Success on_click=move |_| session.relaunch()>"Restart now"</Success>
                <Cancel on_click=move |_| set_deferred.set(true)>"Restart later"</Cancel>
            </div>
        </Dialog>
    }
}
