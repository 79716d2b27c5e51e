//! User Agreement Dialog
//!
//! Blocking modal shown until the backend confirms the current license
//! version has been accepted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::agreement::{requires_agreement, use_user_agreement};
use crate::commands;
use crate::components::{Dialog, Success};

const LICENSE_URL: &str = "https://github.com/fire-library/openfire/blob/main/LICENSE.txt";

#[component]
pub fn UserAgreement() -> impl IntoView {
    let session = use_user_agreement();
    let open = Signal::derive(move || requires_agreement(session.agreed.get()));

    view! {
        <Dialog title="End User Agreement" open=open>
            <div class="max-w-3xl flex flex-col gap-4 overflow-y-scroll">
                <div class="max-w-xl">
                    "By using this software (OpenFire), you agree to the terms and conditions "
                    "defined under the "
                    <a
                        href="#"
                        class="text-blue-600"
                        on:click=move |_| {
                            spawn_local(async {
                                if let Err(e) = commands::open_url(LICENSE_URL).await {
                                    web_sys::console::error_1(
                                        &format!("open_url failed: {e}").into(),
                                    );
                                }
                            });
                        }
                    >
                        "MIT License"
                    </a>
                    ". This agreement governs your use of the software and outlines your "
                    "rights and responsibilities."
                </div>
                <h2 class="text-base font-semibold leading-6 text-gray-900">"License Terms"</h2>
                <ol class="list-decimal list-inside text-sm flex flex-col gap-2">
                    <li>
                        "Permission is granted: you are free to use, copy, modify, merge, "
                        "publish, distribute, sublicense, and/or sell copies of this software, "
                        "subject to the conditions below."
                    </li>
                    <li>
                        "Condition of use: a copy of the original MIT License text must be "
                        "included in all copies or substantial portions of the software."
                    </li>
                    <li>
                        "Disclaimer of warranty: the software is provided \"as is\", without "
                        "warranty of any kind, express or implied."
                    </li>
                    <li>
                        "Limitation of liability: in no event shall the authors or copyright "
                        "holders be liable for any claim, damages, or other liability arising "
                        "from the software or its use."
                    </li>
                </ol>
                <h2 class="text-base font-semibold leading-6 text-gray-900">
                    "Analytics and Usage Data"
                </h2>
                <p class="text-sm">
                    "To improve OpenFire we may collect non-personal usage data. You can opt "
                    "out of data collection at any time within the software; this choice does "
                    "not affect your access to any functionality."
                </p>
            </div>
            <div class="text-center mt-5">
                <Success on_click=move |_| session.agree()>"I Agree"</Success>
            </div>
        </Dialog>
    }
}
