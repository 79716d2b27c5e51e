//! Modal Dialog Component

use leptos::prelude::*;

/// Centered modal over a dimmed backdrop. The caller controls `open`;
/// the dialog renders nothing while it is false.
#[component]
pub fn Dialog(
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="relative z-50">
                <div class="fixed inset-0 bg-gray-500 bg-opacity-75"></div>
                <div class="fixed inset-0 z-50 overflow-y-auto">
                    <div class="flex min-h-full items-center justify-center p-4">
                        <div class="relative rounded-lg bg-white px-6 py-5 shadow-xl">
                            <h2 class="text-lg font-semibold leading-6 text-gray-900 mb-4">
                                {title.clone()}
                            </h2>
                            {children()}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
