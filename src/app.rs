//! Application Shell
//!
//! Provides the session, update, and agreement contexts, renders the
//! chrome (navbar, action rail, tab strip, modal gates), and switches
//! the main pane on the current tab's state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::agreement::provide_user_agreement;
use crate::commands;
use crate::components::{RestartAfterUpdate, TabBar, UpdateAvailable, UserAgreement};
use crate::models::{Tab, TabState};
use crate::pages::index::IndexPage;
use crate::pages::method::MethodPage;
use crate::store::{self, use_session_store, SessionStateStoreFields};
use crate::update::{provide_update_session, use_update_session};

/// What the content area shows. Keyed by tab id for method tabs so a
/// store refetch with fresh field values compares equal and updates the
/// mounted page in place instead of rebuilding it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pane {
    Loading,
    Index,
    Method(String),
}

fn pane_for(tab: Option<&Tab>) -> Pane {
    match tab {
        None => Pane::Loading,
        Some(tab) => match &tab.state {
            TabState::Index(_) => Pane::Index,
            TabState::Method(_) => Pane::Method(tab.id.clone()),
        },
    }
}

/// Save the current tab. Tabs that already have a file go straight to
/// disk; fresh tabs go through the save dialog first. Cancelling the
/// dialog aborts silently.
fn save_current_tab(filename: Option<String>) {
    spawn_local(async move {
        let path = match filename {
            Some(path) => Some(path),
            None => match commands::save_dialog().await {
                Ok(path) => path,
                Err(e) => {
                    web_sys::console::error_1(&format!("save dialog failed: {e}").into());
                    return;
                }
            },
        };
        let Some(path) = path else { return };
        if let Err(e) = commands::save(&path).await {
            web_sys::console::error_1(&format!("save failed: {e}").into());
        }
    });
}

/// Pick a saved calculation and open it in a new tab.
fn open_saved_tab() {
    spawn_local(async move {
        let path = match commands::open_dialog().await {
            Ok(Some(path)) => path,
            Ok(None) => return,
            Err(e) => {
                web_sys::console::error_1(&format!("open dialog failed: {e}").into());
                return;
            }
        };
        if let Err(e) = commands::open(&path).await {
            web_sys::console::error_1(&format!("open failed: {e}").into());
        }
    });
}

#[component]
fn RailButton(
    #[prop(into)] label: String,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class="flex flex-col items-center gap-1 text-gray-500 hover:text-gray-900 hover:bg-gray-100 rounded-md p-2 text-xs"
            title=label
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

#[component]
pub fn App() -> impl IntoView {
    store::provide_session_store();
    provide_update_session();
    provide_user_agreement();

    let session = use_session_store();
    let updates = use_update_session();

    let (version, set_version) = signal(String::new());
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::openfire_version().await {
                Ok(v) => set_version.set(v),
                Err(e) => {
                    web_sys::console::error_1(&format!("openfire_version failed: {e}").into());
                }
            }
        });
    });

    // One check per launch; the prompt component decides whether the
    // user ever sees it.
    Effect::new(move |_| updates.check_for_update());

    let pane = Memo::new(move |_| pane_for(session.current_tab().get().as_ref()));
    let current_filename = move || session.current_tab().get().and_then(|tab| tab.filename);

    view! {
        <UserAgreement />
        <RestartAfterUpdate />
        <UpdateAvailable />
        <div class="flex flex-col h-screen">
            <header class="flex items-center justify-between bg-gray-900 px-4 py-2">
                <h1 class="text-lg font-semibold text-white">"OpenFire"</h1>
                <span class="text-xs text-gray-400">{move || version.get()}</span>
            </header>
            <div class="flex flex-1 min-h-0">
                <aside class="flex flex-col items-center gap-2 border-r border-gray-200 bg-gray-50 p-2">
                    <RailButton
                        label="New Tab"
                        on_click=Callback::new(move |_| store::new_tab(None, None))
                    >
                        "+"
                    </RailButton>
                    <RailButton
                        label="Open"
                        on_click=Callback::new(move |_| open_saved_tab())
                    >
                        "Open"
                    </RailButton>
                    <RailButton
                        label="Save"
                        on_click=Callback::new(move |_| save_current_tab(current_filename()))
                    >
                        "Save"
                    </RailButton>
                </aside>
                <div class="flex flex-col flex-1 min-w-0">
                    <TabBar />
                    <main class="flex-1 overflow-y-auto">
                        {move || match pane.get() {
                            Pane::Loading => view! {
                                <p class="p-8 text-sm text-gray-500">"Loading..."</p>
                            }
                            .into_any(),
                            Pane::Index => view! { <IndexPage /> }.into_any(),
                            Pane::Method(_) => view! { <MethodPage /> }.into_any(),
                        }}
                    </main>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Calculation, Document, Form, Method, MethodType};

    fn method_tab(id: &str, stale: bool) -> Tab {
        Tab {
            id: id.into(),
            state: TabState::Method(Method {
                name: "Ventilation Factor".into(),
                description: None,
                reference: Document::BR187(None),
                method_type: MethodType::BR187Chapter1Equation1,
                quick_calc_compatible: true,
                calc_sheet: Calculation {
                    steps: vec![],
                    stale,
                },
                form: Form { steps: vec![] },
            }),
            saved: false,
            current: true,
            filename: None,
            title: None,
        }
    }

    #[test]
    fn refetched_method_tab_keeps_the_same_pane() {
        // A refetch after a field edit carries new values but the same
        // tab id; the pane key must compare equal so the page is not
        // rebuilt mid-edit.
        let before = method_tab("t1", true);
        let after = method_tab("t1", false);
        assert_eq!(pane_for(Some(&before)), pane_for(Some(&after)));
    }

    #[test]
    fn pane_changes_with_the_current_tab() {
        assert_eq!(pane_for(None), Pane::Loading);
        assert_ne!(
            pane_for(Some(&method_tab("t1", false))),
            pane_for(Some(&method_tab("t2", false)))
        );
    }
}
