//! Session Tab Bar Component
//!
//! Strip of open calculation tabs. Clicking a tab makes it current;
//! the x button deletes by index; unsaved tabs carry a `*` marker.
//! Rows are keyed by tab id and reused across list updates, so
//! everything positional (the delete index, the current highlight, the
//! unsaved marker) is looked up from the store at read time rather than
//! captured when the row is created.

use leptos::prelude::*;

use crate::models::Tab;
use crate::store::{self, use_session_store, SessionStateStoreFields};

/// Position of `id` in the current list. Deletions shift the survivors,
/// so this is resolved at click time, never cached.
fn tab_index(tabs: &[Tab], id: &str) -> Option<u32> {
    tabs.iter().position(|tab| tab.id == id).map(|i| i as u32)
}

fn tab_label(tab: &Tab) -> String {
    let title = tab.title.clone().unwrap_or_else(|| "Untitled".to_string());
    if tab.saved {
        title
    } else {
        format!("*{title}")
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let session = use_session_store();
    let rows = move || session.tabs().get();

    view! {
        <nav class="isolate flex divide-gray-200 shadow bg-gray-50" aria-label="Tabs">
            <For
                each=rows
                key=|tab| tab.id.clone()
                children=move |tab| {
                    let id = tab.id.clone();
                    let lookup = {
                        let id = id.clone();
                        Memo::new(move |_| {
                            session.tabs().get().into_iter().find(|tab| tab.id == id)
                        })
                    };
                    let current = move || lookup.get().map(|tab| tab.current).unwrap_or(false);
                    let label = move || {
                        lookup.get().map(|tab| tab_label(&tab)).unwrap_or_default()
                    };
                    let tab_class = move || if current() {
                        "group flex flex-col min-w-32 text-xs font-medium h-9 cursor-pointer select-none text-gray-900 bg-indigo-50"
                    } else {
                        "group flex flex-col min-w-32 text-xs font-medium h-9 cursor-pointer select-none text-gray-500 hover:text-gray-700 hover:bg-gray-100 bg-white"
                    };
                    let underline_class = move || if current() {
                        "h-0.5 w-full bg-indigo-500"
                    } else {
                        "h-0.5 w-full bg-transparent"
                    };
                    let select_id = id.clone();
                    let delete_id = id.clone();

                    view! {
                        <span
                            class=tab_class
                            role="tab"
                            on:click=move |_| store::set_current_tab(select_id.clone())
                        >
                            <div class="flex w-full justify-center items-center h-full px-1">
                                <span class="truncate px-2 w-full flex justify-center">
                                    {label}
                                </span>
                                <button
                                    class="h-5 w-5 hover:bg-gray-200"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        let tabs = session.tabs().get_untracked();
                                        if let Some(index) = tab_index(&tabs, &delete_id) {
                                            store::delete_tab(index);
                                        }
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                            <span aria-hidden="true" class=underline_class></span>
                        </span>
                    }
                }
            />
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoCalc, TabState};

    fn tab(id: &str, saved: bool) -> Tab {
        Tab {
            id: id.into(),
            state: TabState::Index(NoCalc { id: "Index".into() }),
            saved,
            current: false,
            filename: None,
            title: Some(id.to_uppercase()),
        }
    }

    #[test]
    fn index_tracks_the_list_after_deletions() {
        let mut tabs = vec![tab("a", true), tab("b", true), tab("c", true)];
        assert_eq!(tab_index(&tabs, "b"), Some(1));

        // Deleting "a" shifts the survivors; a cached index for "b"
        // would now point at "c".
        tabs.remove(0);
        assert_eq!(tab_index(&tabs, "b"), Some(0));
        assert_eq!(tab_index(&tabs, "c"), Some(1));
        assert_eq!(tab_index(&tabs, "a"), None);
    }

    #[test]
    fn unsaved_tabs_are_starred() {
        assert_eq!(tab_label(&tab("a", true)), "A");
        assert_eq!(tab_label(&tab("a", false)), "*A");
    }
}
