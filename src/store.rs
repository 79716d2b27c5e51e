//! Tab Session Store
//!
//! Client-side cache of the backend's authoritative tab list and
//! current-tab pointer, with field-level reactivity via reactive_stores.
//! The cache is read-through only: mutators pass straight to the bridge
//! and local state changes exclusively through a full refetch, either on
//! mount or when the backend broadcasts `tabs_updated`. Last fetch wins;
//! there is no client-side merge.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use send_wrapper::SendWrapper;

use crate::commands;
use crate::events;
use crate::models::{MethodType, Tab, TabState};

#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Every open tab, in backend order.
    pub tabs: Vec<Tab>,
    /// The backend's current-tab pointer; `None` until the first fetch.
    pub current_tab: Option<Tab>,
}

pub type SessionStore = Store<SessionState>;

/// Get the session store from context.
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Create the store, run the initial fetch, and keep it in sync with
/// `tabs_updated` for as long as the calling component is mounted.
pub fn provide_session_store() {
    let store = SessionStore::new(SessionState::default());
    provide_context(store);

    spawn_local(async move { refetch(store).await });

    let subscription = events::subscribe(events::TABS_UPDATED, move |_| {
        spawn_local(async move { refetch(store).await });
    });
    // The subscription holds JS handles (not Send); on_cleanup requires
    // Send + Sync, and the cleanup runs on this same thread.
    let subscription = SendWrapper::new(subscription);
    on_cleanup(move || drop(subscription));
}

/// Whole-list replacement; nothing from the previous fetch survives.
fn replace_tabs(cache: &mut Vec<Tab>, fresh: Vec<Tab>) {
    *cache = fresh;
}

/// Replace the whole cache with what the backend reports right now.
async fn refetch(store: SessionStore) {
    match commands::get_tabs().await {
        Ok(tabs) => replace_tabs(&mut store.tabs().write(), tabs),
        Err(e) => log_bridge_error("get_tabs", &e),
    }
    match commands::get_current_tab().await {
        Ok(tab) => *store.current_tab().write() = Some(tab),
        Err(e) => log_bridge_error("get_current_tab", &e),
    }
}

// ========================
// Pass-through mutators
// ========================
//
// None of these touch the store directly: the backend emits
// `tabs_updated` after every successful mutation and the refetch above
// applies it. Failures are logged with the command named; they are not
// surfaced to the user at this layer.

pub fn set_current_tab(id: String) {
    spawn_local(async move {
        if let Err(e) = commands::set_current_tab(&id).await {
            log_bridge_error("set_current_tab", &e);
        }
    });
}

pub fn new_tab(state: Option<TabState>, after: Option<u32>) {
    spawn_local(async move {
        if let Err(e) = commands::new_tab(state, after).await {
            log_bridge_error("new_tab", &e);
        }
    });
}

pub fn delete_tab(index: u32) {
    spawn_local(async move {
        if let Err(e) = commands::delete_tab(index).await {
            log_bridge_error("delete_tab", &e);
        }
    });
}

pub fn update_tab(id: String, state: TabState) {
    spawn_local(async move {
        if let Err(e) = commands::update_tab(&id, &state).await {
            log_bridge_error("update_tab", &e);
        }
    });
}

pub fn set_current_tab_method(method_type: MethodType) {
    spawn_local(async move {
        if let Err(e) = commands::set_current_tab_method(method_type).await {
            log_bridge_error("set_current_tab_method", &e);
        }
    });
}

fn log_bridge_error(command: &str, error: &commands::CommandError) {
    web_sys::console::error_1(&format!("{command} failed: {error}").into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoCalc;

    fn tab(id: &str) -> Tab {
        Tab {
            id: id.into(),
            state: TabState::Index(NoCalc { id: "Index".into() }),
            saved: true,
            current: false,
            filename: None,
            title: None,
        }
    }

    #[test]
    fn refetch_replaces_the_whole_tab_list() {
        let mut cache = vec![tab("a"), tab("b"), tab("c")];
        replace_tabs(&mut cache, vec![tab("b")]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache[0].id, "b");
    }

    #[test]
    fn refetch_does_not_merge_into_an_empty_result() {
        let mut cache = vec![tab("a")];
        replace_tabs(&mut cache, vec![]);
        assert!(cache.is_empty());
    }
}
