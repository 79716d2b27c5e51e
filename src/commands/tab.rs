//! Tab Command Wrappers
//!
//! Session tab management: the backend owns the tab list; these calls
//! mutate it and the backend answers with a `tabs_updated` event.

use serde::Serialize;

use super::{run, run_with, CommandError};
use crate::models::{MethodType, Tab, TabState};

#[derive(Serialize)]
struct NewTabArgs {
    #[serde(rename = "newTabState")]
    new_tab_state: Option<TabState>,
    after: Option<u32>,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct IndexArgs {
    index: u32,
}

#[derive(Serialize)]
struct UpdateTabArgs<'a> {
    id: &'a str,
    #[serde(rename = "newTabState")]
    new_tab_state: &'a TabState,
}

#[derive(Serialize)]
struct MethodTypeArgs {
    #[serde(rename = "methodType")]
    method_type: MethodType,
}

pub async fn get_tabs() -> Result<Vec<Tab>, CommandError> {
    run("get_tabs").await
}

pub async fn get_current_tab() -> Result<Tab, CommandError> {
    run("get_current_tab").await
}

pub async fn set_current_tab(id: &str) -> Result<(), CommandError> {
    run_with("set_current_tab", &IdArgs { id }).await
}

pub async fn new_tab(state: Option<TabState>, after: Option<u32>) -> Result<(), CommandError> {
    run_with(
        "new_tab",
        &NewTabArgs {
            new_tab_state: state,
            after,
        },
    )
    .await
}

pub async fn delete_tab(index: u32) -> Result<(), CommandError> {
    run_with("delete_tab", &IndexArgs { index }).await
}

pub async fn update_tab(id: &str, state: &TabState) -> Result<(), CommandError> {
    run_with(
        "update_tab",
        &UpdateTabArgs {
            id,
            new_tab_state: state,
        },
    )
    .await
}

/// Replaces the current tab's state with a fresh instance of the method.
pub async fn set_current_tab_method(method_type: MethodType) -> Result<(), CommandError> {
    run_with("set_current_tab_method", &MethodTypeArgs { method_type }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoCalc;

    #[test]
    fn new_tab_args_use_camel_case_keys() {
        let args = NewTabArgs {
            new_tab_state: Some(TabState::Index(NoCalc { id: "Index".into() })),
            after: Some(2),
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["newTabState"]["type"], "Index");
        assert_eq!(json["after"], 2);
    }

    #[test]
    fn update_tab_args_use_camel_case_keys() {
        let state = TabState::Index(NoCalc { id: "Index".into() });
        let args = UpdateTabArgs {
            id: "t1",
            new_tab_state: &state,
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["id"], "t1");
        assert_eq!(json["newTabState"]["type"], "Index");
    }

    #[test]
    fn method_type_serializes_as_bare_variant() {
        let args = MethodTypeArgs {
            method_type: MethodType::BR187Chapter1Equation1,
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["methodType"], "BR187Chapter1Equation1");
    }
}
