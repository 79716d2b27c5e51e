//! Settings Command Wrappers
//!
//! License agreement state, version reporting, and per-version update
//! skip flags, all persisted by the backend.

use serde::Serialize;

use super::{run, run_with, CommandError};

#[derive(Serialize)]
struct VersionArgs<'a> {
    version: &'a str,
}

#[derive(Serialize)]
struct AutoUpdateArgs {
    enabled: bool,
}

/// Whether the user has accepted the latest license version.
pub async fn has_agreed_to_latest_license() -> Result<bool, CommandError> {
    run("has_agreed_to_latest_license").await
}

/// Record acceptance of the latest license version.
pub async fn agree_to_license() -> Result<(), CommandError> {
    run("agree_to_license").await
}

/// The running application version, as the backend reports it.
pub async fn openfire_version() -> Result<String, CommandError> {
    run("openfire_version").await
}

/// Whether the "Update Available" prompt is suppressed for this version.
pub async fn get_update_skipped(version: &str) -> Result<bool, CommandError> {
    run_with("get_update_skipped", &VersionArgs { version }).await
}

/// Suppress the "Update Available" prompt for this version only.
pub async fn set_update_skipped(version: &str) -> Result<(), CommandError> {
    run_with("set_update_skipped", &VersionArgs { version }).await
}

pub async fn get_auto_update() -> Result<bool, CommandError> {
    run("get_auto_update").await
}

pub async fn set_auto_update(enabled: bool) -> Result<(), CommandError> {
    run_with("set_auto_update", &AutoUpdateArgs { enabled }).await
}
