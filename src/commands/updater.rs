//! Updater Command Wrappers
//!
//! Self-update bridge. `check_for_update` queries the release channel;
//! `install_update` downloads and stages the pending update, streaming
//! `Started` / `Progress` / `Finished` payloads on the `update-progress`
//! event channel. `relaunch` replaces the process and does not return in
//! practice.

use super::{run, CommandError};
use crate::models::UpdateInfo;

pub async fn check_for_update() -> Result<Option<UpdateInfo>, CommandError> {
    run("check_for_update").await
}

pub async fn install_update() -> Result<(), CommandError> {
    run("install_update").await
}

pub async fn relaunch() -> Result<(), CommandError> {
    run("plugin:process|restart").await
}
