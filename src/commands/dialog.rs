//! Native Dialog Wrappers
//!
//! File pickers through the shell's dialog plugin, invoked by its
//! `plugin:dialog|<cmd>` command names. Both dialogs filter to the YAML
//! documents the backend saves.

use serde::Serialize;

use super::{run_with, CommandError};

#[derive(Serialize)]
struct DialogArgs {
    options: DialogOptions,
}

#[derive(Serialize)]
struct DialogOptions {
    filters: Vec<DialogFilter>,
}

#[derive(Serialize)]
struct DialogFilter {
    name: &'static str,
    extensions: Vec<&'static str>,
}

fn yaml_options() -> DialogArgs {
    DialogArgs {
        options: DialogOptions {
            filters: vec![DialogFilter {
                name: "yaml",
                extensions: vec!["yaml"],
            }],
        },
    }
}

/// Ask the user where to save a calculation. `None` when dismissed.
pub async fn save_dialog() -> Result<Option<String>, CommandError> {
    run_with("plugin:dialog|save", &yaml_options()).await
}

/// Ask the user for a calculation file to open. `None` when dismissed.
pub async fn open_dialog() -> Result<Option<String>, CommandError> {
    run_with("plugin:dialog|open", &yaml_options()).await
}
