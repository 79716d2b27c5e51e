//! Filesystem Command Wrappers
//!
//! Save and load calculation documents (YAML, schema owned by the
//! backend). Paths come from the native dialogs in `dialog.rs`.

use serde::Serialize;

use super::{run_with, CommandError};

#[derive(Serialize)]
struct FilenameArgs<'a> {
    filename: &'a str,
}

/// Serialize the current tab's calculation to `filename`.
pub async fn save(filename: &str) -> Result<(), CommandError> {
    run_with("save", &FilenameArgs { filename }).await
}

/// Load a saved calculation into a tab. The backend reuses an existing
/// tab when the file is already open.
pub async fn open(filename: &str) -> Result<(), CommandError> {
    run_with("open", &FilenameArgs { filename }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_args_use_the_filename_key() {
        let json = serde_json::to_value(&FilenameArgs {
            filename: "calc.yaml",
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "filename": "calc.yaml" }));
    }
}
