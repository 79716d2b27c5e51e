//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain. Every
//! command resolves to the backend's `Ok` payload or rejects with its
//! `Err` payload; the `catch` binding turns the rejection into a typed
//! [`CommandError`] instead of an unhandled promise rejection.

mod dialog;
mod document;
mod filesystem;
mod form;
mod settings;
mod shell;
mod tab;
mod updater;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    pub(crate) async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Failure of a bridge call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// The backend rejected the call with an error message.
    #[error("{0}")]
    Backend(String),
    /// The backend rejected a field update with a validation error.
    #[error("{message}")]
    Validation { message: String },
    /// The payload could not be (de)serialized across the bridge.
    #[error("codec error: {0}")]
    Codec(String),
}

impl CommandError {
    /// Maps a rejected invoke into an error. `update_field` rejections
    /// carry a structured `{"ValidationError": {"message": ...}}` payload;
    /// everything else rejects with a plain string.
    pub(crate) fn from_rejection(value: JsValue) -> Self {
        #[derive(serde::Deserialize)]
        enum BackendError {
            ValidationError { message: String },
        }

        if let Ok(BackendError::ValidationError { message }) =
            serde_wasm_bindgen::from_value(value.clone())
        {
            return CommandError::Validation { message };
        }

        CommandError::Backend(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }

    pub fn validation_message(&self) -> Option<&str> {
        match self {
            CommandError::Validation { message } => Some(message),
            _ => None,
        }
    }
}

impl From<serde_wasm_bindgen::Error> for CommandError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        CommandError::Codec(e.to_string())
    }
}

/// Invoke a command that takes no arguments.
pub(crate) async fn run<T: DeserializeOwned>(cmd: &str) -> Result<T, CommandError> {
    let result = invoke(cmd, JsValue::NULL)
        .await
        .map_err(CommandError::from_rejection)?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

/// Invoke a command with a serializable args struct.
pub(crate) async fn run_with<A: serde::Serialize, T: DeserializeOwned>(
    cmd: &str,
    args: &A,
) -> Result<T, CommandError> {
    let js_args = serde_wasm_bindgen::to_value(args)?;
    let result = invoke(cmd, js_args)
        .await
        .map_err(CommandError::from_rejection)?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

// Re-export all public items
pub use dialog::*;
pub use document::*;
pub use filesystem::*;
pub use form::*;
pub use settings::*;
pub use shell::*;
pub use tab::*;
pub use updater::*;
