//! Shell Wrappers
//!
//! Opens external URLs in the system browser via the shell plugin.

use serde::Serialize;

use super::{run_with, CommandError};

#[derive(Serialize)]
struct OpenArgs<'a> {
    path: &'a str,
}

pub async fn open_url(url: &str) -> Result<(), CommandError> {
    run_with("plugin:shell|open", &OpenArgs { path: url }).await
}
