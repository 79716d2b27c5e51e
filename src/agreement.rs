//! User Agreement Gate
//!
//! Tracks whether the current license version has been accepted. The
//! state is tri-valued: `None` until the backend answers, then
//! `Some(false)` / `Some(true)`. The blocking dialog renders until the
//! state is `Some(true)`; the gate is advisory for sibling components.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;

#[derive(Clone, Copy)]
pub struct UserAgreement {
    pub agreed: RwSignal<Option<bool>>,
}

/// The gate blocks until acceptance is positively confirmed: both the
/// unresolved state and a recorded refusal keep the dialog up.
pub fn requires_agreement(agreed: Option<bool>) -> bool {
    agreed != Some(true)
}

pub fn provide_user_agreement() {
    let session = UserAgreement {
        agreed: RwSignal::new(None),
    };
    provide_context(session);

    spawn_local(async move {
        match commands::has_agreed_to_latest_license().await {
            Ok(agreed) => session.agreed.set(Some(agreed)),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("has_agreed_to_latest_license failed: {e}").into(),
                );
            }
        }
    });
}

pub fn use_user_agreement() -> UserAgreement {
    expect_context::<UserAgreement>()
}

impl UserAgreement {
    /// Record acceptance. Flips to agreed only after the backend
    /// confirms it persisted the acceptance.
    pub fn agree(self) {
        spawn_local(async move {
            match commands::agree_to_license().await {
                Ok(()) => self.agreed.set(Some(true)),
                Err(e) => {
                    web_sys::console::error_1(&format!("agree_to_license failed: {e}").into());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_blocks_until_confirmed() {
        assert!(requires_agreement(None));
        assert!(requires_agreement(Some(false)));
        assert!(!requires_agreement(Some(true)));
    }
}
