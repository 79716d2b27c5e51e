//! Update Lifecycle Controller
//!
//! Drives the check -> download/install -> restart flow against the
//! shell's update channel. Download progress arrives on the
//! `update-progress` event stream and is coalesced through
//! [`ProgressThrottle`] so observers re-render at most once per
//! 5-percentage-point advance.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::events;
use crate::models::{DownloadEvent, UpdateInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    Idle,
    Checking,
    /// An update exists; `UpdateSession::update` holds its metadata.
    Available,
    Installing,
    /// Installed and staged; takes effect on relaunch.
    AwaitingRestart,
}

/// Coalesces download progress. `advance` only yields a percentage when
/// it has moved more than five points past the last one yielded.
#[derive(Debug, Default)]
pub struct ProgressThrottle {
    content_length: u64,
    downloaded: u64,
    reported: f64,
}

impl ProgressThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, content_length: u64) {
        self.content_length = content_length;
        self.downloaded = 0;
        self.reported = 0.0;
    }

    /// Account for a downloaded chunk. With an unknown content length no
    /// intermediate progress can be computed and nothing is yielded.
    pub fn advance(&mut self, chunk_length: u64) -> Option<f64> {
        self.downloaded += chunk_length;
        if self.content_length == 0 {
            return None;
        }
        let percent = self.downloaded as f64 / self.content_length as f64 * 100.0;
        if percent - self.reported > 5.0 {
            self.reported = percent;
            Some(percent)
        } else {
            None
        }
    }
}

/// Process-wide update state, provided via context at application start.
#[derive(Clone, Copy)]
pub struct UpdateSession {
    pub phase: RwSignal<UpdatePhase>,
    /// Download progress in percent, meaningful while `Installing`.
    pub progress: RwSignal<f64>,
    pub update: RwSignal<Option<UpdateInfo>>,
}

pub fn provide_update_session() {
    provide_context(UpdateSession {
        phase: RwSignal::new(UpdatePhase::Idle),
        progress: RwSignal::new(0.0),
        update: RwSignal::new(None),
    });
}

pub fn use_update_session() -> UpdateSession {
    expect_context::<UpdateSession>()
}

impl UpdateSession {
    /// Query the update channel. Moves to `Available` when an update
    /// exists, otherwise back to `Idle`.
    pub fn check_for_update(self) {
        self.phase.set(UpdatePhase::Checking);
        spawn_local(async move {
            match commands::check_for_update().await {
                Ok(Some(info)) if info.available => {
                    self.update.set(Some(info));
                    self.phase.set(UpdatePhase::Available);
                    // With auto-update on, skip the prompt entirely.
                    match commands::get_auto_update().await {
                        Ok(true) => self.do_update(),
                        Ok(false) => {}
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("get_auto_update failed: {e}").into(),
                            );
                        }
                    }
                }
                Ok(_) => self.phase.set(UpdatePhase::Idle),
                Err(e) => {
                    web_sys::console::error_1(&format!("update check failed: {e}").into());
                    self.phase.set(UpdatePhase::Idle);
                }
            }
        });
    }

    /// Download and stage the pending update, reporting throttled
    /// progress. On failure the phase returns to `Idle` so a later check
    /// can retry.
    pub fn do_update(self) {
        if self.update.get_untracked().is_none() {
            return;
        }
        self.phase.set(UpdatePhase::Installing);
        self.progress.set(0.0);

        let throttle = Rc::new(RefCell::new(ProgressThrottle::new()));
        spawn_local(async move {
            let progress_throttle = throttle.clone();
            let subscription =
                events::subscribe_to::<DownloadEvent>(events::UPDATE_PROGRESS, move |event| {
                    match event {
                        DownloadEvent::Started { content_length } => {
                            progress_throttle
                                .borrow_mut()
                                .start(content_length.unwrap_or(0));
                            self.progress.set(0.0);
                        }
                        DownloadEvent::Progress { chunk_length } => {
                            if let Some(percent) =
                                progress_throttle.borrow_mut().advance(chunk_length)
                            {
                                self.progress.set(percent);
                            }
                        }
                        DownloadEvent::Finished => self.finish_install(),
                    }
                });

            // The subscription is dropped when the invoke resolves, so a
            // `Finished` event delivered after resolution would be lost:
            // the Ok branch completes the transition itself.
            match commands::install_update().await {
                Ok(()) => self.finish_install(),
                Err(e) => {
                    web_sys::console::error_1(&format!("update install failed: {e}").into());
                    self.phase.set(UpdatePhase::Idle);
                }
            }
            drop(subscription);
        });
    }

    /// Terminal bookkeeping for a staged install; idempotent, since both
    /// the `Finished` event and the install call's Ok branch run it.
    fn finish_install(self) {
        self.progress.set(100.0);
        self.update.set(None);
        self.phase.set(UpdatePhase::AwaitingRestart);
    }

    /// Relaunch through the shell. The process is replaced, so this does
    /// not return in practice.
    pub fn relaunch(self) {
        spawn_local(async move {
            if let Err(e) = commands::relaunch().await {
                web_sys::console::error_1(&format!("relaunch failed: {e}").into());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_completion_stages_restart() {
        let session = UpdateSession {
            phase: RwSignal::new(UpdatePhase::Installing),
            progress: RwSignal::new(42.0),
            update: RwSignal::new(Some(UpdateInfo {
                version: "1.2.0".into(),
                available: true,
                body: None,
            })),
        };

        session.finish_install();

        assert_eq!(session.phase.get_untracked(), UpdatePhase::AwaitingRestart);
        assert_eq!(session.update.get_untracked(), None);
        assert_eq!(session.progress.get_untracked(), 100.0);
    }

    #[test]
    fn reports_only_on_five_point_advances() {
        let mut throttle = ProgressThrottle::new();
        throttle.start(1000);

        let mut reports = vec![];
        // 50 chunks of 2% each
        for _ in 0..50 {
            if let Some(percent) = throttle.advance(20) {
                reports.push(percent);
            }
        }

        assert!(!reports.is_empty());
        // Consecutive reports must advance by more than 5 points.
        let mut last = 0.0;
        for percent in &reports {
            assert!(percent - last > 5.0, "report {percent} too close to {last}");
            last = *percent;
        }
        // 2% chunks cross the >5 threshold every third chunk: 6, 12, ...
        assert_eq!(reports[0], 6.0);
        assert_eq!(reports[1], 12.0);
    }

    #[test]
    fn small_chunks_below_threshold_stay_silent() {
        let mut throttle = ProgressThrottle::new();
        throttle.start(1000);
        assert_eq!(throttle.advance(10), None); // 1%
        assert_eq!(throttle.advance(10), None); // 2%
        assert_eq!(throttle.advance(10), None); // 3%
        assert_eq!(throttle.advance(10), None); // 4%
        assert_eq!(throttle.advance(10), None); // 5%, not strictly greater
        assert_eq!(throttle.advance(10), Some(6.0));
    }

    #[test]
    fn unknown_content_length_never_reports() {
        let mut throttle = ProgressThrottle::new();
        throttle.start(0);
        assert_eq!(throttle.advance(1_000_000), None);
        assert_eq!(throttle.advance(1_000_000), None);
    }

    #[test]
    fn restart_resets_accumulated_progress() {
        let mut throttle = ProgressThrottle::new();
        throttle.start(100);
        assert_eq!(throttle.advance(50), Some(50.0));
        throttle.start(100);
        assert_eq!(throttle.advance(4), None);
        assert_eq!(throttle.advance(4), Some(8.0));
    }
}
