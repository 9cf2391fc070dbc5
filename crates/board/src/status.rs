// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Transient, auto dismissing feedback for the last user action
//!
//! ```text
//! Hidden --(show)--> Visible(kind, text) --(hide_after elapsed)--> Hidden
//! ```
//!
//! Showing a message while another one is visible replaces it and restarts the timer.
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::view::StatusArea;

/// Time a status message stays visible
pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// Style class of the message
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

#[derive(Default)]
struct HideTimer {
    /// Incremented for every shown message, a timer only hides the message it was started for
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

/// Owns the status area and its single hide timer
pub struct StatusNotifier {
    area: Arc<dyn StatusArea>,
    hide_after: Duration,
    timer: Arc<Mutex<HideTimer>>,
}

impl StatusNotifier {
    pub fn new(area: Arc<dyn StatusArea>, hide_after: Duration) -> Self {
        Self {
            area,
            hide_after,
            timer: Default::default(),
        }
    }

    /// Show the message and (re)start the hide timer
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: StatusMessage) {
        let mut timer = self.timer.lock();

        if let Some(previous) = timer.handle.take() {
            previous.abort();
        }

        timer.generation = timer.generation.wrapping_add(1);
        let generation = timer.generation;

        self.area.show(&message);

        let area = self.area.clone();
        let shared = self.timer.clone();
        let hide_after = self.hide_after;

        timer.handle = Some(tokio::spawn(async move {
            sleep(hide_after).await;

            let mut timer = shared.lock();

            // An aborted timer may already be past its sleep, the generation check keeps it
            // from hiding a newer message
            if timer.generation == generation {
                area.hide();
                timer.handle = None;
            }
        }));
    }
}

impl Drop for StatusNotifier {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.lock().handle.take() {
            handle.abort();
        }
    }
}
