// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Rendering targets driven by the [`ActivityBoard`](crate::ActivityBoard)
//!
//! The board never touches a concrete UI. It is handed implementations of these traits at
//! construction and only calls into them, all from the task running the board operation.
use std::sync::Arc;

use client::Activity;

use crate::status::StatusMessage;

/// View model of a single rendered activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails, each one is a target for unregistration
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl ActivityCard {
    /// Human readable capacity, e.g. `2/12 spots filled`
    pub fn availability(&self) -> String {
        format!(
            "{}/{} spots filled",
            self.participants.len(),
            self.max_participants
        )
    }
}

impl From<&Activity> for ActivityCard {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
            spots_left: activity.spots_left(),
        }
    }
}

/// The container listing all activity cards
pub trait ActivityList: Send + Sync {
    /// Replace the whole content with the given cards
    fn render(&self, cards: &[ActivityCard]);

    /// Replace the whole content with a static failure notice
    fn show_failure(&self, notice: &str);
}

/// The selection control of the signup form
pub trait ActivitySelect: Send + Sync {
    /// Remove all options
    fn clear(&self);

    fn add_option(&self, activity: &str);
}

/// The signup form
pub trait SignupForm: Send + Sync {
    /// Clear all inputs
    fn reset(&self);
}

/// The shared area for the outcome of the last user action
pub trait StatusArea: Send + Sync {
    fn show(&self, message: &StatusMessage);

    fn hide(&self);
}

/// All rendering targets of a board
#[derive(Clone)]
pub struct Views {
    pub list: Arc<dyn ActivityList>,
    pub select: Arc<dyn ActivitySelect>,
    pub form: Arc<dyn SignupForm>,
    pub status: Arc<dyn StatusArea>,
}
