// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use std::sync::Arc;
use std::time::Duration;

use crate::api::ActivityApi;
use crate::status::{StatusMessage, StatusNotifier};
use crate::view::{ActivityCard, ActivityList, ActivitySelect, SignupForm, Views};

/// Shown in place of the list if the activities could not be loaded
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";

/// Shown if the server rejected a signup without telling why
pub const SIGNUP_REJECTED: &str = "An error occurred";

/// Shown if a signup request did not get a usable answer
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// Shown if an unregistration failed without a reason from the server
pub const UNREGISTER_FAILED: &str = "Failed to unregister participant";

/// View controller keeping the rendered activities in sync with the server
///
/// The board never predicts state. Every successful mutation is followed by a full reload
/// of the activities. Errors never leave the board, they end up in the status area and the log.
pub struct ActivityBoard {
    api: Arc<dyn ActivityApi>,
    list: Arc<dyn ActivityList>,
    select: Arc<dyn ActivitySelect>,
    form: Arc<dyn SignupForm>,
    status: StatusNotifier,
}

impl ActivityBoard {
    /// Create a board rendering into `views`, status messages are hidden after `hide_after`
    pub fn new(api: Arc<dyn ActivityApi>, views: Views, hide_after: Duration) -> Self {
        Self {
            api,
            list: views.list,
            select: views.select,
            form: views.form,
            status: StatusNotifier::new(views.status, hide_after),
        }
    }

    /// Fetch all activities and rebuild the list and the selection control
    #[tracing::instrument(skip(self))]
    pub async fn load_activities(&self) {
        let activities = match self.api.activities().await {
            Ok(activities) => activities,
            Err(e) => {
                tracing::error!("Error fetching activities: {}", e);
                self.list.show_failure(LOAD_FAILURE_NOTICE);
                return;
            }
        };

        tracing::debug!("loaded {} activities", activities.len());

        let cards: Vec<ActivityCard> = activities.iter().map(ActivityCard::from).collect();

        self.list.render(&cards);

        self.select.clear();
        for card in &cards {
            self.select.add_option(&card.name);
        }
    }

    /// Sign up `email` for `activity`
    ///
    /// On success the activities are reloaded before the confirmation is shown and the form is reset.
    #[tracing::instrument(skip(self))]
    pub async fn sign_up(&self, activity: &str, email: &str) {
        match self.api.signup(activity, email).await {
            Ok(response) => {
                self.load_activities().await;

                self.status.show(StatusMessage::success(response.message));
                self.form.reset();
            }
            Err(e) if e.is_rejection() => {
                tracing::warn!("Signup rejected: {}", e);

                let text = e.detail().unwrap_or(SIGNUP_REJECTED);
                self.status.show(StatusMessage::error(text));
            }
            Err(e) => {
                tracing::error!("Error signing up: {}", e);

                self.status.show(StatusMessage::error(SIGNUP_FAILED));
            }
        }
    }

    /// Remove `email` from the participants of `activity`
    ///
    /// On success the activities are reloaded before the confirmation is shown.
    #[tracing::instrument(skip(self))]
    pub async fn unregister(&self, activity: &str, email: &str) {
        match self.api.unregister(activity, email).await {
            Ok(response) => {
                self.load_activities().await;

                self.status.show(StatusMessage::success(response.message));
            }
            Err(e) => {
                tracing::error!("Error unregistering participant: {}", e);

                let text = e.detail().unwrap_or(UNREGISTER_FAILED);
                self.status.show(StatusMessage::error(text));
            }
        }
    }
}
