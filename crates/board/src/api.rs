// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! The remote collaborator of the [`ActivityBoard`](crate::ActivityBoard)

use async_trait::async_trait;
use client::{Activities, ActivityClient, MessageResponse, Result};

/// Access to the server owned activity store
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// Fetch all activities
    async fn activities(&self) -> Result<Activities>;

    /// Register `email` as participant of `activity`
    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse>;

    /// Remove `email` from the participants of `activity`
    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse>;
}

#[async_trait]
impl ActivityApi for ActivityClient {
    async fn activities(&self) -> Result<Activities> {
        ActivityClient::activities(self).await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse> {
        ActivityClient::signup(self, activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse> {
        ActivityClient::unregister(self, activity, email).await
    }
}
