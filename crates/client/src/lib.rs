// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! HTTP client for the activity signup API
//!
//! Wraps the three endpoints the activity board talks to:
//!
//! - `GET /activities`
//! - `POST /activities/{name}/signup`
//! - `DELETE /activities/{name}/unregister/{email}`
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};

pub mod api;

pub use api::activities::{Activities, Activity, MessageResponse};
pub use api::{Error, HttpError, Result};
pub use reqwest::StatusCode;

/// The client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activity API, always ends with a `/`
    pub base_url: Url,
    /// Timeout applied to every request
    pub timeout: Duration,
}

impl Config {
    pub fn new(mut base_url: Url, timeout: Duration) -> Self {
        // Endpoint paths are joined relative to the base, which only keeps the last
        // path segment if it is terminated by a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self { base_url, timeout }
    }
}

/// A client for the activity API
///
/// Cheap to clone, all clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ActivityClient {
    /// Reusable reqwest connection pool
    pub http_client: Client,
    /// Configuration for this client
    pub config: Arc<Config>,
}

impl ActivityClient {
    /// Creates a new client with its own connection pool
    pub fn new(config: Config) -> Result<Self> {
        let http_client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self::with_http_client(http_client, config))
    }

    /// Creates a new client reusing an existing reqwest [`Client`]
    pub fn with_http_client(http_client: Client, config: Config) -> Self {
        Self {
            http_client,
            config: Arc::new(config),
        }
    }
}
