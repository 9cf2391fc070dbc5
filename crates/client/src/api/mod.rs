// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ActivityClient;

pub mod activities;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Characters left untouched by javascripts `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A non-success HTTP response
#[derive(Debug)]
pub struct HttpError {
    /// Response status code
    pub status: StatusCode,
    /// The `detail` field of the response body, if there was one
    pub detail: Option<String>,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "(error {}: {})", self.status, detail),
            None => write!(f, "(error {})", self.status),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The endpoint URL could not be built from the base URL
    #[error("Url error: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request could not be sent or the response could not be received
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The response body is not what the endpoint promises
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    /// A non-success HTTP response
    #[error("Http error: {0}")]
    Rejected(HttpError),
}

impl Error {
    /// The server provided reason of a rejected request
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Rejected(HttpError {
                detail: Some(detail),
                ..
            }) => Some(detail.as_str()),
            _ => None,
        }
    }

    /// Returns true if the server answered but refused the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Rejected(_))
    }
}

/// Error body sent alongside non-success responses
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Extracts the `detail` string from an error response body
///
/// Returns `None` for bodies which are not json, have no `detail` or a non-string `detail`
/// (e.g. a list of validation errors).
fn rejection_detail(body: &[u8]) -> Option<String> {
    let body: ErrorBody = serde_json::from_slice(body).ok()?;

    match body.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

pub(crate) async fn parse_json_response<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(Error::Rejected(HttpError {
            status,
            detail: rejection_detail(&body),
        }));
    }

    Ok(serde_json::from_slice(&body)?)
}

/// Percent encodes a single path segment the way `encodeURIComponent` does
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, URI_COMPONENT).to_string()
}

impl ActivityClient {
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        Ok(self.config.base_url.join(path)?)
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path)?;

        tracing::debug!(%url, "GET");

        let response = self.http_client.get(url).send().await?;

        Ok(response)
    }

    async fn post_json<T>(&self, path: &str, data: &T) -> Result<Response>
    where
        T: Serialize,
    {
        let url = self.url(path)?;

        tracing::debug!(%url, "POST");

        let response = self.http_client.post(url).json(data).send().await?;

        Ok(response)
    }

    async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.url(path)?;

        tracing::debug!(%url, "DELETE");

        let response = self.http_client.delete(url).send().await?;

        Ok(response)
    }
}
