// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Contains the application settings.
//!
//! The application settings are set with an optional TOML config file. Settings specified in the
//! config file can be overwritten by environment variables. To do so, set an environment variable
//! with the prefix `ACTIVITY_BOARD_` followed by the field names you want to set. Nested fields
//! are separated by two underscores `__`.
//! ```sh
//! ACTIVITY_BOARD_<field>__<field-of-field>...
//! ```
//!
//! # Example
//!
//! set the `api.base_url` field:
//! ```sh
//! ACTIVITY_BOARD_API__BASE_URL=http://localhost:8000/
//! ```
//!
//! # Note
//!
//! Fields set via environment variables do not affect the underlying config file.
use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer};
use url::Url;

use crate::status::DEFAULT_HIDE_AFTER;

const ENV_PREFIX: &str = "ACTIVITY_BOARD";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub logging: Logging,
}

impl Settings {
    /// Creates a new Settings instance from the provided TOML file.
    /// Specific fields can be set or overwritten with environment variables (See module level docs for more details).
    ///
    /// A missing file is not an error, all settings have defaults.
    pub fn load(file_name: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(file_name).required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Creates a new Settings instance from a TOML string, environment variables still apply
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Where and how to reach the activity API
#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Timeout of a single request, in seconds
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        deserialize_with = "duration_from_secs"
    )]
    pub timeout: Duration,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:8000/").expect("valid default url")
}

const fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Behaviour of the status area
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    /// How long a status message stays visible, in milliseconds
    #[serde(
        rename = "hide_after_ms",
        default = "default_hide_after",
        deserialize_with = "duration_from_millis"
    )]
    pub hide_after: Duration,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            hide_after: default_hide_after(),
        }
    }
}

const fn default_hide_after() -> Duration {
    DEFAULT_HIDE_AFTER
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    #[serde(default = "default_directives")]
    pub default_directives: Vec<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            default_directives: default_directives(),
        }
    }
}

fn default_directives() -> Vec<String> {
    // Disable spamming noninformative traces
    vec![
        "activity_board=INFO".into(),
        "activity_board_core=INFO".into(),
        "activity_board_client=INFO".into(),
        "rustls=WARN".into(),
        "hyper=WARN".into(),
        "reqwest=WARN".into(),
    ]
}

fn duration_from_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let duration: u64 = Deserialize::deserialize(deserializer)?;

    Ok(Duration::from_secs(duration))
}

fn duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let duration: u64 = Deserialize::deserialize(deserializer)?;

    Ok(Duration::from_millis(duration))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn defaults() {
        let settings = Settings::from_toml("").unwrap();

        assert_eq!(settings.api.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(settings.api.timeout, Duration::from_secs(10));
        assert_eq!(settings.status.hide_after, Duration::from_millis(5000));
        assert!(settings
            .logging
            .default_directives
            .contains(&"activity_board_core=INFO".to_owned()));
    }

    #[test]
    #[serial]
    fn from_toml() {
        let settings = Settings::from_toml(
            r#"
            [api]
            base_url = "http://school.example.org/api/"
            timeout_secs = 3

            [status]
            hide_after_ms = 1500

            [logging]
            default_directives = ["activity_board_core=DEBUG"]
            "#,
        )
        .unwrap();

        assert_eq!(
            settings.api.base_url.as_str(),
            "http://school.example.org/api/"
        );
        assert_eq!(settings.api.timeout, Duration::from_secs(3));
        assert_eq!(settings.status.hide_after, Duration::from_millis(1500));
        assert_eq!(
            settings.logging.default_directives,
            vec!["activity_board_core=DEBUG".to_owned()]
        );
    }

    #[test]
    #[serial]
    fn invalid_url_is_an_error() {
        let result = Settings::from_toml(
            r#"
            [api]
            base_url = "not a url"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let settings = Settings::load(&dir.path().join("does-not-exist.toml")).unwrap();

        assert_eq!(settings.status.hide_after, DEFAULT_HIDE_AFTER);
    }

    #[test]
    #[serial]
    fn load_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[status]\nhide_after_ms = 250").unwrap();

        let settings = Settings::load(file.path()).unwrap();

        assert_eq!(settings.status.hide_after, Duration::from_millis(250));
    }

    #[test]
    #[serial]
    fn environment_overrides_file() {
        std::env::set_var("ACTIVITY_BOARD_API__BASE_URL", "http://override.example.org/");
        std::env::set_var("ACTIVITY_BOARD_STATUS__HIDE_AFTER_MS", "42");

        let settings = Settings::from_toml(
            r#"
            [api]
            base_url = "http://file.example.org/"
            "#,
        );

        std::env::remove_var("ACTIVITY_BOARD_API__BASE_URL");
        std::env::remove_var("ACTIVITY_BOARD_STATUS__HIDE_AFTER_MS");

        let settings = settings.unwrap();

        assert_eq!(
            settings.api.base_url.as_str(),
            "http://override.example.org/"
        );
        assert_eq!(settings.status.hide_after, Duration::from_millis(42));
    }
}
