//! One-shot retrieval of the queue configuration document.
//!
//! The loader makes exactly one attempt. Any failure along the way (transport,
//! status, JSON, shape) is logged and answered with the compiled-in default,
//! so startup never blocks on configuration.

use super::{ConfigError, QueueConfiguration};
use log::*;
use std::path::PathBuf;

/// Well-known location of the document relative to a base URL.
pub const CONFIG_DOCUMENT_PATH: &str = "queue-config.json";

/// Where the configuration document is read from.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Url(String),
    File(PathBuf),
}

impl ConfigSource {
    /// Interpret a user-supplied location: `http(s)://` is a URL, anything
    /// else a local path.
    ///
    pub fn parse(location: &str) -> ConfigSource {
        if location.starts_with("http://") || location.starts_with("https://") {
            ConfigSource::Url(location.to_owned())
        } else {
            ConfigSource::File(PathBuf::from(location))
        }
    }
}

/// Fetches and validates the queue configuration document.
///
pub struct ConfigLoader {
    source: ConfigSource,
    http_client: reqwest::Client,
}

impl ConfigLoader {
    /// Returns a loader for the well-known document under the given base URL.
    ///
    pub fn new(base_url: &str) -> ConfigLoader {
        let url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            CONFIG_DOCUMENT_PATH
        );
        ConfigLoader::from_source(ConfigSource::Url(url))
    }

    pub fn from_source(source: ConfigSource) -> ConfigLoader {
        ConfigLoader {
            source,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Return the validated configuration, falling back to the compiled-in
    /// default on any failure.
    ///
    pub async fn load(&self) -> QueueConfiguration {
        match self.fetch().await {
            Ok(config) => {
                info!("Loaded queue configuration from {:?}", self.source);
                config
            }
            Err(e) => {
                warn!("Using default queue configuration: {}", e);
                QueueConfiguration::default()
            }
        }
    }

    /// Fetch, parse and validate the document, returning the first failure.
    ///
    pub async fn fetch(&self) -> Result<QueueConfiguration, ConfigError> {
        let contents = match &self.source {
            ConfigSource::Url(url) => self.fetch_url(url).await?,
            ConfigSource::File(path) => {
                debug!("Reading queue configuration from {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| ConfigError::LoadFailed {
                        path: path.clone(),
                        source: e,
                    })?
            }
        };
        let document: serde_json::Value = serde_json::from_str(&contents)?;
        QueueConfiguration::from_document(&document)
    }

    async fn fetch_url(&self, url: &str) -> Result<String, ConfigError> {
        debug!("Requesting queue configuration from {}...", url);
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConfigError::BadStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}
