//! Endpoint configuration shared by the resolver, the submission workflow and the share service.

use crate::prelude::*;
use std::{fmt, path::Path};

use serde::Deserialize;
use tracing::{debug, info};

/// Environment variable holding the public object-store endpoint.
pub const STORAGE_BASE_ENV: &str = "S3_PUBLIC_ENDPOINT";
/// Environment variable holding the compile API endpoint.
pub const API_BASE_ENV: &str = "API_ENDPOINT";

/// User-provided configuration from TOML files.
///
/// Every field is optional at this stage so a missing key is reported as
/// [`Error::MissingVariable`] instead of a TOML error.
#[derive(Debug, Default, Deserialize)]
struct UserConfig {
    storage_base: Option<String>,
    api_base: Option<String>,
}

/// Validated playground configuration.
///
/// Both endpoints are required; trailing slashes are stripped so locators can
/// be built by plain concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundConfig {
    storage_base: String,
    api_base: String,
}

fn validate_endpoint(name: &'static str, value: Option<String>) -> Result<String> {
    let value = value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(Error::MissingVariable(name))?;

    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(Error::InvalidEndpoint { name, value });
    }

    Ok(value.trim_end_matches('/').to_string())
}

impl PlaygroundConfig {
    /// Build a configuration from explicit endpoints.
    pub fn new(storage_base: impl Into<String>, api_base: impl Into<String>) -> Result<Self> {
        Ok(Self {
            storage_base: validate_endpoint("storage_base", Some(storage_base.into()))?,
            api_base: validate_endpoint("api_base", Some(api_base.into()))?,
        })
    }

    /// Load configuration from the process environment.
    ///
    /// Reads [`STORAGE_BASE_ENV`] and [`API_BASE_ENV`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            storage_base: validate_endpoint(STORAGE_BASE_ENV, lookup(STORAGE_BASE_ENV))?,
            api_base: validate_endpoint(API_BASE_ENV, lookup(API_BASE_ENV))?,
        };
        debug!("Loaded configuration from environment: {}", config);
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(file_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(file_path)?;
        let config = Self::from_toml(&contents)?;
        info!("Loaded configuration from {}", file_path.display());
        Ok(config)
    }

    /// Parse configuration from TOML string.
    pub fn from_toml(value: &str) -> Result<Self> {
        let user: UserConfig = toml::from_str(value)?;
        Ok(Self {
            storage_base: validate_endpoint("storage_base", user.storage_base)?,
            api_base: validate_endpoint("api_base", user.api_base)?,
        })
    }

    /// Public object-store endpoint, without trailing slash.
    pub fn storage_base(&self) -> &str {
        &self.storage_base
    }

    /// Compile API endpoint, without trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl fmt::Display for PlaygroundConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage={} api={}", self.storage_base, self.api_base)
    }
}
