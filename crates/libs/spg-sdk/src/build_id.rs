//! Build identifiers.

use std::{fmt, str::FromStr};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Opaque token naming one submission's artifacts in the object store.
///
/// The only guarantee is that it is not empty; it is used verbatim as a
/// storage key prefix and as the last segment of the share path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildId(String);

impl BuildId {
    /// Wrap a raw identifier, rejecting the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::EmptyBuildId);
        }
        Ok(Self(id))
    }

    /// Derive the identifier from a storage locator such as
    /// `https://store.example.com/<build id>`.
    ///
    /// The identifier is the final path segment of the locator. A locator
    /// that is not a URL or whose final segment is empty is rejected with
    /// [`Error::MalformedLocator`].
    pub fn from_locator(locator: &str) -> Result<Self> {
        let malformed = || Error::MalformedLocator(locator.to_string());
        let url = Url::parse(locator).map_err(|_| malformed())?;
        let segment = url
            .path_segments()
            .and_then(|segments| segments.last())
            .filter(|segment| !segment.is_empty())
            .ok_or_else(malformed)?;
        Self::new(segment)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Location of the share page for this build.
    pub fn share_path(&self) -> String {
        format!("/share/{}", self.0)
    }
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BuildId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for BuildId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for BuildId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BuildId> for String {
    fn from(value: BuildId) -> Self {
        value.0
    }
}
