use std::borrow::Borrow;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::error::LocalizationError;

/// A dotted identifier naming one localizable text slot.
///
/// Stored translations are indexed by this exact string, so keys built by
/// [`KeyBuilder`](crate::KeyBuilder) must be stable for a given
/// (type, member) pair. Keys coming from storage are accepted as long as
/// they are not blank; only built keys are checked segment by segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Accept a key string, rejecting blank input.
    pub fn parse(key: &str) -> Result<Self, LocalizationError> {
        if key.trim().is_empty() {
            return Err(LocalizationError::invalid_argument(
                "key",
                "resource key must not be blank",
            ));
        }
        Ok(Self(key.to_string()))
    }

    /// Wrap a key that has already been validated by the key builder.
    pub(crate) fn from_built(key: String) -> Self {
        Self(key)
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the dot-separated segments of the key.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(resloc_keys::SEGMENT_SEPARATOR)
    }
}

impl Borrow<str> for ResourceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
