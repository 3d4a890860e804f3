use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::LanguageIdentifier;
use serde::{Deserialize, Serialize};

use crate::error::LocalizationError;

/// A normalized culture identifier such as `en` or `fr-BE`.
///
/// Tags are validated and canonicalized on construction, so `fr-be`,
/// `fr_BE` and `FR-be` all become `fr-BE`. Comparison is by exact string.
///
/// The *invariant* tag is an empty string. It never comes out of
/// [`LanguageTag::parse`]; it marks the resource's default value and is
/// only probed when invariant fallback is requested.
///
/// # Example
///
/// ```
/// use resloc::LanguageTag;
///
/// let tag = LanguageTag::parse("fr_be").unwrap();
/// assert_eq!(tag.as_str(), "fr-BE");
/// assert_eq!(tag.neutral().unwrap().as_str(), "fr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Parse and normalize a culture identifier.
    ///
    /// Blank input is rejected; use [`LanguageTag::invariant`] for the
    /// invariant tag.
    pub fn parse(tag: &str) -> Result<Self, LocalizationError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LocalizationError::invalid_argument(
                "language",
                "language tag must not be blank",
            ));
        }

        let normalized = trimmed.replace('_', "-");
        let identifier = LanguageIdentifier::try_from_str(&normalized).map_err(|e| {
            LocalizationError::invalid_argument("language", format!("'{tag}': {e}"))
        })?;
        Ok(Self(identifier.to_string()))
    }

    /// The invariant tag (no language).
    pub fn invariant() -> Self {
        Self(String::new())
    }

    /// Returns true for the invariant tag.
    pub fn is_invariant(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The neutral form of this tag, if it differs from the tag itself.
    ///
    /// `fr-BE` -> `fr`, `zh-Hant-TW` -> `zh`, `en` -> `None`.
    pub fn neutral(&self) -> Option<LanguageTag> {
        let (language, _) = self.0.split_once('-')?;
        Some(Self(language.to_string()))
    }

    /// Returns true if this tag carries a region or script.
    pub fn is_specific(&self) -> bool {
        self.0.contains('-')
    }
}

impl FromStr for LanguageTag {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = LocalizationError;

    /// Serialized form: an empty string is the invariant tag.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Ok(Self::invariant())
        } else {
            Self::parse(&value)
        }
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

impl Display for LanguageTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_invariant() {
            write!(f, "<invariant>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
