//! Player and clan tags.
//!
//! The game identifies players and clans by tags such as `#2PP` or `#9LUQ8VRJ`.
//! Users type them in every shape imaginable (lowercase, without the `#`,
//! with surrounding whitespace), so both wrappers normalize on construction.

use crate::error::{ClashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trim, upper-case and prefix with `#`.
///
/// Only ASCII alphanumerics are accepted after the `#`.
fn normalize_tag(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ClashError::InvalidTag {
            tag: raw.to_string(),
        });
    }

    Ok(format!("#{}", body.to_ascii_uppercase()))
}

/// Tag of a single player account.
///
/// # Examples
///
/// ```rust
/// use clash_inviter::PlayerTag;
///
/// let tag: PlayerTag = " 2pp ".parse().unwrap();
/// assert_eq!(tag.as_str(), "#2PP");
/// assert_eq!(tag.url_encoded(), "%232PP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerTag(String);

impl PlayerTag {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self(normalize_tag(raw)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tag with the leading `#` percent-encoded, ready for a URL path segment.
    pub fn url_encoded(&self) -> String {
        self.0.replacen('#', "%23", 1)
    }
}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerTag {
    type Err = ClashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PlayerTag {
    type Error = ClashError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<PlayerTag> for String {
    fn from(tag: PlayerTag) -> Self {
        tag.0
    }
}

/// Tag of a clan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClanTag(String);

impl ClanTag {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self(normalize_tag(raw)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn url_encoded(&self) -> String {
        self.0.replacen('#', "%23", 1)
    }
}

impl fmt::Display for ClanTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClanTag {
    type Err = ClashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ClanTag {
    type Error = ClashError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<ClanTag> for String {
    fn from(tag: ClanTag) -> Self {
        tag.0
    }
}
