//! Desired number of invites for a session.

use crate::error::{ClashError, Result};
use std::fmt;
use std::str::FromStr;

/// Strictly positive invite target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InviteCount(u32);

impl InviteCount {
    pub fn new(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(ClashError::InvalidCount {
                input: count.to_string(),
            });
        }
        Ok(Self(count))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for InviteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InviteCount {
    type Err = ClashError;

    /// Accepts digits only: no sign, no whitespace inside, no zero.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ClashError::InvalidCount {
                input: s.to_string(),
            });
        }
        let value: u32 = trimmed.parse().map_err(|_| ClashError::InvalidCount {
            input: s.to_string(),
        })?;
        Self::new(value).map_err(|_| ClashError::InvalidCount {
            input: s.to_string(),
        })
    }
}
