//! Seam between the invite session and whatever performs the in-game invite.
//!
//! Driving the emulator window (coordinates, clicks, image matching) happens
//! outside this crate. The session only needs something it can hand an
//! accepted player to.

use crate::{clash::types::PlayerRecord, Result};

/// Performs the invite for one accepted player.
pub trait Inviter {
    fn invite(&mut self, record: &PlayerRecord) -> Result<()>;
}

/// Logs each invite request instead of clicking.
#[derive(Debug, Default)]
pub struct LogInviter {
    sent: Vec<String>,
}

impl LogInviter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags handed over so far, in order.
    pub fn sent(&self) -> &[String] {
        &self.sent
    }
}

impl Inviter for LogInviter {
    fn invite(&mut self, record: &PlayerRecord) -> Result<()> {
        tracing::info!(
            tag = %record.tag,
            name = %record.name,
            town_hall = record.town_hall_level,
            trophies = record.trophies,
            "invite requested"
        );
        self.sent.push(record.tag.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::PlayerTag;

    #[test]
    fn test_log_inviter_records_tags_in_order() {
        let mut inviter = LogInviter::new();
        for tag in ["#AAA", "#BBB"] {
            let record = PlayerRecord {
                tag: PlayerTag::new(tag).unwrap(),
                name: String::new(),
                town_hall_level: 10,
                exp_level: 90,
                trophies: 1500,
                clan: None,
                troops: Default::default(),
            };
            inviter.invite(&record).unwrap();
        }
        assert_eq!(inviter.sent(), ["#AAA", "#BBB"]);
    }
}
