//! Eligibility decision for invite candidates.
//!
//! A candidate is accepted only when every configured threshold is met.
//! There is no scoring and no partial credit: the first failing condition
//! rejects the record. Conditions are checked in a fixed order so the
//! reported reason is deterministic:
//!
//! 1. town hall level
//! 2. trophies
//! 3. troop levels (alphabetical by troop name)
//! 4. clan membership (when `require_no_clan` is set)
//! 5. experience level for the player's town hall (when `exp_level` is set)

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clash::types::PlayerRecord;


/// Thresholds a candidate has to meet.
///
/// # Examples
///
/// ```rust
/// use clash_inviter::eligibility::FilterCriteria;
///
/// let criteria = FilterCriteria::default();
/// assert_eq!(criteria.town_hall_min, 9);
/// assert_eq!(criteria.troop_min_levels.get("Archer"), Some(&4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub town_hall_min: u32,
    pub trophies_min: u32,
    /// Troop name -> minimum level. A troop missing from the record fails.
    pub troop_min_levels: BTreeMap<String, u32>,
    /// Reject players that already belong to a clan.
    pub require_no_clan: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_level: Option<ExpLevelRule>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        let troop_min_levels = [("Archer", 4), ("Barbarian", 4)]
            .into_iter()
            .map(|(name, level)| (name.to_string(), level))
            .collect();

        Self {
            town_hall_min: 9,
            trophies_min: 1000,
            troop_min_levels,
            require_no_clan: false,
            exp_level: None,
        }
    }
}

/// Minimum experience level per town hall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpLevelRule {
    #[serde(default)]
    pub requirements: Vec<ExpRequirement>,
    /// Minimum for town halls above the highest listed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beyond: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpRequirement {
    pub town_hall: u32,
    pub min_exp_level: u32,
}

impl ExpLevelRule {
    /// Required experience level for a town hall, `None` when the rule has no answer.
    pub fn required_for(&self, town_hall: u32) -> Option<u32> {
        if let Some(req) = self.requirements.iter().find(|r| r.town_hall == town_hall) {
            return Some(req.min_exp_level);
        }
        let highest = self.requirements.iter().map(|r| r.town_hall).max()?;
        if town_hall > highest {
            self.beyond
        } else {
            None
        }
    }
}

/// First condition a rejected record failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TownHallLevel { required: u32, actual: u32 },
    Trophies { required: u32, actual: u32 },
    TroopMissing { troop: String },
    TroopLevel { troop: String, required: u32, actual: u32 },
    InClan { clan: String },
    ExpLevel { required: Option<u32>, actual: u32 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TownHallLevel { required, actual } => {
                write!(f, "townHallLevel {actual} < {required}")
            }
            RejectReason::Trophies { required, actual } => {
                write!(f, "trophies {actual} < {required}")
            }
            RejectReason::TroopMissing { troop } => write!(f, "troop {troop} missing"),
            RejectReason::TroopLevel {
                troop,
                required,
                actual,
            } => write!(f, "troop {troop} level {actual} < {required}"),
            RejectReason::InClan { clan } => write!(f, "already in clan {clan}"),
            RejectReason::ExpLevel {
                required: Some(required),
                actual,
            } => write!(f, "expLevel {actual} < {required}"),
            RejectReason::ExpLevel {
                required: None,
                actual,
            } => write!(f, "expLevel {actual}: no requirement for this town hall"),
        }
    }
}

/// Run every check and report the first failure.
pub fn evaluate(record: &PlayerRecord, criteria: &FilterCriteria) -> Result<(), RejectReason> {
    if record.town_hall_level < criteria.town_hall_min {
        return Err(RejectReason::TownHallLevel {
            required: criteria.town_hall_min,
            actual: record.town_hall_level,
        });
    }

    if record.trophies < criteria.trophies_min {
        return Err(RejectReason::Trophies {
            required: criteria.trophies_min,
            actual: record.trophies,
        });
    }

    for (troop, &required) in &criteria.troop_min_levels {
        match record.troops.get(troop) {
            None => {
                return Err(RejectReason::TroopMissing {
                    troop: troop.clone(),
                })
            }
            Some(&actual) if actual < required => {
                return Err(RejectReason::TroopLevel {
                    troop: troop.clone(),
                    required,
                    actual,
                })
            }
            Some(_) => {}
        }
    }

    if criteria.require_no_clan {
        // One-character clan names are treated as placeholder clans
        if let Some(clan) = record.clan.as_ref().filter(|c| c.name.chars().count() > 1) {
            return Err(RejectReason::InClan {
                clan: clan.name.clone(),
            });
        }
    }

    if let Some(rule) = &criteria.exp_level {
        let required = rule.required_for(record.town_hall_level);
        let passes = required.is_some_and(|min| record.exp_level >= min);
        if !passes {
            return Err(RejectReason::ExpLevel {
                required,
                actual: record.exp_level,
            });
        }
    }

    Ok(())
}

/// Accept/reject decision for one record.
pub fn is_eligible(record: &PlayerRecord, criteria: &FilterCriteria) -> bool {
    evaluate(record, criteria).is_ok()
}

/// Outcome of one decision, kept for logging and session statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteResult {
    pub tag: String,
    pub name: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl InviteResult {
    pub fn from_evaluation(record: &PlayerRecord, criteria: &FilterCriteria) -> Self {
        let outcome = evaluate(record, criteria);
        Self {
            tag: record.tag.to_string(),
            name: record.name.clone(),
            accepted: outcome.is_ok(),
            reason: outcome.err().map(|r| r.to_string()),
        }
    }
}

impl fmt::Display for InviteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            None => write!(f, "{} ({}) eligible", self.tag, self.name),
            Some(reason) => write!(f, "{} ({}) rejected: {}", self.tag, self.name, reason),
        }
    }
}
