use crate::cli::types::{ClanTag, PlayerTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// Troops are reported for both villages; only home village troops count.
pub const HOME_VILLAGE: &str = "home";

fn default_village() -> String {
    HOME_VILLAGE.to_string()
}

/// Clan reference embedded in a player profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClanRef {
    pub tag: ClanTag,
    #[serde(default)]
    pub name: String,
}

/// One troop, hero or spell entry of `/players/{tag}`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub max_level: Option<u32>,
    #[serde(default = "default_village")]
    pub village: String,
}

/// Raw player profile as returned by `/players/{tag}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlayer {
    pub tag: PlayerTag,
    #[serde(default)]
    pub name: String,
    pub town_hall_level: u32,
    #[serde(default)]
    pub exp_level: u32,
    pub trophies: u32,
    #[serde(default)]
    pub clan: Option<ClanRef>,
    #[serde(default)]
    pub troops: Vec<Unit>,
}

/// Player data the eligibility decision works on.
///
/// Built once from an API profile and dropped after a single decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub tag: PlayerTag,
    pub name: String,
    pub town_hall_level: u32,
    pub exp_level: u32,
    pub trophies: u32,
    pub clan: Option<ClanRef>,
    /// Home village troop name -> level
    pub troops: BTreeMap<String, u32>,
}

impl From<ApiPlayer> for PlayerRecord {
    fn from(p: ApiPlayer) -> Self {
        let troops = p
            .troops
            .into_iter()
            .filter(|t| t.village == HOME_VILLAGE)
            .map(|t| (t.name, t.level))
            .collect();

        Self {
            tag: p.tag,
            name: p.name,
            town_hall_level: p.town_hall_level,
            exp_level: p.exp_level,
            trophies: p.trophies,
            clan: p.clan,
            troops,
        }
    }
}

/// Entry of a clan member list or a player ranking
#[derive(Debug, Clone, Deserialize)]
pub struct ListedPlayer {
    pub tag: PlayerTag,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub trophies: u32,
}

/// Standard list envelope (`{"items": [...], "paging": {...}}`)
#[derive(Debug, Deserialize)]
pub struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Where a batch of candidates comes from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CandidateSource {
    /// `GET /clans/{tag}/members`
    ClanMembers { clan_tag: ClanTag },
    /// `GET /locations/{id}/rankings/players`
    LocationRanking { location_id: u32 },
}

impl CandidateSource {
    /// Endpoint path relative to the API base URL.
    pub fn endpoint(&self) -> String {
        match self {
            CandidateSource::ClanMembers { clan_tag } => {
                format!("/clans/{}/members", clan_tag.url_encoded())
            }
            CandidateSource::LocationRanking { location_id } => {
                format!("/locations/{}/rankings/players", location_id)
            }
        }
    }
}

impl std::fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateSource::ClanMembers { clan_tag } => write!(f, "members of {}", clan_tag),
            CandidateSource::LocationRanking { location_id } => {
                write!(f, "ranking of location {}", location_id)
            }
        }
    }
}

/// Parameters for one candidate fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CandidateSearch {
    #[serde(flatten)]
    pub source: CandidateSource,
    /// Listing entries below this trophy count are dropped before profiles are fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_trophies: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CandidateSearch {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        self.limit
            .map(|l| vec![("limit", l.to_string())])
            .unwrap_or_default()
    }

    pub fn admits(&self, listed: &ListedPlayer) -> bool {
        self.min_trophies.map_or(true, |min| listed.trophies >= min)
    }
}

/// Query parameters for `GET /clans`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanSearchParams {
    pub name: Option<String>,
    pub war_frequency: Option<String>,
    pub min_members: Option<u32>,
    pub max_members: Option<u32>,
    pub min_clan_points: Option<u32>,
    pub min_clan_level: Option<u32>,
    pub limit: u32,
}

impl ClanSearchParams {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut q = vec![("limit", self.limit.to_string())];
        if let Some(name) = &self.name {
            q.push(("name", name.clone()));
        }
        if let Some(freq) = &self.war_frequency {
            q.push(("warFrequency", freq.clone()));
        }
        let numeric = [
            ("minMembers", self.min_members),
            ("maxMembers", self.max_members),
            ("minClanPoints", self.min_clan_points),
            ("minClanLevel", self.min_clan_level),
        ];
        for (key, value) in numeric {
            if let Some(v) = value {
                q.push((key, v.to_string()));
            }
        }
        q
    }
}

/// Entry of `GET /clans`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanSummary {
    pub tag: ClanTag,
    pub name: String,
    #[serde(default)]
    pub clan_level: u32,
    #[serde(default)]
    pub members: u32,
    #[serde(default)]
    pub clan_points: u32,
    #[serde(default)]
    pub war_frequency: Option<String>,
}

/// `GET /clans/{tag}`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanDetails {
    pub tag: ClanTag,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub clan_level: u32,
    #[serde(default)]
    pub members: u32,
    #[serde(default)]
    pub clan_points: u32,
    #[serde(default)]
    pub required_trophies: u32,
    #[serde(default)]
    pub required_townhall_level: Option<u32>,
    #[serde(default)]
    pub war_frequency: Option<String>,
}

/// Entry of `GET /locations`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_country: bool,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Error body the API sends with non-success statuses
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// `"reason: message"`, whichever parts are present.
    pub fn summary(&self) -> Option<String> {
        match (&self.reason, &self.message) {
            (Some(r), Some(m)) => Some(format!("{r}: {m}")),
            (Some(r), None) => Some(r.clone()),
            (None, Some(m)) => Some(m.clone()),
            (None, None) => None,
        }
    }
}

/// Rate-limit headers of the last response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitInfo {
    pub remaining: Option<String>,
    pub reset: Option<String>,
}
