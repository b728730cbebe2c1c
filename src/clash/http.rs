//! Client for the game's public REST API.
//!
//! Every call is a single authenticated GET. Status codes are mapped onto
//! [`ClashError`] variants so callers can tell a bad token from throttling
//! from a dead network. Nothing here retries; that is the caller's decision.

use std::sync::Mutex;
use std::time::Duration;

use reqwest::{
    header::{HeaderMap, RETRY_AFTER},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    cli::types::{ClanTag, PlayerTag},
    clash::types::{
        ApiErrorBody, ApiPlayer, CandidateSearch, ClanDetails, ClanSearchParams, ClanSummary,
        ItemsEnvelope, ListedPlayer, Location, PlayerRecord, RateLimitInfo,
    },
    core::http::build_http_client,
    ClashError, Result,
};


/// Base path of the v1 API.
pub const CLASH_BASE_URL: &str = "https://api.clashofclans.com/v1";

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Everything needed to build a [`ClashClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: CLASH_BASE_URL.to_string(),
            token: token.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Page of candidates from one search.
///
/// Consumed once; records that could not be parsed or vanished between the
/// listing and the profile fetch are counted in [`CandidateBatch::skipped`].
#[derive(Debug)]
pub struct CandidateBatch {
    records: std::vec::IntoIter<PlayerRecord>,
    skipped: usize,
}

impl CandidateBatch {
    pub fn new(records: Vec<PlayerRecord>, skipped: usize) -> Self {
        Self {
            records: records.into_iter(),
            skipped,
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for CandidateBatch {
    type Item = PlayerRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for CandidateBatch {}

pub struct ClashClient {
    http: Client,
    base_url: String,
    rate_limit: Mutex<Option<RateLimitInfo>>,
}

impl ClashClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: build_http_client(&config.token, config.timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rate_limit: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rate-limit headers seen on the most recent response, if the API sent any.
    pub fn rate_limit_info(&self) -> Option<RateLimitInfo> {
        self.rate_limit.lock().ok().and_then(|guard| guard.clone())
    }

    /// Fetch one page of candidates and the full profile of each.
    ///
    /// Listing entries below `min_trophies` are dropped without a profile
    /// fetch. Malformed entries and profiles that 404 or fail to parse are
    /// skipped; auth, rate-limit and network failures abort the batch.
    pub async fn fetch_candidates(&self, search: &CandidateSearch) -> Result<CandidateBatch> {
        let resource = search.source.to_string();
        let body = self
            .get_text(&search.source.endpoint(), &search.query(), &resource)
            .await?;
        let listing: ItemsEnvelope<Value> = parse_body(&body, &resource)?;

        let mut records = Vec::with_capacity(listing.items.len());
        let mut skipped = 0;

        for item in listing.items {
            let listed: ListedPlayer = match serde_json::from_value(item) {
                Ok(l) => l,
                Err(e) => {
                    tracing::warn!("Skipping malformed entry in {}: {}", resource, e);
                    skipped += 1;
                    continue;
                }
            };

            if !search.admits(&listed) {
                tracing::debug!(
                    "{} has {} trophies, below the search minimum",
                    listed.tag,
                    listed.trophies
                );
                continue;
            }

            match self.get_player(&listed.tag).await {
                Ok(record) => records.push(record),
                Err(e) if e.is_skippable() => {
                    tracing::warn!("Skipping {}: {}", listed.tag, e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            "{}: {} candidates, {} skipped",
            resource,
            records.len(),
            skipped
        );
        Ok(CandidateBatch::new(records, skipped))
    }

    /// `GET /players/{tag}`
    pub async fn get_player(&self, tag: &PlayerTag) -> Result<PlayerRecord> {
        let resource = format!("player {}", tag);
        let path = format!("/players/{}", tag.url_encoded());
        let body = self.get_text(&path, &[], &resource).await?;
        let player: ApiPlayer = parse_body(&body, &resource)?;
        Ok(player.into())
    }

    /// `GET /clans/{tag}`
    pub async fn get_clan(&self, tag: &ClanTag) -> Result<ClanDetails> {
        let resource = format!("clan {}", tag);
        let path = format!("/clans/{}", tag.url_encoded());
        let body = self.get_text(&path, &[], &resource).await?;
        parse_body(&body, &resource)
    }

    /// `GET /clans` with search filters
    pub async fn search_clans(&self, params: &ClanSearchParams) -> Result<Vec<ClanSummary>> {
        let body = self.get_text("/clans", &params.query(), "clan search").await?;
        let envelope: ItemsEnvelope<ClanSummary> = parse_body(&body, "clan search")?;
        Ok(envelope.items)
    }

    /// `GET /locations`
    pub async fn get_locations(&self) -> Result<Vec<Location>> {
        let body = self.get_text("/locations", &[], "locations").await?;
        let envelope: ItemsEnvelope<Location> = parse_body(&body, "locations")?;
        Ok(envelope.items)
    }

    /// Cheap authenticated probe against `/locations`.
    pub async fn test_connection(&self) -> Result<()> {
        self.get_text("/locations", &[("limit", "1".to_string())], "locations")
            .await
            .map(|_| ())
    }

    async fn get_text(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        self.record_rate_limit(&headers);

        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(classify_status(status, &headers, &body, resource))
        }
    }

    fn record_rate_limit(&self, headers: &HeaderMap) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let info = RateLimitInfo {
            remaining: header(RATE_LIMIT_REMAINING),
            reset: header(RATE_LIMIT_RESET),
        };
        if info.remaining.is_none() && info.reset.is_none() {
            return;
        }
        if let Ok(mut guard) = self.rate_limit.lock() {
            *guard = Some(info);
        }
    }
}

fn parse_body<T: DeserializeOwned>(body: &str, resource: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ClashError::malformed(resource, e))
}

/// Map a non-success response onto an error variant.
pub fn classify_status(
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
    resource: &str,
) -> ClashError {
    let api_error: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let summary = api_error
        .summary()
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "unknown error".to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClashError::Auth {
            status: status.as_u16(),
            message: summary,
        },
        StatusCode::TOO_MANY_REQUESTS => ClashError::RateLimited {
            retry_after: headers
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok()),
        },
        StatusCode::NOT_FOUND => ClashError::NotFound {
            resource: resource.to_string(),
        },
        _ => ClashError::Api {
            status: status.as_u16(),
            reason: summary,
        },
    }
}
