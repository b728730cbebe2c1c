//! Invite session: fetch candidates, decide, invite, repeat until the target is met.
//!
//! The session walks every configured search once per cycle. Each candidate
//! tag is evaluated at most once per session, so later cycles only look at
//! players that newly showed up in a listing.
//!
//! Failure handling:
//! - auth errors end the session immediately
//! - rate limiting pauses (for `Retry-After` or the configured backoff) and
//!   moves on to the next search
//! - any other search failure is reported and the next search runs
//! - an invite that fails is reported and does not count towards the target

use std::{collections::HashSet, fmt, time::Duration};

use serde::Serialize;

use crate::{
    automation::{Inviter, LogInviter},
    cli::types::InviteCount,
    clash::{types::CandidateSearch, ClashClient},
    core::AppConfig,
    eligibility::{FilterCriteria, InviteResult},
    ClashError, Result,
};

use super::common::build_client;

/// Everything one session needs besides the client and the inviter.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    pub target: InviteCount,
    pub criteria: FilterCriteria,
    pub searches: Vec<CandidateSearch>,
    pub max_cycles: u32,
    pub rate_limit_backoff: Duration,
}

impl SessionPlan {
    pub fn from_config(config: &AppConfig, target: InviteCount) -> Self {
        Self {
            target,
            criteria: config.criteria.clone(),
            searches: config.searches.clone(),
            max_cycles: config.session.max_cycles,
            rate_limit_backoff: config.session.rate_limit_backoff(),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct SessionStats {
    pub target: u32,
    pub invited: u32,
    pub evaluated: usize,
    pub rejected: usize,
    /// Listing entries or profiles that could not be used
    pub skipped: usize,
    pub failed_searches: usize,
    pub cycles: u32,
    pub invited_players: Vec<InviteResult>,
}

impl SessionStats {
    fn new(target: InviteCount) -> Self {
        Self {
            target: target.as_u32(),
            ..Self::default()
        }
    }

    pub fn target_reached(&self) -> bool {
        self.invited >= self.target
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invited: {}/{}", self.invited, self.target)?;
        writeln!(
            f,
            "Evaluated: {} (rejected {}, skipped {})",
            self.evaluated, self.rejected, self.skipped
        )?;
        write!(
            f,
            "Cycles: {}, failed searches: {}",
            self.cycles, self.failed_searches
        )
    }
}

/// Run one invite session against the API.
pub async fn run_invite_session<I: Inviter>(
    client: &ClashClient,
    inviter: &mut I,
    plan: &SessionPlan,
) -> Result<SessionStats> {
    let mut stats = SessionStats::new(plan.target);
    let mut seen = HashSet::new();

    'cycles: for cycle in 1..=plan.max_cycles {
        stats.cycles = cycle;
        let mut fresh = 0usize;
        let mut throttled = false;

        for search in &plan.searches {
            if stats.target_reached() {
                break 'cycles;
            }
            tracing::info!("Cycle {}: processing {}", cycle, search.source);

            let batch = match client.fetch_candidates(search).await {
                Ok(batch) => batch,
                Err(e) if e.is_fatal() => return Err(e),
                Err(ClashError::RateLimited { retry_after }) => {
                    let pause = retry_after
                        .map(Duration::from_secs)
                        .unwrap_or(plan.rate_limit_backoff);
                    tracing::warn!(
                        "Rate limited on {}, pausing {}s",
                        search.source,
                        pause.as_secs()
                    );
                    stats.failed_searches += 1;
                    throttled = true;
                    tokio::time::sleep(pause).await;
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Error processing {}: {}", search.source, e);
                    stats.failed_searches += 1;
                    continue;
                }
            };

            stats.skipped += batch.skipped();

            for record in batch {
                if stats.target_reached() {
                    break;
                }
                if !seen.insert(record.tag.clone()) {
                    continue;
                }
                fresh += 1;
                stats.evaluated += 1;

                let result = InviteResult::from_evaluation(&record, &plan.criteria);
                if !result.accepted {
                    tracing::debug!("{}", result);
                    stats.rejected += 1;
                    continue;
                }

                match inviter.invite(&record) {
                    Ok(()) => {
                        stats.invited += 1;
                        tracing::info!(
                            "[invited] {}/{} {}",
                            stats.invited,
                            stats.target,
                            record.tag
                        );
                        stats.invited_players.push(result);
                    }
                    Err(e) => tracing::warn!("Could not invite {}: {}", record.tag, e),
                }
            }
        }

        if stats.target_reached() {
            break;
        }
        if fresh == 0 && !throttled {
            tracing::info!("No new candidates in cycle {}, stopping", cycle);
            break;
        }
    }

    Ok(stats)
}

/// Handle the invite command: wait for the emulator focus, run, report.
pub async fn handle_invite(config: &AppConfig, target: InviteCount) -> Result<SessionStats> {
    let client = build_client(config)?;
    let plan = SessionPlan::from_config(config, target);

    println!("Target: {} players", target);
    let delay = config.session.focus_delay();
    if !delay.is_zero() {
        println!(
            "Please focus the emulator window, starting in {} seconds...",
            delay.as_secs()
        );
        tokio::time::sleep(delay).await;
    }

    let mut inviter = LogInviter::new();
    let stats = run_invite_session(&client, &mut inviter, &plan).await?;

    if stats.target_reached() {
        println!("✓ All players invited!");
    } else {
        println!("⚠ Stopped before reaching the target");
    }
    println!("{}", stats);

    Ok(stats)
}
