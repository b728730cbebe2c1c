//! Clan recruiting helper for the game's public API
//!
//! Pulls candidate players from the official REST API, checks each one
//! against configurable thresholds and hands the accepted ones to an
//! invite collaborator, until a user-chosen number of invites is reached.
//!
//! ## Features
//!
//! - **Player Data Client**: authenticated requests with typed errors for bad
//!   tokens, throttling, network failures and malformed payloads
//! - **Eligibility Filter**: pure accept/reject decision on town hall,
//!   trophies, troop levels and optional clan/experience rules
//! - **Invite Session**: cycles through candidate searches, evaluates every
//!   player once, and stops at the target
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clash_inviter::{
//!     eligibility::{is_eligible, FilterCriteria},
//!     ClashClient, ClientConfig, PlayerTag,
//! };
//!
//! # async fn example() -> clash_inviter::Result<()> {
//! let client = ClashClient::new(&ClientConfig::new("my-token"))?;
//! let player = client.get_player(&PlayerTag::new("#2PP")?).await?;
//!
//! if is_eligible(&player, &FilterCriteria::default()) {
//!     println!("{} is worth an invite", player.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CLASH_API_TOKEN=eyJ0eXAiOiJKV1Qi...
//! ```

pub mod automation;
pub mod clash;
pub mod cli;
pub mod commands;
pub mod core;
pub mod eligibility;
pub mod error;

// Re-export commonly used types
pub use clash::{types::PlayerRecord, ClashClient, ClientConfig};
pub use cli::types::{ClanTag, InviteCount, PlayerTag};
pub use error::{ClashError, Result};

pub use crate::core::config::TOKEN_ENV_VAR;
