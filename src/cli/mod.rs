//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::PlayerTag;

use crate::clash::types::ClanSearchParams;

#[derive(Debug, Parser)]
#[clap(
    name = "clash-inviter",
    about = "Find and invite players that meet your clan's requirements"
)]
pub struct ClashInviter {
    /// Config file (or set `CLASH_INVITER_CONFIG`).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an invite session; asks how many players to invite.
    Invite,

    /// Check players against the configured criteria.
    Check {
        /// Player tags, with or without the leading `#`.
        #[clap(required = true)]
        tags: Vec<PlayerTag>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Search clans by name and size.
    SearchClans {
        #[clap(flatten)]
        filters: ClanSearchArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Test the API token and show rate-limit headers.
    Ping,

    /// Print the criteria the invite session applies.
    Criteria,

    /// List location ids usable in `location_ranking` searches.
    Locations {
        /// Only list countries.
        #[clap(long)]
        countries: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

/// Filters for `GET /clans`
#[derive(Debug, Args)]
pub struct ClanSearchArgs {
    /// Clan name (at least three characters).
    #[clap(long, short)]
    pub name: Option<String>,

    /// War frequency, e.g. `always` or `oncePerWeek`.
    #[clap(long)]
    pub war_frequency: Option<String>,

    #[clap(long)]
    pub min_members: Option<u32>,

    #[clap(long)]
    pub max_members: Option<u32>,

    #[clap(long)]
    pub min_clan_points: Option<u32>,

    #[clap(long)]
    pub min_clan_level: Option<u32>,

    /// Maximum number of clans returned.
    #[clap(long, short, default_value_t = 20)]
    pub limit: u32,
}

impl From<ClanSearchArgs> for ClanSearchParams {
    fn from(args: ClanSearchArgs) -> Self {
        Self {
            name: args.name,
            war_frequency: args.war_frequency,
            min_members: args.min_members,
            max_members: args.max_members,
            min_clan_points: args.min_clan_points,
            min_clan_level: args.min_clan_level,
            limit: args.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invite() {
        let app = ClashInviter::try_parse_from(["clash-inviter", "invite"]).unwrap();
        assert!(matches!(app.command, Commands::Invite));
        assert!(app.config.is_none());
        assert!(!app.verbose);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let app =
            ClashInviter::try_parse_from(["clash-inviter", "ping", "--config", "my.toml", "-v"])
                .unwrap();
        assert_eq!(app.config, Some(PathBuf::from("my.toml")));
        assert!(app.verbose);
    }

    #[test]
    fn test_parse_check_normalizes_tags() {
        let app =
            ClashInviter::try_parse_from(["clash-inviter", "check", "2pp", "#q8vrj", "--json"])
                .unwrap();
        match app.command {
            Commands::Check { tags, json } => {
                assert!(json);
                let tags: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
                assert_eq!(tags, vec!["#2PP", "#Q8VRJ"]);
            }
            other => panic!("Expected Check, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_rejects_bad_tag() {
        assert!(ClashInviter::try_parse_from(["clash-inviter", "check", "not-a-tag"]).is_err());
    }

    #[test]
    fn test_parse_check_requires_tag() {
        assert!(ClashInviter::try_parse_from(["clash-inviter", "check"]).is_err());
    }

    #[test]
    fn test_parse_search_clans() {
        let app = ClashInviter::try_parse_from([
            "clash-inviter",
            "search-clans",
            "--name",
            "owls",
            "--min-members",
            "10",
        ])
        .unwrap();
        match app.command {
            Commands::SearchClans { filters, json } => {
                assert!(!json);
                let params = ClanSearchParams::from(filters);
                assert_eq!(params.name.as_deref(), Some("owls"));
                assert_eq!(params.min_members, Some(10));
                assert_eq!(params.limit, 20);
            }
            other => panic!("Expected SearchClans, got {other:?}"),
        }
    }

    #[test]
    fn test_invite_takes_no_count_flag() {
        assert!(ClashInviter::try_parse_from(["clash-inviter", "invite", "--count", "5"]).is_err());
    }

    #[test]
    fn test_parse_locations() {
        let app =
            ClashInviter::try_parse_from(["clash-inviter", "locations", "--countries"]).unwrap();
        assert!(matches!(
            app.command,
            Commands::Locations {
                countries: true,
                json: false
            }
        ));
    }
}
