//! Check individual players against the configured criteria.

use crate::{
    cli::types::PlayerTag, core::AppConfig, eligibility::InviteResult, Result,
};

use super::common::build_client;

/// Fetch each player and print the eligibility decision.
///
/// Unknown tags and unparseable profiles are reported and skipped; any other
/// error ends the command.
pub async fn handle_check(
    config: &AppConfig,
    tags: &[PlayerTag],
    as_json: bool,
) -> Result<Vec<InviteResult>> {
    let client = build_client(config)?;
    let mut results = Vec::with_capacity(tags.len());

    for tag in tags {
        match client.get_player(tag).await {
            Ok(record) => results.push(InviteResult::from_evaluation(&record, &config.criteria)),
            Err(e) if e.is_skippable() => eprintln!("⚠ {}: {}", tag, e),
            Err(e) => return Err(e),
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            let mark = if result.accepted { "✓" } else { "✗" };
            println!("{} {}", mark, result);
        }
    }

    Ok(results)
}
