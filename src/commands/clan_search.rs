//! Clan search command

use crate::{
    clash::types::{ClanSearchParams, ClanSummary},
    core::AppConfig,
    Result,
};

use super::common::build_client;

pub async fn handle_search_clans(
    config: &AppConfig,
    params: &ClanSearchParams,
    as_json: bool,
) -> Result<Vec<ClanSummary>> {
    let client = build_client(config)?;
    let clans = client.search_clans(params).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&clans)?);
    } else if clans.is_empty() {
        println!("No clans matched");
    } else {
        for clan in &clans {
            println!(
                "{:<12} {:<24} level {:>2}  members {:>2}  points {:>6}  war {}",
                clan.tag,
                clan.name,
                clan.clan_level,
                clan.members,
                clan.clan_points,
                clan.war_frequency.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(clans)
}
