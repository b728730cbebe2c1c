//! Connection check, location listing and effective-criteria output.

use crate::{clash::types::Location, core::AppConfig, Result};

use super::common::build_client;

/// Probe the API with the configured token and print rate-limit headers.
pub async fn handle_ping(config: &AppConfig) -> Result<()> {
    let client = build_client(config)?;
    println!("Testing connection to {}...", client.base_url());

    client.test_connection().await?;
    println!("✓ API connection OK");

    if let Some(info) = client.rate_limit_info() {
        println!(
            "Rate limit: remaining {}, reset {}",
            info.remaining.as_deref().unwrap_or("-"),
            info.reset.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Print the criteria the invite session would apply.
pub fn handle_criteria(config: &AppConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&config.criteria)?);
    Ok(())
}

/// List locations, optionally countries only.
pub async fn handle_locations(
    config: &AppConfig,
    countries_only: bool,
    as_json: bool,
) -> Result<Vec<Location>> {
    let client = build_client(config)?;
    let mut locations = client.get_locations().await?;
    if countries_only {
        locations.retain(|l| l.is_country);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
    } else {
        for location in &locations {
            println!(
                "{:>8}  {:<4} {}",
                location.id,
                location.country_code.as_deref().unwrap_or("-"),
                location.name
            );
        }
    }

    Ok(locations)
}
