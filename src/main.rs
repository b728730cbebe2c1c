//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use clash_inviter::{
    cli::{ClashInviter, Commands},
    commands::{
        check_player::handle_check,
        clan_search::handle_search_clans,
        common::prompt_invite_count,
        invite::handle_invite,
        status::{handle_criteria, handle_locations, handle_ping},
    },
    core::{init_logger, AppConfig},
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = ClashInviter::parse();
    init_logger(app.verbose);

    let config = AppConfig::load(app.config.as_deref())?;

    match app.command {
        Commands::Invite => {
            let count = {
                let stdin = std::io::stdin();
                prompt_invite_count(&mut stdin.lock(), &mut std::io::stdout())?
            };
            handle_invite(&config, count).await?;
        }

        Commands::Check { tags, json } => {
            handle_check(&config, &tags, json).await?;
        }

        Commands::SearchClans { filters, json } => {
            handle_search_clans(&config, &filters.into(), json).await?;
        }

        Commands::Ping => handle_ping(&config).await?,

        Commands::Criteria => handle_criteria(&config)?,

        Commands::Locations { countries, json } => {
            handle_locations(&config, countries, json).await?;
        }
    }

    Ok(())
}
