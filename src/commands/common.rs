//! Common utilities shared across commands.

use std::io::{BufRead, Write};

use crate::{
    cli::types::InviteCount, clash::ClashClient, core::AppConfig, ClashError, Result,
};

pub const COUNT_PROMPT: &str = "Number of players to invite: ";

/// Build an API client from the loaded configuration.
pub fn build_client(config: &AppConfig) -> Result<ClashClient> {
    ClashClient::new(&config.client_config()?)
}

/// Ask for the invite target until a positive number is entered.
///
/// Invalid lines re-prompt. End of input is an error.
pub fn prompt_invite_count<R, W>(input: &mut R, output: &mut W) -> Result<InviteCount>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{COUNT_PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ClashError::InputClosed);
        }

        match line.parse::<InviteCount>() {
            Ok(count) => return Ok(count),
            Err(_) => writeln!(output, "⚠ Please enter a valid positive number!")?,
        }
    }
}
