//! Command implementations for the clan inviter CLI

pub mod check_player;
pub mod clan_search;
pub mod common;
pub mod invite;
pub mod status;
