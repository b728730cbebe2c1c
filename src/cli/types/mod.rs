//! Type-safe wrappers for game identifiers and user input.

pub mod count;
pub mod tags;

#[cfg(test)]
mod tests;

pub use count::InviteCount;
pub use tags::{ClanTag, PlayerTag};
