//! Game API client and response types.

pub mod http;
pub mod types;

pub use http::{CandidateBatch, ClashClient, ClientConfig};
