//! Core utilities for the clan inviter
//!
//! This module consolidates the ambient plumbing used across the application:
//! - `config`: TOML configuration and token resolution
//! - `http`: authenticated `reqwest` client construction
//! - `logging`: `tracing` subscriber setup

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used items for convenience
pub use config::{AppConfig, SessionConfig, TOKEN_ENV_VAR};
pub use http::{auth_header_map, build_http_client};
pub use logging::init_logger;
