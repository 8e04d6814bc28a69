//! Core module - server configuration, state and lifecycle
//!
//! # Module structure
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared server state
//! - [`Server`] - HTTP server

pub mod config;
pub mod middleware;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::{DataVersions, ServerState, SummaryCache, SummaryKey};
