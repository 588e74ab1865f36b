//! Core - configuration, shared state, bootstrap errors, server loop
//!
//! - [`Config`] - environment configuration
//! - [`ServerState`] - handles shared by every request
//! - [`Server`] - HTTP listener
//! - [`ServerError`] - startup/serve failures

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, LogConfig};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
