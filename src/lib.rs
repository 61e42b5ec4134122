//! Adapter between a generic card payment vocabulary and the Xendit card API.
//!
//! The crate is layered the same way as the rest of the workspace:
//!
//! - [`domain`] holds the value types (cards, addresses, payloads, responses)
//!   and the [`domain::ports::Transport`] port.
//! - [`application`] builds request payloads, interprets processor responses
//!   and drives the six gateway operations.
//! - [`infrastructure`] provides the `reqwest` transport and an in-memory
//!   scripted transport.
//! - [`interfaces`] reads payment intents for the command line binary.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::gateway::XenditGateway;
pub use config::{Credentials, GatewayConfig};
pub use error::{GatewayError, Result};
