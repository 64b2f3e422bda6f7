//! Client side of the presence analyzer HTTP API.
//!
//! The dashboard never talks to the network directly; it goes through the
//! [`PresenceSource`] trait so pages can be driven by the real backend
//! ([`HttpClient`]) or by an in-memory fixture ([`MemorySource`]).

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod memory;
pub mod model;
pub mod source;

pub use client::HttpClient;
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::{ApiError, ApiResult};
pub use memory::MemorySource;
pub use model::{MeanTimeRow, PresenceDayRow, StartEndRow, TableValue, User};
pub use source::PresenceSource;
