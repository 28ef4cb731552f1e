// airwave-api: Async Rust client for the Aruba AirWave (AMP) XML API

pub mod aps;
pub mod auth;
pub mod client;
pub mod clients;
pub mod endpoints;
pub mod error;
pub mod query;
pub mod response;
pub mod rogues;
pub mod transport;

pub use client::AirWaveClient;
pub use endpoints::Endpoint;
pub use error::Error;
pub use response::ApiResponse;
pub use transport::{Scheme, TlsMode, TransportConfig};
