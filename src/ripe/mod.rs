//! RIPEstat data provider.
//!
//! - [`client`] - HTTP client implementing [`crate::checker::PrefixProvider`]
//! - [`envelope`] - Response body decoding

mod client;
mod envelope;

// Re-export public types and functions
pub use client::RipeStatProvider;
pub use envelope::parse_envelope;
