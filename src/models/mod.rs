//! Domain models for the prefix lookup.
//!
//! - [`Ipv4`] - IPv4 prefix with CIDR notation support
//! - [`Verdict`] - Outcome of a successful lookup

mod ipv4;
mod verdict;

// Re-export public types
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use verdict::Verdict;
