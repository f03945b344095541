//! Error kinds for a lookup.
//!
//! The `Display` text of each variant is exactly what the command line prints.
//! The underlying cause travels in the variant fields for logging only.

use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Missing or surplus command line argument.
    #[error("Usage: {program} <IP>")]
    Usage { program: String },

    /// Token is not a dotted-quad IPv4 address.
    #[error("Not a Valid IPv4 address")]
    InvalidAddress { token: String },

    /// Well-formed address inside a private or loopback range.
    #[error("This IP address is for a private network")]
    PrivateAddress { addr: Ipv4Addr },

    /// Transport failure, non-2xx status or an undecodable response body.
    #[error("Error making API call")]
    ProviderError { detail: String },

    /// Response envelope has the wrong shape, or a prefix failed to parse.
    #[error("Response JSON is invalid or an error occurred when converting a CIDR address")]
    DataError { detail: String },
}

impl CheckError {
    /// The underlying cause, when there is one beyond the user message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            CheckError::InvalidAddress { token } => Some(token.as_str()),
            CheckError::ProviderError { detail } | CheckError::DataError { detail } => {
                Some(detail.as_str())
            }
            CheckError::Usage { .. } | CheckError::PrivateAddress { .. } => None,
        }
    }
}
