//! Address validation and private range classification.

use crate::error::CheckError;
use crate::models::Ipv4;
use std::net::Ipv4Addr;

/// Ranges rejected as private. Loopback is included.
pub const PRIVATE_RANGES: [Ipv4; 4] = [
    Ipv4 {
        addr: Ipv4Addr::new(10, 0, 0, 0),
        mask: 8,
    },
    Ipv4 {
        addr: Ipv4Addr::new(172, 16, 0, 0),
        mask: 12,
    },
    Ipv4 {
        addr: Ipv4Addr::new(192, 168, 0, 0),
        mask: 16,
    },
    Ipv4 {
        addr: Ipv4Addr::new(127, 0, 0, 0),
        mask: 8,
    },
];

pub fn is_private(addr: Ipv4Addr) -> bool {
    PRIVATE_RANGES.iter().any(|range| range.contains(addr))
}

/// Parse `token` as a dotted-quad IPv4 address and reject private addresses.
///
/// # Returns
/// * `Ok(Ipv4Addr)` - A public address, ready for lookup
/// * `Err(CheckError::InvalidAddress)` - Token is not a dotted-quad address
/// * `Err(CheckError::PrivateAddress)` - Address is in [`PRIVATE_RANGES`]
pub fn classify(token: &str) -> Result<Ipv4Addr, CheckError> {
    let addr: Ipv4Addr = token.parse().map_err(|_| {
        log::debug!("not an IPv4 address: {token:?}");
        CheckError::InvalidAddress {
            token: token.to_string(),
        }
    })?;

    if is_private(addr) {
        log::info!("{addr} is in a private range");
        return Err(CheckError::PrivateAddress { addr });
    }

    Ok(addr)
}
