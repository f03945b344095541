//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for representing a prefix (base address plus
//! prefix length) along with the mask arithmetic used for containment checks.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ripe_ip_checker::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// IPv4 prefix in CIDR notation.
///
/// The base address is kept as given; `3.0.0.1/9` is accepted and covers the
/// same range as `3.0.0.0/9`.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The base address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s:?}: {e}")))
    }
}

impl FromStr for Ipv4 {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "3.0.0.0/9").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid address/mask {addr_cidr:?}").into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        // u8::from_str also takes a leading '+'
        if parts[1].is_empty() || !parts[1].bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid prefix length {}", parts[1]).into());
        }
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid prefix length {}", parts[1]))?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The subnet mask as u32, with the prefix length clamped to 32.
    fn netmask(&self) -> u32 {
        get_cidr_mask(self.mask.min(MAX_LENGTH)).unwrap_or(u32::MAX)
    }

    /// Get the lowest (network) address in the prefix.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask.min(MAX_LENGTH)).unwrap_or(self.addr)
    }

    /// Get the highest (broadcast) address in the prefix.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask.min(MAX_LENGTH)).unwrap_or(self.addr)
    }

    /// True when the first `mask` bits of `addr` equal the prefix's network bits.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let mask = self.netmask();
        (u32::from(addr) & mask) == (u32::from(self.addr) & mask)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
