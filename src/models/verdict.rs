//! Lookup outcome.

use super::Ipv4;
use std::fmt;

/// Result of a completed scan. Both variants are successful runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The first prefix, in provider order, that contains the address.
    Found(Ipv4),
    NotFound,
}

impl Verdict {
    pub fn is_found(&self) -> bool {
        matches!(self, Verdict::Found(_))
    }

    pub fn prefix(&self) -> Option<Ipv4> {
        match self {
            Verdict::Found(prefix) => Some(*prefix),
            Verdict::NotFound => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Found(_) => write!(f, "Found"),
            Verdict::NotFound => write!(f, "Not Found"),
        }
    }
}
