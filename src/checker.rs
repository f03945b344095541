//! Network membership check.
//!
//! [`find_in_networks`] asks a [`PrefixProvider`] once for the prefix list and
//! scans it in order. The first containing prefix wins; a prefix that does not
//! parse aborts the whole check.

use crate::error::CheckError;
use crate::models::{Ipv4, Verdict};
use colored::Colorize;
use std::net::Ipv4Addr;

/// Source of the ordered prefix list.
///
/// [`crate::ripe::RipeStatProvider`] is the real implementation; tests swap
/// in fixed lists.
#[allow(async_fn_in_trait)]
pub trait PrefixProvider {
    /// Fetch prefixes as `a.b.c.d/n` strings, in provider order.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - The prefix list, possibly empty
    /// * `Err(CheckError::ProviderError)` - Transport or body decode failure
    /// * `Err(CheckError::DataError)` - Body decoded but has the wrong shape
    async fn fetch_prefixes(&self) -> Result<Vec<String>, CheckError>;
}

/// Check whether `addr` falls inside any prefix supplied by `provider`.
///
/// The provider is called exactly once. Errors from it are passed through.
pub async fn find_in_networks<P>(addr: Ipv4Addr, provider: &P) -> Result<Verdict, CheckError>
where
    P: PrefixProvider,
{
    let prefixes = provider.fetch_prefixes().await?;
    log::info!("Got {} prefixes from provider", prefixes.len());
    scan_prefixes(addr, &prefixes)
}

/// Linear scan over `prefixes` in order. Stops at the first match.
pub fn scan_prefixes<S>(addr: Ipv4Addr, prefixes: &[S]) -> Result<Verdict, CheckError>
where
    S: AsRef<str>,
{
    for (i, prefix) in prefixes.iter().enumerate() {
        let prefix = prefix.as_ref();
        let network = Ipv4::new(prefix).map_err(|e| {
            log::warn!(
                "{failed} to parse prefix #{i} {prefix:?}: {e}",
                failed = "failed".on_red()
            );
            CheckError::DataError {
                detail: format!("prefix #{i} {prefix:?}: {e}"),
            }
        })?;
        log::trace!("#{i} {network} contains {addr}?");
        if network.contains(addr) {
            log::info!(
                "{addr} {found} in {network} (#{i})",
                found = "found".on_green()
            );
            log::debug!("{network} spans {} - {}", network.lo(), network.hi());
            return Ok(Verdict::Found(network));
        }
    }
    log::info!("{addr} not in any of {} prefixes", prefixes.len());
    Ok(Verdict::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StaticPrefixes {
        prefixes: Vec<&'static str>,
        calls: Cell<usize>,
    }

    impl StaticPrefixes {
        fn new(prefixes: Vec<&'static str>) -> Self {
            StaticPrefixes {
                prefixes,
                calls: Cell::new(0),
            }
        }
    }

    impl PrefixProvider for StaticPrefixes {
        async fn fetch_prefixes(&self) -> Result<Vec<String>, CheckError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.prefixes.iter().map(|p| p.to_string()).collect())
        }
    }

    struct Unreachable;

    impl PrefixProvider for Unreachable {
        async fn fetch_prefixes(&self) -> Result<Vec<String>, CheckError> {
            Err(CheckError::ProviderError {
                detail: "operation timed out".to_string(),
            })
        }
    }

    fn addr(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_found() {
        let provider = StaticPrefixes::new(vec!["3.0.0.0/9", "4.0.0.0/9"]);
        let verdict = find_in_networks(addr("3.0.0.3"), &provider).await.unwrap();
        assert_eq!(verdict, Verdict::Found(Ipv4::new("3.0.0.0/9").unwrap()));
        assert_eq!(verdict.to_string(), "Found");
        assert_eq!(provider.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_not_found() {
        let provider = StaticPrefixes::new(vec!["3.0.0.0/9", "4.0.0.0/9"]);
        let verdict = find_in_networks(addr("230.0.0.3"), &provider)
            .await
            .unwrap();
        assert_eq!(verdict, Verdict::NotFound);
        assert_eq!(verdict.to_string(), "Not Found");
        assert_eq!(provider.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_provider_error_passes_through() {
        let err = find_in_networks(addr("3.0.0.2"), &Unreachable)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::ProviderError { .. }));
        assert_eq!(err.to_string(), "Error making API call");
    }

    #[tokio::test]
    async fn test_bad_prefix_is_data_error() {
        let provider = StaticPrefixes::new(vec!["bad CIDR"]);
        let err = find_in_networks(addr("3.0.0.2"), &provider)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::DataError { .. }));
    }

    #[test]
    fn test_first_match_wins() {
        let prefixes = ["4.0.0.0/9", "3.0.0.0/8", "3.0.0.0/9"];
        let verdict = scan_prefixes(addr("3.0.0.3"), &prefixes).unwrap();
        assert_eq!(verdict.prefix(), Some(Ipv4::new("3.0.0.0/8").unwrap()));
    }

    #[test]
    fn test_stops_after_match() {
        // A malformed entry after the match is never reached.
        let prefixes = ["3.0.0.0/9", "bad CIDR"];
        assert!(scan_prefixes(addr("3.0.0.3"), &prefixes)
            .unwrap()
            .is_found());
    }

    #[test]
    fn test_bad_prefix_before_match_aborts() {
        let prefixes = ["bad CIDR", "3.0.0.0/9"];
        assert!(matches!(
            scan_prefixes(addr("3.0.0.3"), &prefixes),
            Err(CheckError::DataError { .. })
        ));
    }

    #[test]
    fn test_empty_list() {
        let prefixes: [&str; 0] = [];
        assert_eq!(
            scan_prefixes(addr("3.0.0.3"), &prefixes).unwrap(),
            Verdict::NotFound
        );
    }

    #[test]
    fn test_non_canonical_base() {
        let prefixes = ["3.0.0.1/9"];
        assert!(scan_prefixes(addr("3.100.0.1"), &prefixes)
            .unwrap()
            .is_found());
    }
}
