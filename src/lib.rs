// cargo watch -x 'fmt' -x 'run -- 8.8.8.8'

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod ripe;
pub mod validator;

pub use checker::{find_in_networks, scan_prefixes, PrefixProvider};
pub use error::CheckError;
pub use models::{Ipv4, Verdict};
pub use ripe::RipeStatProvider;
pub use validator::{classify, is_private};

/// Validate `token` and look it up in the prefixes from `provider`.
///
/// The provider is only called once `token` is known to be a public IPv4
/// address.
pub async fn search_public_networks<P>(token: &str, provider: &P) -> Result<Verdict, CheckError>
where
    P: PrefixProvider,
{
    let addr = classify(token)?;
    log::info!("#Start lookup of {addr}");
    find_in_networks(addr, provider).await
}
