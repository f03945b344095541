//! Command line arguments.

use crate::error::CheckError;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

/// Check whether an IPv4 address is inside a US prefix announced via RIPEstat.
#[derive(Parser, Debug)]
#[command(version, override_usage = "ripe-ip-checker <IP>")]
pub struct Cli {
    /// IPv4 address in dotted-quad form
    #[arg(value_name = "IP", allow_hyphen_values = true)]
    pub ip: String,
}

#[derive(Debug)]
pub enum Invocation {
    /// Run a lookup.
    Check(Cli),
    /// `--help` or `--version`; print and exit successfully.
    Informational(clap::Error),
}

/// Parse `args` (including the program name).
///
/// Any argument error becomes [`CheckError::Usage`] naming the program as it
/// was invoked.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, CheckError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());

    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok(Invocation::Check(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Informational(e))
        }
        Err(e) => {
            log::debug!("argument error: {}", e.kind());
            Err(CheckError::Usage { program })
        }
    }
}

fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|a| Path::new(a).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
