use ripe_ip_checker::cli::{parse_args, Invocation};
use ripe_ip_checker::config::Config;
use ripe_ip_checker::logging::init_logging;
use ripe_ip_checker::{search_public_networks, CheckError, RipeStatProvider};
use std::process::ExitCode;

fn fail(e: &CheckError) -> ExitCode {
    if let Some(detail) = e.detail() {
        log::debug!("{e}: {detail}");
    }
    eprintln!("{e}");
    ExitCode::FAILURE
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("Error initializing logging: {e}");
    }
    log::info!("#Start main()");

    let cli = match parse_args(std::env::args_os()) {
        Ok(Invocation::Check(cli)) => cli,
        Ok(Invocation::Informational(info)) => {
            if let Err(e) = info.print() {
                log::warn!("Error printing {}: {e}", info.kind());
                return ExitCode::FAILURE;
            }
            return ExitCode::SUCCESS;
        }
        Err(e) => return fail(&e),
    };

    let provider = RipeStatProvider::from_config(&config);
    match search_public_networks(&cli.ip, &provider).await {
        Ok(verdict) => {
            println!("{verdict}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}
