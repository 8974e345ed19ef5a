use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;

use check_elasticsearch::{load_config, CheckResult, CheckRunner, Cli, HttpFetcher, Severity, ThresholdTable};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return report(CheckResult::new(Severity::Unknown, "invalid arguments"));
        }
    };

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => return report(CheckResult::new(Severity::Unknown, format!("{:#}", e))),
    };
    info!(check = ?cfg.check, client_node = %cfg.client_node, "starting check");

    let fetcher = HttpFetcher::new();
    let thresholds = ThresholdTable::defaults();
    let result = CheckRunner::new(&fetcher, &cfg, &thresholds).run().await;
    report(result)
}

// The only place that writes to stdout.
fn report(result: CheckResult) -> ExitCode {
    println!("{}", result.line());
    ExitCode::from(result.exit_code())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
