use gradebox::cli::{handle_evaluate, resolve_config, CliArgs};
use gradebox::{init_logging, VERSION};

use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    init_logging(config.logging_config());

    debug!("gradebox v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_evaluate(&args, &config).await;

    std::process::exit(exit_code);
}
