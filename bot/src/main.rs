mod bot_config;
mod session_router;
mod session_store;
mod web_server;
mod ws_handler;

use clap::Parser;
use common::{log, logger};

use bot_config::get_config_manager;
use session_router::SessionRouter;
use session_store::SessionStore;
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_bot")]
struct Args {
    #[arg(long, default_value = bot_config::DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Bot".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_config()?;

    let sessions = SessionStore::new();
    let router = SessionRouter::new(sessions.clone(), config.greeting.clone());

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        log!("Shutdown signal received");
    };

    run_web_server(&config.listen_address, router, sessions, shutdown_signal).await;

    log!("Bot shut down gracefully");

    Ok(())
}
