use clap::Parser;
use std::io;

use todo_server::config::{Cli, ServerConfig};
use todo_server::logging::{init_logging, init_logging_with_filter};
use todo_server::run_server;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        init_logging_with_filter(level);
    } else {
        init_logging(cli.debug);
    }

    let config = ServerConfig::from(&cli);
    log::info!("Starting Todo Server on port {}", config.port);
    if cli.debug {
        log::debug!("Server configuration: {:?}", config);
    }

    run_server(config).await
}
