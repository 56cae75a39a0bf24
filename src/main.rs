use std::process::ExitCode;

use tracing::info;

use tinyql::cli::Cli;
use tinyql::server::{respond, Server, ServerConfig};
use tinyql::logging;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let config = cli.server_config();

    logging::init(&cli.log_level, config.color)?;

    if let Some(query) = &cli.query {
        // Non-interactive mode
        return Ok(run_query(&config, query));
    }

    run_server(config)?;
    Ok(ExitCode::SUCCESS)
}

fn run_query(config: &ServerConfig, query: &str) -> ExitCode {
    let response = respond(config.dialect, query);
    println!("{}", response.payload());

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let server = Server::bind(config).await?;
        server
            .run_until(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!(error = %e, "failed to listen for shutdown signal");
                    std::future::pending::<()>().await;
                }
                info!("shutdown requested");
            })
            .await
    })?;

    Ok(())
}
