//! Switchboard CLI and REST API entry point.
//!
//! Binary name: `switchboard`
//!
//! Parses CLI arguments, loads configuration and credentials, then picks the
//! deployment's intent taxonomy and dispatches to the command handler or
//! starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;

use switchboard_core::routing::persona::PersonaProfile;
use switchboard_infra::config::{ProviderCredentials, load_config};
use switchboard_observe::tracing_setup::{
    TracingOptions, default_filter, init_tracing, shutdown_tracing,
};
use switchboard_types::config::AppConfig;
use switchboard_types::intent::{Deployment, SalesIntent, SupportIntent};

use cli::{Cli, Commands, LogFormat};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingOptions {
        default_filter: default_filter(cli.verbose, cli.quiet).to_string(),
        json: cli.log_format == LogFormat::Json,
        otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let mut config = load_config(cli.config.as_deref()).await;
    if let Some(deployment) = cli.deployment {
        config.deployment = deployment;
    }
    let credentials = ProviderCredentials::from_env();
    tracing::debug!(?credentials, deployment = %config.deployment, "starting");

    let result = match config.deployment {
        Deployment::Support => run::<SupportIntent>(cli, config, &credentials).await,
        Deployment::Sales => run::<SalesIntent>(cli, config, &credentials).await,
    };

    shutdown_tracing();
    result
}

async fn run<I: PersonaProfile>(
    cli: Cli,
    config: AppConfig,
    credentials: &ProviderCredentials,
) -> anyhow::Result<()> {
    let state = AppState::<I>::init(config, credentials);

    match cli.command {
        Commands::Ask {
            message,
            customer_id,
        } => {
            cli::ask::ask(&state, &customer_id, &message, cli.json).await?;
        }

        Commands::Demo => {
            cli::demo::demo(&state, cli.json).await?;
        }

        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| state.config.host.clone());
            let port = port.unwrap_or(state.config.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Switchboard ({}) listening on {}",
                    console::style("⚡").bold(),
                    I::DEPLOYMENT,
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, deployment = %I::DEPLOYMENT, "server listening");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
///
/// A handler that cannot be installed never fires; the other one still does.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
