use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::db::{init_db, Database};
use crate::errors::PipelineError;
use crate::images::ImageResolver;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use std::net::SocketAddr;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod cli;
mod config;
mod dashboard;
mod db;
mod domain;
mod errors;
mod images;
mod ranking;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phone_ranker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.command.apply(&mut config);
    config.validate()?;

    let paths = &config.paths;
    match cli.command {
        Command::Normalize { .. } => {
            catalog::normalize_catalog(&config.catalog, &paths.raw_input, &paths.normalized_output)?;
        }
        Command::Rank { .. } => {
            ranking::rank_catalog(&config, &paths.normalized_output, &paths.ranked_output)?;
        }
        Command::Run { .. } => {
            catalog::normalize_catalog(&config.catalog, &paths.raw_input, &paths.normalized_output)?;
            ranking::rank_catalog(&config, &paths.normalized_output, &paths.ranked_output)?;
        }
        Command::Serve { .. } => serve(&config)?,
    }

    Ok(())
}

fn serve(config: &AppConfig) -> Result<(), PipelineError> {
    // 1️⃣ Image cache
    let cache = Database::new(config.dashboard.image_cache.as_str());
    init_db(&cache).map_err(|e| PipelineError::Cache(e.to_string()))?;

    // 2️⃣ Search client + ranked table
    let search = images::search_client(&config.search)
        .map_err(|e| PipelineError::Config(format!("image search: {e}")))?;
    let dashboard = Dashboard::load(
        &config.paths.ranked_output,
        ImageResolver::new(search, cache),
        &config.catalog.currency_symbol,
    );

    // 3️⃣ Start the server
    let addr: SocketAddr = config.dashboard.addr.parse().map_err(|e| {
        PipelineError::Config(format!("bad dashboard address '{}': {e}", config.dashboard.addr))
    })?;
    info!("Starting dashboard at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    server.serve(move |req: astra::Request, _info| {
        let path = req.uri().path().to_string();
        match handle(req, &dashboard) {
            Ok(resp) => resp,
            Err(err) => {
                warn!("{path}: {err}");
                templates::html_error_response(err)
            }
        }
    })?;

    info!("Server shut down cleanly.");
    Ok(())
}
