use std::path::Path;
use std::sync::Arc;

use tokio::signal;
use tracing::info;

use game_server::config::Config;
use game_server::store::{CountryIndex, GameStore};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Globe Arena server...");

    let config = Config::new();

    let countries = match CountryIndex::load(Path::new(&config.countries_file)) {
        Ok(index) => Arc::new(index),
        Err(e) => {
            tracing::error!(
                "Failed to load countries from '{}': {}",
                config.countries_file,
                e
            );
            tracing::error!("The server cannot pick answer countries without this file.");
            tracing::error!("Set COUNTRIES_FILE to point to a JSON array of countries.");
            std::process::exit(1);
        }
    };

    let store = Arc::new(GameStore::new(countries));
    let routes = game_server::create_routes(store);

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config.host.parse::<std::net::IpAddr>().expect("Invalid HOST"),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
