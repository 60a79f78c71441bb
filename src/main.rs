//! MindTracker Journal Server - Entry Point
//!
//! A Rust-based backend for the MindTracker mental-wellness journal,
//! serving daily check-ins, tracked lists, and stress trends over a
//! line-oriented command connection.

use log::{error, info};

use mindtracker_server::Server;
use mindtracker_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching journal server...");

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let server = Server::new(config).await;
    server.start().await;
}
