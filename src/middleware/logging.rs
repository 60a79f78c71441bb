//! Logging middleware
//!
//! Session-addressed request logging for the command connection.

use log::info;

/// Log a client connection
pub fn log_connection(client_addr: &str) {
    info!("Client connected: {}", client_addr);
}

/// Log a received command line
pub fn log_command(client_addr: &str, command: &str) {
    info!("Client {} executed: {}", client_addr, command);
}

/// Log a successful response before it is written back
pub fn log_response(client_addr: &str, response: &str) {
    info!("Sending response to client {}: {}", client_addr, response.trim_end());
}
