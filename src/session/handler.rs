//! Session command loop
//!
//! Reads command lines from an identified client, dispatches them, and
//! writes responses until the client quits, idles out, or disconnects.

use log::{error, info, warn};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::config::ServerConfig;
use crate::middleware::logging::{log_command, log_response};
use crate::protocol::{CommandStatus, handle_command, parse_command};
use crate::session::Session;

/// Handles a journal client session using the Tokio async runtime.
///
/// - Uses BufReader to read command lines from the client.
/// - Dispatches commands using `handle_command`.
/// - Manages session state from the shared `session_registry`.
pub async fn handle_session(
    cmd_stream: TcpStream,
    sessions: Arc<Mutex<HashMap<SocketAddr, Session>>>,
    client_addr: SocketAddr,
    config: Arc<ServerConfig>,
) {
    let (read_half, mut write_half) = cmd_stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut line = String::new();

    loop {
        line.clear();
        let read = timeout(config.connection_timeout(), reader.read_line(&mut line)).await;

        match read {
            Err(_) => {
                // Idle timeout elapsed without a complete line
                warn!("Session {} idled out", client_addr);
                let _ = write_half.write_all(b"421 Idle timeout, closing\r\n").await;
                break;
            }
            Ok(Ok(0)) => {
                // Client closed the connection
                info!("Connection closed by client {}", client_addr);
                break;
            }
            Ok(Ok(_)) => {
                // Enforce command length limit
                if line.len() > config.max_command_length {
                    let _ = write_half.write_all(b"500 Command too long\r\n").await;
                    continue;
                }

                let trimmed = line.trim_end_matches("\r\n");
                let command = parse_command(trimmed);
                log_command(&client_addr.to_string(), trimmed);

                let mut sessions_guard = sessions.lock().await;

                match sessions_guard.get_mut(&client_addr) {
                    Some(session) => {
                        let result = handle_command(session, &command, &config);

                        match result.status {
                            CommandStatus::CloseConnection => {
                                if let Some(msg) = result.message {
                                    let _ = write_half.write_all(msg.as_bytes()).await;
                                }
                                info!("Client {} requested to quit", client_addr);
                                break;
                            }
                            CommandStatus::Success => {
                                if let Some(msg) = result.message {
                                    log_response(&client_addr.to_string(), &msg);
                                    let _ = write_half.write_all(msg.as_bytes()).await;
                                }
                            }
                            CommandStatus::Failure(_) => {
                                if let Some(msg) = result.message {
                                    let _ = write_half.write_all(msg.as_bytes()).await;
                                }
                            }
                        }
                    }
                    None => {
                        error!("Client {} not found in session registry", client_addr);
                        let _ = write_half.write_all(b"421 Session not found\r\n").await;
                        break;
                    }
                }
            }
            Ok(Err(e)) => {
                error!("Failed to read from {}: {}", client_addr, e);
                break;
            }
        }
    }

    let mut sessions_guard = sessions.lock().await;
    sessions_guard.remove(&client_addr);
    info!("Client {} disconnected", client_addr);
}
