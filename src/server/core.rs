//! Server core
//!
//! Accepts connections, walks each client through profile identification,
//! and hands identified sessions to the session command loop.

use log::{error, info, warn};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::middleware::logging::log_connection;
use crate::protocol::responses::{READY, format_response};
use crate::protocol::{CommandStatus, handle_bind_command, parse_command};
use crate::session::{Session, handle_session};

pub struct Server {
    session_registry: Arc<Mutex<HashMap<SocketAddr, Session>>>,
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    pub async fn new(config: ServerConfig) -> Self {
        let socket = config.control_socket();

        let listener = match TcpListener::bind(&socket).await {
            Ok(listener) => {
                info!("Server bound to {}", socket);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", socket, e);
                panic!("Server startup failed on socket {}: {}", socket, e);
            }
        };

        if let Err(e) = std::fs::create_dir_all(config.data_root_path()) {
            warn!("Failed to create data root directory: {}", e);
        } else {
            info!("Data root directory: {}", config.data_root);
        }

        Self {
            session_registry: Arc::new(Mutex::new(HashMap::new())),
            listener,
            config: Arc::new(config),
        }
    }

    /// Local address the server is listening on.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn start(&self) {
        info!(
            "Starting MindTracker journal server on {} (max {} clients)",
            self.config.control_socket(),
            self.config.max_clients
        );

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let session_registry = Arc::clone(&self.session_registry);
                    let config = Arc::clone(&self.config);

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) =
                            handle_new_client(stream, addr, session_registry, config).await
                        {
                            warn!("Failed to handle client {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

/// Handles a new client: greets, identifies, registers, and spawns the session handler.
async fn handle_new_client(
    stream: TcpStream,
    client_addr: SocketAddr,
    session_registry: Arc<Mutex<HashMap<SocketAddr, Session>>>,
    config: Arc<ServerConfig>,
) -> Result<(), std::io::Error> {
    log_connection(&client_addr.to_string());

    let mut reader = BufReader::new(stream);
    let mut line = String::new();

    // Send greeting and flush it immediately
    let greeting = format_response(READY, "MindTracker Journal Server ready");
    reader.get_mut().write_all(greeting.as_bytes()).await?;
    reader.get_mut().flush().await?;

    let mut session = Session::new(&config);

    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionAborted,
                "Client disconnected during identification",
            ));
        }

        let command = parse_command(&line);
        let result = handle_bind_command(&mut session, &command, &config);

        let closing = matches!(result.status, CommandStatus::CloseConnection);
        if let Some(msg) = result.message {
            reader.get_mut().write_all(msg.as_bytes()).await?;
        }
        if closing {
            return Ok(());
        }

        if session.is_bound() {
            let mut sessions = session_registry.lock().await;

            if sessions.len() >= config.max_clients {
                reader
                    .get_mut()
                    .write_all(b"421 Too many connections. Try again later.\r\n")
                    .await?;
                return Ok(()); // Close connection
            }

            session.set_client_addr(Some(client_addr));
            sessions.insert(client_addr, session);

            info!(
                "Identified client: {} ({}/{} clients)",
                client_addr,
                sessions.len(),
                config.max_clients
            );

            let cmd_stream = reader.into_inner();

            drop(sessions);

            // Hand off to session handler
            handle_session(cmd_stream, session_registry, client_addr, config).await;

            return Ok(());
        }
    }
}
