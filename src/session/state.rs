//! Module `state`
//!
//! Defines the `Session` struct and associated methods to manage per-client
//! state, including the bound user profile, connection address, and the
//! session's write-throttling limiter.

use std::net::SocketAddr;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Represents the state of a connected journal client.
///
/// Tracks the bound user identifier, the client address, and the sliding
/// window used to throttle write commands. Each session owns its own
/// limiter; nothing is shared across connections.
pub struct Session {
    user_id: Option<String>,
    client_addr: Option<SocketAddr>,
    write_limiter: RateLimiter,
}

impl Session {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            user_id: None,
            client_addr: None,
            write_limiter: RateLimiter::new(
                config.rate_limit_max_calls,
                config.rate_limit_window(),
            ),
        }
    }

    /// Binds the session to a validated user identifier.
    pub fn bind(&mut self, user_id: String) {
        self.user_id = Some(user_id);
    }

    /// Unbinds the profile, keeping the connection state intact.
    pub fn unbind(&mut self) {
        self.user_id = None;
    }

    /// Checks admission for a write command, recording it if admitted.
    pub fn admit_write(&mut self) -> bool {
        self.write_limiter.check()
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns whether a user profile is bound to this session.
    pub fn is_bound(&self) -> bool {
        self.user_id.is_some()
    }

    /// Returns the bound user identifier if set.
    pub fn user_id(&self) -> Option<&String> {
        self.user_id.as_ref()
    }

    /// Returns the client's socket address if known.
    pub fn client_addr(&self) -> Option<&SocketAddr> {
        self.client_addr.as_ref()
    }

    /// Returns the client address as a loggable string.
    pub fn client_addr_display(&self) -> String {
        self.client_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    // --------------------
    // Setter methods
    // --------------------

    /// Sets the client's socket address.
    pub fn set_client_addr(&mut self, addr: Option<SocketAddr>) {
        self.client_addr = addr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tight_config() -> ServerConfig {
        ServerConfig {
            rate_limit_max_calls: 2,
            rate_limit_window_ms: 60_000,
            ..ServerConfig::default()
        }
    }

    #[test]
    fn starts_unbound() {
        let session = Session::new(&ServerConfig::default());
        assert!(!session.is_bound());
        assert!(session.user_id().is_none());
        assert_eq!(session.client_addr_display(), "unknown");
    }

    #[test]
    fn bind_and_unbind_cycle() {
        let mut session = Session::new(&ServerConfig::default());
        session.bind("alice".to_string());
        assert!(session.is_bound());
        assert_eq!(session.user_id().map(String::as_str), Some("alice"));

        session.unbind();
        assert!(!session.is_bound());
    }

    #[test]
    fn each_session_throttles_independently() {
        let config = tight_config();
        let mut first = Session::new(&config);
        let mut second = Session::new(&config);

        assert!(first.admit_write());
        assert!(first.admit_write());
        assert!(!first.admit_write());

        // A different session is unaffected
        assert!(second.admit_write());
    }
}
