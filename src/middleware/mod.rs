//! Server middleware
//!
//! Provides request logging, input sanitization, and write-command rate
//! limiting shared by the session layer.

pub mod logging;
pub mod rate_limit;
pub mod security;
