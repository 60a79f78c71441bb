//! Server management
//!
//! Handles the TCP accept loop, connection identification, and session
//! registry.

pub mod core;

pub use core::Server;
