//! Journal protocol implementation
//!
//! Handles journal command parsing, validation, and response generation.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use handlers::{handle_bind_command, handle_command};
