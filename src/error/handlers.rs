//! Error handlers
//!
//! Provides error handling and recovery functions.

use crate::error::types::{JournalError, JournalServerError, TrackingError};
use log::error;

/// Handle a journal server error
pub fn handle_error(err: &JournalServerError) {
    error!("Journal Server Error: {}", err);
}

/// Convert error to protocol response code
pub fn error_to_response_code(err: &JournalServerError) -> u16 {
    match err {
        JournalServerError::Auth(_) => 530,
        JournalServerError::Journal(JournalError::EntryNotFound(_)) => 550,
        JournalServerError::Journal(JournalError::Storage(_)) => 451,
        JournalServerError::Journal(_) => 501,
        JournalServerError::Tracking(TrackingError::ListFull { .. }) => 552,
        JournalServerError::Tracking(TrackingError::Storage(_)) => 451,
        JournalServerError::Tracking(_) => 550,
        JournalServerError::Storage(_) => 451,
        JournalServerError::IoError(_) => 451,
        JournalServerError::ProtocolError(_) => 500,
    }
}
