//! Error types
//!
//! Defines domain-specific error types for each module of the journal server.

use std::fmt;
use std::io;

/// Profile binding errors
#[derive(Debug)]
pub enum AuthError {
    InvalidUserId(String),
    MalformedInput(String),
    NotIdentified,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidUserId(id) => write!(f, "Invalid user identifier: {}", id),
            AuthError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
            AuthError::NotIdentified => write!(f, "No profile bound to this session"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Record storage errors
#[derive(Debug)]
pub enum StorageError {
    RecordNotFound(String),
    InvalidPath(String),
    PathTraversal(String),
    Serialization(serde_json::Error),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::RecordNotFound(r) => write!(f, "Record not found: {}", r),
            StorageError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            StorageError::PathTraversal(p) => write!(f, "Path traversal attempt: {}", p),
            StorageError::Serialization(e) => write!(f, "Serialization error: {}", e),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error)
    }
}

/// Daily entry errors
#[derive(Debug)]
pub enum JournalError {
    InvalidDate(String),
    InvalidStressLevel(u8),
    MalformedEntry(String),
    EntryNotFound(String),
    Storage(StorageError),
}

impl fmt::Display for JournalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalError::InvalidDate(d) => write!(f, "Invalid entry date: {}", d),
            JournalError::InvalidStressLevel(l) => {
                write!(f, "Stress level {} out of range 1-10", l)
            }
            JournalError::MalformedEntry(s) => write!(f, "Malformed entry payload: {}", s),
            JournalError::EntryNotFound(d) => write!(f, "No entry for date: {}", d),
            JournalError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for JournalError {}

impl From<StorageError> for JournalError {
    fn from(error: StorageError) -> Self {
        JournalError::Storage(error)
    }
}

/// Tracked list errors
#[derive(Debug)]
pub enum TrackingError {
    UnknownList(String),
    ListFull { kind: String, limit: usize },
    DuplicateItem(String),
    ItemNotFound(String),
    Storage(StorageError),
}

impl fmt::Display for TrackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingError::UnknownList(k) => write!(f, "Unknown tracked list: {}", k),
            TrackingError::ListFull { kind, limit } => {
                write!(f, "List {} is full ({} items max)", kind, limit)
            }
            TrackingError::DuplicateItem(i) => write!(f, "Item already tracked: {}", i),
            TrackingError::ItemNotFound(i) => write!(f, "Item not tracked: {}", i),
            TrackingError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for TrackingError {}

impl From<StorageError> for TrackingError {
    fn from(error: StorageError) -> Self {
        TrackingError::Storage(error)
    }
}

/// General journal server error that encompasses all error types
#[derive(Debug)]
pub enum JournalServerError {
    Auth(AuthError),
    Journal(JournalError),
    Tracking(TrackingError),
    Storage(StorageError),
    IoError(io::Error),
    ProtocolError(String),
}

impl fmt::Display for JournalServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalServerError::Auth(e) => write!(f, "Profile error: {}", e),
            JournalServerError::Journal(e) => write!(f, "Journal error: {}", e),
            JournalServerError::Tracking(e) => write!(f, "Tracking error: {}", e),
            JournalServerError::Storage(e) => write!(f, "Storage error: {}", e),
            JournalServerError::IoError(e) => write!(f, "I/O error: {}", e),
            JournalServerError::ProtocolError(e) => write!(f, "Protocol error: {}", e),
        }
    }
}

impl std::error::Error for JournalServerError {}

// Implement conversions from specific errors to JournalServerError
impl From<AuthError> for JournalServerError {
    fn from(error: AuthError) -> Self {
        JournalServerError::Auth(error)
    }
}

impl From<JournalError> for JournalServerError {
    fn from(error: JournalError) -> Self {
        JournalServerError::Journal(error)
    }
}

impl From<TrackingError> for JournalServerError {
    fn from(error: TrackingError) -> Self {
        JournalServerError::Tracking(error)
    }
}

impl From<StorageError> for JournalServerError {
    fn from(error: StorageError) -> Self {
        JournalServerError::Storage(error)
    }
}

impl From<io::Error> for JournalServerError {
    fn from(error: io::Error) -> Self {
        JournalServerError::IoError(error)
    }
}
