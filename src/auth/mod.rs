//! Profile binding
//!
//! Handles user identification and per-user profile records. Binding is
//! identification only: the client presents an opaque identifier issued by
//! the account system, and this server validates its shape before using it
//! to key storage.

pub mod profile;
pub mod validator;

pub use profile::{Profile, load_or_create_profile, set_display_name};
pub use validator::validate_user_id;
