//! Command handlers module for the MindTracker journal server.
//!
//! This module defines handler functions for journal commands, handling
//! profile binding, daily check-ins, history and trend queries, tracked
//! list management, and write throttling per session.

use log::info;
use serde::Serialize;
use serde_json::json;

use chrono::Local;

use crate::auth;
use crate::config::ServerConfig;
use crate::error::handlers::{error_to_response_code, handle_error};
use crate::error::{JournalError, JournalServerError};
use crate::journal;
use crate::middleware::security::{sanitize_text, validate_text};
use crate::protocol::commands::{Command, CommandResult, CommandStatus};
use crate::protocol::responses::{
    ACTION_OK, DATA, GOODBYE, INVALID_ARGUMENT, NOT_IDENTIFIED, OK, PROFILE_BOUND, RATE_LIMITED,
    SYNTAX_ERROR, TRANSIENT_ERROR, format_response,
};
use crate::quotes;
use crate::session::Session;
use crate::tracking;
use crate::tracking::lists::ListKind;

/// Dispatches a received journal command to its corresponding handler.
///
/// # Arguments
///
/// * `session` - Mutable reference to the session issuing the command.
/// * `command` - Reference to the parsed journal command enum.
/// * `config` - Server configuration with text bounds and journal limits.
///
/// # Returns
///
/// * `CommandResult` - Result of the command execution, including status and message.
pub fn handle_command(
    session: &mut Session,
    command: &Command,
    config: &ServerConfig,
) -> CommandResult {
    match command {
        Command::QUIT => handle_cmd_quit(session),
        Command::LOGOUT => handle_cmd_logout(session),
        Command::USER(user_id) => handle_cmd_user(session, user_id, config),
        Command::NAME(text) => handle_cmd_name(session, text, config),
        Command::CHECKIN(payload) => handle_cmd_checkin(session, payload, config),
        Command::ENTRY(date) => handle_cmd_entry(session, date, config),
        Command::HISTORY(limit) => handle_cmd_history(session, *limit, config),
        Command::TREND => handle_cmd_trend(session, config),
        Command::NOTE { date, text } => handle_cmd_note(session, date, text, config),
        Command::TRACK { kind, item } => handle_cmd_track(session, kind, item, config),
        Command::UNTRACK { kind, item } => handle_cmd_untrack(session, kind, item, config),
        Command::LISTS => handle_cmd_lists(session, config),
        Command::NEEDS => handle_cmd_needs(session),
        Command::QUOTE => handle_cmd_quote(session),
        Command::MIND => handle_cmd_mind(),
        Command::UNKNOWN => handle_cmd_unknown(),
    }
}

/// Handles commands accepted before a profile is bound.
pub fn handle_bind_command(
    session: &mut Session,
    command: &Command,
    config: &ServerConfig,
) -> CommandResult {
    match command {
        Command::USER(user_id) => handle_cmd_user(session, user_id, config),
        Command::QUIT => handle_cmd_quit(session),
        Command::MIND => handle_cmd_mind(),
        _ => CommandResult {
            status: CommandStatus::Failure("Identification required".into()),
            message: Some(format_response(
                NOT_IDENTIFIED,
                "Please identify with USER <id>",
            )),
        },
    }
}

// --------------------
// Shared response builders
// --------------------

/// Failure result for a session with no bound profile.
fn response_not_bound() -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure("No profile bound".into()),
        message: Some(format_response(NOT_IDENTIFIED, "No profile bound")),
    }
}

/// Failure result for a throttled write command.
fn response_rate_limited() -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure("Rate limit exceeded".into()),
        message: Some(format_response(
            RATE_LIMITED,
            "Rate limit exceeded, try again later",
        )),
    }
}

/// Failure result for a rejected argument, with the validator's message.
fn response_invalid(message: &str) -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure(message.to_string()),
        message: Some(format_response(INVALID_ARGUMENT, message)),
    }
}

/// Failure result derived from a domain error.
fn response_from_error<E: Into<JournalServerError>>(err: E) -> CommandResult {
    let err = err.into();
    handle_error(&err);
    let code = error_to_response_code(&err);
    let message = err.to_string();
    CommandResult {
        status: CommandStatus::Failure(message.clone()),
        message: Some(format_response(code, &message)),
    }
}

/// Success result carrying a JSON document.
fn response_data<T: Serialize>(value: &T) -> CommandResult {
    match serde_json::to_string(value) {
        Ok(json) => CommandResult {
            status: CommandStatus::Success,
            message: Some(format_response(DATA, &json)),
        },
        Err(e) => {
            log::error!("Failed to encode response: {}", e);
            CommandResult {
                status: CommandStatus::Failure("Failed to encode response".into()),
                message: Some(format_response(TRANSIENT_ERROR, "Failed to encode response")),
            }
        }
    }
}

// --------------------
// Command handlers
// --------------------

/// Handles the QUIT command: unbinds the session and signals connection close.
fn handle_cmd_quit(session: &mut Session) -> CommandResult {
    session.unbind();

    CommandResult {
        status: CommandStatus::CloseConnection,
        message: Some(format_response(GOODBYE, "Goodbye")),
    }
}

/// Handles the LOGOUT command: unbinds the profile if one is bound.
fn handle_cmd_logout(session: &mut Session) -> CommandResult {
    if session.is_bound() {
        session.unbind();
        CommandResult {
            status: CommandStatus::Success,
            message: Some(format_response(GOODBYE, "Logout successful")),
        }
    } else {
        response_not_bound()
    }
}

/// Handles the USER command: validates the identifier and binds the session.
///
/// Creates the profile store on a user's first visit.
fn handle_cmd_user(session: &mut Session, user_id: &str, config: &ServerConfig) -> CommandResult {
    if let Err(e) = auth::validate_user_id(user_id, config) {
        return response_from_error(e);
    }

    let profile = match auth::load_or_create_profile(&config.data_root_path(), user_id) {
        Ok(profile) => profile,
        Err(e) => return response_from_error(e),
    };

    session.bind(user_id.to_string());

    info!(
        "Session {} bound to user {}",
        session.client_addr_display(),
        user_id
    );

    let message = match profile.display_name {
        Some(name) => format!("Profile bound. Welcome back, {}", name),
        None => "Profile bound".to_string(),
    };
    CommandResult {
        status: CommandStatus::Success,
        message: Some(format_response(PROFILE_BOUND, &message)),
    }
}

/// Handles the NAME command: sets the profile display name.
fn handle_cmd_name(session: &mut Session, text: &str, config: &ServerConfig) -> CommandResult {
    let Some(user_id) = session.user_id().cloned() else {
        return response_not_bound();
    };

    if !session.admit_write() {
        return response_rate_limited();
    }

    let validation = validate_text(text, config.max_name_length);
    if !validation.is_valid {
        return response_invalid(&validation.error.unwrap_or_default());
    }

    match auth::set_display_name(&config.data_root_path(), &user_id, &validation.sanitized) {
        Ok(_) => CommandResult {
            status: CommandStatus::Success,
            message: Some(format_response(ACTION_OK, "Display name updated")),
        },
        Err(e) => response_from_error(e),
    }
}

/// Handles the CHECKIN command: upserts today's entry from a JSON payload.
///
/// Validates the stress range and note bound, then reports whether the
/// entry warrants self-care follow-up.
fn handle_cmd_checkin(session: &mut Session, payload: &str, config: &ServerConfig) -> CommandResult {
    // 1. Identification check
    let Some(user_id) = session.user_id().cloned() else {
        return response_not_bound();
    };

    // 2. Write throttling
    if !session.admit_write() {
        return response_rate_limited();
    }

    // 3. Decode the draft
    let draft: journal::EntryDraft = match serde_json::from_str(payload) {
        Ok(draft) => draft,
        Err(e) => {
            return response_from_error(JournalError::MalformedEntry(e.to_string()));
        }
    };

    // 4. Note length policy (an empty note is simply dropped on save)
    if let Some(notes) = &draft.notes {
        let validation = validate_text(notes, config.max_note_length);
        if !validation.is_valid && !validation.sanitized.is_empty() {
            return response_invalid(&validation.error.unwrap_or_default());
        }
    }

    // 5. Save under today's date
    let today = Local::now().date_naive();
    let result = match journal::save_entry(&config.data_root_path(), &user_id, today, draft) {
        Ok(result) => result,
        Err(e) => return response_from_error(e),
    };

    let message = if result.selfcare_recommended {
        let names: Vec<&str> = result.suggestions.iter().map(|t| t.name).collect();
        if names.is_empty() {
            format!("Check-in saved for {}; self-care suggested", today)
        } else {
            format!(
                "Check-in saved for {}; self-care suggested: {}",
                today,
                names.join(", ")
            )
        }
    } else {
        format!("Check-in saved for {}", today)
    };

    CommandResult {
        status: CommandStatus::Success,
        message: Some(format_response(ACTION_OK, &message)),
    }
}

/// Handles the ENTRY command: fetches one entry by date.
fn handle_cmd_entry(session: &mut Session, date: &str, config: &ServerConfig) -> CommandResult {
    let Some(user_id) = session.user_id().cloned() else {
        return response_not_bound();
    };

    let date = match journal::parse_entry_date(date) {
        Ok(date) => date,
        Err(e) => return response_from_error(e),
    };

    match journal::get_entry(&config.data_root_path(), &user_id, date) {
        Ok(entry) => response_data(&entry),
        Err(e) => response_from_error(e),
    }
}

/// Handles the HISTORY command: lists entries newest-first.
fn handle_cmd_history(
    session: &mut Session,
    limit: Option<usize>,
    config: &ServerConfig,
) -> CommandResult {
    let Some(user_id) = session.user_id().cloned() else {
        return response_not_bound();
    };

    match journal::list_entries(&config.data_root_path(), &user_id, limit) {
        Ok(entries) => response_data(&entries),
        Err(e) => response_from_error(e),
    }
}

/// Handles the TREND command: returns the bounded stress series with stats.
fn handle_cmd_trend(session: &mut Session, config: &ServerConfig) -> CommandResult {
    let Some(user_id) = session.user_id().cloned() else {
        return response_not_bound();
    };

    match journal::stress_trend(&config.data_root_path(), &user_id, config.trend_window) {
        Ok(report) => response_data(&report),
        Err(e) => response_from_error(e),
    }
}

/// Handles the NOTE command: replaces the notes on an existing entry.
fn handle_cmd_note(
    session: &mut Session,
    date: &str,
    text: &str,
    config: &ServerConfig,
) -> CommandResult {
    let Some(user_id) = session.user_id().cloned() else {
        return response_not_bound();
    };

    if !session.admit_write() {
        return response_rate_limited();
    }

    let date = match journal::parse_entry_date(date) {
        Ok(date) => date,
        Err(e) => return response_from_error(e),
    };

    let validation = validate_text(text, config.max_note_length);
    if !validation.is_valid {
        return response_invalid(&validation.error.unwrap_or_default());
    }

    match journal::update_notes(&config.data_root_path(), &user_id, date, text) {
        Ok(_) => CommandResult {
            status: CommandStatus::Success,
            message: Some(format_response(
                ACTION_OK,
                &format!("Notes updated for {}", date),
            )),
        },
        Err(e) => response_from_error(e),
    }
}

/// Handles the TRACK command: adds an item to a tracked list.
fn handle_cmd_track(
    session: &mut Session,
    kind: &str,
    item: &str,
    config: &ServerConfig,
) -> CommandResult {
    let Some(user_id) = session.user_id().cloned() else {
        return response_not_bound();
    };

    if !session.admit_write() {
        return response_rate_limited();
    }

    let Some(kind) = ListKind::parse(kind) else {
        return response_invalid(&format!("Unknown tracked list: {}", kind));
    };

    let validation = validate_text(item, config.max_item_length);
    if !validation.is_valid {
        return response_invalid(&validation.error.unwrap_or_default());
    }

    match tracking::add_item(
        &config.data_root_path(),
        &user_id,
        kind,
        &validation.sanitized,
        config.max_list_items,
    ) {
        Ok(lists) => CommandResult {
            status: CommandStatus::Success,
            message: Some(format_response(
                ACTION_OK,
                &format!(
                    "Tracked {} item ({}/{})",
                    kind,
                    lists.list(kind).len(),
                    config.max_list_items
                ),
            )),
        },
        Err(e) => response_from_error(e),
    }
}

/// Handles the UNTRACK command: removes an item from a tracked list.
fn handle_cmd_untrack(
    session: &mut Session,
    kind: &str,
    item: &str,
    config: &ServerConfig,
) -> CommandResult {
    let Some(user_id) = session.user_id().cloned() else {
        return response_not_bound();
    };

    if !session.admit_write() {
        return response_rate_limited();
    }

    let Some(kind) = ListKind::parse(kind) else {
        return response_invalid(&format!("Unknown tracked list: {}", kind));
    };

    // Stored items are sanitized, so match against the sanitized form
    let item = sanitize_text(item);
    if item.is_empty() {
        return response_invalid("Text cannot be empty");
    }

    match tracking::remove_item(&config.data_root_path(), &user_id, kind, &item) {
        Ok(_) => CommandResult {
            status: CommandStatus::Success,
            message: Some(format_response(
                ACTION_OK,
                &format!("Untracked {} item", kind),
            )),
        },
        Err(e) => response_from_error(e),
    }
}

/// Handles the LISTS command: returns all tracked lists and the onboarded flag.
fn handle_cmd_lists(session: &mut Session, config: &ServerConfig) -> CommandResult {
    let Some(user_id) = session.user_id().cloned() else {
        return response_not_bound();
    };

    match tracking::load_lists(&config.data_root_path(), &user_id) {
        Ok(lists) => response_data(&json!({
            "red_flags": lists.red_flags,
            "triggers": lists.triggers,
            "boundaries": lists.boundaries,
            "onboarded": lists.is_onboarded(),
        })),
        Err(e) => response_from_error(e),
    }
}

/// Handles the NEEDS command: returns the universal needs catalog.
fn handle_cmd_needs(session: &mut Session) -> CommandResult {
    if !session.is_bound() {
        return response_not_bound();
    }

    response_data(&journal::needs::needs_catalog())
}

/// Handles the QUOTE command: returns today's deterministic quote.
fn handle_cmd_quote(session: &mut Session) -> CommandResult {
    if !session.is_bound() {
        return response_not_bound();
    }

    CommandResult {
        status: CommandStatus::Success,
        message: Some(format_response(OK, quotes::daily_quote())),
    }
}

/// Handles the custom MIND command: returns a fixed success message.
fn handle_cmd_mind() -> CommandResult {
    CommandResult {
        status: CommandStatus::Success,
        message: Some(format_response(OK, "MindTracker is with you")),
    }
}

/// Handles unknown or unsupported commands: returns error response.
fn handle_cmd_unknown() -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure("Unknown command".into()),
        message: Some(format_response(
            SYNTAX_ERROR,
            "Syntax error, command unrecognized",
        )),
    }
}
