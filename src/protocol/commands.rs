//! Module `commands`
//!
//! Defines the journal command parsing logic and related data structures
//! used to represent commands, their status, and results.

/// Represents a journal command parsed from the client input.
///
/// Commands that require arguments store them as `String` variants; the
/// `CHECKIN` payload stays raw JSON until the handler deserializes it.
#[derive(Debug, PartialEq)]
pub enum Command {
    QUIT,
    LOGOUT,
    USER(String),                          // Bind session to a user profile
    NAME(String),                          // Set profile display name
    CHECKIN(String),                       // Upsert today's entry from a JSON payload
    ENTRY(String),                         // Fetch one entry by date
    HISTORY(Option<usize>),                // List entries newest-first, optional limit
    TREND,                                 // Stress trend series with stats
    NOTE { date: String, text: String },   // Replace notes on an entry
    TRACK { kind: String, item: String },  // Add to a tracked list
    UNTRACK { kind: String, item: String }, // Remove from a tracked list
    LISTS,                                 // All tracked lists + onboarded flag
    NEEDS,                                 // Universal needs catalog
    QUOTE,                                 // Today's deterministic quote
    MIND,                                  // Custom command, server ping
    UNKNOWN,                               // Unknown or unsupported command
}

/// Represents the outcome status of executing a command.
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Struct encapsulating the full result of a command execution.
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

/// Parses a raw command string received from a client into the `Command` enum.
///
/// Validates required arguments and returns `UNKNOWN` if a known command is misused.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "QUIT" | "Q" => Command::QUIT,
        "LOGOUT" => Command::LOGOUT,
        "USER" if !arg.is_empty() => Command::USER(arg.to_string()),
        "NAME" if !arg.is_empty() => Command::NAME(arg.to_string()),
        "CHECKIN" if !arg.is_empty() => Command::CHECKIN(arg.to_string()),
        "ENTRY" if !arg.is_empty() => Command::ENTRY(arg.to_string()),
        "HISTORY" => match arg {
            "" => Command::HISTORY(None),
            n => match n.parse::<usize>() {
                Ok(limit) => Command::HISTORY(Some(limit)),
                Err(_) => Command::UNKNOWN,
            },
        },
        "TREND" => Command::TREND,
        "NOTE" => match split_pair(arg) {
            Some((date, text)) => Command::NOTE {
                date: date.to_string(),
                text: text.to_string(),
            },
            None => Command::UNKNOWN,
        },
        "TRACK" => match split_pair(arg) {
            Some((kind, item)) => Command::TRACK {
                kind: kind.to_string(),
                item: item.to_string(),
            },
            None => Command::UNKNOWN,
        },
        "UNTRACK" => match split_pair(arg) {
            Some((kind, item)) => Command::UNTRACK {
                kind: kind.to_string(),
                item: item.to_string(),
            },
            None => Command::UNKNOWN,
        },
        "LISTS" => Command::LISTS,
        "NEEDS" => Command::NEEDS,
        "QUOTE" => Command::QUOTE,
        "MIND" => Command::MIND,
        _ => Command::UNKNOWN,
    }
}

/// Split an argument into its first word and the non-empty remainder.
fn split_pair(arg: &str) -> Option<(&str, &str)> {
    let mut parts = arg.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();
    if first.is_empty() || rest.is_empty() {
        None
    } else {
        Some((first, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_case_insensitively() {
        assert_eq!(parse_command("quit\r\n"), Command::QUIT);
        assert_eq!(parse_command("User alice"), Command::USER("alice".into()));
        assert_eq!(parse_command("TREND"), Command::TREND);
    }

    #[test]
    fn missing_required_argument_is_unknown() {
        assert_eq!(parse_command("USER"), Command::UNKNOWN);
        assert_eq!(parse_command("ENTRY "), Command::UNKNOWN);
        assert_eq!(parse_command("NOTE 2025-03-09"), Command::UNKNOWN);
        assert_eq!(parse_command("TRACK triggers"), Command::UNKNOWN);
    }

    #[test]
    fn history_limit_is_optional_but_numeric() {
        assert_eq!(parse_command("HISTORY"), Command::HISTORY(None));
        assert_eq!(parse_command("HISTORY 7"), Command::HISTORY(Some(7)));
        assert_eq!(parse_command("HISTORY soon"), Command::UNKNOWN);
    }

    #[test]
    fn note_keeps_text_with_spaces() {
        assert_eq!(
            parse_command("NOTE 2025-03-09 a long day at work"),
            Command::NOTE {
                date: "2025-03-09".into(),
                text: "a long day at work".into(),
            }
        );
    }

    #[test]
    fn track_splits_kind_and_item() {
        assert_eq!(
            parse_command("TRACK triggers Work deadlines"),
            Command::TRACK {
                kind: "triggers".into(),
                item: "Work deadlines".into(),
            }
        );
    }

    #[test]
    fn unrecognized_input_is_unknown() {
        assert_eq!(parse_command("FETCH stuff"), Command::UNKNOWN);
        assert_eq!(parse_command(""), Command::UNKNOWN);
    }
}
