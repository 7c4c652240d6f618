//! Line-oriented terminal session.
//!
//! Reads one command per line, applies it to the `Navigator` and redraws the
//! current screen. Generic over the reader and writer so tests can drive a
//! whole session from a string.

use crate::errors::AppResult;
use crate::ops::archive::FilterCategory;
use crate::ops::capture::Advance;
use crate::ops::navigation::{Event, Navigator, Transition, View};
use crate::screens;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::{debug, error};

const PROMPT: &str = "> ";

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Archive,
    Home,
    Back,
    Next,
    Submit,
    Quit,
    /// Replacement text for the current capture step.
    SetText(String),
    Filter(FilterCategory),
    /// One-based position in the archive list.
    Open(usize),
    /// Input that means nothing on this screen, with a hint for the user.
    Invalid(String),
}

/// Interprets `line` in the context of `view`.
pub fn parse_command(view: &View, line: &str) -> Command {
    let trimmed = line.trim();
    match view {
        View::Home => match trimmed {
            "start" | "s" => Command::Start,
            "archive" | "a" => Command::Archive,
            "quit" | "q" => Command::Quit,
            _ => Command::Invalid("Type 'start', 'archive' or 'quit'.".to_string()),
        },
        View::Capture(flow) => match (trimmed, flow.is_previewing()) {
            (":back" | ":b", _) => Command::Back,
            (":quit" | ":q", _) => Command::Quit,
            (":next" | ":n", false) => Command::Next,
            (":submit" | ":s", true) => Command::Submit,
            (_, true) => Command::Invalid(
                "The review is read-only. Type ':submit' to save or ':back' to edit.".to_string(),
            ),
            (":submit" | ":s", false) => {
                Command::Invalid("Type ':next' to continue before submitting.".to_string())
            }
            // Anything else is an answer, even when it starts with ':'.
            _ => Command::SetText(line.to_string()),
        },
        View::Archive(_) => {
            let mut words = trimmed.split_whitespace();
            match (words.next(), words.next(), words.next()) {
                (Some("back" | "b"), None, None) => Command::Back,
                (Some("quit" | "q"), None, None) => Command::Quit,
                (Some("filter" | "f"), Some(value), None) => match FilterCategory::parse(value) {
                    Some(category) => Command::Filter(category),
                    None => Command::Invalid(format!("Unknown filter '{}'.", value)),
                },
                (Some("open" | "o"), Some(value), None) => match value.parse::<usize>() {
                    Ok(position) if position > 0 => Command::Open(position),
                    _ => Command::Invalid(format!("'{}' is not an entry number.", value)),
                },
                _ => Command::Invalid(
                    "Type 'filter <category>', 'open <n>', 'back' or 'quit'.".to_string(),
                ),
            }
        }
        View::Success => match trimmed {
            "home" | "h" => Command::Home,
            "archive" | "a" => Command::Archive,
            "quit" | "q" => Command::Quit,
            _ => Command::Invalid("Type 'home', 'archive' or 'quit'.".to_string()),
        },
    }
}

/// Runs the session until `quit` or end of input.
///
/// # Errors
///
/// Returns `AppError::Io` if reading input or writing output fails. A failed
/// save is reported on screen and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    navigator: &mut Navigator,
    mut input: R,
    mut output: W,
    today: NaiveDate,
) -> AppResult<()> {
    let mut line = String::new();

    loop {
        writeln!(output, "\n{}", screens::render(navigator, today))?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            return Ok(());
        }
        let text = line.trim_end_matches(['\n', '\r']);

        let command = parse_command(navigator.view(), text);
        debug!(view = navigator.view().name(), ?command, "Received command");

        if command == Command::Quit {
            return Ok(());
        }
        if let Some(message) = apply(navigator, command) {
            writeln!(output, "{}", message)?;
        }
    }
}

/// Applies `command`, returning a message for the user when there is one.
fn apply(navigator: &mut Navigator, command: Command) -> Option<String> {
    let result = match command {
        Command::Start => navigator.handle(Event::Start),
        Command::Archive => navigator.handle(Event::ViewArchive),
        Command::Home => navigator.handle(Event::GoHome),
        Command::Back if matches!(navigator.view(), View::Capture(_)) => {
            navigator.retreat_capture()
        }
        Command::Back => navigator.handle(Event::Back),
        Command::Submit => navigator.submit_capture(),
        Command::Next => {
            let flow = navigator.capture_mut()?;
            return match flow.advance() {
                Advance::Rejected => Some("Write something before moving on.".to_string()),
                Advance::Moved | Advance::Previewing => None,
            };
        }
        Command::SetText(text) => {
            navigator.capture_mut()?.set_field_value(text);
            return None;
        }
        Command::Filter(category) => {
            let (archive, _) = navigator.archive_mut()?;
            archive.set_category(category);
            return None;
        }
        Command::Open(position) => {
            let (archive, entries) = navigator.archive_mut()?;
            if archive.select(position - 1, entries) {
                return None;
            }
            return Some(format!("There is no entry {} in this list.", position));
        }
        Command::Invalid(hint) => return Some(hint),
        Command::Quit => return None,
    };

    match result {
        Ok(Transition::Changed | Transition::Stayed) => None,
        Ok(Transition::Ignored) => Some("That is not available here.".to_string()),
        Err(err) => {
            error!(error = %err, "Command failed");
            Some(format!("Could not save your entry: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::archive::ArchiveView;
    use crate::ops::capture::CaptureFlow;

    #[test]
    fn test_parse_home_commands() {
        assert_eq!(parse_command(&View::Home, "start"), Command::Start);
        assert_eq!(parse_command(&View::Home, " a "), Command::Archive);
        assert_eq!(parse_command(&View::Home, "q"), Command::Quit);
        assert!(matches!(
            parse_command(&View::Home, "hello"),
            Command::Invalid(_)
        ));
    }

    #[test]
    fn test_parse_capture_text_kept_verbatim() {
        let view = View::Capture(CaptureFlow::new());
        assert_eq!(
            parse_command(&view, "  spaced out  "),
            Command::SetText("  spaced out  ".to_string())
        );
        assert_eq!(parse_command(&view, ":next"), Command::Next);
        assert_eq!(parse_command(&view, ":b"), Command::Back);
        assert!(matches!(parse_command(&view, ":submit"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_capture_colon_answers_are_text() {
        let view = View::Capture(CaptureFlow::new());
        assert_eq!(
            parse_command(&view, ":) proud of myself"),
            Command::SetText(":) proud of myself".to_string())
        );
        assert_eq!(
            parse_command(&view, ":nextweek plan"),
            Command::SetText(":nextweek plan".to_string())
        );
        assert_eq!(parse_command(&view, " :next "), Command::Next);
    }

    #[test]
    fn test_parse_preview_commands() {
        let mut flow = CaptureFlow::new();
        for answer in ["a", "b", "c", "d"] {
            flow.set_field_value(answer);
            flow.advance();
        }
        let view = View::Capture(flow);

        assert_eq!(parse_command(&view, ":submit"), Command::Submit);
        assert_eq!(parse_command(&view, ":back"), Command::Back);
        assert!(matches!(parse_command(&view, ":next"), Command::Invalid(_)));
        assert!(matches!(parse_command(&view, "more text"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_archive_commands() {
        let view = View::Archive(ArchiveView::new());
        assert_eq!(
            parse_command(&view, "filter reflection"),
            Command::Filter(FilterCategory::Field(
                crate::journal_core::CareField::Reflection
            ))
        );
        assert_eq!(parse_command(&view, "open 2"), Command::Open(2));
        assert!(matches!(parse_command(&view, "open 0"), Command::Invalid(_)));
        assert!(matches!(parse_command(&view, "filter mood"), Command::Invalid(_)));
        assert_eq!(parse_command(&view, "back"), Command::Back);
    }

    #[test]
    fn test_parse_success_commands() {
        assert_eq!(parse_command(&View::Success, "home"), Command::Home);
        assert_eq!(parse_command(&View::Success, "archive"), Command::Archive);
    }
}
