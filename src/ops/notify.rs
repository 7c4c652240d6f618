//! User-visible confirmations.
//!
//! Notifications are fire-and-forget: they never influence navigation.

use std::io::{self, Write};

/// Receives confirmation messages.
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str);
}

/// Prints notifications to standard output.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, title: &str, description: &str) {
        let mut stdout = io::stdout().lock();
        // A failed print must not affect the session.
        let _ = writeln!(stdout, "\n* {}\n  {}", title, description);
    }
}

/// Discards notifications.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _title: &str, _description: &str) {}
}
