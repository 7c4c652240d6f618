//! Journal operations behind the screens.
//!
//! `navigation` owns the screen state machine and the entry store; `capture`
//! and `archive` hold the state of the two interactive screens; `notify`
//! carries the confirmation shown after an entry is saved.

pub mod archive;
pub mod capture;
pub mod navigation;
pub mod notify;

// Re-export commonly used types
pub use archive::{filter_entries, week_number, ArchiveView, FilterCategory};
pub use capture::{Advance, CaptureFlow, Retreat};
pub use navigation::{Event, Navigator, Transition, View};
pub use notify::{ConsoleNotifier, Notifier, NullNotifier};
