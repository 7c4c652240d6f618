//! Top-level screen state machine.
//!
//! `Navigator` owns the current `View`, the session's `EntryStore` and the
//! notifier. Screens change only through `handle`, which accepts an `Event`
//! and applies the matching transition:
//!
//! | from    | event        | to      |
//! |---------|--------------|---------|
//! | Home    | Start        | Capture |
//! | Home    | ViewArchive  | Archive |
//! | Capture | Complete     | Success |
//! | Capture | Back         | Home    |
//! | Archive | Back         | Home    |
//! | Success | GoHome       | Home    |
//! | Success | ViewArchive  | Archive |
//!
//! Any other pairing is ignored. `Complete` is the only event that writes to
//! the store.

use super::archive::ArchiveView;
use super::capture::{CaptureFlow, Retreat};
use super::notify::Notifier;
use crate::constants::{SAVED_NOTICE_DESCRIPTION, SAVED_NOTICE_TITLE};
use crate::errors::AppResult;
use crate::journal_core::{CareEntry, JournalEntry};
use crate::journal_io::EntryStore;
use chrono::Utc;
use tracing::{debug, info};

/// The screen currently shown, with its own state where it has any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Capture(CaptureFlow),
    Archive(ArchiveView),
    Success,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Capture(_) => "capture",
            View::Archive(_) => "archive",
            View::Success => "success",
        }
    }
}

/// Inputs to the navigation state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    ViewArchive,
    Back,
    GoHome,
    Complete(CareEntry),
}

/// What `handle` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The screen changed.
    Changed,
    /// The event was handled inside the current screen.
    Stayed,
    /// The event does not apply to the current screen.
    Ignored,
}

pub struct Navigator {
    view: View,
    store: EntryStore,
    notifier: Box<dyn Notifier>,
}

impl Navigator {
    /// Starts on the home screen.
    pub fn new(store: EntryStore, notifier: Box<dyn Notifier>) -> Self {
        Navigator {
            view: View::Home,
            store,
            notifier,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn entries(&self) -> &[JournalEntry] {
        self.store.entries()
    }

    /// Applies `event` to the current screen.
    ///
    /// # Errors
    ///
    /// Only `Complete` can fail, when the entry list cannot be written. The
    /// view then stays on the capture screen with the draft intact and the
    /// store unchanged.
    pub fn handle(&mut self, event: Event) -> AppResult<Transition> {
        let next = match (&mut self.view, event) {
            (View::Home, Event::Start) => View::Capture(CaptureFlow::new()),
            (View::Home | View::Success, Event::ViewArchive) => View::Archive(ArchiveView::new()),
            (View::Capture(_), Event::Back) => View::Home,
            (View::Archive(archive), Event::Back) => {
                if archive.close_detail() {
                    return Ok(Transition::Stayed);
                }
                View::Home
            }
            (View::Success, Event::GoHome) => View::Home,
            (View::Capture(_), Event::Complete(entry)) => {
                Self::complete(&mut self.store, self.notifier.as_mut(), entry)?;
                View::Success
            }
            (view, event) => {
                debug!(view = view.name(), ?event, "Ignoring event");
                return Ok(Transition::Ignored);
            }
        };

        debug!(from = self.view.name(), to = next.name(), "Changing view");
        self.view = next;
        Ok(Transition::Changed)
    }

    /// The capture flow, when the capture screen is showing.
    pub fn capture_mut(&mut self) -> Option<&mut CaptureFlow> {
        match &mut self.view {
            View::Capture(flow) => Some(flow),
            _ => None,
        }
    }

    /// The archive state and the entries it projects, when the archive is showing.
    pub fn archive_mut(&mut self) -> Option<(&mut ArchiveView, &[JournalEntry])> {
        match &mut self.view {
            View::Archive(archive) => Some((archive, self.store.entries())),
            _ => None,
        }
    }

    /// Steps the capture flow back, leaving it for home from the first step.
    pub fn retreat_capture(&mut self) -> AppResult<Transition> {
        let Some(flow) = self.capture_mut() else {
            return Ok(Transition::Ignored);
        };

        match flow.retreat() {
            Retreat::Exit => self.handle(Event::Back),
            Retreat::EditStep | Retreat::Moved => Ok(Transition::Stayed),
        }
    }

    /// Submits the capture flow from its preview.
    pub fn submit_capture(&mut self) -> AppResult<Transition> {
        let entry = match self.capture_mut().and_then(|flow| flow.submit()) {
            Some(entry) => entry,
            None => return Ok(Transition::Ignored),
        };
        self.handle(Event::Complete(entry))
    }

    // Id and date are assigned here, at the moment of completion.
    fn complete(
        store: &mut EntryStore,
        notifier: &mut dyn Notifier,
        entry: CareEntry,
    ) -> AppResult<()> {
        let entry = JournalEntry::create(entry, Utc::now());
        let id = entry.id().to_string();

        store.prepend(entry)?;
        info!(entry_id = %id, total = store.len(), "Saved journal entry");

        notifier.notify(SAVED_NOTICE_TITLE, SAVED_NOTICE_DESCRIPTION);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STORAGE_KEY_ENTRIES;
    use crate::journal_io::load_entries;
    use crate::ops::archive::FilterCategory;
    use crate::ops::capture::Advance;
    use crate::ops::notify::NullNotifier;
    use crate::storage::MemoryStore;
    use chrono::SubsecRound;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct RecordingNotifier {
        seen: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, title: &str, description: &str) {
            self.seen
                .borrow_mut()
                .push((title.to_string(), description.to_string()));
        }
    }

    fn empty_store() -> EntryStore {
        let backend = MemoryStore::with_value(STORAGE_KEY_ENTRIES, "[]");
        EntryStore::open(Box::new(backend), Utc::now()).unwrap()
    }

    fn navigator() -> Navigator {
        Navigator::new(empty_store(), Box::new(NullNotifier))
    }

    fn fill_capture(nav: &mut Navigator, answers: [&str; 4]) {
        let flow = nav.capture_mut().unwrap();
        for answer in answers {
            flow.set_field_value(answer);
            assert_ne!(flow.advance(), Advance::Rejected);
        }
    }

    #[test]
    fn test_starts_home() {
        assert_eq!(navigator().view(), &View::Home);
    }

    #[test]
    fn test_home_transitions() {
        let mut nav = navigator();
        assert_eq!(nav.handle(Event::Start).unwrap(), Transition::Changed);
        assert_eq!(nav.view(), &View::Capture(CaptureFlow::new()));

        nav.handle(Event::Back).unwrap();
        assert_eq!(nav.view(), &View::Home);

        nav.handle(Event::ViewArchive).unwrap();
        assert_eq!(nav.view(), &View::Archive(ArchiveView::new()));

        nav.handle(Event::Back).unwrap();
        assert_eq!(nav.view(), &View::Home);
    }

    #[test]
    fn test_invalid_events_are_ignored() {
        let mut nav = navigator();
        for event in [
            Event::Back,
            Event::GoHome,
            Event::Complete(CareEntry::default()),
        ] {
            assert_eq!(nav.handle(event).unwrap(), Transition::Ignored);
            assert_eq!(nav.view(), &View::Home);
        }
        assert!(nav.entries().is_empty());

        nav.handle(Event::ViewArchive).unwrap();
        assert_eq!(nav.handle(Event::Start).unwrap(), Transition::Ignored);
        assert_eq!(nav.handle(Event::GoHome).unwrap(), Transition::Ignored);
        assert_eq!(
            nav.handle(Event::Complete(CareEntry::default())).unwrap(),
            Transition::Ignored
        );
        assert!(nav.entries().is_empty());
    }

    #[test]
    fn test_start_always_gives_fresh_flow() {
        let mut nav = navigator();
        nav.handle(Event::Start).unwrap();
        nav.capture_mut().unwrap().set_field_value("abandoned");
        nav.handle(Event::Back).unwrap();

        nav.handle(Event::Start).unwrap();
        assert_eq!(nav.capture_mut().unwrap().current_value(), "");
    }

    #[test]
    fn test_complete_end_to_end() {
        let mut nav = navigator();
        let before = nav.entries().len();

        nav.handle(Event::Start).unwrap();
        fill_capture(
            &mut nav,
            [
                "I listened well",
                "Shipped project",
                "Slow down when tired",
                "Grateful",
            ],
        );
        assert!(nav.capture_mut().unwrap().is_previewing());

        let invoked_at = Utc::now().trunc_subsecs(3);
        assert_eq!(nav.submit_capture().unwrap(), Transition::Changed);
        assert_eq!(nav.view(), &View::Success);
        assert_eq!(nav.entries().len(), before + 1);

        let saved = &nav.entries()[0];
        assert_eq!(saved.compliment(), "I listened well");
        assert_eq!(saved.achievement(), "Shipped project");
        assert_eq!(saved.reflection(), "Slow down when tired");
        assert_eq!(saved.emotion(), "Grateful");
        assert!(!saved.id().is_empty());
        assert!(saved.created_at().unwrap() >= invoked_at);

        let persisted = load_entries(nav.store().backend()).unwrap();
        assert_eq!(persisted, nav.entries());
    }

    #[test]
    fn test_success_transitions() {
        let mut nav = navigator();
        nav.handle(Event::Start).unwrap();
        fill_capture(&mut nav, ["a", "b", "c", "d"]);
        nav.submit_capture().unwrap();

        assert_eq!(nav.handle(Event::Back).unwrap(), Transition::Ignored);
        nav.handle(Event::ViewArchive).unwrap();
        assert!(matches!(nav.view(), View::Archive(_)));

        nav.handle(Event::Back).unwrap();
        nav.handle(Event::Start).unwrap();
        fill_capture(&mut nav, ["e", "f", "g", "h"]);
        nav.submit_capture().unwrap();
        nav.handle(Event::GoHome).unwrap();
        assert_eq!(nav.view(), &View::Home);
        assert_eq!(nav.entries().len(), 2);
        assert_eq!(nav.entries()[0].compliment(), "e");
    }

    #[test]
    fn test_submit_outside_preview_is_ignored() {
        let mut nav = navigator();
        assert_eq!(nav.submit_capture().unwrap(), Transition::Ignored);

        nav.handle(Event::Start).unwrap();
        nav.capture_mut().unwrap().set_field_value("only one");
        assert_eq!(nav.submit_capture().unwrap(), Transition::Ignored);
        assert!(nav.entries().is_empty());
    }

    #[test]
    fn test_retreat_capture_exits_from_first_step() {
        let mut nav = navigator();
        nav.handle(Event::Start).unwrap();
        nav.capture_mut().unwrap().set_field_value("a");
        nav.capture_mut().unwrap().advance();

        assert_eq!(nav.retreat_capture().unwrap(), Transition::Stayed);
        assert_eq!(nav.capture_mut().unwrap().step_index(), 0);

        assert_eq!(nav.retreat_capture().unwrap(), Transition::Changed);
        assert_eq!(nav.view(), &View::Home);
    }

    #[test]
    fn test_archive_back_closes_detail_first() {
        let mut nav = navigator();
        nav.handle(Event::Start).unwrap();
        fill_capture(&mut nav, ["a", "b", "c", "d"]);
        nav.submit_capture().unwrap();
        nav.handle(Event::ViewArchive).unwrap();

        let (archive, entries) = nav.archive_mut().unwrap();
        archive.set_category(FilterCategory::All);
        assert!(archive.select(0, entries));

        assert_eq!(nav.handle(Event::Back).unwrap(), Transition::Stayed);
        assert_eq!(nav.view(), &View::Archive(ArchiveView::new()));

        assert_eq!(nav.handle(Event::Back).unwrap(), Transition::Changed);
        assert_eq!(nav.view(), &View::Home);
    }

    #[test]
    fn test_complete_notifies_once() {
        let notifier = RecordingNotifier::default();
        let seen = notifier.seen.clone();
        let mut nav = Navigator::new(empty_store(), Box::new(notifier));

        nav.handle(Event::Start).unwrap();
        fill_capture(&mut nav, ["a", "b", "c", "d"]);
        nav.submit_capture().unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, SAVED_NOTICE_TITLE);
        assert_eq!(seen[0].1, SAVED_NOTICE_DESCRIPTION);
    }

    #[test]
    fn test_complete_failure_keeps_capture() {
        struct ReadOnly;

        impl crate::storage::KeyValueStore for ReadOnly {
            fn get(&self, _key: &str) -> Option<String> {
                Some("[]".to_string())
            }

            fn set(&mut self, _key: &str, _value: String) -> AppResult<()> {
                Err(std::io::Error::other("read-only").into())
            }
        }

        let store = EntryStore::open(Box::new(ReadOnly), Utc::now()).unwrap();
        let mut nav = Navigator::new(store, Box::new(NullNotifier));
        nav.handle(Event::Start).unwrap();
        fill_capture(&mut nav, ["a", "b", "c", "d"]);

        assert!(nav.submit_capture().is_err());
        assert!(nav.capture_mut().unwrap().is_previewing());
        assert!(nav.entries().is_empty());
    }
}
