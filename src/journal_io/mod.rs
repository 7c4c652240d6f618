//! Loading, seeding and saving the journal entry list.
//!
//! The entry list lives under a single key of a `KeyValueStore` as a JSON
//! array. `EntryStore` is the in-memory copy used during a session: it is
//! loaded once when opened and written back in full after every append.

use crate::constants::{SEED_OLDER_DAYS_AGO, SEED_RECENT_DAYS_AGO, STORAGE_KEY_ENTRIES};
use crate::errors::{AppResult, StorageError};
use crate::journal_core::{CareEntry, JournalEntry};
use crate::storage::KeyValueStore;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

/// Reads the stored entry list.
///
/// Returns `None` when nothing is stored yet, and also when the stored value
/// does not parse as a list of entries. Malformed data is logged and then
/// handled exactly like a first run.
pub fn load_entries(store: &dyn KeyValueStore) -> Option<Vec<JournalEntry>> {
    let raw = store.get(STORAGE_KEY_ENTRIES)?;

    match serde_json::from_str::<Vec<JournalEntry>>(&raw) {
        Ok(entries) => Some(entries),
        Err(error) => {
            warn!(error = %error, "Stored journal entries are malformed; reseeding");
            None
        }
    }
}

/// Serializes the full entry list and stores it.
pub fn save_entries(store: &mut dyn KeyValueStore, entries: &[JournalEntry]) -> AppResult<()> {
    let raw = serde_json::to_string(entries).map_err(StorageError::Serialize)?;
    store.set(STORAGE_KEY_ENTRIES, raw)?;
    debug!(count = entries.len(), "Saved journal entries");
    Ok(())
}

/// Example entries shown on first run, newest first.
pub fn seed_entries(now: DateTime<Utc>) -> Vec<JournalEntry> {
    vec![
        JournalEntry::from_parts(
            "seed-1",
            now - Duration::days(SEED_RECENT_DAYS_AGO),
            CareEntry {
                compliment: "I stayed patient during a stressful deadline and kept encouraging my teammates instead of snapping at them.".to_string(),
                achievement: "Finished the first draft of the quarterly report two days early.".to_string(),
                reflection: "Breaking big tasks into small daily goals makes them feel manageable.".to_string(),
                emotion: "Relief and pride after the report was done; some anxiety early in the week triggered by the tight timeline.".to_string(),
            },
        ),
        JournalEntry::from_parts(
            "seed-2",
            now - Duration::days(SEED_OLDER_DAYS_AGO),
            CareEntry {
                compliment: "I spoke up in a meeting about a concern even though I felt nervous.".to_string(),
                achievement: "Went running three times this week.".to_string(),
                reflection: "Rest is part of progress; pushing through tiredness made my work worse.".to_string(),
                emotion: "Frustration when plans changed at the last minute, and gratitude for a long call with an old friend.".to_string(),
            },
        ),
    ]
}

/// The session's ordered list of journal entries, newest first.
pub struct EntryStore {
    entries: Vec<JournalEntry>,
    backend: Box<dyn KeyValueStore>,
}

impl EntryStore {
    /// Loads the entry list from `backend`.
    ///
    /// When nothing usable is stored, the example entries are written once so
    /// later runs load them like any other data.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing the seed data fails.
    pub fn open(backend: Box<dyn KeyValueStore>, now: DateTime<Utc>) -> AppResult<Self> {
        let mut store = EntryStore {
            entries: Vec::new(),
            backend,
        };

        match load_entries(&*store.backend) {
            Some(entries) => {
                info!(count = entries.len(), "Loaded journal entries");
                store.entries = entries;
            }
            None => {
                info!("No journal entries stored; writing example entries");
                store.entries = seed_entries(now);
                store.persist()?;
            }
        }

        Ok(store)
    }

    /// Adds `entry` at the front of the list and writes the list back.
    ///
    /// On a failed write the in-memory list is left unchanged.
    pub fn prepend(&mut self, entry: JournalEntry) -> AppResult<()> {
        self.entries.insert(0, entry);
        if let Err(error) = self.persist() {
            self.entries.remove(0);
            return Err(error);
        }
        Ok(())
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The storage the list is written to.
    pub fn backend(&self) -> &dyn KeyValueStore {
        &*self.backend
    }

    fn persist(&mut self) -> AppResult<()> {
        save_entries(&mut *self.backend, &self.entries)
    }
}
