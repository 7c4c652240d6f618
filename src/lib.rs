/*!
# Care

Care is a weekly journal built around the CARE framework: Compliment,
Achievement, Reflection and Emotion. A guided four-step form collects one
reflection per sitting, entries are kept in a local key-value store, and an
archive lets the user browse past entries filtered by CARE category.

## Architecture

- `journal_core`: the CARE fields, drafts and immutable journal entries
- `storage`: the key-value store contract with in-memory and file backends
- `journal_io`: loading, seeding and saving the entry list (`EntryStore`)
- `ops`: the capture wizard, archive projections and the screen state machine
- `screens` / `session`: text rendering and the interactive command loop
- `cli`, `config`, `errors`, `constants`: the application shell

## Usage Example

```rust
use care::journal_io::EntryStore;
use care::ops::{Event, Navigator, NullNotifier, View};
use care::storage::MemoryStore;

fn main() -> care::AppResult<()> {
    let store = EntryStore::open(Box::new(MemoryStore::new()), chrono::Utc::now())?;
    let mut navigator = Navigator::new(store, Box::new(NullNotifier));

    navigator.handle(Event::Start)?;
    for answer in ["I listened well", "Shipped project", "Slow down when tired", "Grateful"] {
        let flow = navigator.capture_mut().expect("capture screen");
        flow.set_field_value(answer);
        flow.advance();
    }
    navigator.submit_capture()?;

    assert_eq!(navigator.view(), &View::Success);
    assert_eq!(navigator.entries()[0].emotion(), "Grateful");
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// CARE fields, drafts and journal entries
pub mod journal_core;
/// Loading, seeding and saving the entry list
pub mod journal_io;
/// Capture, archive and navigation logic
pub mod ops;
/// Text rendering of each screen
pub mod screens;
/// Interactive command loop
pub mod session;
/// Key-value storage backends
pub mod storage;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::{CareEntry, CareField, JournalEntry};
pub use journal_io::EntryStore;
pub use ops::{Navigator, View};
