//! The four-step CARE capture wizard.
//!
//! The flow walks the fields of `CareField::ALL` in order. Each step must hold
//! non-blank text before the user may move past it; after the last step the
//! flow switches to a read-only preview from which the entry is submitted.

use crate::journal_core::{CareDraft, CareEntry, CareField};
use tracing::debug;

/// Result of [`CaptureFlow::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step.
    Moved,
    /// Left the last step and entered the preview.
    Previewing,
    /// The current value is blank, or the preview is already showing.
    Rejected,
}

/// Result of [`CaptureFlow::retreat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Closed the preview; the last step is editable again.
    EditStep,
    /// Moved to the previous step.
    Moved,
    /// Already at the first step: the caller should leave the flow.
    Exit,
}

/// State of one pass through the capture wizard.
///
/// # Examples
///
/// ```
/// use care::ops::capture::{Advance, CaptureFlow};
///
/// let mut flow = CaptureFlow::new();
/// assert_eq!(flow.advance(), Advance::Rejected);
///
/// for answer in ["I listened well", "Shipped project", "Slow down when tired", "Grateful"] {
///     flow.set_field_value(answer);
///     flow.advance();
/// }
///
/// let entry = flow.submit().unwrap();
/// assert_eq!(entry.reflection, "Slow down when tired");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureFlow {
    step: usize,
    draft: CareDraft,
    previewing: bool,
}

impl CaptureFlow {
    pub const STEP_COUNT: usize = CareField::ALL.len();

    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the current step.
    pub fn step_index(&self) -> usize {
        self.step
    }

    /// One-based step number, as shown to the user ("2 of 4").
    pub fn step_number(&self) -> usize {
        self.step + 1
    }

    /// Fraction of the wizard reached, including the current step.
    pub fn progress(&self) -> f64 {
        self.step_number() as f64 / Self::STEP_COUNT as f64
    }

    pub fn current_field(&self) -> CareField {
        CareField::ALL[self.step]
    }

    /// Text entered for the current step so far, empty if none.
    pub fn current_value(&self) -> &str {
        self.draft.get(self.current_field()).unwrap_or("")
    }

    pub fn is_previewing(&self) -> bool {
        self.previewing
    }

    pub fn draft(&self) -> &CareDraft {
        &self.draft
    }

    /// Replaces the text of the current step. Ignored during preview.
    pub fn set_field_value(&mut self, text: impl Into<String>) {
        if self.previewing {
            debug!("Ignoring edit while previewing");
            return;
        }
        self.draft.set(self.current_field(), text);
    }

    /// Whether the current step holds non-blank text.
    pub fn can_proceed(&self) -> bool {
        !self.current_value().trim().is_empty()
    }

    /// Moves past the current step when its text is non-blank.
    pub fn advance(&mut self) -> Advance {
        if self.previewing || !self.can_proceed() {
            return Advance::Rejected;
        }

        if self.step + 1 < Self::STEP_COUNT {
            self.step += 1;
            Advance::Moved
        } else {
            self.previewing = true;
            Advance::Previewing
        }
    }

    /// Steps backwards: out of the preview, to the previous step, or out of the flow.
    pub fn retreat(&mut self) -> Retreat {
        if self.previewing {
            self.previewing = false;
            Retreat::EditStep
        } else if self.step > 0 {
            self.step -= 1;
            Retreat::Moved
        } else {
            Retreat::Exit
        }
    }

    /// Produces the completed entry. Only available from the preview.
    pub fn submit(&self) -> Option<CareEntry> {
        if !self.previewing {
            return None;
        }
        Some(self.draft.clone().into_entry())
    }
}
