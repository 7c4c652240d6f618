//! Core journal types without I/O operations.
//!
//! This module defines the four CARE fields and the records built from them:
//! the transient `CareDraft` collected step by step, the complete `CareEntry`
//! handed off at submission, and the persisted, immutable `JournalEntry`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One of the four parts of a CARE reflection, in their fixed order.
///
/// # Examples
///
/// ```
/// use care::journal_core::CareField;
///
/// assert_eq!(CareField::ALL[0], CareField::Compliment);
/// assert_eq!(CareField::Emotion.key(), "emotion");
/// assert_eq!(CareField::parse("achievement"), Some(CareField::Achievement));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareField {
    Compliment,
    Achievement,
    Reflection,
    Emotion,
}

impl CareField {
    /// The four fields in capture order.
    pub const ALL: [CareField; 4] = [
        CareField::Compliment,
        CareField::Achievement,
        CareField::Reflection,
        CareField::Emotion,
    ];

    /// Stable lowercase identifier, also used as the serialized field name.
    pub fn key(self) -> &'static str {
        match self {
            CareField::Compliment => "compliment",
            CareField::Achievement => "achievement",
            CareField::Reflection => "reflection",
            CareField::Emotion => "emotion",
        }
    }

    /// Parses a field from its key.
    pub fn parse(key: &str) -> Option<Self> {
        CareField::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Short label used in the archive.
    pub fn label(self) -> &'static str {
        match self {
            CareField::Compliment => "Compliment",
            CareField::Achievement => "Achievement",
            CareField::Reflection => "Reflection",
            CareField::Emotion => "Emotion",
        }
    }

    /// Heading of the capture step.
    pub fn title(self) -> &'static str {
        match self {
            CareField::Compliment => "Compliment (Self-Praise)",
            CareField::Achievement => "Achievement",
            CareField::Reflection => "Reflection",
            CareField::Emotion => "Emotion",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            CareField::Compliment => "What behavior or attitude am I proud of this week?",
            CareField::Achievement => "What specific goals or results did I accomplish this week?",
            CareField::Reflection => "What lesson did I learn from my experiences this week?",
            CareField::Emotion => "What were the key emotions I felt this week, and what situations triggered those emotions?",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            CareField::Compliment => "Focus on your internal evaluation - moments where you positively viewed your mindset, decisions, or personal approach, regardless of the outcome...",
            CareField::Achievement => "Record concrete external accomplishments - completed tasks, met goals, or valuable outcomes you produced...",
            CareField::Reflection => "Consider both successes and failures - what insights did you gain that will help you grow or make better decisions in the future?",
            CareField::Emotion => "Focus on emotional awareness - identify the main emotions you experienced and the specific contexts or situations that brought them up...",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            CareField::Compliment => "This week I'm proud of my attitude when...",
            CareField::Achievement => "I accomplished the specific goal of...",
            CareField::Reflection => "From this week's experiences, I learned that...",
            CareField::Emotion => "The main emotions I felt were... and they were triggered by...",
        }
    }

    /// One-line summary shown on the home screen.
    pub fn summary(self) -> &'static str {
        match self {
            CareField::Compliment => "Acknowledge what you're proud of",
            CareField::Achievement => "Celebrate your accomplishments",
            CareField::Reflection => "Learn from your experiences",
            CareField::Emotion => "Honor your feelings",
        }
    }
}

impl fmt::Display for CareField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete set of CARE answers, not yet stamped with an id or date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareEntry {
    pub compliment: String,
    pub achievement: String,
    pub reflection: String,
    pub emotion: String,
}

/// In-progress answers collected by the capture flow.
///
/// Each field stays `None` until the user types something for that step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareDraft {
    compliment: Option<String>,
    achievement: Option<String>,
    reflection: Option<String>,
    emotion: Option<String>,
}

impl CareDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: CareField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Overwrites the value for `field`.
    pub fn set(&mut self, field: CareField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Converts the draft into a complete entry.
    ///
    /// Total: a field that was never set becomes the empty string. The capture
    /// flow only reaches submission after every step passed its non-empty
    /// guard, so the default only applies to drafts built outside that flow.
    ///
    /// # Examples
    ///
    /// ```
    /// use care::journal_core::{CareDraft, CareField};
    ///
    /// let mut draft = CareDraft::new();
    /// draft.set(CareField::Compliment, "I listened well");
    ///
    /// let entry = draft.into_entry();
    /// assert_eq!(entry.compliment, "I listened well");
    /// assert_eq!(entry.emotion, "");
    /// ```
    pub fn into_entry(self) -> CareEntry {
        CareEntry {
            compliment: self.compliment.unwrap_or_default(),
            achievement: self.achievement.unwrap_or_default(),
            reflection: self.reflection.unwrap_or_default(),
            emotion: self.emotion.unwrap_or_default(),
        }
    }

    fn slot(&self, field: CareField) -> &Option<String> {
        match field {
            CareField::Compliment => &self.compliment,
            CareField::Achievement => &self.achievement,
            CareField::Reflection => &self.reflection,
            CareField::Emotion => &self.emotion,
        }
    }

    fn slot_mut(&mut self, field: CareField) -> &mut Option<String> {
        match field {
            CareField::Compliment => &mut self.compliment,
            CareField::Achievement => &mut self.achievement,
            CareField::Reflection => &mut self.reflection,
            CareField::Emotion => &mut self.emotion,
        }
    }
}

/// A persisted CARE reflection.
///
/// Entries are immutable once created: fields are private and only readable
/// through accessors. The serialized form is a flat record of six strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    id: String,
    date: String,
    compliment: String,
    achievement: String,
    reflection: String,
    emotion: String,
}

impl JournalEntry {
    /// Stamps a completed entry with a fresh UUID and the given creation time.
    pub fn create(entry: CareEntry, created_at: DateTime<Utc>) -> Self {
        Self::from_parts(Uuid::new_v4().to_string(), created_at, entry)
    }

    /// Builds an entry from explicit parts. Used for seed data and tests.
    pub fn from_parts(id: impl Into<String>, created_at: DateTime<Utc>, entry: CareEntry) -> Self {
        JournalEntry {
            id: id.into(),
            date: format_timestamp(created_at),
            compliment: entry.compliment,
            achievement: entry.achievement,
            reflection: entry.reflection,
            emotion: entry.emotion,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation timestamp exactly as stored (ISO 8601).
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Parses the stored timestamp.
    ///
    /// Returns `None` for a timestamp that is not valid RFC 3339.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }

    pub fn field(&self, field: CareField) -> &str {
        match field {
            CareField::Compliment => &self.compliment,
            CareField::Achievement => &self.achievement,
            CareField::Reflection => &self.reflection,
            CareField::Emotion => &self.emotion,
        }
    }

    pub fn compliment(&self) -> &str {
        &self.compliment
    }

    pub fn achievement(&self) -> &str {
        &self.achievement
    }

    pub fn reflection(&self) -> &str {
        &self.reflection
    }

    pub fn emotion(&self) -> &str {
        &self.emotion
    }
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn format_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
