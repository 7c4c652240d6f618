//! Read-only projections over the entry list for the archive screens.
//!
//! Nothing here reorders or mutates entries: filtering keeps stored order
//! (newest first), and week numbers, dates and excerpts are display labels
//! computed on demand.

use crate::constants::{EXCERPT_MAX_CHARS, EXCERPT_SUFFIX, LONG_DATE_FORMAT};
use crate::journal_core::{CareField, JournalEntry};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Which entries the archive list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterCategory {
    #[default]
    All,
    /// Entries whose named field holds non-blank text.
    Field(CareField),
}

impl FilterCategory {
    /// Every category in menu order.
    pub const ALL: [FilterCategory; 5] = [
        FilterCategory::All,
        FilterCategory::Field(CareField::Compliment),
        FilterCategory::Field(CareField::Achievement),
        FilterCategory::Field(CareField::Reflection),
        FilterCategory::Field(CareField::Emotion),
    ];

    /// Parses `all` or a field key.
    ///
    /// # Examples
    ///
    /// ```
    /// use care::journal_core::CareField;
    /// use care::ops::archive::FilterCategory;
    ///
    /// assert_eq!(FilterCategory::parse("all"), Some(FilterCategory::All));
    /// assert_eq!(
    ///     FilterCategory::parse("Emotion"),
    ///     Some(FilterCategory::Field(CareField::Emotion))
    /// );
    /// assert_eq!(FilterCategory::parse("mood"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        if value == "all" {
            return Some(FilterCategory::All);
        }
        CareField::parse(&value).map(FilterCategory::Field)
    }

    pub fn key(self) -> &'static str {
        match self {
            FilterCategory::All => "all",
            FilterCategory::Field(field) => field.key(),
        }
    }

    /// Menu label, e.g. "All Entries" or "Reflections".
    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::All => "All Entries",
            FilterCategory::Field(CareField::Compliment) => "Compliments",
            FilterCategory::Field(CareField::Achievement) => "Achievements",
            FilterCategory::Field(CareField::Reflection) => "Reflections",
            FilterCategory::Field(CareField::Emotion) => "Emotions",
        }
    }

    /// Whether `entry` is listed under this category.
    pub fn matches(self, entry: &JournalEntry) -> bool {
        match self {
            FilterCategory::All => true,
            FilterCategory::Field(field) => !entry.field(field).trim().is_empty(),
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Entries passing `category`, in their stored order.
pub fn filter_entries(entries: &[JournalEntry], category: FilterCategory) -> Vec<&JournalEntry> {
    entries.iter().filter(|entry| category.matches(entry)).collect()
}

/// Week of the year for `date`, counting weeks that start on Sunday.
///
/// Computed as `ceil((days_since_jan1 + weekday_of_jan1 + 1) / 7)` with
/// Sunday = 0. The week containing January 1 is week 1.
///
/// Days are whole calendar days; the time of day is dropped on purpose, so
/// an entry's week never depends on the hour it was written.
///
/// # Examples
///
/// ```
/// use care::ops::archive::week_number;
/// use chrono::NaiveDate;
///
/// // January 1, 2023 is a Sunday.
/// let jan = |day| NaiveDate::from_ymd_opt(2023, 1, day).unwrap();
/// assert_eq!(week_number(jan(1)), 1);
/// assert_eq!(week_number(jan(7)), 1);
/// assert_eq!(week_number(jan(8)), 2);
/// ```
pub fn week_number(date: NaiveDate) -> u32 {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let days_since_jan1 = (date - jan1).num_days() as u32;
    let offset = jan1.weekday().num_days_from_sunday();

    (days_since_jan1 + offset + 1).div_ceil(7)
}

/// Calendar date of an entry in the local time zone.
///
/// `None` when the stored timestamp does not parse.
pub fn local_date(entry: &JournalEntry) -> Option<NaiveDate> {
    entry
        .created_at()
        .map(|date| date.with_timezone(&Local).date_naive())
}

/// Long form date, e.g. "Monday, January 15, 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// First 80 characters of `text` followed by an ellipsis.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn excerpt(text: &str) -> String {
    let mut short: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
    short.push_str(EXCERPT_SUFFIX);
    short
}

/// "1 entry" / "3 entries".
pub fn entry_count_label(count: usize) -> String {
    if count == 1 {
        format!("{} entry", count)
    } else {
        format!("{} entries", count)
    }
}

/// State of the archive screen: the active filter and the open entry, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveView {
    category: FilterCategory,
    selected: Option<usize>,
}

impl ArchiveView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> FilterCategory {
        self.category
    }

    /// Index of the open entry within the filtered list.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Switches the filter and returns to the list.
    pub fn set_category(&mut self, category: FilterCategory) {
        self.category = category;
        self.selected = None;
    }

    /// Entries shown in the list.
    pub fn visible<'a>(&self, entries: &'a [JournalEntry]) -> Vec<&'a JournalEntry> {
        filter_entries(entries, self.category)
    }

    /// Opens the entry at `index` of the filtered list.
    ///
    /// Returns `false` and leaves the view unchanged when `index` is out of range.
    pub fn select(&mut self, index: usize, entries: &[JournalEntry]) -> bool {
        if index >= self.visible(entries).len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Returns to the list. `false` if no entry was open.
    pub fn close_detail(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// The open entry, if any.
    pub fn selected_entry<'a>(&self, entries: &'a [JournalEntry]) -> Option<&'a JournalEntry> {
        let index = self.selected?;
        self.visible(entries).get(index).copied()
    }
}
