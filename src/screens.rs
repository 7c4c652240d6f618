//! Plain-text rendering of every screen.
//!
//! Each renderer is a pure function of the state it shows, so a screen looks
//! the same for the same input. Available commands are listed at the bottom
//! of each screen.

use crate::constants::WEEK_OF_DATE_FORMAT;
use crate::journal_core::{CareField, JournalEntry};
use crate::ops::archive::{
    entry_count_label, excerpt, format_long_date, local_date, week_number, ArchiveView,
    FilterCategory,
};
use crate::ops::capture::CaptureFlow;
use crate::ops::navigation::{Navigator, View};
use chrono::NaiveDate;

const RULE: &str = "----------------------------------------";

/// Renders whatever screen `navigator` is on. `today` feeds the home screen.
pub fn render(navigator: &Navigator, today: NaiveDate) -> String {
    match navigator.view() {
        View::Home => render_home(navigator.entries().len(), today),
        View::Capture(flow) if flow.is_previewing() => render_preview(flow),
        View::Capture(flow) => render_capture_step(flow),
        View::Archive(archive) => match archive.selected_entry(navigator.entries()) {
            Some(entry) => render_archive_detail(entry),
            None => render_archive_list(archive, navigator.entries()),
        },
        View::Success => render_success(),
    }
}

pub fn render_home(entry_count: usize, today: NaiveDate) -> String {
    let mut lines = vec![
        "Weekly Growth with CARE".to_string(),
        "Nurture your personal growth through weekly reflection with our gentle CARE framework"
            .to_string(),
        RULE.to_string(),
        "The CARE Framework".to_string(),
    ];
    for field in CareField::ALL {
        lines.push(format!("  {:<12} {}", field.label(), field.summary()));
    }
    lines.push(RULE.to_string());
    lines.push(format!(
        "Week of {}",
        today.format(WEEK_OF_DATE_FORMAT)
    ));
    lines.push(String::new());
    lines.push("[start]   Begin this week's entry".to_string());
    lines.push(format!("[archive] Explore {} Entries", entry_count));
    lines.push("[quit]    Leave".to_string());
    lines.join("\n")
}

pub fn render_capture_step(flow: &CaptureFlow) -> String {
    let field = flow.current_field();
    let value = flow.current_value();

    let mut lines = vec![
        format!(
            "Step {} of {} {}",
            flow.step_number(),
            CaptureFlow::STEP_COUNT,
            progress_bar(flow.progress())
        ),
        RULE.to_string(),
        field.title().to_string(),
        field.question().to_string(),
        field.prompt().to_string(),
        String::new(),
    ];
    if value.is_empty() {
        lines.push(format!("({})", field.placeholder()));
    } else {
        lines.push(format!("> {}", value));
    }
    lines.push(String::new());
    lines.push("Type your answer on one line to replace the text above.".to_string());

    let next = if flow.step_number() == CaptureFlow::STEP_COUNT {
        "Review"
    } else {
        "Next"
    };
    if flow.can_proceed() {
        lines.push(format!("[:next] {}", next));
    } else {
        lines.push(format!("[:next] {} (write something first)", next));
    }
    if flow.step_index() > 0 {
        lines.push("[:back] Previous".to_string());
    } else {
        lines.push("[:back] Back".to_string());
    }
    lines.join("\n")
}

pub fn render_preview(flow: &CaptureFlow) -> String {
    let mut lines = vec![
        "Review Your CARE Entry".to_string(),
        "Take a moment to review your reflection".to_string(),
    ];
    for field in CareField::ALL {
        lines.push(RULE.to_string());
        lines.push(field.title().to_string());
        lines.push(field.question().to_string());
        lines.push(flow.draft().get(field).unwrap_or("").to_string());
    }
    lines.push(RULE.to_string());
    lines.push("[:back]   Edit Entries".to_string());
    lines.push("[:submit] Complete Entry".to_string());
    lines.join("\n")
}

pub fn render_archive_list(archive: &ArchiveView, entries: &[JournalEntry]) -> String {
    let category = archive.category();
    let visible = archive.visible(entries);

    let mut lines = vec![
        "My Growth Archive".to_string(),
        format!(
            "{} in your journey (filter: {})",
            entry_count_label(visible.len()),
            category.label()
        ),
        RULE.to_string(),
    ];

    if visible.is_empty() {
        lines.push("No Entries Yet".to_string());
        match category {
            FilterCategory::All => lines.push(
                "Start your growth journey by creating your first weekly entry".to_string(),
            ),
            _ => lines.push(format!(
                "No entries found for {}",
                category.label().to_lowercase()
            )),
        }
    }

    for (index, entry) in visible.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, entry_heading(entry)));
        for field in CareField::ALL {
            lines.push(format!(
                "   {:<12} {}",
                field.label(),
                excerpt(entry.field(field))
            ));
        }
    }

    lines.push(RULE.to_string());
    let keys: Vec<&str> = FilterCategory::ALL.iter().map(|c| c.key()).collect();
    lines.push(format!("[filter <{}>]", keys.join("|")));
    if !visible.is_empty() {
        lines.push("[open <n>] Read an entry".to_string());
    }
    lines.push("[back]     Back to Home".to_string());
    lines.join("\n")
}

pub fn render_archive_detail(entry: &JournalEntry) -> String {
    let mut lines = match local_date(entry) {
        Some(date) => vec![
            format!("Week {} Journal Entry", week_number(date)),
            format_long_date(date),
        ],
        None => vec!["Journal Entry".to_string(), entry.date().to_string()],
    };
    for field in CareField::ALL {
        lines.push(RULE.to_string());
        lines.push(field.label().to_string());
        lines.push(entry.field(field).to_string());
    }
    lines.push(RULE.to_string());
    lines.push("[back] Back to Archive".to_string());
    lines.join("\n")
}

pub fn render_success() -> String {
    [
        "Great job reflecting this week!",
        "You've completed your weekly CARE journal entry. Every reflection is a step toward greater self-awareness and personal growth.",
        RULE,
        "Weekly Reflection Complete",
        "Your thoughts and insights have been saved to your private growth archive",
        RULE,
        "[home]    Return Home",
        "[archive] View Archive",
    ]
    .join("\n")
}

/// "Week 3 - Monday, January 15, 2024", falling back to the raw timestamp.
fn entry_heading(entry: &JournalEntry) -> String {
    match local_date(entry) {
        Some(date) => format!(
            "Week {} - {}",
            week_number(date),
            format_long_date(date)
        ),
        None => entry.date().to_string(),
    }
}

fn progress_bar(progress: f64) -> String {
    const WIDTH: usize = 20;
    let filled = ((progress.clamp(0.0, 1.0)) * WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(WIDTH - filled))
}
