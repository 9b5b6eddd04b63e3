//! TUI rendering traits for calnotes types.
//!
//! Extension traits that add colored terminal rendering to calnotes-core
//! types using owo_colors.

use calnotes_core::Note;
use calnotes_core::date::{day_label, display_timestamp, today};
use calnotes_core::screens::{HomeScreen, HomeView};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Note {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "  {} {}",
            self.title.bold(),
            format!("[{}]", self.id).dimmed()
        )];
        lines.extend(self.description.lines().map(|l| format!("    {}", l)));
        lines.push(format!("    {}", display_timestamp(&self.created_at).dimmed()));
        lines.join("\n")
    }
}

impl Render for HomeScreen {
    fn render(&self) -> String {
        let date = self.selected_date();
        let header = format!(
            "{} {}",
            day_label(date, today()).bold(),
            date.to_string().dimmed()
        );

        let body = match self.view() {
            HomeView::Error(message) => format!("  {}", message.red()),
            HomeView::Empty(message) => format!("  {}", message.dimmed()),
            HomeView::Notes(notes) => notes
                .iter()
                .map(|n| n.render())
                .collect::<Vec<_>>()
                .join("\n"),
        };

        format!("{}\n{}", header, body)
    }
}

/// One-line label for picking a note from a list
pub fn note_choice(note: &Note) -> String {
    format!(
        "{} {}",
        note.title,
        display_timestamp(&note.created_at).dimmed()
    )
}
