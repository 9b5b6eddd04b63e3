use anyhow::Result;
use calnotes_core::HttpClient;
use calnotes_core::screens::{EditorParams, EditorScreen};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::utils::tui;

pub async fn run(
    client: &HttpClient,
    title: String,
    description: String,
    date: NaiveDate,
) -> Result<()> {
    let mut editor = EditorScreen::new(EditorParams {
        selected_date: date,
        note_to_edit: None,
    });
    editor.title = title;
    editor.description = description;

    let note = tui::with_spinner(editor.pending_label(), editor.submit(client)).await?;

    println!("{}", format!("  Created: {} on {}", note.title, note.date).green());
    println!("  {}", format!("id {}", note.id).dimmed());

    Ok(())
}
