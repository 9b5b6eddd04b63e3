use anyhow::{Context, Result};
use calnotes_core::screens::SubmitError;
use calnotes_core::{HttpClient, NoteId, NotePatch, NotesApi, is_valid_title};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::utils::tui;

pub async fn run(
    client: &HttpClient,
    id: String,
    title: Option<String>,
    description: Option<String>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let patch = NotePatch {
        title,
        description,
        date,
    };

    if patch.is_empty() {
        anyhow::bail!("Nothing to update. Pass --title, --description or --date");
    }
    if patch.title.as_deref().is_some_and(|t| !is_valid_title(t)) {
        anyhow::bail!("{}", SubmitError::BlankTitle);
    }

    let id = NoteId::from(id);
    let note = tui::with_spinner("Updating...", client.update_note(&id, &patch))
        .await
        .context(SubmitError::UpdateFailed)?;

    println!("{}", format!("  Updated: {} on {}", note.title, note.date).yellow());

    Ok(())
}
