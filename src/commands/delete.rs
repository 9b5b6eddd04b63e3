use anyhow::{Context, Result};
use calnotes_core::screens::home::DELETE_FAILED;
use calnotes_core::{HttpClient, NoteId, NotesApi};
use owo_colors::OwoColorize;

use crate::utils::tui;

pub async fn run(client: &HttpClient, id: String) -> Result<()> {
    let id = NoteId::from(id);

    tui::with_spinner("Deleting...", client.delete_note(&id))
        .await
        .context(DELETE_FAILED)?;

    println!("{}", format!("  Deleted: {}", id).red());

    Ok(())
}
