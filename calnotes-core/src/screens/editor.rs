//! Create/edit form for a single note.

use chrono::NaiveDate;
use thiserror::Error;

use crate::api::NotesApi;
use crate::note::{Note, NoteDraft, NotePatch, is_valid_title};
use crate::screens::navigation::EditorParams;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please enter a title")]
    BlankTitle,

    #[error("Failed to save note")]
    SaveFailed,

    #[error("Failed to update note")]
    UpdateFailed,

    #[error("No note is being edited")]
    NotEditing,
}

#[derive(Debug, Clone)]
pub struct EditorScreen {
    selected_date: NaiveDate,
    note_to_edit: Option<Note>,
    pub title: String,
    pub description: String,
}

impl EditorScreen {
    /// Blank fields in create mode, the note's fields in edit mode.
    pub fn new(params: EditorParams) -> Self {
        let (title, description) = match &params.note_to_edit {
            Some(note) => (note.title.clone(), note.description.clone()),
            None => (String::new(), String::new()),
        };

        EditorScreen {
            selected_date: params.selected_date,
            note_to_edit: params.note_to_edit,
            title,
            description,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.note_to_edit.is_some()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn screen_title(&self) -> &'static str {
        if self.is_editing() { "Edit Note" } else { "Add Note" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update Note" } else { "Save Note" }
    }

    /// Label shown while `submit` is awaiting the server.
    pub fn pending_label(&self) -> &'static str {
        if self.is_editing() { "Updating..." } else { "Saving..." }
    }

    /// Validate, then create or update the note.
    ///
    /// A blank title is rejected before any request is made. On failure the
    /// fields are kept so the user can retry. The driver shows
    /// `pending_label` while the returned future is pending.
    pub async fn submit<A: NotesApi>(&mut self, api: &A) -> Result<Note, SubmitError> {
        if !is_valid_title(&self.title) {
            return Err(SubmitError::BlankTitle);
        }

        match &self.note_to_edit {
            Some(note) => {
                let patch = NotePatch {
                    title: Some(self.title.clone()),
                    description: Some(self.description.clone()),
                    date: Some(self.selected_date),
                };
                api.update_note(&note.id, &patch)
                    .await
                    .map_err(|_| SubmitError::UpdateFailed)
            }
            None => {
                let draft = NoteDraft::new(&self.title, &self.description, self.selected_date);
                api.create_note(&draft)
                    .await
                    .map_err(|_| SubmitError::SaveFailed)
            }
        }
    }
}
