//! Note list for the selected date.

use chrono::NaiveDate;

use crate::api::NotesApi;
use crate::note::{Note, NoteId};
use crate::screens::navigation::EditorParams;

/// Shown by the driver while a fetch is pending.
pub const LOADING: &str = "Loading notes";
pub const LOAD_FAILED: &str = "Failed to load notes";
pub const DELETE_FAILED: &str = "Failed to delete note";
pub const EMPTY_LIST: &str = "No notes for this date";

/// What the list area shows, in priority order.
#[derive(Debug, PartialEq)]
pub enum HomeView<'a> {
    Error(&'a str),
    Empty(&'static str),
    Notes(&'a [Note]),
}

#[derive(Debug, Clone)]
pub struct HomeScreen {
    selected_date: NaiveDate,
    notes: Vec<Note>,
    error: Option<String>,
}

impl HomeScreen {
    /// A list for `today`; nothing is fetched until the screen gains focus.
    pub fn new(today: NaiveDate) -> Self {
        HomeScreen {
            selected_date: today,
            notes: Vec::new(),
            error: None,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn view(&self) -> HomeView<'_> {
        if let Some(error) = &self.error {
            HomeView::Error(error)
        } else if self.notes.is_empty() {
            HomeView::Empty(EMPTY_LIST)
        } else {
            HomeView::Notes(&self.notes)
        }
    }

    /// Fetch the notes for the selected date. On failure the previous list
    /// is kept and the error message is set.
    pub async fn refresh<A: NotesApi>(&mut self, api: &A) {
        self.error = None;

        match api.fetch_notes_by_date(self.selected_date).await {
            Ok(notes) => self.notes = notes,
            Err(_) => self.error = Some(LOAD_FAILED.to_string()),
        }
    }

    /// The screen became visible again (login, or back from the editor).
    pub async fn on_focus<A: NotesApi>(&mut self, api: &A) {
        self.refresh(api).await;
    }

    /// Select another day. Re-fetches only when the day actually changes.
    pub async fn select_date<A: NotesApi>(&mut self, date: NaiveDate, api: &A) {
        if date == self.selected_date {
            return;
        }
        self.selected_date = date;
        self.refresh(api).await;
    }

    /// Delete a note, then re-fetch. On failure the list is left untouched.
    pub async fn delete<A: NotesApi>(&mut self, id: &NoteId, api: &A) -> bool {
        match api.delete_note(id).await {
            Ok(()) => {
                self.refresh(api).await;
                true
            }
            Err(_) => {
                self.error = Some(DELETE_FAILED.to_string());
                false
            }
        }
    }

    /// Editor parameters for adding a note on the selected date.
    pub fn add_params(&self) -> EditorParams {
        EditorParams {
            selected_date: self.selected_date,
            note_to_edit: None,
        }
    }

    /// Editor parameters for editing `note`, keeping its own date.
    pub fn edit_params(&self, note: &Note) -> EditorParams {
        EditorParams {
            selected_date: note.date,
            note_to_edit: Some(note.clone()),
        }
    }
}
