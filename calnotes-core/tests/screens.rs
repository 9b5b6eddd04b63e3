use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use calnotes_core::screens::home::{DELETE_FAILED, EMPTY_LIST, LOAD_FAILED};
use calnotes_core::screens::{HomeView, LoginError, Route, Shell, SubmitError};
use calnotes_core::{Note, NoteDraft, NoteId, NotePatch, NotesApi, RequestError};
use chrono::{NaiveDate, NaiveDateTime};

/// In-memory notes API that can be told to fail every request.
#[derive(Default)]
struct MemoryNotes {
    notes: Mutex<Vec<Note>>,
    next_id: AtomicUsize,
    requests: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryNotes {
    fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<(), RequestError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RequestError::Transport("connection refused".into()));
        }
        Ok(())
    }

    fn seed(&self, title: &str, date: NaiveDate) -> Note {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let note = Note {
            id: NoteId::from(format!("note-{id}")),
            title: title.to_string(),
            description: String::new(),
            date,
            created_at: timestamp(),
            updated_at: None,
        };
        self.notes.lock().unwrap().push(note.clone());
        note
    }
}

impl NotesApi for MemoryNotes {
    async fn fetch_notes_by_date(&self, date: NaiveDate) -> Result<Vec<Note>, RequestError> {
        self.begin()?;
        let notes = self.notes.lock().unwrap();
        Ok(notes.iter().filter(|n| n.date == date).cloned().collect())
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, RequestError> {
        self.begin()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let note = Note {
            id: NoteId::from(format!("note-{id}")),
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date,
            created_at: timestamp(),
            updated_at: None,
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: &NoteId, patch: &NotePatch) -> Result<Note, RequestError> {
        self.begin()?;
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| RequestError::Status {
                status: 404,
                message: "Note not found".into(),
            })?;
        patch.apply_to(note);
        Ok(note.clone())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), RequestError> {
        self.begin()?;
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| &n.id != id);
        if notes.len() == before {
            return Err(RequestError::Status {
                status: 404,
                message: "Note not found".into(),
            });
        }
        Ok(())
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn timestamp() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-05-01T08:00:00", "%Y-%m-%dT%H:%M:%S").unwrap()
}

async fn logged_in(api: &MemoryNotes, today: &str) -> Shell {
    let mut shell = Shell::new(day(today));
    shell.login_mut().email = "me@example.com".into();
    shell.login_mut().password = "secret".into();
    shell.submit_login(api).await.unwrap();
    shell
}

#[tokio::test]
async fn login_requires_both_fields_and_sends_nothing() {
    let api = MemoryNotes::default();
    let mut shell = Shell::new(day("2024-05-01"));
    shell.login_mut().email = "me@example.com".into();

    let err = shell.submit_login(&api).await.unwrap_err();

    assert_eq!(err, LoginError::EmptyCredentials);
    assert_eq!(shell.route(), &Route::Login);
    assert_eq!(api.requests(), 0);
}

#[tokio::test]
async fn login_mounts_list_for_today() {
    let api = MemoryNotes::default();
    api.seed("Standup", day("2024-05-01"));
    api.seed("Other day", day("2024-05-02"));

    let shell = logged_in(&api, "2024-05-01").await;

    assert_eq!(shell.route(), &Route::Home);
    let titles: Vec<_> = shell.home().notes().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Standup"]);
}

#[tokio::test]
async fn empty_day_shows_empty_message() {
    let api = MemoryNotes::default();
    let shell = logged_in(&api, "2024-05-01").await;
    assert_eq!(shell.home().view(), HomeView::Empty(EMPTY_LIST));
}

#[tokio::test]
async fn selecting_a_date_refetches_only_on_change() {
    let api = MemoryNotes::default();
    api.seed("Tomorrow's note", day("2024-05-02"));
    let mut shell = logged_in(&api, "2024-05-01").await;
    let after_login = api.requests();

    shell.home_mut().select_date(day("2024-05-01"), &api).await;
    assert_eq!(api.requests(), after_login);

    shell.home_mut().select_date(day("2024-05-02"), &api).await;
    assert_eq!(api.requests(), after_login + 1);
    assert_eq!(shell.home().notes()[0].title, "Tomorrow's note");
}

#[tokio::test]
async fn load_failure_sets_message_and_keeps_list() {
    let api = MemoryNotes::default();
    api.seed("Kept", day("2024-05-01"));
    let mut shell = logged_in(&api, "2024-05-01").await;

    api.set_failing(true);
    shell.home_mut().refresh(&api).await;

    assert_eq!(shell.home().error(), Some(LOAD_FAILED));
    assert_eq!(shell.home().view(), HomeView::Error(LOAD_FAILED));
    assert_eq!(shell.home().notes().len(), 1);

    api.set_failing(false);
    shell.home_mut().refresh(&api).await;
    assert_eq!(shell.home().error(), None);
}

#[tokio::test]
async fn blank_title_is_rejected_before_any_request() {
    let api = MemoryNotes::default();
    let mut shell = logged_in(&api, "2024-05-01").await;
    let before = api.requests();

    let params = shell.home().add_params();
    shell.open_editor(params);
    shell.editor_mut().unwrap().title = "   ".into();
    shell.editor_mut().unwrap().description = "kept".into();

    let err = shell.submit_editor(&api).await.unwrap_err();

    assert_eq!(err, SubmitError::BlankTitle);
    assert_eq!(err.to_string(), "Please enter a title");
    assert_eq!(api.requests(), before);
    assert!(matches!(shell.route(), Route::Editor(_)));
    assert_eq!(shell.editor().unwrap().description, "kept");
}

#[tokio::test]
async fn created_note_appears_after_returning_to_list() {
    let api = MemoryNotes::default();
    let mut shell = logged_in(&api, "2024-05-01").await;

    let params = shell.home().add_params();
    shell.open_editor(params);
    assert_eq!(shell.route().title(), "Add Note");
    shell.editor_mut().unwrap().title = "Groceries".into();

    let created = shell.submit_editor(&api).await.unwrap();

    assert_eq!(created.date, day("2024-05-01"));
    assert_eq!(created.description, "");
    assert_eq!(shell.route(), &Route::Home);
    assert!(shell.editor().is_none());
    assert!(shell.home().find(&created.id).is_some());
    assert_eq!(shell.home().notes()[0].title, "Groceries");
}

#[tokio::test]
async fn editing_keeps_id_and_shows_new_title() {
    let api = MemoryNotes::default();
    let original = api.seed("Groceries", day("2024-05-01"));
    let mut shell = logged_in(&api, "2024-05-01").await;

    let note = shell.home().find(&original.id).unwrap().clone();
    let params = shell.home().edit_params(&note);
    shell.open_editor(params);
    assert_eq!(shell.route().title(), "Edit Note");
    assert_eq!(shell.editor().unwrap().title, "Groceries");
    shell.editor_mut().unwrap().title = "Groceries and bread".into();

    let updated = shell.submit_editor(&api).await.unwrap();

    assert_eq!(updated.id, original.id);
    let listed = shell.home().find(&original.id).unwrap();
    assert_eq!(listed.title, "Groceries and bread");
}

#[tokio::test]
async fn failed_save_keeps_editor_open() {
    let api = MemoryNotes::default();
    let mut shell = logged_in(&api, "2024-05-01").await;

    let params = shell.home().add_params();
    shell.open_editor(params);
    shell.editor_mut().unwrap().title = "Groceries".into();
    api.set_failing(true);

    let err = shell.submit_editor(&api).await.unwrap_err();

    assert_eq!(err, SubmitError::SaveFailed);
    assert!(matches!(shell.route(), Route::Editor(_)));
    let editor = shell.editor().unwrap();
    assert_eq!(editor.title, "Groceries");
    assert_eq!(editor.submit_label(), "Save Note");
}

#[tokio::test]
async fn failed_update_reports_update_message() {
    let api = MemoryNotes::default();
    let original = api.seed("Groceries", day("2024-05-01"));
    let mut shell = logged_in(&api, "2024-05-01").await;

    let params = shell.home().edit_params(&original);
    shell.open_editor(params);
    api.set_failing(true);

    let err = shell.submit_editor(&api).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to update note");
}

#[tokio::test]
async fn deleted_note_disappears_from_list() {
    let api = MemoryNotes::default();
    let doomed = api.seed("Doomed", day("2024-05-01"));
    api.seed("Survivor", day("2024-05-01"));
    let mut shell = logged_in(&api, "2024-05-01").await;

    assert!(shell.home_mut().delete(&doomed.id, &api).await);

    assert!(shell.home().find(&doomed.id).is_none());
    assert_eq!(shell.home().notes().len(), 1);
}

#[tokio::test]
async fn failed_delete_leaves_list_unchanged() {
    let api = MemoryNotes::default();
    let note = api.seed("Stays", day("2024-05-01"));
    let mut shell = logged_in(&api, "2024-05-01").await;

    api.set_failing(true);
    assert!(!shell.home_mut().delete(&note.id, &api).await);

    assert_eq!(shell.home().error(), Some(DELETE_FAILED));
    assert!(shell.home().find(&note.id).is_some());
}

#[tokio::test]
async fn back_from_editor_refetches_list() {
    let api = MemoryNotes::default();
    let mut shell = logged_in(&api, "2024-05-01").await;

    let params = shell.home().add_params();
    shell.open_editor(params);
    api.seed("Created elsewhere", day("2024-05-01"));

    shell.go_back(&api).await;

    assert_eq!(shell.route(), &Route::Home);
    assert!(shell.editor().is_none());
    assert_eq!(shell.home().notes()[0].title, "Created elsewhere");
}

#[tokio::test]
async fn logout_returns_to_login() {
    let api = MemoryNotes::default();
    let mut shell = logged_in(&api, "2024-05-01").await;

    shell.logout();

    assert_eq!(shell.route(), &Route::Login);
    assert_eq!(
        shell.submit_login(&api).await.unwrap_err(),
        LoginError::EmptyCredentials
    );
}
