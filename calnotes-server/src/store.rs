//! SQLite storage for notes.

use std::path::Path;

use calnotes_core::{Note, NoteDraft, NoteId, NotePatch};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Row, params};

const NOTE_COLUMNS: &str = "id, title, description, date, created_at, updated_at";

/// Notes table in a single SQLite connection
pub struct NoteStore {
    conn: Connection,
}

impl NoteStore {
    /// Open or create the database at `path`
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        let store = Self {
            conn: Connection::open(path)?,
        };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> rusqlite::Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT
            )",
            [],
        )?;
        self.conn
            .execute("CREATE INDEX IF NOT EXISTS notes_date ON notes(date)", [])?;
        Ok(())
    }

    /// Notes for `date`, newest first
    pub fn list_by_date(&self, date: NaiveDate) -> rusqlite::Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes
             WHERE date = ?1
             ORDER BY created_at DESC, rowid DESC"
        ))?;
        let notes = stmt
            .query_map(params![date], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    pub fn get(&self, id: &NoteId) -> rusqlite::Result<Option<Note>> {
        self.conn
            .query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                params![id.as_str()],
                note_from_row,
            )
            .optional()
    }

    pub fn insert(&self, draft: &NoteDraft) -> rusqlite::Result<Note> {
        let note = Note {
            id: NoteId::from(uuid::Uuid::new_v4().to_string()),
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date,
            created_at: now(),
            updated_at: None,
        };

        self.conn.execute(
            "INSERT INTO notes (id, title, description, date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, NULL)",
            params![
                note.id.as_str(),
                note.title,
                note.description,
                note.date,
                note.created_at
            ],
        )?;

        Ok(note)
    }

    /// Apply `patch` and stamp `updated_at`. Returns `None` for unknown ids.
    pub fn update(&self, id: &NoteId, patch: &NotePatch) -> rusqlite::Result<Option<Note>> {
        let Some(mut note) = self.get(id)? else {
            return Ok(None);
        };

        patch.apply_to(&mut note);
        note.updated_at = Some(now());

        self.conn.execute(
            "UPDATE notes
             SET title = ?1, description = ?2, date = ?3, updated_at = ?4
             WHERE id = ?5",
            params![
                note.title,
                note.description,
                note.date,
                note.updated_at,
                note.id.as_str()
            ],
        )?;

        Ok(Some(note))
    }

    /// Returns false when no note has this id.
    pub fn delete(&self, id: &NoteId) -> rusqlite::Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id.as_str()])?;
        Ok(removed > 0)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: NoteId::from(row.get::<_, String>(0)?),
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        date: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
