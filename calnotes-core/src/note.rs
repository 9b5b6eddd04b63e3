//! Note types shared by the client, the screens and the server.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Server-assigned note identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        NoteId(id)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        NoteId(id.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A titled, dated text record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// The day whose list this note belongs to.
    pub date: NaiveDate,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body of `POST /notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, date: NaiveDate) -> Self {
        NoteDraft {
            title: title.into(),
            description: description.into(),
            date,
        }
    }
}

/// Body of `PUT /notes/{id}`. Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.date.is_none()
    }

    /// Apply the present fields to `note`.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(description) = &self.description {
            note.description = description.clone();
        }
        if let Some(date) = self.date {
            note.date = date;
        }
    }
}

/// A title is accepted when it has at least one non-whitespace character.
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}

/// Parse a server timestamp.
///
/// Accepts naive ISO-8601 (`2024-05-01T09:30:00.123456`) or RFC 3339 with an
/// offset, which is converted to local time.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{s}'")))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| {
            parse_timestamp(&s).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{s}'")))
        })
        .transpose()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
