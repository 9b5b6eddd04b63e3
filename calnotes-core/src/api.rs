//! Client for the notes HTTP API.
//!
//! `NotesApi` is the seam the screens are written against; `HttpClient`
//! talks to a real server:
//! - `GET /notes?date=YYYY-MM-DD`
//! - `POST /notes`
//! - `PUT /notes/{id}`
//! - `DELETE /notes/{id}`
//!
//! Calls are fire-and-report: no retries, no timeout beyond the transport's.

use chrono::NaiveDate;
use reqwest::{Response, Url};
use serde::Deserialize;

use crate::error::RequestError;
use crate::note::{Note, NoteDraft, NoteId, NotePatch};

/// The four note operations offered by the notes API.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    /// Notes whose date equals `date`, in server order.
    async fn fetch_notes_by_date(&self, date: NaiveDate) -> Result<Vec<Note>, RequestError>;

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, RequestError>;

    async fn update_note(&self, id: &NoteId, patch: &NotePatch) -> Result<Note, RequestError>;

    async fn delete_note(&self, id: &NoteId) -> Result<(), RequestError>;
}

/// Error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// HTTP client for the notes API
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> Result<Url, RequestError> {
        let invalid = || RequestError::InvalidUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push("notes");
        Ok(url)
    }

    /// The id is opaque, so it is pushed as one encoded path segment.
    fn note_url(&self, id: &NoteId) -> Result<Url, RequestError> {
        let mut url = self.notes_url()?;
        url.path_segments_mut()
            .map_err(|_| RequestError::InvalidUrl(self.base_url.clone()))?
            .push(id.as_str());
        Ok(url)
    }
}

/// Turn a non-2xx response into `RequestError::Status`, keeping the
/// server's `{"error": ...}` message when there is one.
async fn check_status(resp: Response) -> Result<Response, RequestError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => err.error,
        Err(_) if !body.trim().is_empty() => body,
        Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
    };

    Err(RequestError::Status {
        status: status.as_u16(),
        message,
    })
}

impl NotesApi for HttpClient {
    async fn fetch_notes_by_date(&self, date: NaiveDate) -> Result<Vec<Note>, RequestError> {
        let result: Result<Vec<Note>, RequestError> = async {
            let resp = self
                .http
                .get(self.notes_url()?)
                .query(&[("date", date.to_string())])
                .send()
                .await?;
            Ok::<_, RequestError>(check_status(resp).await?.json().await?)
        }
        .await;

        result.inspect_err(|e| tracing::error!(%date, error = %e, "Error fetching notes"))
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, RequestError> {
        let result: Result<Note, RequestError> = async {
            let resp = self.http.post(self.notes_url()?).json(draft).send().await?;
            Ok::<_, RequestError>(check_status(resp).await?.json().await?)
        }
        .await;

        result.inspect_err(|e| tracing::error!(error = %e, "Error creating note"))
    }

    async fn update_note(&self, id: &NoteId, patch: &NotePatch) -> Result<Note, RequestError> {
        let result: Result<Note, RequestError> = async {
            let resp = self.http.put(self.note_url(id)?).json(patch).send().await?;
            Ok::<_, RequestError>(check_status(resp).await?.json().await?)
        }
        .await;

        result.inspect_err(|e| tracing::error!(%id, error = %e, "Error updating note"))
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), RequestError> {
        let result: Result<(), RequestError> = async {
            let resp = self.http.delete(self.note_url(id)?).send().await?;
            check_status(resp).await?;
            Ok::<_, RequestError>(())
        }
        .await;

        result.inspect_err(|e| tracing::error!(%id, error = %e, "Error deleting note"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = HttpClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.notes_url().unwrap().as_str(),
            "http://localhost:5000/notes"
        );
        assert_eq!(
            client.note_url(&NoteId::from("abc")).unwrap().as_str(),
            "http://localhost:5000/notes/abc"
        );
    }

    #[test]
    fn note_id_stays_one_path_segment() {
        let client = HttpClient::new("http://localhost:5000");
        let url = client.note_url(&NoteId::from("nope/../abc?x#y")).unwrap();
        assert_eq!(url.path(), "/notes/nope%2F..%2Fabc%3Fx%23y");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn base_path_is_kept() {
        let client = HttpClient::new("http://localhost:5000/api/");
        assert_eq!(
            client.notes_url().unwrap().as_str(),
            "http://localhost:5000/api/notes"
        );
    }

    #[test]
    fn unparsable_base_url_is_a_request_error() {
        let client = HttpClient::new("not a url");
        assert!(matches!(client.notes_url(), Err(RequestError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_request_error() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let client = HttpClient::new("http://127.0.0.1:9");
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let err = client.fetch_notes_by_date(date).await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
    }
}
