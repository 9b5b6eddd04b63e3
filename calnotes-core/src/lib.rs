//! Core types for calnotes.
//!
//! This crate provides everything the calnotes front ends share:
//! - `Note` and the request payloads sent to the notes API
//! - `api` module with the `NotesApi` seam and its HTTP implementation
//! - `screens` module with the state and behavior of each screen

pub mod api;
pub mod config;
pub mod date;
pub mod error;
pub mod note;
pub mod screens;

pub use api::{HttpClient, NotesApi};
pub use error::{CalNotesError, CalNotesResult, RequestError};
pub use note::*;
