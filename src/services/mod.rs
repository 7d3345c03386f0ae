//! Services module for business logic
//!
//! This module contains the view-state adapter that coordinates between
//! storage and the presentation shell.

pub mod note_service;

pub use note_service::{NoteService, SaveNoteError};
