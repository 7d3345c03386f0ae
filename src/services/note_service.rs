//! Note service: bridges storage to the observable list the UI renders
//!
//! Mutations are fire-and-forget; the updated list arrives through the
//! watch channel once the write has committed, never through the mutation
//! call itself.

use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{error, info};

use crate::models::Note;
use crate::storage::{open_database, Database, DatabaseError, NoteRepo};

/// Validation error for the save path
#[derive(Debug, PartialEq, Eq)]
pub enum SaveNoteError {
    /// The title was empty or whitespace-only; nothing was written.
    BlankTitle,
}

impl std::fmt::Display for SaveNoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveNoteError::BlankTitle => write!(f, "Note title must not be blank"),
        }
    }
}

impl std::error::Error for SaveNoteError {}

/// View-state adapter over the note store.
///
/// Owns the database handle and the write side of a `watch` channel that
/// carries the full note list, newest snapshot wins. Subscribers see the
/// empty list until the initial load lands. Intended to live as long as
/// the screen (or app shell) that owns it.
///
/// Must be created inside a tokio runtime; storage work runs on the
/// blocking pool.
pub struct NoteService {
    db: Arc<Mutex<Database>>,
    notes_tx: Arc<watch::Sender<Vec<Note>>>,
}

impl NoteService {
    /// Open the note store under `data_dir` and schedule the initial load.
    pub fn open(data_dir: &Path) -> Result<Self, DatabaseError> {
        let db = open_database(data_dir)?;
        let (notes_tx, _) = watch::channel(Vec::new());

        let service = Self {
            db: Arc::new(Mutex::new(db)),
            notes_tx: Arc::new(notes_tx),
        };
        service.refresh();
        Ok(service)
    }

    /// Subscribe to the live note list.
    ///
    /// The receiver always holds the latest snapshot; re-subscribing at any
    /// point yields the current state, so a recreated screen can pick up
    /// where the old one left off.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Note>> {
        self.notes_tx.subscribe()
    }

    /// Current snapshot, for pull-style consumers.
    pub fn notes(&self) -> Vec<Note> {
        self.notes_tx.borrow().clone()
    }

    /// Save a note: a fresh one when `id` is None, a full replacement of
    /// the existing record when editing.
    ///
    /// Blank titles are rejected up front and nothing is written. On
    /// success the note that will be persisted is returned immediately;
    /// the write itself runs in the background and the caller must not
    /// assume the new snapshot is visible yet.
    pub fn save_note(
        &self,
        title: String,
        description: String,
        couleur: u32,
        id: Option<String>,
    ) -> Result<Note, SaveNoteError> {
        if title.trim().is_empty() {
            return Err(SaveNoteError::BlankTitle);
        }

        let note = match id {
            Some(id) => Note::with_id(id, title, description, couleur),
            None => Note::new(title, description, couleur),
        };

        let db = Arc::clone(&self.db);
        let notes_tx = Arc::clone(&self.notes_tx);
        let record = note.clone();
        tokio::task::spawn_blocking(move || {
            let db = match db.lock() {
                Ok(db) => db,
                Err(e) => {
                    error!("Database lock poisoned, dropping save: {}", e);
                    return;
                }
            };

            let repo = NoteRepo::new(&db.conn);
            if let Err(e) = repo.upsert(&record) {
                error!("Failed to save note {}: {}", record.id, e);
                return;
            }
            info!("Saved note {}", record.id);

            publish_snapshot(&db, &notes_tx);
        });

        Ok(note)
    }

    /// Delete a note. Fire-and-forget; deleting an already-absent note is
    /// a logged no-op.
    pub fn delete_note(&self, note: &Note) {
        let id = note.id.clone();
        let db = Arc::clone(&self.db);
        let notes_tx = Arc::clone(&self.notes_tx);
        tokio::task::spawn_blocking(move || {
            let db = match db.lock() {
                Ok(db) => db,
                Err(e) => {
                    error!("Database lock poisoned, dropping delete: {}", e);
                    return;
                }
            };

            let repo = NoteRepo::new(&db.conn);
            match repo.delete(&id) {
                Ok(true) => {
                    info!("Deleted note {}", id);
                    publish_snapshot(&db, &notes_tx);
                }
                Ok(false) => info!("Note {} already absent, nothing to delete", id),
                Err(e) => error!("Failed to delete note {}: {}", id, e),
            }
        });
    }

    /// Re-read storage and republish the list; also used for the initial
    /// load right after `open`.
    pub fn refresh(&self) {
        let db = Arc::clone(&self.db);
        let notes_tx = Arc::clone(&self.notes_tx);
        tokio::task::spawn_blocking(move || {
            let db = match db.lock() {
                Ok(db) => db,
                Err(e) => {
                    error!("Database lock poisoned, dropping refresh: {}", e);
                    return;
                }
            };
            publish_snapshot(&db, &notes_tx);
        });
    }
}

/// Read the full list and push it to subscribers.
///
/// Called with the database lock held so snapshots go out in commit order.
fn publish_snapshot(db: &Database, notes_tx: &watch::Sender<Vec<Note>>) {
    match NoteRepo::new(&db.conn).list() {
        // Send only fails when every receiver is gone; nobody is watching.
        Ok(notes) => {
            let _ = notes_tx.send(notes);
        }
        Err(e) => error!("Failed to reload note list: {}", e),
    }
}
