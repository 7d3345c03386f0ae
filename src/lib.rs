//! Storage and view-state core for a color-coded note app.
//!
//! The crate persists [`Note`] records in a local SQLite file and mirrors
//! the table into an observable list for whatever shell renders it. A UI
//! embeds [`NoteService`], subscribes to the list, and funnels saves and
//! deletes back through it; the updated list always arrives via the
//! subscription, never via the mutation call.

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::{Note, DEFAULT_COULEUR};
pub use services::{NoteService, SaveNoteError};
pub use storage::{default_data_dir, open_database, Database, DatabaseError, NoteRepo};
pub use utils::init_logging;
