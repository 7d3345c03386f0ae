//! Storage module for SQLite database operations
//!
//! This module provides:
//! - Database connection management
//! - Schema migrations
//! - The repository for note records

pub mod db;
pub mod note_repo;

pub use db::{default_data_dir, open_database, Database, DatabaseError};
pub use note_repo::NoteRepo;
