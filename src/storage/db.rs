//! Database connection management and migrations

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

/// Database error type
#[derive(Debug)]
pub enum DatabaseError {
    ConnectionFailed(String),
    MigrationFailed(String),
    QueryFailed(String),
}

impl std::fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            DatabaseError::MigrationFailed(msg) => write!(f, "Migration failed: {}", msg),
            DatabaseError::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for DatabaseError {}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        DatabaseError::QueryFailed(err.to_string())
    }
}

/// Wrapper around SQLite connection for the note store
pub struct Database {
    pub conn: Connection,
    pub data_dir: PathBuf,
}

impl Database {
    /// Get the database file path for a data directory
    pub fn db_path(data_dir: &Path) -> PathBuf {
        data_dir.join("thinkit.sqlite")
    }
}

/// Default per-user data directory for the app
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("thinkit"))
}

/// Open or create the note database under the given data directory
pub fn open_database(data_dir: &Path) -> Result<Database, DatabaseError> {
    std::fs::create_dir_all(data_dir)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    let db_path = Database::db_path(data_dir);
    info!("Opening database at {:?}", db_path);

    let conn = Connection::open(&db_path)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    conn.execute("PRAGMA foreign_keys = ON", []).map_err(|e| {
        DatabaseError::MigrationFailed(format!("Failed to enable foreign keys: {}", e))
    })?;

    run_migrations(&conn)?;

    Ok(Database {
        conn,
        data_dir: data_dir.to_path_buf(),
    })
}

/// Run database schema migrations
fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version: i32 = conn
        .query_row(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    info!("Current schema version: {}", current_version);

    if current_version < 1 {
        info!("Applying migration v1: Initial schema");
        apply_v1_schema(conn)?;
    }

    Ok(())
}

/// Apply the initial v1 schema
fn apply_v1_schema(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(include_str!("schema.sql"))
        .map_err(|e| DatabaseError::MigrationFailed(format!("Failed to apply v1 schema: {}", e)))?;
    Ok(())
}
