//! Note repository: the single table behind the list and edit screens

use rusqlite::{params, Connection, OptionalExtension};

use super::DatabaseError;
use crate::models::Note;

/// Repository for note records
pub struct NoteRepo<'a> {
    conn: &'a Connection,
}

impl<'a> NoteRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get all notes in insertion order.
    ///
    /// Rowid order is insertion order here: upsert never re-inserts an
    /// existing id, so an edited note keeps its position in the list.
    pub fn list(&self) -> Result<Vec<Note>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, couleur FROM notes ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Note {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                couleur: row.get(3)?,
            })
        })?;

        let mut notes = Vec::new();
        for row in rows {
            notes.push(row?);
        }
        Ok(notes)
    }

    /// Get a note by id
    pub fn get(&self, id: &str) -> Result<Option<Note>, DatabaseError> {
        let note = self
            .conn
            .query_row(
                "SELECT id, title, description, couleur FROM notes WHERE id = ?",
                [id],
                |row| {
                    Ok(Note {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        description: row.get(2)?,
                        couleur: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(note)
    }

    /// Insert a note, or replace every field of the row sharing its id
    pub fn upsert(&self, note: &Note) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO notes (id, title, description, couleur)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                couleur = excluded.couleur",
            params![note.id, note.title, note.description, note.couleur],
        )?;
        Ok(())
    }

    /// Delete the note with the given id; Ok(false) if no such row existed
    pub fn delete(&self, id: &str) -> Result<bool, DatabaseError> {
        let count = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?", [id])?;
        Ok(count > 0)
    }

    /// Count stored notes
    pub fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::open_database;
    use tempfile::tempdir;

    fn note(id: &str, title: &str) -> Note {
        Note::with_id(
            id.to_string(),
            title.to_string(),
            "body".to_string(),
            0xFFF7F9E7,
        )
    }

    #[test]
    fn test_upsert_then_list_contains_exactly_one() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = NoteRepo::new(&db.conn);

        let n = note("x", "Groceries");
        repo.upsert(&n).unwrap();

        let notes = repo.list().unwrap();
        let matching: Vec<_> = notes.iter().filter(|m| m.id == "x").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(*matching[0], n);
    }

    #[test]
    fn test_upsert_replaces_instead_of_appending() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = NoteRepo::new(&db.conn);

        repo.upsert(&note("1", "A")).unwrap();
        repo.upsert(&note("1", "B")).unwrap();

        let notes = repo.list().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "B");
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = NoteRepo::new(&db.conn);

        let n = note("1", "A");
        repo.upsert(&n).unwrap();
        repo.upsert(&n).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get("1").unwrap().unwrap(), n);
    }

    #[test]
    fn test_list_preserves_insertion_order_across_updates() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = NoteRepo::new(&db.conn);

        repo.upsert(&note("a", "first")).unwrap();
        repo.upsert(&note("b", "second")).unwrap();
        repo.upsert(&note("c", "third")).unwrap();

        // Editing the first note must not move it to the end.
        repo.upsert(&note("a", "first, edited")).unwrap();

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_delete_removes_row() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = NoteRepo::new(&db.conn);

        repo.upsert(&note("x", "Groceries")).unwrap();
        assert!(repo.delete("x").unwrap());

        let notes = repo.list().unwrap();
        assert!(notes.iter().all(|n| n.id != "x"));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = NoteRepo::new(&db.conn);

        assert!(!repo.delete("nope").unwrap());
    }

    #[test]
    fn test_round_trip_all_fields() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = NoteRepo::new(&db.conn);

        let n = Note::with_id(
            "x".to_string(),
            "Groceries".to_string(),
            "milk, eggs".to_string(),
            0xFFF7F9E7,
        );
        repo.upsert(&n).unwrap();

        let back = repo.get("x").unwrap().unwrap();
        assert_eq!(back.title, n.title);
        assert_eq!(back.description, n.description);
        assert_eq!(back.couleur, n.couleur);
    }
}
