//! SQLite-backed settings store and focus session history.
//!
//! Provides persistent storage for:
//! - The key-value settings namespace (timer state, display preferences)
//! - Completed focus sessions and their statistics

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use super::{data_dir, SettingsStore};
use crate::error::StoreError;

/// One completed focus session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i64,
    pub label: String,
    pub duration_min: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Stats {
    pub total_sessions: u64,
    pub total_focus_min: u64,
    pub today_sessions: u64,
    pub today_focus_min: u64,
}

/// SQLite database backing the settings store and session history.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/chronocat.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()
            .map_err(|e| StoreError::MigrationFailed(e.to_string()))?
            .join("chronocat.db");
        let conn = Connection::open(&path)
            .map_err(|source| StoreError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS sessions (
                    id           INTEGER PRIMARY KEY AUTOINCREMENT,
                    label        TEXT NOT NULL DEFAULT '',
                    duration_min INTEGER NOT NULL,
                    started_at   TEXT NOT NULL,
                    completed_at TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_sessions_completed_at ON sessions(completed_at);",
            )
            .map_err(|e| StoreError::MigrationFailed(e.to_string()))
    }

    /// Record a completed focus session.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_session(
        &self,
        label: &str,
        duration_min: u64,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO sessions (label, duration_min, started_at, completed_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                label,
                duration_min,
                started_at.to_rfc3339(),
                completed_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn stats_today(&self) -> Result<Stats, StoreError> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let mut stmt = self.conn.prepare(
            "SELECT COUNT(*), COALESCE(SUM(duration_min), 0)
             FROM sessions
             WHERE completed_at >= ?1",
        )?;
        let (count, minutes) = stmt.query_row(
            params![format!("{today}T00:00:00+00:00")],
            |row| Ok((row.get::<_, u64>(0)?, row.get::<_, u64>(1)?)),
        )?;
        Ok(Stats {
            total_sessions: count,
            total_focus_min: minutes,
            today_sessions: count,
            today_focus_min: minutes,
        })
    }

    pub fn stats_all(&self) -> Result<Stats, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT COUNT(*), COALESCE(SUM(duration_min), 0) FROM sessions",
        )?;
        let (count, minutes) =
            stmt.query_row([], |row| Ok((row.get::<_, u64>(0)?, row.get::<_, u64>(1)?)))?;

        let today = self.stats_today()?;
        Ok(Stats {
            total_sessions: count,
            total_focus_min: minutes,
            today_sessions: today.today_sessions,
            today_focus_min: today.today_focus_min,
        })
    }

    /// Most recent sessions, newest first.
    pub fn recent_sessions(&self, limit: u32) -> Result<Vec<SessionRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, label, duration_min, started_at, completed_at
             FROM sessions ORDER BY completed_at DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, label, duration_min, started_at, completed_at) = row?;
            let parse = |s: &str| {
                DateTime::parse_from_rfc3339(s)
                    .map(|d| d.with_timezone(&Utc))
                    .map_err(|e| StoreError::QueryFailed(e.to_string()))
            };
            records.push(SessionRecord {
                id,
                label,
                duration_min,
                started_at: parse(&started_at)?,
                completed_at: parse(&completed_at)?,
            });
        }
        Ok(records)
    }
}

impl SettingsStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_roundtrip_and_remove() {
        let db = Database::open_memory().unwrap();
        assert!(db.get("target-date").unwrap().is_none());
        db.set("target-date", "2030-01-01T00:00:00Z").unwrap();
        assert_eq!(
            db.get("target-date").unwrap().unwrap(),
            "2030-01-01T00:00:00Z"
        );
        db.set("target-date", "2031-01-01T00:00:00Z").unwrap();
        assert_eq!(
            db.get("target-date").unwrap().unwrap(),
            "2031-01-01T00:00:00Z"
        );
        db.remove("target-date").unwrap();
        assert!(db.get("target-date").unwrap().is_none());
    }

    #[test]
    fn record_and_query_sessions() {
        let db = Database::open_memory().unwrap();
        let now = Utc::now();
        db.record_session("Focus", 25, now, now).unwrap();
        db.record_session("Deep Work", 40, now, now).unwrap();

        let stats = db.stats_all().unwrap();
        assert_eq!(stats.total_sessions, 2);
        assert_eq!(stats.total_focus_min, 65);
        assert_eq!(stats.today_sessions, 2);

        let recent = db.recent_sessions(1).unwrap();
        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn opens_on_disk_with_data_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        // Serialize access to the env var with a scoped override.
        std::env::set_var("CHRONOCAT_DATA_DIR", dir.path());
        let db = Database::open().unwrap();
        db.set("color", "#ff7700").unwrap();
        drop(db);
        let db = Database::open().unwrap();
        assert_eq!(db.get("color").unwrap().as_deref(), Some("#ff7700"));
        std::env::remove_var("CHRONOCAT_DATA_DIR");
    }
}
