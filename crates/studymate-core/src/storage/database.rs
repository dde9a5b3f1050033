//! SQLite-based persistence.
//!
//! Provides storage for:
//! - Study-session records (resuming the last active timer)
//! - Key-value snapshots (planner tasks, news bookmarks, floating-timer
//!   placement, persisted timer state)
//!
//! Snapshots are read-modify-written whole; last writer wins, which is
//! acceptable because there is a single logical writer.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::planner::Planner;
use crate::session::{FloatingTimerState, StudySession, TimerKind};

use super::data_dir;

const PLANNER_KEY: &str = "plannerTasks";
const BOOKMARKS_KEY: &str = "bookmarkedNews";
const FLOATING_KEY: &str = "floatingTimer";

/// SQLite database for sessions and kv snapshots.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/studymate/studymate.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        Self::open_at(data_dir()?.join("studymate.db"))
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: impl AsRef<std::path::Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (tests, ephemeral runs).
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sessions (
                id           TEXT PRIMARY KEY,
                kind         TEXT NOT NULL,
                started_at   TEXT NOT NULL,
                active       INTEGER NOT NULL,
                display_secs INTEGER NOT NULL,
                message      TEXT
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Insert or update a session record by id.
    ///
    /// # Errors
    /// Returns an error if the upsert fails.
    pub fn save_session(&self, session: &StudySession) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO sessions (id, kind, started_at, active, display_secs, message)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                session.id,
                session.kind.to_string(),
                session.started_at.to_rfc3339(),
                session.active as i64,
                session.display_secs,
                session.message,
            ],
        )?;
        Ok(())
    }

    pub fn get_session(&self, id: &str) -> Result<Option<StudySession>, rusqlite::Error> {
        self.conn
            .query_row(
                "SELECT id, kind, started_at, active, display_secs, message
                 FROM sessions WHERE id = ?1",
                params![id],
                Self::session_from_row,
            )
            .optional()
    }

    /// The most recently written session, for resuming the last timer.
    pub fn last_session(&self) -> Result<Option<StudySession>, rusqlite::Error> {
        self.conn
            .query_row(
                "SELECT id, kind, started_at, active, display_secs, message
                 FROM sessions ORDER BY rowid DESC LIMIT 1",
                [],
                Self::session_from_row,
            )
            .optional()
    }

    pub fn clear_sessions(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute("DELETE FROM sessions", [])?;
        Ok(())
    }

    fn session_from_row(row: &rusqlite::Row<'_>) -> Result<StudySession, rusqlite::Error> {
        let kind_str: String = row.get(1)?;
        let started_str: String = row.get(2)?;
        let kind = kind_str.parse::<TimerKind>().unwrap_or(TimerKind::Timer);
        let started_at = DateTime::parse_from_rfc3339(&started_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());
        Ok(StudySession {
            id: row.get(0)?,
            kind,
            started_at,
            active: row.get::<_, i64>(3)? != 0,
            display_secs: row.get(4)?,
            message: row.get(5)?,
        })
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Decode a JSON snapshot from the kv store, falling back to the
    /// default when the key is missing or the payload is corrupt.
    fn kv_snapshot<T: serde::de::DeserializeOwned + Default>(&self, key: &str) -> T {
        self.kv_get(key)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn kv_store_snapshot<T: serde::Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let raw = serde_json::to_string(value)?;
        self.kv_set(key, &raw)?;
        Ok(())
    }

    pub fn load_planner(&self) -> Planner {
        self.kv_snapshot(PLANNER_KEY)
    }

    pub fn save_planner(&self, planner: &Planner) -> Result<(), Box<dyn std::error::Error>> {
        self.kv_store_snapshot(PLANNER_KEY, planner)
    }

    pub fn load_bookmarks(&self) -> Vec<i64> {
        self.kv_snapshot(BOOKMARKS_KEY)
    }

    pub fn save_bookmarks(&self, ids: &[i64]) -> Result<(), Box<dyn std::error::Error>> {
        self.kv_store_snapshot(BOOKMARKS_KEY, &ids)
    }

    /// Toggle a bookmark id. Returns true when the id is now bookmarked.
    pub fn toggle_bookmark(&self, id: i64) -> Result<bool, Box<dyn std::error::Error>> {
        let mut ids = self.load_bookmarks();
        let added = if let Some(pos) = ids.iter().position(|&b| b == id) {
            ids.remove(pos);
            false
        } else {
            ids.push(id);
            true
        };
        self.save_bookmarks(&ids)?;
        Ok(added)
    }

    pub fn load_floating_timer(&self) -> FloatingTimerState {
        self.kv_snapshot(FLOATING_KEY)
    }

    pub fn save_floating_timer(
        &self,
        state: &FloatingTimerState,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.kv_store_snapshot(FLOATING_KEY, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{Day, Priority};

    #[test]
    fn session_roundtrip_and_last() {
        let db = Database::open_memory().unwrap();
        let mut first = StudySession::new(TimerKind::Stopwatch, Some("Stopwatch Running"));
        first.display_secs = 42;
        db.save_session(&first).unwrap();
        let second = StudySession::new(TimerKind::Pomodoro, None);
        db.save_session(&second).unwrap();

        let loaded = db.get_session(&first.id).unwrap().unwrap();
        assert_eq!(loaded.display_secs, 42);
        assert_eq!(loaded.kind, TimerKind::Stopwatch);

        let last = db.last_session().unwrap().unwrap();
        assert_eq!(last.id, second.id);

        db.clear_sessions().unwrap();
        assert!(db.last_session().unwrap().is_none());
    }

    #[test]
    fn resaving_a_session_makes_it_last() {
        let db = Database::open_memory().unwrap();
        let mut a = StudySession::new(TimerKind::Timer, None);
        let b = StudySession::new(TimerKind::Focus, None);
        db.save_session(&a).unwrap();
        db.save_session(&b).unwrap();
        a.display_secs = 7;
        db.save_session(&a).unwrap();
        assert_eq!(db.last_session().unwrap().unwrap().id, a.id);
    }

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
    }

    #[test]
    fn planner_snapshot_roundtrip() {
        let db = Database::open_memory().unwrap();
        let mut planner = db.load_planner();
        planner.add_task(Day::Monday, "Revise Kinematics", 60, Priority::High, 20);
        db.save_planner(&planner).unwrap();
        let reloaded = db.load_planner();
        assert_eq!(reloaded.tasks(Day::Monday).len(), 1);
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_default() {
        let db = Database::open_memory().unwrap();
        db.kv_set(PLANNER_KEY, "{ not json").unwrap();
        let planner = db.load_planner();
        assert_eq!(planner.all_tasks().count(), 0);
    }

    #[test]
    fn bookmark_toggle() {
        let db = Database::open_memory().unwrap();
        assert!(db.toggle_bookmark(3).unwrap());
        assert!(db.toggle_bookmark(5).unwrap());
        assert!(!db.toggle_bookmark(3).unwrap());
        assert_eq!(db.load_bookmarks(), vec![5]);
    }

    #[test]
    fn state_survives_reopening_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studymate.db");
        {
            let db = Database::open_at(&path).unwrap();
            db.kv_set("countdown_timer", r#"{"duration_secs":300}"#).unwrap();
            db.save_session(&StudySession::new(TimerKind::Timer, None))
                .unwrap();
        }
        let db = Database::open_at(&path).unwrap();
        assert!(db.kv_get("countdown_timer").unwrap().is_some());
        assert!(db.last_session().unwrap().is_some());
    }

    #[test]
    fn floating_timer_state_defaults_when_missing() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.load_floating_timer(), FloatingTimerState::default());
        let state = FloatingTimerState {
            x: 100,
            y: 80,
            collapsed: true,
        };
        db.save_floating_timer(&state).unwrap();
        assert_eq!(db.load_floating_timer(), state);
    }
}
