//! Quiz persistence over SQLite.
//!
//! The [`QuizStore`] trait is the seam between the command handlers and
//! storage; [`SqliteStore`] is the production backend. Tests run against an
//! in-memory database.
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{QuizError, Result};

/// Default database file, created in the working directory on first run.
pub const DB_PATH: &str = "quizzes.sqlite";

/// A question/answer pair. The id is assigned by the store and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

pub trait QuizStore {
    /// All quizzes, in id order.
    fn list_all(&self) -> Result<Vec<Quiz>>;

    /// Fails with `NotFound` when the id is absent.
    fn get(&self, id: i64) -> Result<Quiz>;

    /// Fails with `Validation` when a field is empty after trimming.
    fn create(&mut self, question: &str, answer: &str) -> Result<Quiz>;

    /// Replaces both fields, id unchanged. `NotFound` or `Validation`.
    fn update(&mut self, id: i64, question: &str, answer: &str) -> Result<Quiz>;

    /// Fails with `NotFound` when nothing was deleted.
    fn delete(&mut self, id: i64) -> Result<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS quizzes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

/// Field validation shared by create and update. Collects all problems so
/// they can be reported together, one line per field.
fn check_fields(question: &str, answer: &str) -> Result<()> {
    let mut problems = Vec::new();
    if question.trim().is_empty() {
        problems.push("question must not be empty".to_string());
    }
    if answer.trim().is_empty() {
        problems.push("answer must not be empty".to_string());
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(QuizError::Validation(problems))
    }
}

impl QuizStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<Quiz>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, question, answer FROM quizzes ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Quiz {
                id: row.get(0)?,
                question: row.get(1)?,
                answer: row.get(2)?,
            })
        })?;

        let mut quizzes = Vec::new();
        for row in rows {
            quizzes.push(row?);
        }
        Ok(quizzes)
    }

    fn get(&self, id: i64) -> Result<Quiz> {
        self.conn
            .query_row(
                "SELECT id, question, answer FROM quizzes WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Quiz {
                        id: row.get(0)?,
                        question: row.get(1)?,
                        answer: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or(QuizError::NotFound(id))
    }

    fn create(&mut self, question: &str, answer: &str) -> Result<Quiz> {
        check_fields(question, answer)?;
        self.conn.execute(
            "INSERT INTO quizzes (question, answer) VALUES (?1, ?2)",
            params![question, answer],
        )?;
        Ok(Quiz {
            id: self.conn.last_insert_rowid(),
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }

    fn update(&mut self, id: i64, question: &str, answer: &str) -> Result<Quiz> {
        check_fields(question, answer)?;
        let changed = self.conn.execute(
            "UPDATE quizzes SET question = ?1, answer = ?2 WHERE id = ?3",
            params![question, answer, id],
        )?;
        if changed == 0 {
            return Err(QuizError::NotFound(id));
        }
        Ok(Quiz {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM quizzes WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(QuizError::NotFound(id));
        }
        Ok(())
    }
}
