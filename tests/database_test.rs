use assert_cmd::Command;
use rusqlite::Connection;
use tempfile::TempDir;

fn run_session(dir: &TempDir, input: &str) {
    Command::cargo_bin("quizdeck")
        .unwrap()
        .arg(dir.path().join("quizzes.sqlite"))
        .write_stdin(input)
        .assert()
        .success();
}

fn open_db(dir: &TempDir) -> Connection {
    Connection::open(dir.path().join("quizzes.sqlite")).unwrap()
}

#[test]
fn test_database_is_created_on_first_run() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, "quit\n");

    let conn = open_db(&dir);
    let table: String = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='quizzes'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table, "quizzes");
}

#[test]
fn test_add_writes_a_row() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, "add\nWhat is 2+2?\n4\nquit\n");

    let conn = open_db(&dir);
    let (question, answer): (String, String) = conn
        .query_row("SELECT question, answer FROM quizzes WHERE id = 1", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(question, "What is 2+2?");
    assert_eq!(answer, "4");
}

#[test]
fn test_delete_removes_the_row() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, "add\nq\na\ndelete 1\nquit\n");

    let conn = open_db(&dir);
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM quizzes", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, "add\nfirst\na\ndelete 1\nadd\nsecond\nb\nquit\n");

    let conn = open_db(&dir);
    let id: i64 = conn
        .query_row(
            "SELECT id FROM quizzes WHERE question = 'second'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(id, 2);
}

#[test]
fn test_failed_add_leaves_no_row_behind() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, "add\n\n\nquit\n");

    let conn = open_db(&dir);
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM quizzes", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
