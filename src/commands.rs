//! One handler per user command. Every handler validates its arguments
//! before touching the store, does its work, and returns; errors are
//! rendered by the session loop, which always prompts again.
use colored::Colorize;

use crate::error::{QuizError, Result};
use crate::prompt::Prompter;
use crate::render;
use crate::store::QuizStore;

/// Parses the raw `<id>` argument. Runs before any store lookup.
pub fn validate_id(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or(QuizError::MissingArgument)?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| QuizError::InvalidArgument(raw.to_string()))
}

/// Answer comparison used by both `test` and play: the whole reply, trimmed
/// and case-folded.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn list<S: QuizStore>(store: &S) -> Result<()> {
    for quiz in store.list_all()? {
        println!("[{}]: {}", quiz.id.to_string().magenta(), quiz.question);
    }
    Ok(())
}

pub fn show<S: QuizStore>(store: &S, raw_id: Option<&str>) -> Result<()> {
    let id = validate_id(raw_id)?;
    let quiz = store.get(id)?;
    println!(
        "[{}]: {} {} {}",
        quiz.id.to_string().magenta(),
        quiz.question,
        "=>".magenta(),
        quiz.answer
    );
    Ok(())
}

/// Prompts for the question, then (only once that settles) the answer.
pub fn add<S, P>(store: &mut S, prompter: &mut P) -> Result<()>
where
    S: QuizStore,
    P: Prompter,
{
    let question = prompter.ask("Enter a question: ")?;
    let answer = prompter.ask("Enter the answer: ")?;
    let quiz = store.create(&question, &answer)?;
    println!(
        "{} {} {} {}",
        "Added:".magenta(),
        quiz.question,
        "=>".magenta(),
        quiz.answer
    );
    Ok(())
}

pub fn delete<S: QuizStore>(store: &mut S, raw_id: Option<&str>) -> Result<()> {
    let id = validate_id(raw_id)?;
    store.delete(id)?;
    println!("Deleted quiz {}.", id.to_string().magenta());
    Ok(())
}

/// The existing text is offered as the default for each prompt, so an empty
/// reply keeps the field as it was.
pub fn edit<S, P>(store: &mut S, prompter: &mut P, raw_id: Option<&str>) -> Result<()>
where
    S: QuizStore,
    P: Prompter,
{
    let id = validate_id(raw_id)?;
    let quiz = store.get(id)?;
    let question = prompter.ask_with_default("Enter a question", &quiz.question)?;
    let answer = prompter.ask_with_default("Enter the answer", &quiz.answer)?;
    let updated = store.update(id, &question, &answer)?;
    println!(
        "Quiz {} is now: {} {} {}",
        updated.id.to_string().magenta(),
        updated.question,
        "=>".magenta(),
        updated.answer
    );
    Ok(())
}

/// Asks one quiz and reports the verdict. Returns whether the reply matched
/// so the outcome is checkable without capturing stdout.
pub fn test<S, P>(store: &S, prompter: &mut P, raw_id: Option<&str>) -> Result<bool>
where
    S: QuizStore,
    P: Prompter,
{
    let id = validate_id(raw_id)?;
    let quiz = store.get(id)?;
    println!("{}", quiz.question);
    let reply = prompter.ask("Your answer: ")?;
    let correct = normalize(&reply) == normalize(&quiz.answer);
    if correct {
        render::banner_ok("CORRECT");
    } else {
        render::banner_err("INCORRECT");
    }
    Ok(correct)
}

pub fn help() {
    println!("Commands:");
    println!("  h|help       - Show this help.");
    println!("  list|ls      - List the existing quizzes.");
    println!("  show <id>    - Show the question and the answer of the given quiz.");
    println!("  add          - Add a new quiz interactively.");
    println!("  delete <id>  - Delete the given quiz.");
    println!("  edit <id>    - Edit the given quiz.");
    println!("  test <id>    - Try to answer the given quiz.");
    println!("  p|play       - Answer all quizzes in random order.");
    println!("  credits      - Show the authors.");
    println!("  q|quit       - Quit the program.");
}

pub fn credits() {
    println!("Written by:");
    println!("{}", "The quizdeck authors".green());
}
