//! Terminal output helpers: colored status lines, error reporting, and the
//! framed banner used for play/test verdicts.
use colored::Colorize;

use crate::error::QuizError;

/// One red line per error; validation failures get one line per bad field.
pub fn report(err: &QuizError) {
    match err {
        QuizError::Validation(problems) => {
            eprintln!("{}", "The quiz is invalid:".red());
            for problem in problems {
                eprintln!("  {}", problem.red());
            }
        }
        other => eprintln!("{}", other.to_string().red()),
    }
}

pub fn banner_ok(text: &str) {
    println!("{}", frame(text).green().bold());
}

pub fn banner_err(text: &str) {
    println!("{}", frame(text).red().bold());
}

fn frame(text: &str) -> String {
    let inner = format!("|  {}  |", text);
    let bar = "=".repeat(inner.len());
    format!("{}\n{}\n{}", bar, inner, bar)
}
