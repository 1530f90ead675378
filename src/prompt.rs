//! One-question-at-a-time terminal input.
use std::io::{self, Write};

use colored::Colorize;

/// The single user-facing suspension point: show a label, wait for one line,
/// hand back the trimmed reply. Handlers that need user text go through this
/// exactly once per question.
pub trait Prompter {
    /// An empty trimmed reply is a valid answer, not a retry.
    fn ask(&mut self, label: &str) -> io::Result<String>;

    /// Shows the current value next to the label; an empty reply keeps it.
    /// Used by edit so the user can keep or overwrite each field.
    fn ask_with_default(&mut self, label: &str, default: &str) -> io::Result<String> {
        let reply = self.ask(&format!("{} [{}]: ", label, default))?;
        if reply.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(reply)
        }
    }
}

pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        print!("{}", label.red());
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Test prompter that pops canned replies in order and records every label
/// it was asked with.
#[cfg(test)]
pub struct ScriptedPrompter {
    replies: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        self.asked.push(label.to_string());
        Ok(self.replies.pop_front().unwrap_or_default())
    }
}
