//! The play-all-quizzes game.
//!
//! An explicit state machine instead of a recursive prompt chain: the
//! remaining set is snapshotted from the store once at game start, each
//! question is drawn from it at random without replacement, and the game
//! ends at the first wrong answer or when the set runs dry. [`PlayEngine`]
//! holds the state so it can be tested without a prompter.
use colored::Colorize;
use rand::Rng;

use crate::commands::normalize;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::render;
use crate::store::{Quiz, QuizStore};

/// How a finished game ended, with the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every quiz answered correctly (vacuously true for an empty store).
    Win(u32),
    /// Stopped at the first wrong answer.
    Loss(u32),
}

pub struct PlayEngine {
    remaining: Vec<Quiz>,
    score: u32,
}

impl PlayEngine {
    pub fn new(remaining: Vec<Quiz>) -> Self {
        Self {
            remaining,
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Draws the next question uniformly at random, removing it from the
    /// remaining set. `None` once the set is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Quiz> {
        if self.remaining.is_empty() {
            return None;
        }
        let pos = rng.gen_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(pos))
    }

    /// Scores one submitted answer. A correct reply bumps the score and
    /// keeps the game going.
    pub fn submit(&mut self, quiz: &Quiz, reply: &str) -> bool {
        let correct = normalize(reply) == normalize(&quiz.answer);
        if correct {
            self.score += 1;
        }
        correct
    }
}

/// Drives a whole game against the terminal. The store is read exactly once
/// up front, so mutations made after the game starts do not reach it.
pub fn play<S, P, R>(store: &S, prompter: &mut P, rng: &mut R) -> Result<Outcome>
where
    S: QuizStore,
    P: Prompter,
    R: Rng,
{
    let mut engine = PlayEngine::new(store.list_all()?);

    loop {
        let quiz = match engine.draw(rng) {
            Some(quiz) => quiz,
            None => {
                println!("There is nothing left to ask.");
                println!("End of game. Score: {}", engine.score().to_string().bold());
                render::banner_ok(&format!("SCORE {}", engine.score()));
                return Ok(Outcome::Win(engine.score()));
            }
        };

        let reply = prompter.ask(&format!("{} ", quiz.question))?;
        if engine.submit(&quiz, &reply) {
            println!("Correct answer. Score so far: {}", engine.score());
        } else {
            println!("Wrong answer. End of game. Score: {}", engine.score());
            render::banner_err(&format!("SCORE {}", engine.score()));
            return Ok(Outcome::Loss(engine.score()));
        }
    }
}
