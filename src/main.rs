mod commands;
mod error;
mod play;
mod prompt;
mod render;
mod store;

use std::io::{self, Write};

use crate::prompt::StdinPrompter;
use crate::store::{SqliteStore, DB_PATH};

fn main() {
    // Optional single argument overrides the database file.
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DB_PATH.to_string());

    let mut store = match SqliteStore::open(&db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Cannot open quiz database '{db_path}': {e}");
            std::process::exit(1);
        }
    };
    let mut prompter = StdinPrompter;
    let mut rng = rand::thread_rng();

    println!("Welcome to quizdeck");
    println!("Type 'help' to see the available commands.");
    println!();

    let stdin = io::stdin();

    loop {
        print!("quiz> ");
        io::stdout().flush().ok();

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(_) => {
                eprintln!("Error reading input, try again.");
                continue;
            }
        }

        let mut parts = input.trim().split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        // One handler at a time; each runs to completion (prompts included)
        // before the next command line is read.
        let outcome = match cmd.to_lowercase().as_str() {
            "h" | "help" => {
                commands::help();
                Ok(())
            }
            "list" | "ls" => commands::list(&store),
            "show" => commands::show(&store, arg),
            "add" => commands::add(&mut store, &mut prompter),
            "delete" => commands::delete(&mut store, arg),
            "edit" => commands::edit(&mut store, &mut prompter, arg),
            "test" => commands::test(&store, &mut prompter, arg).map(|_| ()),
            "p" | "play" => play::play(&store, &mut prompter, &mut rng).map(|_| ()),
            "credits" => {
                commands::credits();
                Ok(())
            }
            "q" | "quit" | "exit" => {
                println!("Goodbye!");
                break;
            }
            other => {
                eprintln!("Unknown command: '{other}'. Type 'help' for the command list.");
                Ok(())
            }
        };

        // No error ends the session; report it and prompt again.
        if let Err(e) = outcome {
            render::report(&e);
        }
    }
}
