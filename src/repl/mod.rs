//! Interactive command loop.
//!
//! Thin I/O glue over the address book: read a line, tokenize it, hand it
//! to a handler, print the reply. All state lives in the `AddressBook`
//! owned by the loop's caller.

pub mod handlers;

use crate::book::AddressBook;
use crate::config::Config;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// The recognized command words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Map a lower-cased command word to a command, if known.
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "hello" => Some(Self::Hello),
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "phone" => Some(Self::Phone),
            "all" => Some(Self::All),
            "add-birthday" => Some(Self::AddBirthday),
            "show-birthday" => Some(Self::ShowBirthday),
            "birthdays" => Some(Self::Birthdays),
            "close" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Split one input line into a lower-cased command word and its arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let args = parts.map(str::to_string).collect();
    (command, args)
}

/// Outcome of dispatching one line.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Print the reply and keep going.
    Reply(String),
    /// Print the farewell and stop the loop.
    Exit(String),
}

/// Dispatch one input line against the book.
pub fn dispatch(line: &str, book: &mut AddressBook) -> Dispatch {
    let (word, args) = parse_input(line);
    if word.is_empty() {
        return Dispatch::Reply("Please enter a command.".to_string());
    }

    let Some(command) = Command::parse(&word) else {
        debug!(%word, "unknown command");
        return Dispatch::Reply("Invalid command.".to_string());
    };
    debug!(?command, args = args.len(), "dispatching");

    let reply = match command {
        Command::Exit => return Dispatch::Exit("Good bye!".to_string()),
        Command::Hello => "How can I help you?".to_string(),
        Command::Add => handlers::render(handlers::add_contact(&args, book)),
        Command::Change => handlers::render(handlers::change_phone(&args, book)),
        Command::Phone => handlers::render(handlers::show_phones(&args, book)),
        Command::All => handlers::render(handlers::show_all(book)),
        Command::AddBirthday => handlers::render(handlers::add_birthday(&args, book)),
        Command::ShowBirthday => handlers::render(handlers::show_birthday(&args, book)),
        Command::Birthdays => {
            handlers::render(handlers::birthdays(book, Local::now().date_naive()))
        }
    };

    Dispatch::Reply(reply)
}

/// Run the interactive session until `close`/`exit` or end of input.
pub fn run(book: &mut AddressBook, config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: leave quietly, same as an explicit exit.
            writeln!(stdout, "Good bye!")?;
            break;
        }

        match dispatch(&line, book) {
            Dispatch::Reply(reply) => writeln!(stdout, "{reply}")?,
            Dispatch::Exit(farewell) => {
                writeln!(stdout, "{farewell}")?;
                break;
            }
        }
    }

    Ok(())
}
