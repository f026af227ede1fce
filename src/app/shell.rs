use crate::core::challenge::Verdict;
use crate::core::session::{PetSession, StatusReport};
use crate::core::{Pet, PetStore};
use crate::utils::error::{PetError, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "Commands: feed, sleep, play, train, status, tricks, save, help, quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Feed,
    Sleep,
    Play,
    Train,
    Status,
    Tricks,
    Save,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feed" | "eat" => Ok(Command::Feed),
            "sleep" | "rest" => Ok(Command::Sleep),
            "play" => Ok(Command::Play),
            "train" => Ok(Command::Train),
            "status" => Ok(Command::Status),
            "tricks" => Ok(Command::Tricks),
            "save" => Ok(Command::Save),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(PetError::ValidationError {
                message: format!("Unknown command '{}'. {}", other, HELP),
            }),
        }
    }
}

/// Line-oriented input and output. EOF on input reads as `None`.
pub struct Console<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{} ", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

/// Restores the saved pet, or asks for a name to start a fresh one.
/// Returns `None` when the user gives no name.
pub fn load_or_create<I: BufRead, O: Write, S: PetStore>(
    console: &mut Console<I, O>,
    store: &S,
    default_name: Option<&str>,
) -> Result<Option<Pet>> {
    match store.load() {
        Ok(pet) => {
            console.say(&format!("Welcome back, {}!", pet.name()))?;
            return Ok(Some(pet));
        }
        Err(e) => {
            tracing::warn!(path = %store.location(), error = %e, "starting with a fresh pet");
            console.say(&e.user_friendly_message())?;
        }
    }

    let name = match default_name {
        Some(name) => Some(name.to_string()),
        None => console.prompt("Enter your pet's name:")?,
    };

    match name {
        Some(name) if !name.trim().is_empty() => Ok(Some(Pet::new(&name)?)),
        _ => {
            console.say("No valid name provided. Exiting...")?;
            Ok(None)
        }
    }
}

pub struct Shell<I: BufRead, O: Write, S: PetStore, R: Rng> {
    console: Console<I, O>,
    session: PetSession<R>,
    store: S,
}

impl<I: BufRead, O: Write, S: PetStore, R: Rng> Shell<I, O, S, R> {
    pub fn new(console: Console<I, O>, session: PetSession<R>, store: S) -> Self {
        Self {
            console,
            session,
            store,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.console.say(HELP)?;

        while let Some(line) = self.console.prompt(">")? {
            if line.is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    self.console.say(&e.user_friendly_message())?;
                    continue;
                }
            };

            tracing::debug!(?command, "dispatching");
            if command == Command::Quit {
                break;
            }
            if let Err(e) = self.dispatch(command) {
                // Only a failed save is recoverable; other I/O errors mean the console is gone.
                if command != Command::Save && matches!(e, PetError::IoError(_)) {
                    return Err(e);
                }
                if e.is_precondition() {
                    tracing::debug!(?command, error = %e, "command refused");
                } else {
                    tracing::warn!(?command, error = %e, category = ?e.category(), "command failed");
                }
                self.console.say(&e.user_friendly_message())?;
            }
        }

        self.console.say("Goodbye!")?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Feed => {
                let report = self.session.feed();
                print_report(&mut self.console, &report)
            }
            Command::Sleep => {
                let report = self.session.rest();
                print_report(&mut self.console, &report)
            }
            Command::Play => {
                let report = self.session.play()?;
                print_report(&mut self.console, &report)
            }
            Command::Train => self.train(),
            Command::Status => {
                let report = self.session.show_status();
                print_report(&mut self.console, &report)
            }
            Command::Tricks => {
                let line = format!("Tricks: {}", self.session.pet().tricks_summary());
                self.console.say(&line)
            }
            Command::Save => {
                self.store.save(self.session.pet())?;
                self.console.say("Pet state saved!")
            }
            Command::Help => self.console.say(HELP),
            Command::Quit => Ok(()),
        }
    }

    fn train(&mut self) -> Result<()> {
        let challenge = self.session.challenge();
        let Some(answer) = self.console.prompt(&challenge.question())? else {
            return Ok(());
        };

        match challenge.check(&answer)? {
            Verdict::NoAnswer => self.console.say("You did not answer the question."),
            Verdict::Incorrect { expected } => self
                .console
                .say(&format!("Incorrect! The correct answer was: {}", expected)),
            Verdict::Correct => {
                let trick = self
                    .console
                    .prompt("Correct! Enter a new trick:")?
                    .unwrap_or_default();
                let name = self.session.pet().name().to_string();
                let report = self.session.train(&trick)?;
                let learned = format!("{} learned a new trick: {}!", name, trick.trim());
                let console = &mut self.console;
                console.say(&learned)?;
                print_report(console, &report)
            }
        }
    }

    pub fn session(&self) -> &PetSession<R> {
        &self.session
    }

    pub fn into_parts(self) -> (Console<I, O>, PetSession<R>) {
        (self.console, self.session)
    }
}

fn print_report<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    report: &StatusReport<'_>,
) -> Result<()> {
    if report.achievement.is_some() {
        console.say("Achievement unlocked! You earned a star for balancing hunger and energy!")?;
    }
    console.say(&report.status.to_string())?;
    console.say(&format!("Tricks: {}", report.tricks))?;
    console.say(&format!(
        "Pet Name: {} | Achievements: {} ⭐",
        report.name, report.stars
    ))
}
