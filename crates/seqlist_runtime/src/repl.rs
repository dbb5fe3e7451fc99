//! The command shell: interactive loop and script runner.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use seqlist_foundation::{Error, ErrorContext, Result};
use tracing::warn;

use crate::command::{Command, HELP};
use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What the shell should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to print.
    Silent,
    /// Text to print.
    Output(String),
    /// Leave the shell.
    Quit,
}

/// The command shell.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Current sequence and settings.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a shell with the rustyline editor and a fresh session.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        let show_banner = config.show_banner;
        let repl = Self::with_editor(editor).with_session(Session::new(config));
        Ok(if show_banner {
            repl
        } else {
            repl.without_banner()
        })
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a shell with the given editor and a default session.
    pub fn with_editor(editor: E) -> Self {
        let mut repl = Self {
            editor,
            session: Session::default(),
            show_banner: true,
            prompt: "seqlist> ".to_string(),
        };
        repl.sync_type_names();
        repl
    }

    /// Sets the session for this shell.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.sync_type_names();
        self
    }

    /// Offers the session's type names for completion.
    fn sync_type_names(&mut self) {
        let names = self
            .session
            .list_types()
            .into_iter()
            .map(String::from)
            .collect();
        self.editor.set_type_names(names);
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the interactive loop until `quit` or end of input.
    ///
    /// Command errors are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.execute(&line) {
                Ok(Outcome::Silent) => {}
                Ok(Outcome::Output(text)) => println!("{text}"),
                Ok(Outcome::Quit) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Runs a script file line by line, printing command output.
    ///
    /// Stops at `quit`.
    ///
    /// # Errors
    ///
    /// Returns the first failing command's error, with the script path and
    /// line number in its context, or an I/O failure if the file cannot be
    /// read.
    pub fn run_script(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("failed to read {}: {e}", path.display())).with_context(
                ErrorContext::new()
                    .with_path(path)
                    .with_operation("script"),
            )
        })?;

        for (number, line) in source.lines().enumerate() {
            let number = number + 1;
            match self.execute(line) {
                Ok(Outcome::Silent) => {}
                Ok(Outcome::Output(text)) => println!("{text}"),
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    warn!(path = %path.display(), line = number, error = %e, "script command failed");
                    let mut context = e.context.clone().unwrap_or_default().with_line(number);
                    if context.path.is_none() {
                        context = context.with_path(path);
                    }
                    if context.operation.is_none() {
                        context = context.with_operation("script");
                    }
                    return Err(e.with_context(context));
                }
            }
        }
        Ok(())
    }

    /// Executes one command line against the session.
    ///
    /// # Errors
    ///
    /// Returns the command's parse or execution error.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let Some(command) = Command::parse(line)? else {
            return Ok(Outcome::Silent);
        };

        let session = &mut self.session;
        let outcome = match command {
            Command::Types => Outcome::Output(session.list_types().join(", ")),
            Command::Create(name) => {
                let prototype = session.create(&name)?;
                Outcome::Output(format!("new {prototype} sequence"))
            }
            Command::Add(value) => {
                session.add(&value)?;
                Outcome::Silent
            }
            Command::Insert { index, value } => {
                session.insert(index, &value)?;
                Outcome::Silent
            }
            Command::Remove(index) => Outcome::Output(session.remove(index)?),
            Command::Get(index) => Outcome::Output(session.get(index)?),
            Command::Find(value) => Outcome::Output(match session.find(&value)? {
                Some(index) => index.to_string(),
                None => "not found".to_string(),
            }),
            Command::Sort => {
                session.sort()?;
                Outcome::Silent
            }
            Command::Show => Outcome::Output(format!("[{}]", session.items()?.join(", "))),
            Command::Size => Outcome::Output(session.size()?.to_string()),
            Command::Save { path, format } => {
                let saved = session.save(&path, format)?;
                Outcome::Output(format!(
                    "saved {} items to {}",
                    session.size()?,
                    saved.display()
                ))
            }
            Command::Load { path, format } => {
                let prototype = session.load(&path, format)?;
                Outcome::Output(format!(
                    "loaded {prototype} sequence with {} items",
                    session.size()?
                ))
            }
            Command::Help => Outcome::Output(HELP.to_string()),
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        match &error.context {
            Some(context) => eprintln!("\x1b[31mError: {error} ({context})\x1b[0m"),
            None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mseqlist\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for commands. Use Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}
