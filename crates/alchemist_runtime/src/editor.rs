//! Line editor abstraction for the read-eval loop.
//!
//! This module provides a trait-based abstraction over line editing
//! libraries, allowing the loop to use rustyline while remaining
//! swappable (tests drive the loop with a scripted editor).

use std::borrow::Cow;

use alchemist_foundation::{Error, Result, text};
use alchemist_parser::phrase;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer as CompleterDerive, Config, Context, Editor, Helper,
    Hinter as HinterDerive, Validator as ValidatorDerive};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline: command phrase completion plus history hints.
#[derive(Helper, CompleterDerive, HinterDerive, ValidatorDerive)]
struct PhraseHelper {
    #[rustyline(Completer)]
    completer: PhraseCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl PhraseHelper {
    fn new() -> Self {
        Self {
            completer: PhraseCompleter,
            hinter: HistoryHinter::new(),
        }
    }
}

impl Highlighter for PhraseHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Completes the fixed sentence templates of the command language.
struct PhraseCompleter;

impl Completer for PhraseCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = &line[..pos];
        let candidates = phrase::COMPLETIONS
            .iter()
            .filter(|p| p.len() > typed.len())
            .filter(|p| text::strip_prefix_ignore_case(p, typed).is_some())
            .map(|p| Pair {
                display: p.trim_end().to_string(),
                replacement: (*p).to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

/// A [`LineEditor`] backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<PhraseHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-backed editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let config = Config::builder().build();
        let mut editor =
            Editor::with_config(config).map_err(|e| Error::readline(e.to_string()))?;
        editor.set_helper(Some(PhraseHelper::new()));
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::readline(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
