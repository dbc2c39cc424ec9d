//! The read-eval loop.
//!
//! Reads one line per turn, clips it to the input limit, dispatches it
//! against the world, and prints exactly what the engine replies. The
//! loop ends on the `Exit` command or end of input; both paths exit
//! cleanly.

use alchemist_engine::{Reply, dispatch};
use alchemist_foundation::Result;
use alchemist_storage::World;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Maximum accepted input line length, in characters. Input beyond the
/// limit is dropped; behavior past the limit is implementation-defined.
pub const MAX_LINE_LEN: usize = 1024;

/// The interactive interpreter loop.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The interpreter state.
    world: World,

    /// Prompt printed before each line.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new loop with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new loop with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            world: World::new(),
            prompt: ">> ".to_string(),
        }
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns a mutable reference to the world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Runs the loop until `Exit`, end of input, or a terminal failure.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let line = clip(&line).trim();
                    if !line.is_empty() {
                        self.editor.add_history(line);
                    }
                    match dispatch(line, &mut self.world) {
                        Reply::Message(reply) => println!("{reply}"),
                        Reply::Exit => break,
                    }
                }
                ReadResult::Interrupted => {
                    // Cancel the current line, keep the session.
                    println!();
                }
                ReadResult::Eof => break,
            }
        }
        Ok(())
    }
}

/// Clips a line to [`MAX_LINE_LEN`] characters.
fn clip(line: &str) -> &str {
    match line.char_indices().nth(MAX_LINE_LEN) {
        Some((at, _)) => &line[..at],
        None => line,
    }
}
