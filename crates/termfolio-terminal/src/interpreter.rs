//! Command trait, output builder, and the command table.

use std::collections::HashMap;

use termfolio_content::Content;
use termfolio_types::clock::Clock;
use termfolio_types::config::TerminalConfig;
use termfolio_types::error::Result;

use crate::output::{LineStyle, OutputLine, RenderAction};

/// How a command's arguments complete on Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgCompletion {
    /// Arguments never complete.
    None,
    /// A fixed list of words, offered in this order.
    Literals(&'static [&'static str]),
    /// Project ids from the content collaborator, in content order.
    ProjectIds,
}

/// Render actions produced by one command, in issuance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    actions: Vec<RenderAction>,
}

impl CommandOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain line immediately.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(OutputLine::plain(text))
    }

    /// Append a system-style line immediately.
    pub fn system(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(OutputLine::system(text))
    }

    /// Append an arbitrary line immediately.
    pub fn push(&mut self, line: OutputLine) -> &mut Self {
        self.actions.push(RenderAction::Immediate(line));
        self
    }

    /// Type a line out one character per `per_char_delay_ms`.
    pub fn typed(
        &mut self,
        text: impl Into<String>,
        style: LineStyle,
        per_char_delay_ms: u32,
    ) -> &mut Self {
        self.actions.push(RenderAction::Animated {
            line: OutputLine::styled(text, style),
            per_char_delay_ms,
        });
        self
    }

    /// Append `"<label> <url>"` with only the URL linked.
    pub fn link(&mut self, label: &str, url: &str) -> &mut Self {
        self.push(OutputLine::labeled_link(label, url))
    }

    /// Empty the output log.
    pub fn clear(&mut self) -> &mut Self {
        self.actions.push(RenderAction::Clear);
        self
    }

    /// Append everything another command produced.
    pub fn extend(&mut self, other: CommandOutput) -> &mut Self {
        self.actions.extend(other.actions);
        self
    }

    pub fn actions(&self) -> &[RenderAction] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<RenderAction> {
        self.actions
    }
}

/// State a command may read or change while it runs.
pub struct Environment<'a> {
    /// Records the portfolio commands display.
    pub content: &'a Content,
    pub config: &'a TerminalConfig,
    /// Time source for listing timestamps.
    pub clock: &'a dyn Clock,
    /// The table the command was dispatched from (used by `help`).
    pub table: &'a CommandTable,
    /// Session-wide keystroke sound flag.
    pub sound_enabled: &'a mut bool,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types), lower-case.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string shown by `help` (e.g. "sound on|off").
    fn usage(&self) -> &str;

    /// How arguments complete on Tab.
    fn completion(&self) -> ArgCompletion {
        ArgCompletion::None
    }

    /// Run with the argument string (tokens after the name, single-spaced).
    fn execute(&self, args: &str, env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of commands, kept in registration order.
#[derive(Default)]
pub struct CommandTable {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding every built-in command.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        crate::commands::register_builtins(&mut table);
        table
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping its position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        match self.index.get(&name) {
            Some(&slot) => self.commands[slot] = cmd,
            None => {
                self.index.insert(name, self.commands.len());
                self.commands.push(cmd);
            },
        }
    }

    /// Look up a command by exact name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.index.get(name).map(|&slot| self.commands[slot].as_ref())
    }

    /// Command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
