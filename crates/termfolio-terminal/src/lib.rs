//! Command interpreter and terminal rendering engine.
//!
//! The terminal is a table-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. A `Session` owns the edit
//! buffer, history, renderer and click synth, and turns key presses into
//! dispatched commands and rendered output.

mod commands;
mod completion;
mod dispatcher;
mod editor;
mod history;
mod interpreter;
mod output;
mod renderer;
mod session;
mod tokenizer;

/// Register all built-in commands into a table.
pub use commands::register_builtins;
/// Completion candidates and buffer rewriting for Tab.
pub use completion::{CompletionOutcome, complete, completion_tokens, resolve_completion};
/// Run one submitted line through the command table.
pub use dispatcher::dispatch;
/// Single-line edit buffer with a caret.
pub use editor::LineEditor;
/// Submitted-line history with an Up/Down cursor.
pub use history::History;
/// Command trait, output builder, environment and table.
pub use interpreter::{ArgCompletion, Command, CommandOutput, CommandTable, Environment};
/// Output lines, spans and render actions.
pub use output::{LineStyle, OutputLine, RenderAction, Span};
/// Ordered render scheduler and the output log it writes to.
pub use renderer::{Completion, OutputLog, RenderState, Renderer};
/// One interactive terminal session.
pub use session::Session;
/// Whitespace tokenizer.
pub use tokenizer::tokenize;
