//! Turns one submitted line into render actions.

use termfolio_types::error::TermfolioError;

use crate::interpreter::Environment;
use crate::output::{OutputLine, RenderAction};
use crate::renderer::{Completion, Renderer};
use crate::tokenizer::tokenize;

/// Echo, resolve and run `line`, submitting everything to `renderer`.
///
/// Blank input is ignored and returns `None`. Otherwise the echo is always
/// rendered, even for unknown commands, and the returned handle resolves
/// once the last action of this dispatch has been applied. Command errors
/// never escape: each becomes one rendered line.
pub fn dispatch(
    line: &str,
    env: &mut Environment<'_>,
    renderer: &mut Renderer,
) -> Option<Completion> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut last = renderer.submit(RenderAction::Immediate(OutputLine::command(format!(
        "{} {trimmed}",
        env.config.prompt
    ))));

    let tokens = tokenize(trimmed);
    let Some((first, rest)) = tokens.split_first() else {
        return Some(last);
    };
    let name = first.to_lowercase();
    let args = rest.join(" ");

    let table = env.table;
    let result = match table.get(&name) {
        Some(cmd) => {
            log::debug!("dispatch: {name} {args:?}");
            cmd.execute(&args, env)
        },
        None => Err(TermfolioError::CommandNotFound(name)),
    };

    match result {
        Ok(output) => {
            for action in output.into_actions() {
                last = renderer.submit(action);
            }
        },
        Err(e) => {
            if e.is_user_facing() {
                log::debug!("dispatch: {e}");
            } else {
                log::warn!("command failed: {e}");
            }
            last = renderer.submit(RenderAction::Immediate(OutputLine::plain(e.to_string())));
        },
    }
    Some(last)
}
