//! Tab completion.

use termfolio_content::Content;

use crate::interpreter::{ArgCompletion, CommandTable};
use crate::output::OutputLine;
use crate::tokenizer::tokenize;

/// Separator between candidates when several match.
const CANDIDATE_SEPARATOR: &str = "   ";

/// Result of pressing Tab on a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Exactly one candidate: the buffer's new contents.
    Replaced(String),
    /// Several candidates, in offer order. The buffer stays as it was.
    Candidates(Vec<String>),
    NoMatch,
}

/// Tokens of a live edit buffer, as completion sees them.
///
/// Leading whitespace is ignored. A buffer that is empty or ends in
/// whitespace yields a trailing empty token, so the next word is the one
/// being completed.
pub fn completion_tokens(buffer: &str) -> Vec<String> {
    let trimmed = buffer.trim_start();
    let mut tokens = tokenize(trimmed);
    if trimmed.is_empty() || trimmed.ends_with(char::is_whitespace) {
        tokens.push(String::new());
    }
    tokens
}

/// Candidates for the last token.
///
/// The first token completes against command names (case-sensitive prefix,
/// registration order). Later tokens complete according to the rule of the
/// command named by the lower-cased first token.
pub fn complete(tokens: &[String], table: &CommandTable, content: &Content) -> Vec<String> {
    let Some(prefix) = tokens.last() else {
        return table.names().map(str::to_string).collect();
    };
    if tokens.len() == 1 {
        return table
            .names()
            .filter(|name| name.starts_with(prefix.as_str()))
            .map(str::to_string)
            .collect();
    }

    let rule = table
        .get(&tokens[0].to_lowercase())
        .map_or(ArgCompletion::None, |cmd| cmd.completion());
    match rule {
        ArgCompletion::None => Vec::new(),
        ArgCompletion::Literals(words) => words
            .iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .map(|w| w.to_string())
            .collect(),
        ArgCompletion::ProjectIds => content
            .project_ids()
            .filter(|id| id.starts_with(prefix.as_str()))
            .map(str::to_string)
            .collect(),
    }
}

/// Complete the last token of `buffer`.
pub fn resolve_completion(buffer: &str, table: &CommandTable, content: &Content) -> CompletionOutcome {
    let tokens = completion_tokens(buffer);
    let mut candidates = complete(&tokens, table, content);
    log::debug!("complete {buffer:?}: {} candidate(s)", candidates.len());
    match candidates.len() {
        0 => CompletionOutcome::NoMatch,
        1 => {
            let candidate = candidates.remove(0);
            let head = &tokens[..tokens.len().saturating_sub(1)];
            let mut text = head.join(" ");
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&candidate);
            text.push(' ');
            CompletionOutcome::Replaced(text)
        },
        _ => CompletionOutcome::Candidates(candidates),
    }
}

/// The system line listing several candidates.
pub(crate) fn candidates_line(candidates: &[String]) -> OutputLine {
    OutputLine::system(candidates.join(CANDIDATE_SEPARATOR))
}
