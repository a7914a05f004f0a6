//! Drawing the session onto the host terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use termfolio_terminal::{LineStyle, OutputLine, Session, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn style_color(style: LineStyle) -> Color {
    match style {
        LineStyle::Plain => Color::Grey,
        LineStyle::System => Color::Cyan,
        LineStyle::Command => Color::Green,
    }
}

fn draw_line(out: &mut impl Write, line: &OutputLine) -> io::Result<()> {
    let color = style_color(line.style);
    for span in &line.spans {
        match span {
            Span::Text(text) => queue!(out, SetForegroundColor(color), Print(text))?,
            Span::Link { label, .. } => queue!(
                out,
                SetForegroundColor(Color::Blue),
                SetAttribute(Attribute::Underlined),
                Print(label),
                SetAttribute(Attribute::NoUnderline),
            )?,
        }
    }
    queue!(out, ResetColor, Clear(ClearType::UntilNewLine))
}

/// The longest prefix of `line` that fits in `cols` terminal columns.
///
/// Wide glyphs take two columns; one that would straddle the edge is
/// dropped whole.
fn fit_to_columns(line: &OutputLine, cols: usize) -> OutputLine {
    let mut used = 0;
    let mut chars = 0;
    for c in line.text().chars() {
        let w = c.width().unwrap_or(0);
        if used + w > cols {
            break;
        }
        used += w;
        chars += 1;
    }
    line.truncated(chars)
}

/// Draw the visible output window followed by the prompt line, and park
/// the cursor at the caret.
///
/// Lines wider than `cols` are cut rather than wrapped so the window keeps
/// one row per line.
pub fn draw(out: &mut impl Write, session: &Session, cols: u16) -> io::Result<()> {
    let width = usize::from(cols.max(1));
    let visible = session.log().visible();
    for (row, line) in visible.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        draw_line(out, &fit_to_columns(line, width))?;
    }

    let prompt_row = visible.len() as u16;
    let prompt = session.prompt_line();
    queue!(out, MoveTo(0, prompt_row))?;
    draw_line(out, &fit_to_columns(&prompt, width))?;
    queue!(out, Clear(ClearType::FromCursorDown))?;

    let editor = session.editor();
    let before_caret: String = editor.text().chars().take(editor.caret()).collect();
    let column = session.config().prompt.width() + 1 + before_caret.width();
    let caret = column.min(width - 1);
    queue!(out, MoveTo(caret as u16, prompt_row))?;
    out.flush()
}
