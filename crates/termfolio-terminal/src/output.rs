//! Output lines and the render actions that carry them.

/// Presentation class of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    #[default]
    Plain,
    /// Headings and system messages.
    System,
    /// Echo of a submitted command line.
    Command,
}

/// A run of text within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    /// A hyperlink. Only `label` is visible.
    Link { label: String, href: String },
}

impl Span {
    /// The characters this span shows.
    pub fn visible(&self) -> &str {
        match self {
            Span::Text(t) => t,
            Span::Link { label, .. } => label,
        }
    }
}

/// One line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputLine {
    pub spans: Vec<Span>,
    pub style: LineStyle,
}

impl OutputLine {
    pub fn styled(text: impl Into<String>, style: LineStyle) -> Self {
        let text = text.into();
        let spans = if text.is_empty() {
            Vec::new()
        } else {
            vec![Span::Text(text)]
        };
        Self { spans, style }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Plain)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::System)
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Command)
    }

    /// `"<label> <url>"` where only the URL is a link.
    ///
    /// An empty label produces a bare link.
    pub fn labeled_link(label: &str, url: &str) -> Self {
        let mut spans = Vec::with_capacity(2);
        if !label.is_empty() {
            spans.push(Span::Text(format!("{label} ")));
        }
        spans.push(Span::Link {
            label: url.to_string(),
            href: url.to_string(),
        });
        Self {
            spans,
            style: LineStyle::Plain,
        }
    }

    /// Visible text with link markup stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(Span::visible).collect()
    }

    /// Number of visible characters.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|s| s.visible().chars().count()).sum()
    }

    /// The first `chars` visible characters, keeping span boundaries.
    ///
    /// A partially revealed link keeps its full `href`.
    pub fn truncated(&self, chars: usize) -> OutputLine {
        let mut remaining = chars;
        let mut spans = Vec::new();
        for span in &self.spans {
            if remaining == 0 {
                break;
            }
            let visible = span.visible();
            let n = visible.chars().count();
            if n <= remaining {
                spans.push(span.clone());
                remaining -= n;
                continue;
            }
            let cut: String = visible.chars().take(remaining).collect();
            spans.push(match span {
                Span::Text(_) => Span::Text(cut),
                Span::Link { href, .. } => Span::Link {
                    label: cut,
                    href: href.clone(),
                },
            });
            remaining = 0;
        }
        OutputLine {
            spans,
            style: self.style,
        }
    }
}

/// A unit of output handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderAction {
    /// Append the whole line at once.
    Immediate(OutputLine),
    /// Append the line and reveal it one character per `per_char_delay_ms`.
    Animated {
        line: OutputLine,
        per_char_delay_ms: u32,
    },
    /// Empty the output log.
    Clear,
}
