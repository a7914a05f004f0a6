//! One interactive terminal session.

use termfolio_audio::{AudioSink, ClickSynth};
use termfolio_content::Content;
use termfolio_types::clock::{Clock, SystemClock};
use termfolio_types::config::TerminalConfig;
use termfolio_types::error::{Result, TermfolioError};
use termfolio_types::input::Key;

use crate::completion::{self, CompletionOutcome};
use crate::dispatcher;
use crate::editor::LineEditor;
use crate::history::History;
use crate::interpreter::{CommandTable, Environment};
use crate::output::{LineStyle, OutputLine, RenderAction};
use crate::renderer::{Completion, OutputLog, Renderer};

const WELCOME: &str = r#"Welcome to my terminal portfolio — type "help" for a list of commands."#;
const TIP: &str = "Tip: press Up / Down to cycle command history. Use clear to reset the screen.";

type AudioOpener = Box<dyn FnOnce() -> Result<Box<dyn AudioSink>>>;

/// Owns everything one terminal needs: the command table, edit buffer,
/// history, renderer, sound flag and click synth.
///
/// Hosts feed it [`Key`]s and frame ticks and draw [`Session::log`] plus
/// the prompt line.
pub struct Session {
    config: TerminalConfig,
    content: Content,
    table: CommandTable,
    clock: Box<dyn Clock>,
    history: History,
    editor: LineEditor,
    renderer: Renderer,
    sound_enabled: bool,
    synth: ClickSynth,
    audio: Option<AudioOpener>,
}

impl Session {
    /// A session with the built-in commands, the system clock and no audio
    /// output.
    pub fn new(config: TerminalConfig, content: Content) -> Self {
        Self {
            table: CommandTable::with_builtins(),
            clock: Box::new(SystemClock),
            history: History::new(),
            editor: LineEditor::new(),
            renderer: Renderer::new(config.visible_lines),
            sound_enabled: config.sound_enabled,
            synth: ClickSynth::from_entropy(config.master_gain),
            audio: None,
            config,
            content,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_table(mut self, table: CommandTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_synth(mut self, synth: ClickSynth) -> Self {
        self.synth = synth;
        self
    }

    /// Audio output to open on the first key press.
    pub fn with_audio<F>(mut self, open: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn AudioSink>> + 'static,
    {
        self.audio = Some(Box::new(open));
        self
    }

    /// Type the intro, if enabled. Returns the handle of its last line.
    pub fn start(&mut self) -> Option<Completion> {
        if !self.config.show_intro {
            return None;
        }
        let delay = self.config.typing_speed_ms;
        self.renderer.submit(RenderAction::Animated {
            line: OutputLine::system(WELCOME),
            per_char_delay_ms: delay,
        });
        self.renderer.submit(RenderAction::Animated {
            line: OutputLine::plain(TIP),
            per_char_delay_ms: delay,
        });
        Some(self.renderer.submit(RenderAction::Immediate(OutputLine::plain(""))))
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: Key) {
        if !self.synth.is_initialized() {
            let opener = self.audio.take();
            self.synth.initialize(move || match opener {
                Some(open) => open(),
                None => Err(TermfolioError::Audio("no audio output configured".into())),
            });
        }
        if key.is_printable() {
            self.synth.play_click(self.sound_enabled);
        }

        match key {
            Key::Char(c) => self.editor.insert(c),
            Key::Backspace => self.editor.backspace(),
            Key::Delete => self.editor.delete(),
            Key::Left => self.editor.left(),
            Key::Right => self.editor.right(),
            Key::Home => self.editor.home(),
            Key::End => self.editor.end(),
            Key::Tab => {
                if self.config.autocomplete {
                    self.complete();
                }
            },
            Key::Enter => {
                self.submit();
            },
            Key::Up | Key::Down => {
                if let Some(entry) = key.direction().and_then(|d| self.history.navigate(d)) {
                    self.editor.set(entry);
                }
            },
            Key::Escape | Key::Modifier => {},
        }
    }

    /// Submit the edit buffer as if Enter were pressed.
    pub fn submit(&mut self) -> Option<Completion> {
        let line = self.editor.take();
        self.execute(&line)
    }

    /// Record `line` in history and dispatch it.
    pub fn execute(&mut self, line: &str) -> Option<Completion> {
        self.history.record(line);
        let mut env = Environment {
            content: &self.content,
            config: &self.config,
            clock: self.clock.as_ref(),
            table: &self.table,
            sound_enabled: &mut self.sound_enabled,
        };
        dispatcher::dispatch(line, &mut env, &mut self.renderer)
    }

    /// Complete the last token of the edit buffer.
    pub fn complete(&mut self) -> CompletionOutcome {
        let outcome = completion::resolve_completion(self.editor.text(), &self.table, &self.content);
        match &outcome {
            CompletionOutcome::Replaced(text) => self.editor.set(text),
            CompletionOutcome::Candidates(candidates) => {
                self.renderer
                    .submit(RenderAction::Immediate(completion::candidates_line(candidates)));
            },
            CompletionOutcome::NoMatch => {},
        }
        outcome
    }

    /// Advance animations by `dt_ms`.
    pub fn tick(&mut self, dt_ms: u64) {
        self.renderer.tick(dt_ms);
    }

    /// Finish every pending animation.
    pub fn run_until_idle(&mut self) {
        self.renderer.run_until_idle();
    }

    /// Resize the visible window.
    pub fn set_visible_lines(&mut self, lines: usize) {
        self.renderer.log_mut().set_visible_lines(lines);
    }

    /// The prompt line as drawn: prompt, a space, then the edit buffer.
    pub fn prompt_line(&self) -> OutputLine {
        OutputLine::styled(
            format!("{} {}", self.config.prompt, self.editor.text()),
            LineStyle::Command,
        )
    }

    pub fn log(&self) -> &OutputLog {
        self.renderer.log()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn synth(&self) -> &ClickSynth {
        &self.synth
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }
}
