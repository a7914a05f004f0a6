//! termfolio terminal entry point.
//!
//! Runs the portfolio terminal full-screen in the host terminal. An
//! optional config file path comes from the first argument or
//! `TERMFOLIO_CONFIG`; `TERMFOLIO_CONTENT` points at a TOML or JSON content
//! file replacing the built-in records. Escape or Ctrl-C quits.
//!
//! Only warnings reach stderr by default, since anything printed there lands
//! on top of the full-screen UI. Set `TERMFOLIO_LOG_FILE` to send logs to a
//! file instead, at `info` unless `RUST_LOG` says otherwise.

mod input;
mod render;
mod screen;

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use input::HostAction;
use screen::Screen;
use termfolio_audio::{AudioSink, CpalSink};
use termfolio_content::Content;
use termfolio_terminal::Session;
use termfolio_types::config::TerminalConfig;

/// Frame period (~60 fps). Animation time advances once per frame.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging()?;

    let config = load_config()?;
    let content = load_content()?;
    log::info!(
        "Starting termfolio ({} projects, prompt {:?})",
        content.projects.len(),
        config.prompt
    );

    let mut session = Session::new(config, content)
        .with_audio(|| CpalSink::open().map(|sink| Box::new(sink) as Box<dyn AudioSink>));

    let _screen = Screen::enter().context("failed to enter raw mode")?;
    run(&mut session)
}

/// Default filter: `info` into a log file, `warn` onto the shared stderr.
fn default_filter(to_file: bool) -> &'static str {
    if to_file { "info" } else { "warn" }
}

fn init_logging() -> Result<()> {
    let log_file = std::env::var_os("TERMFOLIO_LOG_FILE");
    let env = env_logger::Env::default().default_filter_or(default_filter(log_file.is_some()));
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(path) = log_file {
        let file = File::create(&path)
            .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_config() -> Result<TerminalConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TERMFOLIO_CONFIG").ok());
    match path {
        Some(path) => TerminalConfig::load(Path::new(&path))
            .with_context(|| format!("failed to load config {path}")),
        None => Ok(TerminalConfig::default()),
    }
}

fn load_content() -> Result<Content> {
    match std::env::var("TERMFOLIO_CONTENT").ok() {
        Some(path) => {
            Content::load(Path::new(&path)).with_context(|| format!("failed to load content {path}"))
        },
        None => Ok(Content::builtin()),
    }
}

/// Rows left for output once the prompt row is reserved.
fn output_rows(rows: u16) -> usize {
    usize::from(rows.saturating_sub(1).max(1))
}

fn run(session: &mut Session) -> Result<()> {
    let mut stdout = io::stdout();
    let (mut cols, rows) = terminal::size()?;
    session.set_visible_lines(output_rows(rows));
    session.start();

    let mut last_frame = Instant::now();
    let mut dirty = true;
    loop {
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;
        if !session.renderer().is_settled() {
            session.tick(elapsed.as_millis() as u64);
            dirty = true;
        }

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) => match input::translate(key) {
                    HostAction::Quit => break,
                    HostAction::Key(key) => {
                        session.handle_key(key);
                        dirty = true;
                    },
                    HostAction::Ignore => {},
                },
                Event::Resize(new_cols, new_rows) => {
                    cols = new_cols;
                    session.set_visible_lines(output_rows(new_rows));
                    execute!(stdout, Clear(ClearType::All))?;
                    dirty = true;
                },
                _ => {},
            }
        }

        if dirty {
            render::draw(&mut stdout, session, cols)?;
            dirty = false;
        }
    }
    log::info!("Session ended after {} commands", session.history().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_logging_stays_quiet_below_warn() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "info");
    }

    #[test]
    fn output_rows_reserve_the_prompt() {
        assert_eq!(output_rows(24), 23);
        assert_eq!(output_rows(1), 1);
        assert_eq!(output_rows(0), 1);
    }
}
