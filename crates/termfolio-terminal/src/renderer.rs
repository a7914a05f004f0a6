//! Ordered render scheduler.
//!
//! Actions are applied strictly in submission order. Immediate actions land
//! synchronously when nothing is pending; otherwise they wait behind the
//! animation in flight. Time only advances through [`Renderer::tick`],
//! which the host calls once per frame.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use crate::output::{OutputLine, RenderAction};

// ---------------------------------------------------------------------------
// Output log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct LogEntry {
    line: OutputLine,
    /// Visible characters; equals `line.char_count()` once fully shown.
    revealed: usize,
}

/// Append-only, bottom-anchored list of output lines.
#[derive(Debug, Clone)]
pub struct OutputLog {
    entries: Vec<LogEntry>,
    visible_lines: usize,
    scroll_top: usize,
}

impl OutputLog {
    pub fn new(visible_lines: usize) -> Self {
        Self {
            entries: Vec::new(),
            visible_lines: visible_lines.max(1),
            scroll_top: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every line as currently shown (animated lines partially revealed).
    pub fn lines(&self) -> Vec<OutputLine> {
        self.entries
            .iter()
            .map(|e| e.line.truncated(e.revealed))
            .collect()
    }

    /// Plain text of every line as currently shown.
    pub fn texts(&self) -> Vec<String> {
        self.lines().iter().map(OutputLine::text).collect()
    }

    /// The window of lines the viewport shows.
    pub fn visible(&self) -> Vec<OutputLine> {
        self.entries
            .iter()
            .skip(self.scroll_top)
            .take(self.visible_lines)
            .map(|e| e.line.truncated(e.revealed))
            .collect()
    }

    /// Index of the first line in the viewport.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Change the viewport height, keeping it anchored to the bottom.
    pub fn set_visible_lines(&mut self, visible_lines: usize) {
        self.visible_lines = visible_lines.max(1);
        self.scroll_to_end();
    }

    /// Move the viewport so the newest line is visible.
    pub fn scroll_to_end(&mut self) {
        self.scroll_top = self.entries.len().saturating_sub(self.visible_lines);
    }

    fn push(&mut self, line: OutputLine, revealed: usize) -> usize {
        self.entries.push(LogEntry { line, revealed });
        self.scroll_to_end();
        self.entries.len() - 1
    }

    fn reveal(&mut self, index: usize, revealed: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.revealed = revealed;
        }
        self.scroll_to_end();
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.scroll_top = 0;
    }
}

// ---------------------------------------------------------------------------
// Completion handles
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Progress {
    /// Highest ticket fully applied. Tickets complete in order.
    completed: Cell<u64>,
    wakers: RefCell<Vec<Waker>>,
}

impl Progress {
    fn finish(&self, ticket: u64) {
        self.completed.set(ticket);
        for waker in self.wakers.borrow_mut().drain(..) {
            waker.wake();
        }
    }
}

/// Resolves once a submitted action has been fully applied to the log.
///
/// For an animated line that means every character has been revealed.
#[derive(Debug, Clone)]
pub struct Completion {
    ticket: u64,
    progress: Rc<Progress>,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.progress.completed.get() >= self.ticket
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.is_complete() {
            return Poll::Ready(());
        }
        self.progress.wakers.borrow_mut().push(cx.waker().clone());
        Poll::Pending
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Whether an animation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Animating,
}

#[derive(Debug)]
struct Reveal {
    ticket: u64,
    index: usize,
    total_chars: usize,
    delay_ms: u64,
    elapsed_ms: u64,
}

/// Applies render actions to an [`OutputLog`] in submission order.
#[derive(Debug)]
pub struct Renderer {
    log: OutputLog,
    queue: VecDeque<(u64, RenderAction)>,
    active: Option<Reveal>,
    next_ticket: u64,
    progress: Rc<Progress>,
}

impl Renderer {
    pub fn new(visible_lines: usize) -> Self {
        Self {
            log: OutputLog::new(visible_lines),
            queue: VecDeque::new(),
            active: None,
            next_ticket: 1,
            progress: Rc::new(Progress::default()),
        }
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut OutputLog {
        &mut self.log
    }

    pub fn state(&self) -> RenderState {
        if self.active.is_some() {
            RenderState::Animating
        } else {
            RenderState::Idle
        }
    }

    /// Idle with nothing queued.
    pub fn is_settled(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }

    /// Actions waiting behind the current animation.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Submit an action. It is applied now if nothing is ahead of it.
    pub fn submit(&mut self, action: RenderAction) -> Completion {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        if self.is_settled() {
            self.apply(ticket, action);
        } else {
            self.queue.push_back((ticket, action));
        }
        Completion {
            ticket,
            progress: Rc::clone(&self.progress),
        }
    }

    /// Advance animation time by `dt_ms` and apply whatever becomes due.
    ///
    /// Time left over after an animation finishes carries into the next
    /// one, so a single large tick behaves like many small ones.
    pub fn tick(&mut self, dt_ms: u64) {
        let mut budget = dt_ms;
        loop {
            if let Some(reveal) = self.active.as_mut() {
                reveal.elapsed_ms += budget;
                let due = (reveal.elapsed_ms / reveal.delay_ms) as usize;
                let shown = due.min(reveal.total_chars);
                let index = reveal.index;
                if shown < reveal.total_chars {
                    self.log.reveal(index, shown);
                    return;
                }
                budget = reveal.elapsed_ms - reveal.total_chars as u64 * reveal.delay_ms;
                let ticket = reveal.ticket;
                self.active = None;
                self.log.reveal(index, shown);
                self.progress.finish(ticket);
            }
            match self.queue.pop_front() {
                Some((ticket, action)) => self.apply(ticket, action),
                None => return,
            }
        }
    }

    /// Fast-forward until every submitted action has been applied.
    pub fn run_until_idle(&mut self) {
        while !self.is_settled() {
            let remaining = self.remaining_ms();
            self.tick(remaining.max(1));
        }
    }

    /// Milliseconds until the current animation finishes.
    fn remaining_ms(&self) -> u64 {
        self.active
            .as_ref()
            .map(|r| (r.total_chars as u64 * r.delay_ms).saturating_sub(r.elapsed_ms))
            .unwrap_or(0)
    }

    fn apply(&mut self, ticket: u64, action: RenderAction) {
        match action {
            RenderAction::Immediate(line) => {
                let chars = line.char_count();
                self.log.push(line, chars);
                self.progress.finish(ticket);
            },
            RenderAction::Clear => {
                self.log.clear();
                self.progress.finish(ticket);
            },
            RenderAction::Animated {
                line,
                per_char_delay_ms,
            } => {
                let total_chars = line.char_count();
                if total_chars == 0 || per_char_delay_ms == 0 {
                    self.log.push(line, total_chars);
                    self.progress.finish(ticket);
                    return;
                }
                let index = self.log.push(line, 0);
                self.active = Some(Reveal {
                    ticket,
                    index,
                    total_chars,
                    delay_ms: u64::from(per_char_delay_ms),
                    elapsed_ms: 0,
                });
            },
        }
    }
}
