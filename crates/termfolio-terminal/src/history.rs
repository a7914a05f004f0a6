//! Command history with up/down replay.

use termfolio_types::input::Direction;

/// Submitted lines, oldest first, with a replay cursor.
///
/// The cursor ranges over `0..=len()`; `len()` stands for the live edit
/// buffer. Entries are never removed and duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted line and park the cursor on the live buffer.
    ///
    /// Blank lines are not recorded and leave the cursor alone.
    pub fn record(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Move the cursor one step and return what the edit buffer should
    /// now hold: the entry under the cursor, or `""` past the newest one.
    ///
    /// Returns `None` when there is no history, in which case the buffer
    /// should be left as it is.
    pub fn navigate(&mut self, direction: Direction) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = match direction {
            Direction::Up => self.cursor.saturating_sub(1),
            Direction::Down => (self.cursor + 1).min(self.entries.len()),
        };
        Some(self.entries.get(self.cursor).map_or("", String::as_str))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_is_a_no_op() {
        let mut h = History::new();
        assert_eq!(h.navigate(Direction::Up), None);
        assert_eq!(h.navigate(Direction::Down), None);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn up_clamps_at_oldest_and_down_returns_to_live() {
        let mut h = History::new();
        h.record("A");
        h.record("B");
        assert_eq!(h.navigate(Direction::Up), Some("B"));
        assert_eq!(h.navigate(Direction::Up), Some("A"));
        assert_eq!(h.navigate(Direction::Up), Some("A"));
        assert_eq!(h.navigate(Direction::Down), Some("B"));
        assert_eq!(h.navigate(Direction::Down), Some(""));
        assert_eq!(h.navigate(Direction::Down), Some(""));
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn record_resets_cursor() {
        let mut h = History::new();
        h.record("one");
        h.record("two");
        h.navigate(Direction::Up);
        h.navigate(Direction::Up);
        assert_eq!(h.cursor(), 0);
        h.record("three");
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.navigate(Direction::Up), Some("three"));
    }

    #[test]
    fn blank_lines_are_skipped_and_duplicates_kept() {
        let mut h = History::new();
        h.record("ls");
        h.record("   ");
        h.record("ls");
        h.record("");
        assert_eq!(h.entries(), ["ls", "ls"]);
    }

    #[test]
    fn stored_lines_are_trimmed() {
        let mut h = History::new();
        h.record("  open project1 ");
        assert_eq!(h.entries(), ["open project1"]);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn step() -> impl Strategy<Value = Option<Direction>> {
            prop_oneof![
                Just(None),
                Just(Some(Direction::Up)),
                Just(Some(Direction::Down)),
            ]
        }

        proptest! {
            #[test]
            fn cursor_stays_in_bounds(steps in proptest::collection::vec(step(), 0..60)) {
                let mut h = History::new();
                for (i, s) in steps.into_iter().enumerate() {
                    match s {
                        None => h.record(&format!("cmd{i}")),
                        Some(d) => {
                            h.navigate(d);
                        },
                    }
                    prop_assert!(h.cursor() <= h.len());
                }
            }

            #[test]
            fn navigation_never_mutates_entries(n in 1usize..8, ups in 0usize..12) {
                let mut h = History::new();
                for i in 0..n {
                    h.record(&format!("line{i}"));
                }
                let before = h.entries().to_vec();
                for _ in 0..ups {
                    h.navigate(Direction::Up);
                }
                for _ in 0..ups {
                    h.navigate(Direction::Down);
                }
                prop_assert_eq!(h.entries(), before.as_slice());
                prop_assert_eq!(h.cursor(), n);
            }
        }
    }
}
