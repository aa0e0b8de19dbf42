//! Inline year editor shown in place of a month header's year label.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::picker::Side;

pub const YEAR_DIGITS: usize = 4;

/// Accept exactly four ASCII digits.
pub fn parse_year(text: &str) -> Option<i32> {
    let text = text.trim();
    if text.len() != YEAR_DIGITS || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// What the editor wants its owner to do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearKeyOutcome {
    /// Buffer or cursor changed.
    Edited,
    /// Key rejected (non-digit, or a fifth digit).
    Suppressed,
    /// Enter: commit and drop focus.
    Submit,
    /// Focus left the field (Tab, Esc): commit if valid, else revert.
    Blur,
}

/// Text buffer of the year editor.
///
/// Opens with the whole text selected, so the first digit replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearInput {
    side: Side,
    buffer: String,
    cursor: usize,
    select_all: bool,
}

impl YearInput {
    pub fn new(side: Side, year: i32) -> Self {
        let buffer = year.to_string();
        Self {
            side,
            cursor: buffer.len(),
            buffer,
            select_all: true,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Year to apply on blur, or `None` when the display should revert.
    pub fn committed_year(&self) -> Option<i32> {
        parse_year(&self.buffer)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> YearKeyOutcome {
        if key.kind != KeyEventKind::Press {
            return YearKeyOutcome::Suppressed;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return YearKeyOutcome::Suppressed;
        }

        match key.code {
            KeyCode::Enter => YearKeyOutcome::Submit,
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => YearKeyOutcome::Blur,
            KeyCode::Backspace => {
                if self.select_all {
                    self.clear();
                } else if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buffer.remove(self.cursor);
                }
                YearKeyOutcome::Edited
            }
            KeyCode::Delete => {
                if self.select_all {
                    self.clear();
                } else if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
                YearKeyOutcome::Edited
            }
            KeyCode::Left => {
                self.select_all = false;
                self.cursor = self.cursor.saturating_sub(1);
                YearKeyOutcome::Edited
            }
            KeyCode::Right => {
                self.select_all = false;
                self.cursor = (self.cursor + 1).min(self.buffer.len());
                YearKeyOutcome::Edited
            }
            KeyCode::Home => {
                self.select_all = false;
                self.cursor = 0;
                YearKeyOutcome::Edited
            }
            KeyCode::End => {
                self.select_all = false;
                self.cursor = self.buffer.len();
                YearKeyOutcome::Edited
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if self.select_all {
                    self.clear();
                }
                if self.buffer.len() >= YEAR_DIGITS {
                    return YearKeyOutcome::Suppressed;
                }
                self.buffer.insert(self.cursor, ch);
                self.cursor += 1;
                YearKeyOutcome::Edited
            }
            _ => YearKeyOutcome::Suppressed,
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.select_all = false;
    }
}
