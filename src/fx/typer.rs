//! Typewriter text cycler
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves on
//! to the next phrase. The cycler never sleeps: each [`TextCycler::tick`]
//! returns the text to show and how long to wait before the next tick.

use crate::consts::{CURSOR_GLYPH, DELETE_INTERVAL_MS, HOLD_MS, TYPE_INTERVAL_MS};

/// Tick intervals in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_ms: TYPE_INTERVAL_MS,
            delete_ms: DELETE_INTERVAL_MS,
            hold_ms: HOLD_MS,
        }
    }
}

/// Output of a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Visible text, including the trailing cursor glyph
    pub text: String,
    /// Delay until the next tick (ms)
    pub next_delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TextCycler {
    phrases: Vec<Vec<char>>,
    timing: Timing,
    index: usize,
    chars: usize,
    deleting: bool,
}

impl TextCycler {
    /// Empty phrases are dropped; they would never finish typing.
    pub fn new<I, S>(phrases: I, timing: Timing) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            phrases,
            timing,
            index: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Characters currently shown (cursor glyph excluded)
    pub fn char_count(&self) -> usize {
        self.chars
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Advance one step
    pub fn tick(&mut self) -> Frame {
        let Some(phrase) = self.phrases.get(self.index) else {
            return Frame {
                text: CURSOR_GLYPH.to_string(),
                next_delay_ms: self.timing.type_ms,
            };
        };
        let len = phrase.len();

        if !self.deleting {
            self.chars = (self.chars + 1).min(len);
            let text = self.render();
            if self.chars == len {
                self.deleting = true;
                return Frame {
                    text,
                    next_delay_ms: self.timing.hold_ms,
                };
            }
            Frame {
                text,
                next_delay_ms: self.timing.type_ms,
            }
        } else {
            self.chars = self.chars.saturating_sub(1);
            let text = self.render();
            if self.chars == 0 {
                self.deleting = false;
                self.index = (self.index + 1) % self.phrases.len();
                log::debug!("typer: next phrase {}", self.index);
                return Frame {
                    text,
                    next_delay_ms: self.timing.type_ms,
                };
            }
            Frame {
                text,
                next_delay_ms: self.timing.delete_ms,
            }
        }
    }

    fn render(&self) -> String {
        let mut text: String = self.phrases[self.index][..self.chars].iter().collect();
        text.push(CURSOR_GLYPH);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn visible_len(frame: &Frame) -> usize {
        frame.text.chars().count() - 1
    }

    #[test]
    fn test_types_holds_and_deletes() {
        let mut typer = TextCycler::new(["abc"], Timing::default());

        let f = typer.tick();
        assert_eq!(f.text, "a▌");
        assert_eq!(f.next_delay_ms, TYPE_INTERVAL_MS);
        typer.tick();
        let f = typer.tick();
        assert_eq!(f.text, "abc▌");
        assert_eq!(f.next_delay_ms, HOLD_MS);
        assert!(typer.is_deleting());

        let f = typer.tick();
        assert_eq!(f.text, "ab▌");
        assert_eq!(f.next_delay_ms, DELETE_INTERVAL_MS);
        typer.tick();
        let f = typer.tick();
        assert_eq!(f.text, "▌");
        assert_eq!(f.next_delay_ms, TYPE_INTERVAL_MS);
        assert!(!typer.is_deleting());
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut typer = TextCycler::new(["ab", "c"], Timing::default());
        // "ab": 2 typing + 2 deleting
        for _ in 0..4 {
            typer.tick();
        }
        assert_eq!(typer.index(), 1);
        assert_eq!(typer.tick().text, "c▌");
        assert_eq!(typer.tick().text, "▌");
        assert_eq!(typer.index(), 0);
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut typer = TextCycler::new(["héllo ✓"], Timing::default());
        let mut last = String::new();
        for _ in 0..7 {
            last = typer.tick().text;
        }
        assert_eq!(last, "héllo ✓▌");
    }

    #[test]
    fn test_empty_phrases_skipped() {
        let mut typer = TextCycler::new(["", "x", ""], Timing::default());
        assert_eq!(typer.phrase_count(), 1);
        assert_eq!(typer.tick().text, "x▌");

        let mut none = TextCycler::new(Vec::<String>::new(), Timing::default());
        let f = none.tick();
        assert_eq!(f.text, "▌");
        assert_eq!(none.index(), 0);
    }

    proptest! {
        #[test]
        fn prop_typing_rises_then_falls(
            phrases in prop::collection::vec("[a-zA-Z ]{1,12}", 1..5)
        ) {
            let mut typer = TextCycler::new(&phrases, Timing::default());
            for (i, phrase) in phrases.iter().enumerate() {
                let len = phrase.chars().count();
                prop_assert_eq!(typer.index(), i);
                let mut prev = 0;
                for _ in 0..len {
                    let f = typer.tick();
                    prop_assert_eq!(visible_len(&f), prev + 1);
                    prev += 1;
                }
                prop_assert_eq!(prev, len);
                for _ in 0..len {
                    let f = typer.tick();
                    prop_assert_eq!(visible_len(&f), prev - 1);
                    prev -= 1;
                }
                prop_assert_eq!(typer.index(), (i + 1) % phrases.len());
            }
        }
    }
}
