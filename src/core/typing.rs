use super::constants::{TYPING_CHAR_INTERVAL_MS, TYPING_START_DELAY_MS};
use super::epoch::Ticket;

/// Character-by-character reveal of a fixed text.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    pub start_delay_ms: u32,
    pub interval_ms: u32,
    ticket: Option<Ticket>,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            start_delay_ms: TYPING_START_DELAY_MS,
            interval_ms: TYPING_CHAR_INTERVAL_MS,
            ticket: None,
        }
    }

    /// Tie the reveal to `ticket`; once it goes stale nothing more is typed.
    pub fn bound_to(mut self, ticket: Ticket) -> Self {
        self.ticket = Some(ticket);
        self
    }

    /// The complete text, regardless of how much has been revealed.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn is_cancelled(&self) -> bool {
        self.ticket.as_ref().is_some_and(|t| !t.is_current())
    }

    /// Reveal one more character and return the visible prefix, or `None`
    /// once the whole text is shown or the run was cancelled.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() || self.is_cancelled() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }

    /// Milliseconds from setup until the last character appears.
    pub fn total_duration_ms(&self) -> u32 {
        let n = self.chars.len() as u32;
        if n == 0 {
            return 0;
        }
        self.start_delay_ms + self.interval_ms * (n - 1)
    }
}
