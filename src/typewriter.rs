pub const REVEAL_INTERVAL_MS: u32 = 50;
pub const CARET: &str = "|";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    start_delay_ms: u32,
    revealed_chars: usize,
    revealed_bytes: usize,
    total_chars: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, start_delay_ms: u32) -> Self {
        let text = text.into();
        let total_chars = text.chars().count();

        Self {
            text,
            start_delay_ms,
            revealed_chars: 0,
            revealed_bytes: 0,
            total_chars,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revealed(&self) -> &str {
        &self.text[..self.revealed_bytes]
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed_chars
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_chars >= self.total_chars
    }

    pub fn shows_caret(&self) -> bool {
        !self.is_complete()
    }

    /// The start delay applies only before the first character.
    pub fn next_delay_ms(&self) -> Option<u32> {
        if self.is_complete() {
            return None;
        }

        if self.revealed_chars == 0 {
            Some(REVEAL_INTERVAL_MS.saturating_add(self.start_delay_ms))
        } else {
            Some(REVEAL_INTERVAL_MS)
        }
    }

    /// Reveals one more character. Returns `true` when this call completed the text.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.text[self.revealed_bytes..].chars().next() else {
            return false;
        };

        self.revealed_bytes += next.len_utf8();
        self.revealed_chars += 1;
        self.is_complete()
    }
}
