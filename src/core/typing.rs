/// Progression state for the self-typing headline.
///
/// One `tick` reveals one character; the visible prefix always falls on a
/// character boundary, so multi-byte text is safe.
pub struct TypingState {
    text: String,
    shown: usize,
}

impl TypingState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    /// Reveal the next character. Returns false once the text is complete.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.shown += 1;
        true
    }

    /// The currently revealed prefix.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((i, _)) => &self.text[..i],
            None => &self.text,
        }
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }
}
