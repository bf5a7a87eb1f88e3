//! Masked API token input

/// Maximum accepted token length
pub const TOKEN_CHAR_LIMIT: usize = 256;

/// Shown while the input is empty
pub const TOKEN_PLACEHOLDER: &str = "Enter ChirpStack API token";

const MASK_CHAR: char = '•';

/// Text field holding the API token; never rendered in clear text
#[derive(Default, Clone, PartialEq, Eq)]
pub struct TokenInput {
    value: String,
}

impl std::fmt::Debug for TokenInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenInput")
            .field("len", &self.len())
            .finish()
    }
}

impl TokenInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. Control characters and input past the limit are dropped.
    pub fn push(&mut self, c: char) {
        if c.is_control() || self.len() >= TOKEN_CHAR_LIMIT {
            return;
        }
        self.value.push(c);
    }

    /// Append pasted text, trimming the surrounding whitespace a paste usually carries
    pub fn push_str(&mut self, text: &str) {
        for c in text.trim().chars() {
            self.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// One mask character per typed character
    pub fn masked(&self) -> String {
        std::iter::repeat(MASK_CHAR).take(self.len()).collect()
    }
}
