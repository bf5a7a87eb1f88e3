//! Masked API token prompt

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use chirpbulk_app::token_input::{TokenInput, TOKEN_PLACEHOLDER};

use crate::theme::styles;

pub struct TokenPrompt<'a> {
    input: &'a TokenInput,
    /// A connect attempt is running; the field is read-only
    connecting: bool,
}

impl<'a> TokenPrompt<'a> {
    pub fn new(input: &'a TokenInput) -> Self {
        Self {
            input,
            connecting: false,
        }
    }

    pub fn connecting(mut self, connecting: bool) -> Self {
        self.connecting = connecting;
        self
    }
}

impl Widget for TokenPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(!self.connecting).title(" API Token ");
        let inner = block.inner(area);
        block.render(area, buf);

        let value = if self.input.is_empty() {
            Span::styled(TOKEN_PLACEHOLDER, styles::text_muted())
        } else {
            Span::styled(self.input.masked(), styles::text_primary())
        };

        let mut field = vec![Span::styled("> ", styles::accent()), value];
        if !self.connecting {
            field.push(Span::styled("█", styles::accent()));
        }

        let lines = vec![
            Line::from(Span::styled(
                "Enter your ChirpStack API token:",
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(field),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_empty_prompt_shows_placeholder() {
        let input = TokenInput::new();
        let mut term = TestTerminal::new();
        term.render_widget(TokenPrompt::new(&input), Rect::new(0, 0, 80, 8));

        assert!(term.buffer_contains("Enter ChirpStack API token"));
    }

    #[test]
    fn test_token_is_masked() {
        let mut input = TokenInput::new();
        input.push_str("hunter2");
        let mut term = TestTerminal::new();
        term.render_widget(TokenPrompt::new(&input), Rect::new(0, 0, 80, 8));

        assert!(term.buffer_contains("•••••••"));
        assert!(!term.buffer_contains("hunter2"));
    }
}
