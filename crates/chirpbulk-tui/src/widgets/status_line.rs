//! Single-line status and key hint rows

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::SPINNER;

/// Status text, prefixed with a spinner while a request runs
pub struct StatusLine<'a> {
    text: Option<&'a str>,
    busy: bool,
    spinner_frame: usize,
}

impl<'a> StatusLine<'a> {
    pub fn new(text: Option<&'a str>) -> Self {
        Self {
            text,
            busy: false,
            spinner_frame: 0,
        }
    }

    pub fn busy(mut self, busy: bool, spinner_frame: usize) -> Self {
        self.busy = busy;
        self.spinner_frame = spinner_frame;
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(text) = self.text else {
            return;
        };

        let mut spans = Vec::with_capacity(3);
        if self.busy {
            spans.push(Span::styled(
                SPINNER[self.spinner_frame % SPINNER.len()],
                styles::accent(),
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(text, styles::text_secondary()));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Key hints for the current step
pub struct HelpLine<'a> {
    text: &'a str,
}

impl<'a> HelpLine<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for HelpLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(self.text, styles::text_muted())).render(area, buf);
    }
}
