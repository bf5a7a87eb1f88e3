//! Title bar with the step title and the server address

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Header<'a> {
    title: &'a str,
    server_address: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, server_address: &'a str) -> Self {
        Self {
            title,
            server_address,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(Line::from(Span::styled(self.title, styles::accent_bold())))
            .render(inner, buf);

        // Server address right-aligned, dropped when it would collide with the title
        let needed = (self.title.chars().count() + self.server_address.chars().count() + 2) as u16;
        if needed <= inner.width {
            Paragraph::new(Line::from(Span::styled(
                self.server_address,
                styles::text_muted(),
            )))
            .alignment(Alignment::Right)
            .render(inner, buf);
        }
    }
}
