//! CSV file browser view

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use chirpbulk_app::file_browser::{BrowserEntry, FileBrowser};

use crate::theme::styles;

pub struct FileBrowserView<'a> {
    browser: &'a FileBrowser,
}

impl<'a> FileBrowserView<'a> {
    pub fn new(browser: &'a FileBrowser) -> Self {
        Self { browser }
    }
}

fn entry_line(entry: &BrowserEntry) -> Line<'static> {
    if entry.is_dir {
        Line::from(Span::styled(format!("{}/", entry.name), styles::accent()))
    } else if entry.is_selectable() {
        Line::from(Span::styled(entry.name.clone(), styles::text_primary()))
    } else {
        Line::from(Span::styled(entry.name.clone(), styles::text_muted()))
    }
}

impl Widget for FileBrowserView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.browser.current_dir.display());
        let block = styles::glass_block(true).title(title);

        let placeholder = if let Some(error) = &self.browser.error {
            Some(Span::styled(
                format!("Cannot read directory: {}", error),
                styles::status_red(),
            ))
        } else if self.browser.loading {
            Some(Span::styled("Reading directory...", styles::text_muted()))
        } else if self.browser.entries.is_empty() {
            Some(Span::styled("Empty directory", styles::text_muted()))
        } else {
            None
        };

        if let Some(text) = placeholder {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(text).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .browser
            .entries
            .iter()
            .map(|e| ListItem::new(entry_line(e)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(styles::selected())
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.browser.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
