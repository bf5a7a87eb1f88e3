//! Tenant, application and device profile list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use chirpbulk_app::selection::SelectionList;

use crate::theme::styles;

pub struct SelectionListView<'a> {
    list: &'a SelectionList,
    loading: bool,
}

impl<'a> SelectionListView<'a> {
    pub fn new(list: &'a SelectionList) -> Self {
        Self {
            list,
            loading: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// `Filter: query`, with a cursor while the query is typed
fn filter_line(list: &SelectionList) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Filter: ", styles::accent()),
        Span::styled(list.filter().to_string(), styles::text_primary()),
    ];
    if list.is_editing_filter() {
        spans.push(Span::styled("_", styles::accent_bold()));
    }
    Line::from(spans)
}

impl Widget for SelectionListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.list.title());
        let block = styles::glass_block(!self.loading).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.list.is_empty() {
            let text = if self.loading { "Loading..." } else { "Nothing to select" };
            Paragraph::new(Span::styled(text, styles::text_muted())).render(inner, buf);
            return;
        }

        let list_area = if self.list.is_filtered() {
            let [filter_area, rest] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
            Paragraph::new(filter_line(self.list)).render(filter_area, buf);
            rest
        } else {
            inner
        };

        let visible = self.list.visible();
        if visible.is_empty() {
            Paragraph::new(Span::styled("No matches", styles::text_muted()))
                .render(list_area, buf);
            return;
        }

        let items: Vec<ListItem> = visible
            .into_iter()
            .map(|item| {
                ListItem::new(vec![
                    Line::from(Span::styled(item.title.clone(), styles::text_primary())),
                    Line::from(Span::styled(
                        format!("  {}", item.description),
                        styles::text_muted(),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(styles::selected())
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.list.selected));
        StatefulWidget::render(list, list_area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chirpbulk_core::{ResourceKind, SelectionItem};

    #[test]
    fn test_renders_items_with_title() {
        let list = SelectionList::new(
            ResourceKind::Application,
            vec![
                SelectionItem::new("Meters", "Water meters", "a-1"),
                SelectionItem::new("Trackers", "Asset trackers", "a-2"),
            ],
        );
        let mut term = TestTerminal::new();
        term.render_widget(SelectionListView::new(&list), Rect::new(0, 0, 80, 12));

        assert!(term.buffer_contains("Select Application"));
        assert!(term.buffer_contains("> Meters"));
        assert!(term.buffer_contains("Water meters"));
        assert!(term.buffer_contains("Trackers"));
    }

    #[test]
    fn test_highlight_follows_selection() {
        let mut list = SelectionList::new(
            ResourceKind::Tenant,
            vec![
                SelectionItem::new("Alpha", "Alpha", "t-1"),
                SelectionItem::new("Bravo", "Bravo", "t-2"),
            ],
        );
        list.selected = 1;
        let mut term = TestTerminal::new();
        term.render_widget(SelectionListView::new(&list), Rect::new(0, 0, 80, 12));

        assert!(term.buffer_contains("> Bravo"));
        assert!(!term.buffer_contains("> Alpha"));
    }

    #[test]
    fn test_loading_placeholder() {
        let list = SelectionList::new(ResourceKind::DeviceProfile, vec![]);
        let mut term = TestTerminal::new();
        term.render_widget(
            SelectionListView::new(&list).loading(true),
            Rect::new(0, 0, 80, 12),
        );

        assert!(term.buffer_contains("Select Device Profile"));
        assert!(term.buffer_contains("Loading..."));
    }

    #[test]
    fn test_filter_shows_query_and_matching_rows() {
        let mut list = SelectionList::new(
            ResourceKind::Tenant,
            vec![
                SelectionItem::new("Acme", "Acme", "t-1"),
                SelectionItem::new("Globex", "Globex", "t-2"),
            ],
        );
        list.start_filter();
        list.push_filter('g');
        let mut term = TestTerminal::new();
        term.render_widget(SelectionListView::new(&list), Rect::new(0, 0, 80, 12));

        assert!(term.buffer_contains("Filter: g_"));
        assert!(term.buffer_contains("> Globex"));
        assert!(!term.buffer_contains("Acme"));
    }

    #[test]
    fn test_filter_without_match() {
        let mut list = SelectionList::new(
            ResourceKind::Tenant,
            vec![SelectionItem::new("Acme", "Acme", "t-1")],
        );
        list.start_filter();
        list.push_filter('z');
        list.accept_filter();
        let mut term = TestTerminal::new();
        term.render_widget(SelectionListView::new(&list), Rect::new(0, 0, 80, 12));

        assert!(term.buffer_contains("Filter: z"));
        assert!(!term.buffer_contains("z_"));
        assert!(term.buffer_contains("No matches"));
    }
}
