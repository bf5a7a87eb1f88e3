//! Selection list state for the tenant, application and device profile steps

use chirpbulk_core::{ResourceKind, SelectionItem};

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Cursor movement shared by the selection lists and the file browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
}

impl Navigation {
    /// Apply this movement to `selected` within a list of `len` rows
    pub fn apply(self, selected: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let last = len - 1;
        match self {
            Navigation::Up => selected.saturating_sub(1),
            Navigation::Down => (selected + 1).min(last),
            Navigation::PageUp => selected.saturating_sub(PAGE_SIZE),
            Navigation::PageDown => (selected + PAGE_SIZE).min(last),
            Navigation::First => 0,
            Navigation::Last => last,
        }
    }
}

/// Items of the current selection screen plus the highlighted row.
///
/// `items` keeps the order the server returned. The filter only narrows
/// which of them are shown; `selected` indexes the shown rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionList {
    pub kind: Option<ResourceKind>,
    pub items: Vec<SelectionItem>,
    pub selected: usize,
    filter: String,
    /// Keys go to the filter query instead of the list
    editing_filter: bool,
}

impl SelectionList {
    pub fn new(kind: ResourceKind, items: Vec<SelectionItem>) -> Self {
        Self {
            kind: Some(kind),
            items,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose title matches the filter, in loaded order
    pub fn visible(&self) -> Vec<&SelectionItem> {
        if self.filter.is_empty() {
            return self.items.iter().collect();
        }
        let query = self.filter.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Highlighted item, `None` when nothing is shown
    pub fn selected_item(&self) -> Option<&SelectionItem> {
        self.visible().get(self.selected).copied()
    }

    pub fn navigate(&mut self, nav: Navigation) {
        self.selected = nav.apply(self.selected, self.visible().len());
    }

    /// List title shown above the items
    pub fn title(&self) -> &'static str {
        self.kind.map(|k| k.list_title()).unwrap_or("")
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_editing_filter(&self) -> bool {
        self.editing_filter
    }

    /// A query is typed or being typed
    pub fn is_filtered(&self) -> bool {
        self.editing_filter || !self.filter.is_empty()
    }

    pub fn start_filter(&mut self) {
        self.editing_filter = true;
    }

    pub fn push_filter(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.filter.push(c);
        self.selected = 0;
    }

    pub fn pop_filter(&mut self) {
        self.filter.pop();
        self.selected = 0;
    }

    /// Stop editing and keep the query; an empty query turns the filter off
    pub fn accept_filter(&mut self) {
        self.editing_filter = false;
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.editing_filter = false;
        self.selected = 0;
    }
}
