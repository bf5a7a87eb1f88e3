//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the wizard layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (bordered)
    pub header: Rect,
    /// Step content
    pub body: Rect,
    /// One-line status (loading, empty list, ...)
    pub status: Rect,
    /// One-line key hints
    pub help: Rect,
}

/// Split the screen into header, body, status and help rows
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Top border + title + bottom border
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}
