//! Body of the Processing, Complete and Error steps

use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use chirpbulk_app::state::WizardStep;

use crate::theme::styles;

/// Braille spinner frames, one per tick
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ResultPanel<'a> {
    step: &'a WizardStep,
    spinner_frame: usize,
    log_dir: Option<&'a Path>,
}

impl<'a> ResultPanel<'a> {
    pub fn new(step: &'a WizardStep, spinner_frame: usize) -> Self {
        Self {
            step,
            spinner_frame,
            log_dir: None,
        }
    }

    /// Point at the logs below an error
    pub fn log_dir(mut self, log_dir: Option<&'a Path>) -> Self {
        self.log_dir = log_dir;
        self
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(3);
        lines.push(match self.step {
            WizardStep::Processing => Line::from(vec![
                Span::styled(
                    SPINNER[self.spinner_frame % SPINNER.len()],
                    styles::accent(),
                ),
                Span::raw(" "),
                Span::styled("Creating devices from CSV file...", styles::status_yellow()),
            ]),
            WizardStep::Complete { created } => Line::from(Span::styled(
                format!("Successfully created {} devices", created),
                styles::status_green(),
            )),
            WizardStep::Error { message } => Line::from(Span::styled(
                format!("Error: {}", message),
                styles::status_red(),
            )),
            _ => Line::default(),
        });

        if let (WizardStep::Error { .. }, Some(dir)) = (self.step, self.log_dir) {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Logs: {}", dir.display()),
                styles::text_muted(),
            )));
        }

        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
