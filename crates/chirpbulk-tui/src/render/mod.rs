//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use chirpbulk_app::state::{AppState, WizardStep};

use crate::layout;
use crate::widgets::{
    FileBrowserView, Header, HelpLine, ResultPanel, SelectionListView, StatusLine, TokenPrompt,
};


/// Render the complete UI for the current wizard step
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());

    frame.render_widget(
        Header::new(state.step.title(), &state.settings.server.address),
        areas.header,
    );

    match &state.step {
        WizardStep::Connecting => frame.render_widget(
            TokenPrompt::new(&state.token_input).connecting(state.is_busy()),
            areas.body,
        ),
        WizardStep::TenantSelect
        | WizardStep::ApplicationSelect
        | WizardStep::DeviceProfileSelect => frame.render_widget(
            SelectionListView::new(&state.selection).loading(state.is_busy()),
            areas.body,
        ),
        WizardStep::FileSelect => {
            frame.render_widget(FileBrowserView::new(&state.file_browser), areas.body)
        }
        step @ (WizardStep::Processing
        | WizardStep::Complete { .. }
        | WizardStep::Error { .. }) => {
            frame.render_widget(
                ResultPanel::new(step, state.spinner_frame).log_dir(state.log_dir.as_deref()),
                areas.body,
            )
        }
    }

    frame.render_widget(
        StatusLine::new(state.status.as_deref()).busy(state.is_busy(), state.spinner_frame),
        areas.status,
    );
    frame.render_widget(HelpLine::new(state.step.help_text()), areas.help);
}
