//! Widget components for the wizard screens

mod file_browser;
mod header;
mod result_panel;
mod selection_list;
mod status_line;
mod token_prompt;

pub use file_browser::FileBrowserView;
pub use header::Header;
pub use result_panel::{ResultPanel, SPINNER};
pub use selection_list::SelectionListView;
pub use status_line::{HelpLine, StatusLine};
pub use token_prompt::TokenPrompt;
