//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use chirpbulk_api::Session;
use chirpbulk_core::prelude::*;
use chirpbulk_core::ResourceKind;

use crate::config::Settings;
use crate::file_browser::FileBrowser;
use crate::import::ImportTarget;
use crate::selection::SelectionList;
use crate::token_input::TokenInput;

const APP_TITLE: &str = "ChirpStack Device Manager";

/// Current screen of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    /// Credential prompt; stays here while the connection is opened
    Connecting,
    TenantSelect,
    ApplicationSelect,
    DeviceProfileSelect,
    FileSelect,
    Processing,
    Complete { created: usize },
    Error { message: String },
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Connecting
            | WizardStep::TenantSelect
            | WizardStep::ApplicationSelect
            | WizardStep::DeviceProfileSelect => APP_TITLE,
            WizardStep::FileSelect => "Select CSV File",
            WizardStep::Processing => "Processing...",
            WizardStep::Complete { .. } => "Complete!",
            WizardStep::Error { .. } => "Error",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            WizardStep::Connecting => "Press Enter to connect • Esc or Ctrl+C to quit",
            WizardStep::TenantSelect
            | WizardStep::ApplicationSelect
            | WizardStep::DeviceProfileSelect => {
                "↑/↓: navigate • /: filter • Enter: select • q: quit"
            }
            WizardStep::FileSelect => {
                "Navigate and press Enter to select • Backspace: parent • .: hidden files • q: quit"
            }
            WizardStep::Processing => "Importing devices... • q: quit",
            WizardStep::Complete { .. } | WizardStep::Error { .. } => "Press q to quit",
        }
    }

    /// Complete and Error only leave through quit
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Complete { .. } | WizardStep::Error { .. })
    }

    /// Resource listed on this step, if it is a selection step
    pub fn list_kind(&self) -> Option<ResourceKind> {
        match self {
            WizardStep::TenantSelect => Some(ResourceKind::Tenant),
            WizardStep::ApplicationSelect => Some(ResourceKind::Application),
            WizardStep::DeviceProfileSelect => Some(ResourceKind::DeviceProfile),
            _ => None,
        }
    }

    /// Selection step showing `kind`
    pub fn for_kind(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Tenant => WizardStep::TenantSelect,
            ResourceKind::Application => WizardStep::ApplicationSelect,
            ResourceKind::DeviceProfile => WizardStep::DeviceProfileSelect,
        }
    }
}

/// Background request the wizard is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingRequest {
    Connect,
    List(ResourceKind),
    Import,
}

/// Identifiers chosen so far. Each field is set at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardContext {
    tenant_id: Option<String>,
    application_id: Option<String>,
    device_profile_id: Option<String>,
    file_path: Option<PathBuf>,
}

fn record_once<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

impl WizardContext {
    pub fn record_tenant(&mut self, id: impl Into<String>) -> bool {
        record_once(&mut self.tenant_id, id.into())
    }

    pub fn record_application(&mut self, id: impl Into<String>) -> bool {
        record_once(&mut self.application_id, id.into())
    }

    pub fn record_device_profile(&mut self, id: impl Into<String>) -> bool {
        record_once(&mut self.device_profile_id, id.into())
    }

    pub fn record_file(&mut self, path: PathBuf) -> bool {
        record_once(&mut self.file_path, path)
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    pub fn device_profile_id(&self) -> Option<&str> {
        self.device_profile_id.as_deref()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Import parameters; fails unless every selection is present and non-empty
    pub fn import_target(&self) -> Result<ImportTarget> {
        let missing = |what: &str| Error::incomplete_selection(format!("no {} selected", what));

        if self.tenant_id.as_deref().unwrap_or("").is_empty() {
            return Err(missing("tenant"));
        }
        let application_id = self
            .application_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| missing("application"))?;
        let device_profile_id = self
            .device_profile_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| missing("device profile"))?;
        let file_path = self
            .file_path
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| missing("file"))?;

        Ok(ImportTarget {
            application_id,
            device_profile_id,
            file_path,
        })
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub step: WizardStep,
    pub context: WizardContext,
    pub settings: Settings,

    pub token_input: TokenInput,
    pub selection: SelectionList,
    pub file_browser: FileBrowser,

    /// Open connection, present from a successful connect until quit
    pub session: Option<Session>,
    pub in_flight: Option<PendingRequest>,

    /// Status line under the content (loading, empty list, ...)
    pub status: Option<String>,
    pub spinner_frame: usize,
    /// Where the log files go, shown with errors
    pub log_dir: Option<PathBuf>,

    should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let file_browser = FileBrowser::new(
            settings.import.resolved_start_dir(),
            settings.import.show_hidden,
        );
        Self {
            step: WizardStep::Connecting,
            context: WizardContext::default(),
            settings,
            token_input: TokenInput::new(),
            selection: SelectionList::default(),
            file_browser,
            session: None,
            in_flight: None,
            status: None,
            spinner_frame: 0,
            log_dir: None,
            should_quit: false,
        }
    }

    /// Close the session (if any) and mark the app for exit
    pub fn request_quit(&mut self) {
        if let Some(session) = self.session.take() {
            session.close();
        }
        if let Some(pending) = self.in_flight.take() {
            debug!("Abandoning in-flight {:?}", pending);
        }
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move to the Error step with `message` verbatim
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("Wizard failed in {:?}: {}", self.step, message);
        self.in_flight = None;
        self.status = None;
        self.step = WizardStep::Error { message };
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn set_step(&mut self, step: WizardStep) {
        info!("Wizard step: {:?} -> {:?}", self.step, step);
        self.step = step;
    }
}
