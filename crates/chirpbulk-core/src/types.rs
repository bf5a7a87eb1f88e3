//! Core domain types for the device import wizard

use std::fmt;

/// Kind of remote resource shown in a selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Tenant,
    Application,
    DeviceProfile,
}

impl ResourceKind {
    /// Whether listing this resource is scoped to the selected tenant
    pub fn is_tenant_scoped(&self) -> bool {
        !matches!(self, ResourceKind::Tenant)
    }

    /// Title of the selection list for this resource
    pub fn list_title(&self) -> &'static str {
        match self {
            ResourceKind::Tenant => "Select Tenant",
            ResourceKind::Application => "Select Application",
            ResourceKind::DeviceProfile => "Select Device Profile",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Tenant => write!(f, "tenants"),
            ResourceKind::Application => write!(f, "applications"),
            ResourceKind::DeviceProfile => write!(f, "device profiles"),
        }
    }
}

/// One entry of a selection screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    pub title: String,
    pub description: String,
    pub id: String,
}

impl SelectionItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            id: id.into(),
        }
    }
}

/// Device fields taken from one CSV row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub dev_eui: String,
    pub name: String,
    pub description: String,
}

impl ImportRecord {
    /// Build a record from a CSV row laid out as `devEui, name, description?`.
    ///
    /// Returns `None` for rows with fewer than two cells.
    pub fn from_row(row: &[String]) -> Option<Self> {
        match row {
            [dev_eui, name, rest @ ..] => Some(Self {
                dev_eui: dev_eui.clone(),
                name: name.clone(),
                description: rest.first().cloned().unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

/// Outcome of a finished import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportResult {
    /// Number of devices the server accepted
    pub created: usize,
}

/// Check whether `s` is a non-empty string of hex digits (either case)
pub fn is_hex_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Index of the first data row.
///
/// Row 0 is treated as a header when its first cell is not a hex DevEUI.
pub fn data_start_index(rows: &[Vec<String>]) -> usize {
    match rows.first() {
        Some(first) => {
            let first_cell = first.first().map(String::as_str).unwrap_or("");
            if is_hex_string(first_cell) {
                0
            } else {
                1
            }
        }
        None => 0,
    }
}
