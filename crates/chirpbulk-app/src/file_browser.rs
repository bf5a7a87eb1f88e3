//! Directory browser used to pick the CSV file
//!
//! Scanning happens off the UI task (`scan_directory` is blocking); the
//! browser state only records which directory is showing and what it holds.

use std::path::{Path, PathBuf};

use chirpbulk_core::prelude::*;

use crate::selection::Navigation;

/// One row of the file browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl BrowserEntry {
    /// Only `.csv` files can be chosen; directories are opened instead
    pub fn is_selectable(&self) -> bool {
        !self.is_dir && is_csv(&self.path)
    }
}

/// Case-insensitive `.csv` extension check
pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Read `dir`, directories first, each group sorted by name
pub fn scan_directory(dir: &Path, show_hidden: bool) -> Result<Vec<BrowserEntry>> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| Error::file_read(dir, e.to_string()))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        // Follows symlinks so linked directories can be opened
        let is_dir = path.is_dir();
        entries.push(BrowserEntry { name, path, is_dir });
    }

    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    Ok(entries)
}

/// File browser state
#[derive(Debug, Clone, Default)]
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<BrowserEntry>,
    pub selected: usize,
    pub show_hidden: bool,
    /// A scan of `current_dir` is running
    pub loading: bool,
    /// Last scan error, shown in place of the entries
    pub error: Option<String>,
}

impl FileBrowser {
    pub fn new(current_dir: PathBuf, show_hidden: bool) -> Self {
        Self {
            current_dir,
            show_hidden,
            ..Default::default()
        }
    }

    /// Mark a scan of `path` as started; the old listing is dropped so
    /// nothing can be picked until the new one arrives
    pub fn begin_scan(&mut self, path: PathBuf) {
        self.current_dir = path;
        self.entries.clear();
        self.selected = 0;
        self.loading = true;
        self.error = None;
    }

    /// Apply a finished scan; results for a directory no longer shown are dropped
    pub fn apply_scan(&mut self, path: &Path, entries: Vec<BrowserEntry>) -> bool {
        if path != self.current_dir {
            debug!("Dropping stale scan of {:?}", path);
            return false;
        }
        self.entries = entries;
        self.selected = 0;
        self.loading = false;
        self.error = None;
        true
    }

    pub fn apply_scan_error(&mut self, path: &Path, error: String) -> bool {
        if path != self.current_dir {
            return false;
        }
        self.entries.clear();
        self.selected = 0;
        self.loading = false;
        self.error = Some(error);
        true
    }

    /// Parent of the shown directory, `None` at the filesystem root
    pub fn parent_dir(&self) -> Option<PathBuf> {
        self.current_dir.parent().map(Path::to_path_buf)
    }

    pub fn navigate(&mut self, nav: Navigation) {
        self.selected = nav.apply(self.selected, self.entries.len());
    }

    pub fn selected_entry(&self) -> Option<&BrowserEntry> {
        self.entries.get(self.selected)
    }
}
