//! # Browser Module
//!
//! A single-directory file browser that feeds selections to the page
//! controller.
//!
//! The browser owns its listing, cursor, and scroll window. It knows nothing
//! about pages: each key press produces exactly one [`BrowserEvent`], and the
//! caller decides what an accepted or rejected selection means.
//!
//! ## Key Bindings
//!
//! | Keys | Effect |
//! |------|--------|
//! | `j` / `Down` | Next entry |
//! | `k` / `Up` | Previous entry |
//! | `J` / `PageDown` | Down one listing page |
//! | `K` / `PageUp` | Up one listing page |
//! | `g` / `Home` | First entry |
//! | `G` / `End` | Last entry |
//! | `l` / `Right` / `Enter` | Open directory or select file |
//! | `h` / `Left` / `Backspace` / `-` / `Esc` | Parent directory |

pub mod listing;

pub use listing::{has_allowed_extension, read_entries, Entry};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::{Path, PathBuf};

/// Outcome of feeding one key press to the [`Browser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// Navigation only, or a key the browser does not bind.
    None,
    /// A file on the allow-list was selected.
    Accepted(PathBuf),
    /// A file outside the allow-list was selected.
    Rejected(PathBuf),
}

impl BrowserEvent {
    pub fn did_select(&self) -> Option<&Path> {
        match self {
            BrowserEvent::Accepted(path) => Some(path.as_path()),
            _ => None,
        }
    }

    pub fn was_rejected(&self) -> Option<&Path> {
        match self {
            BrowserEvent::Rejected(path) => Some(path.as_path()),
            _ => None,
        }
    }
}

pub struct Browser {
    current_dir: PathBuf,
    entries: Vec<Entry>,
    selected: usize,
    offset: usize,
    height: usize,
    allowed: Vec<String>,
    show_hidden: bool,
}

impl Browser {
    /// Open a browser rooted at `dir`.
    ///
    /// Fails when the directory cannot be listed; later navigation failures
    /// are logged and leave the listing as it was.
    pub fn new(dir: &Path, allowed: Vec<String>, show_hidden: bool) -> Result<Self> {
        let entries = read_entries(dir, show_hidden)?;
        Ok(Self {
            current_dir: dir.to_path_buf(),
            entries,
            selected: 0,
            offset: 0,
            height: 1,
            allowed,
            show_hidden,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed
    }

    pub fn is_allowed(&self, path: &Path) -> bool {
        has_allowed_extension(path, &self.allowed)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Set the number of listing rows shown at once.
    pub fn set_height(&mut self, rows: usize) {
        self.height = rows.max(1);
        self.keep_cursor_visible();
    }

    /// The slice of entries currently inside the listing window, paired with
    /// the index of the first one.
    pub fn visible_entries(&self) -> (usize, &[Entry]) {
        let start = self.offset.min(self.entries.len());
        let end = (start + self.height).min(self.entries.len());
        (start, &self.entries[start..end])
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> BrowserEvent {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::PageDown | KeyCode::Char('J') => self.move_by(self.height as isize),
            KeyCode::PageUp | KeyCode::Char('K') => self.move_by(-(self.height as isize)),
            KeyCode::Home | KeyCode::Char('g') => self.select_index(0),
            KeyCode::End | KeyCode::Char('G') => {
                self.select_index(self.entries.len().saturating_sub(1));
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => return self.open_selected(),
            KeyCode::Esc | KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h' | '-') => {
                self.go_parent();
            }
            _ => {}
        }
        BrowserEvent::None
    }

    fn move_by(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        let target = self.selected.saturating_add_signed(delta).min(last);
        self.select_index(target);
    }

    fn select_index(&mut self, index: usize) {
        self.selected = index.min(self.entries.len().saturating_sub(1));
        self.keep_cursor_visible();
    }

    fn keep_cursor_visible(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.height {
            self.offset = self.selected + 1 - self.height;
        }
        let max_offset = self.entries.len().saturating_sub(self.height);
        self.offset = self.offset.min(max_offset);
    }

    fn open_selected(&mut self) -> BrowserEvent {
        let Some(entry) = self.entries.get(self.selected).cloned() else {
            return BrowserEvent::None;
        };

        if entry.is_dir {
            self.change_dir(entry.path, None);
            return BrowserEvent::None;
        }

        if self.is_allowed(&entry.path) {
            BrowserEvent::Accepted(entry.path)
        } else {
            BrowserEvent::Rejected(entry.path)
        }
    }

    fn go_parent(&mut self) {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return;
        };
        let left = self
            .current_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self.change_dir(parent, left);
    }

    fn change_dir(&mut self, dir: PathBuf, focus: Option<String>) {
        match read_entries(&dir, self.show_hidden) {
            Ok(entries) => {
                tracing::debug!(dir = %dir.display(), entries = entries.len(), "changed directory");
                let selected = focus
                    .and_then(|name| entries.iter().position(|e| e.name == name))
                    .unwrap_or(0);
                self.current_dir = dir;
                self.entries = entries;
                self.offset = 0;
                self.select_index(selected);
            }
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "cannot open directory");
            }
        }
    }
}
