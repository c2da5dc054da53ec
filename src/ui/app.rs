//! # Page Controller
//!
//! [`App`] owns the whole UI state and is driven by a single entry point,
//! [`App::update`], which applies one [`AppEvent`] and returns the
//! [`Effect`]s the runtime has to carry out.
//!
//! ```text
//!            accepted selection
//!   Browsing ------------------> Viewing(Document)
//!      ^  |                          |
//!      |  | rejected selection       | Esc
//!      |  v (notice + timer)         |
//!   Browsing <-----------------------+
//! ```

use crate::browser::{Browser, BrowserEvent};
use crate::ui::config::Config;
use crate::ui::events::{AppEvent, Effect};
use crate::ui::notifier::{Notice, Notifier, DEFAULT_NOTICE_DELAY};
use crate::ui::theme::Theme;
use crate::ui::viewport::{ScrollDirection, Viewport};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Shown when the browser rejects a selection.
pub const REJECTED_SELECTION_MESSAGE: &str = "Only markdown files supported";

/// Lines moved per mouse wheel notch.
const MOUSE_WHEEL_DELTA: isize = 3;

/// Rows of the browsing panel used by the prompt and the current directory.
pub const BROWSER_HEADER_ROWS: u16 = 2;

/// Rows taken by the key hint line under the panel.
pub const FOOTER_ROWS: u16 = 1;

/// Cells the panel border takes on each axis.
const BORDER_CELLS: u16 = 2;

/// Geometry derived from the terminal size. Recomputed on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub padding: u16,
}

impl Layout {
    pub fn new(width: u16, height: u16, padding: u16) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width of the centered panel: 40% of the terminal, rounded.
    pub fn panel_width(&self) -> u16 {
        (f64::from(self.width) * 0.4).round() as u16
    }

    /// Columns left for text inside the panel border and horizontal padding.
    pub fn content_width(&self) -> u16 {
        self.panel_width()
            .saturating_sub(BORDER_CELLS)
            .saturating_sub(self.padding.saturating_mul(2))
    }

    /// Lines of content visible at once: `height - 2 * padding`, capped by
    /// the rows left inside the panel border above the footer. Never less
    /// than one.
    pub fn viewport_height(&self) -> u16 {
        let padded = self.height.saturating_sub(self.padding.saturating_mul(2));
        let drawable = self.height.saturating_sub(FOOTER_ROWS + BORDER_CELLS);
        padded.min(drawable).max(1)
    }

    /// Rows available to the directory listing.
    pub fn listing_height(&self) -> u16 {
        self.viewport_height()
            .saturating_sub(BROWSER_HEADER_ROWS)
            .max(1)
    }
}

/// Contents of the viewing page.
#[derive(Debug, Clone)]
pub enum DocumentBody {
    Loaded(Viewport),
    /// The file could not be read; the text replaces the content.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub title: String,
    pub body: DocumentBody,
}

impl Document {
    /// Read `path` into a viewport of the given size.
    ///
    /// Read failures are kept as [`DocumentBody::Failed`] rather than
    /// returned, so the caller still switches pages.
    pub fn load(path: &Path, width: usize, height: usize) -> Self {
        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let body = match read_text(path) {
            Ok(text) => DocumentBody::Loaded(Viewport::from_text(&text, width, height)),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "failed to load file");
                DocumentBody::Failed(format!("An error occurred:\n    {err:#}"))
            }
        };

        Self {
            path: path.to_path_buf(),
            title,
            body,
        }
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        match &self.body {
            DocumentBody::Loaded(viewport) => Some(viewport),
            DocumentBody::Failed(_) => None,
        }
    }

    pub fn viewport_mut(&mut self) -> Option<&mut Viewport> {
        match &mut self.body {
            DocumentBody::Loaded(viewport) => Some(viewport),
            DocumentBody::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.body {
            DocumentBody::Failed(message) => Some(message),
            DocumentBody::Loaded(_) => None,
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Debug, Clone)]
pub enum Page {
    Browsing,
    Viewing(Document),
}

impl Page {
    pub fn is_browsing(&self) -> bool {
        matches!(self, Page::Browsing)
    }

    pub fn is_viewing(&self) -> bool {
        matches!(self, Page::Viewing(_))
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            Page::Viewing(document) => Some(document),
            Page::Browsing => None,
        }
    }
}

/// Knobs that shape an [`App`], usually taken from [`Config`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub padding: u16,
    pub notice_delay: Duration,
    pub theme: &'static Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            padding: 5,
            notice_delay: DEFAULT_NOTICE_DELAY,
            theme: Theme::default_theme(),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            padding: config.padding,
            notice_delay: config.notice_delay(),
            theme: Theme::by_name_or_default(&config.theme),
        }
    }
}

pub struct App {
    pub should_quit: bool,
    page: Page,
    selection: Option<PathBuf>,
    notifier: Notifier,
    browser: Browser,
    layout: Layout,
    theme: &'static Theme,
}

impl App {
    pub fn new(browser: Browser, settings: &Settings) -> Self {
        Self {
            should_quit: false,
            page: Page::Browsing,
            selection: None,
            notifier: Notifier::new(settings.notice_delay),
            browser,
            layout: Layout::new(0, 0, settings.padding),
            theme: settings.theme,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn selection(&self) -> Option<&Path> {
        self.selection.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notifier.current()
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Apply one event. Nothing is processed once the app has quit.
    pub fn update(&mut self, event: AppEvent) -> Vec<Effect> {
        if self.should_quit {
            return Vec::new();
        }

        match event {
            AppEvent::Key(key) => self.handle_key(&key),
            AppEvent::Resize(width, height) => {
                self.handle_resize(width, height);
                Vec::new()
            }
            AppEvent::Mouse(mouse) => {
                self.handle_mouse(&mouse);
                Vec::new()
            }
            AppEvent::NoticeExpired(id) => {
                if self.notifier.expire(id) {
                    tracing::debug!("notice cleared");
                }
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Vec<Effect> {
        if is_quit_key(key) {
            tracing::debug!("quit requested");
            self.should_quit = true;
            return vec![Effect::Quit];
        }

        if self.page.is_browsing() {
            let event = self.browser.handle_key(key);
            return self.handle_browser_event(event);
        }

        if key.code == KeyCode::Esc {
            self.back_to_browsing();
            return Vec::new();
        }

        if let Some(viewport) = self.viewport_mut() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => viewport.scroll_by(-1),
                KeyCode::Down | KeyCode::Char('j') => viewport.scroll_by(1),
                KeyCode::PageUp => viewport.scroll_by_page(ScrollDirection::Up),
                KeyCode::PageDown => viewport.scroll_by_page(ScrollDirection::Down),
                _ => {}
            }
        }
        Vec::new()
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let Some(viewport) = self.viewport_mut() else {
            return;
        };
        match mouse.kind {
            MouseEventKind::ScrollUp => viewport.scroll_by(-MOUSE_WHEEL_DELTA),
            MouseEventKind::ScrollDown => viewport.scroll_by(MOUSE_WHEEL_DELTA),
            _ => {}
        }
    }

    fn handle_browser_event(&mut self, event: BrowserEvent) -> Vec<Effect> {
        match event {
            BrowserEvent::None => Vec::new(),
            BrowserEvent::Accepted(path) => {
                tracing::debug!(path = %path.display(), "opening file");
                self.notifier.clear();
                let document = Document::load(
                    &path,
                    usize::from(self.layout.content_width()),
                    usize::from(self.layout.viewport_height()),
                );
                self.selection = Some(path);
                self.page = Page::Viewing(document);
                Vec::new()
            }
            BrowserEvent::Rejected(path) => {
                tracing::debug!(path = %path.display(), "selection rejected");
                self.selection = None;
                let id = self.notifier.raise(REJECTED_SELECTION_MESSAGE);
                vec![Effect::ScheduleNoticeClear {
                    id,
                    after: self.notifier.delay(),
                }]
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.layout.width = width;
        self.layout.height = height;
        self.browser
            .set_height(usize::from(self.layout.listing_height()));

        let content_width = usize::from(self.layout.content_width());
        let viewport_height = usize::from(self.layout.viewport_height());
        if let Some(viewport) = self.viewport_mut() {
            viewport.resize(content_width, viewport_height);
        }
    }

    fn back_to_browsing(&mut self) {
        tracing::debug!("back to browsing");
        self.selection = None;
        self.page = Page::Browsing;
    }

    fn viewport_mut(&mut self) -> Option<&mut Viewport> {
        match &mut self.page {
            Page::Viewing(document) => document.viewport_mut(),
            Page::Browsing => None,
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
