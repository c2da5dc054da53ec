//! Scrollable window over a buffer of text lines.
//!
//! Source lines are word-wrapped to the viewport width, and every count
//! (offset, page size, scroll percent) is taken over the wrapped rows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    source: Vec<String>,
    lines: Vec<String>,
    offset: usize,
    width: usize,
    height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            source: Vec::new(),
            lines: Vec::new(),
            offset: 0,
            width,
            height,
        }
    }

    /// Build a viewport over `text`, split on line endings with tabs expanded.
    pub fn from_text(text: &str, width: usize, height: usize) -> Self {
        let mut viewport = Self::new(width, height);
        viewport.set_content(text.lines().map(expand_tabs).collect());
        viewport
    }

    pub fn set_content(&mut self, lines: Vec<String>) {
        self.source = lines;
        self.offset = 0;
        self.rewrap();
    }

    /// Change the window size. A new width re-wraps the content.
    pub fn resize(&mut self, width: usize, height: usize) {
        let rewrap = width != self.width;
        self.width = width;
        self.height = height;
        if rewrap {
            self.rewrap();
        }
        self.clamp();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
        self.clamp();
    }

    pub fn scroll_by_page(&mut self, direction: ScrollDirection) {
        let page = self.height as isize;
        match direction {
            ScrollDirection::Up => self.scroll_by(-page),
            ScrollDirection::Down => self.scroll_by(page),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows after wrapping.
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    pub fn at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// How far through the buffer the window is, from 0.0 to 1.0.
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_offset();
        if max == 0 {
            1.0
        } else {
            self.offset as f64 / max as f64
        }
    }

    pub fn visible_lines(&self) -> &[String] {
        let start = self.offset.min(self.lines.len());
        let end = (start + self.height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// The visible window joined for display.
    pub fn view(&self) -> String {
        self.visible_lines().join("\n")
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    fn rewrap(&mut self) {
        self.lines = self
            .source
            .iter()
            .flat_map(|line| wrap_line(line, self.width))
            .collect();
        self.clamp();
    }
}

/// Break `line` into rows at most `width` columns wide, preferring spaces.
///
/// Words wider than a row are split between characters. A width of zero
/// leaves the line whole.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 || line.width() <= width {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in line.split_inclusive(' ') {
        let word_width = word.trim_end_matches(' ').width();

        // Spaces at a break are dropped rather than starting the next row
        if word_width == 0 && row.is_empty() && !rows.is_empty() {
            continue;
        }

        if row_width + word_width > width && !row.is_empty() {
            rows.push(row.trim_end().to_string());
            row.clear();
            row_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width + ch_width > width && !row.is_empty() {
                    rows.push(row.trim_end().to_string());
                    row.clear();
                    row_width = 0;
                }
                row.push(ch);
                row_width += ch_width;
            }
            continue;
        }

        row.push_str(word);
        row_width += word.width();
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row.trim_end().to_string());
    }
    rows
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut col = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - col % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            col += pad;
        } else {
            out.push(ch);
            col += 1;
        }
    }
    out
}
