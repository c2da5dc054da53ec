use crate::browser::Entry;
use crate::ui::app::{App, Document, DocumentBody, Page, FOOTER_ROWS};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    // Body + Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(FOOTER_ROWS)])
        .split(frame.area());

    let layout = app.layout();
    let panel = centered(
        chunks[0],
        layout.panel_width(),
        layout.viewport_height().saturating_add(2),
    );

    match app.page() {
        Page::Browsing => render_browser(frame, app, panel),
        Page::Viewing(document) => render_document(frame, app, document, panel),
    }

    render_footer(frame, app, chunks[1]);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn panel_block<'a>(app: &App, title: String) -> Block<'a> {
    let theme = app.theme();
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.accent))
        .padding(Padding::horizontal(app.layout().padding))
}

fn render_browser(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let browser = app.browser();

    let block = panel_block(app, " mdpeek ".to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt or notice
            Constraint::Length(1), // Current directory
            Constraint::Min(0),    // Listing
        ])
        .split(inner);

    let prompt = match app.notice() {
        Some(notice) => Line::from(Span::styled(
            notice.message.clone(),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "Pick a file:",
            Style::default().fg(theme.fg),
        )),
    };
    frame.render_widget(Paragraph::new(prompt), chunks[0]);

    let dir = Paragraph::new(Line::from(Span::styled(
        browser.current_dir().display().to_string(),
        Style::default().fg(theme.fg_dim),
    )));
    frame.render_widget(dir, chunks[1]);

    let (start, window) = browser.visible_entries();
    let items: Vec<ListItem> = if window.is_empty() {
        vec![ListItem::new(Span::styled(
            "(empty directory)",
            Style::default().fg(theme.fg_dim),
        ))]
    } else {
        window
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_selected = start + i == browser.selected();
                entry_item(theme, entry, is_selected, browser.is_allowed(&entry.path))
            })
            .collect()
    };

    frame.render_widget(List::new(items), chunks[2]);
}

fn entry_item<'a>(
    theme: &Theme,
    entry: &Entry,
    is_selected: bool,
    is_allowed: bool,
) -> ListItem<'a> {
    let cursor = if is_selected { "> " } else { "  " };
    let suffix = if entry.is_dir { "/" } else { "" };
    let content = format!("{cursor}{}{suffix}", entry.name);

    let style = if is_selected {
        Style::default()
            .fg(theme.cursor_fg)
            .bg(theme.cursor_bg)
            .add_modifier(Modifier::BOLD)
    } else if entry.is_dir {
        Style::default().fg(theme.directory)
    } else if is_allowed {
        Style::default().fg(theme.fg)
    } else {
        // Files that would be rejected are shown dimmed
        Style::default().fg(theme.fg_dim)
    };

    ListItem::new(content).style(style)
}

fn render_document(frame: &mut Frame, app: &App, document: &Document, area: Rect) {
    let theme = app.theme();
    let mut block = panel_block(app, format!(" {} ", document.title));

    match &document.body {
        DocumentBody::Loaded(viewport) => {
            let percent = (viewport.scroll_percent() * 100.0).round();
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {percent:>3}% "),
                    Style::default().fg(theme.fg_dim),
                ))
                .right_aligned(),
            );

            let lines: Vec<Line> = viewport
                .visible_lines()
                .iter()
                .map(|line| Line::from(line.as_str()))
                .collect();
            let paragraph = Paragraph::new(lines)
                .style(Style::default().fg(theme.fg))
                .block(block);
            frame.render_widget(paragraph, area);
        }
        DocumentBody::Failed(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .style(Style::default().fg(theme.error))
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.page() {
        Page::Browsing => "[↑↓/jk] Move  [Enter/l] Open  [Esc/h] Parent  [g/G] Top/Bottom  [q] Quit",
        Page::Viewing(_) => "[↑↓/jk] Scroll  [PgUp/PgDn] Page  [Esc] Back  [q] Quit",
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme().fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}
