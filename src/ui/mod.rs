pub mod components;

use anyhow::Result;
use std::sync::OnceLock;
use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};

use crate::admin::AdminBackend;
use crate::app::{App, Popup};
use crate::tabs::Tab;
use crate::theme::Theme;

// Set once at startup from the config file; falls back to the default theme
static THEME: OnceLock<Theme> = OnceLock::new();

pub fn init_theme(theme: Theme) {
    if THEME.set(theme).is_err() {
        tracing::warn!("Theme already initialized");
    }
}

pub(crate) fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

// Helper functions to get theme colors
pub(crate) fn accent() -> Color { theme().accent }
pub(crate) fn inactive() -> Color { theme().inactive }
pub(crate) fn text() -> Color { theme().text }
pub(crate) fn text_dim() -> Color { theme().text_dim }
pub(crate) fn header() -> Color { theme().header }

pub fn draw<B: AdminBackend>(f: &mut Frame, app: &App<B>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3),  // Tab bar
            Constraint::Min(6),     // Active panel
            Constraint::Length(1),  // Status line
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    draw_tab_bar(f, app, chunks[0]);

    let panel = app.tab.panel();
    let focused = app.focused_button().map(|_| app.focus);
    panel.render(f, chunks[1], focused);

    draw_status_line(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);

    if app.popup == Popup::Help {
        draw_help_popup(f);
    }
}

fn draw_tab_bar<B>(f: &mut Frame, app: &App<B>, area: Rect) {
    let titles = Tab::ALL.iter().enumerate().map(|(i, tab)| {
        Line::from(vec![
            Span::styled(format!("{} ", i + 1), Style::default().fg(inactive())),
            Span::raw(tab.label()),
        ])
    });

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(text_dim()))
        .highlight_style(Style::default().fg(accent()).add_modifier(Modifier::BOLD))
        .divider(Span::styled("│", Style::default().fg(inactive())))
        .block(
            Block::default()
                .title(Span::styled(" CRM Settings ", Style::default().fg(header()).add_modifier(Modifier::BOLD)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(inactive())),
        );

    f.render_widget(tabs, area);
}

fn draw_status_line<B>(f: &mut Frame, app: &App<B>, area: Rect) {
    let line = match app.status_message {
        Some(ref status) => Line::from(Span::styled(status.as_str(), Style::default().fg(accent()))),
        None => Line::from(Span::styled("Ready", Style::default().fg(text_dim()))),
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_footer<B>(f: &mut Frame, app: &App<B>, area: Rect) {
    let hints: Vec<(&str, &str)> = match app.tab {
        Tab::Database => vec![
            ("←→", "Focus"),
            ("Enter", "Activate"),
            ("Tab", "Next tab"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        Tab::Groups => vec![
            ("Enter", "Create group"),
            ("Tab", "Next tab"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    };

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 60 { 3 } else { hints.len() };

    let mut hint_spans: Vec<Span> = Vec::new();
    for (i, (key, action)) in hints.iter().take(max_hints).enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled(" │ ", Style::default().fg(inactive())));
        }
        hint_spans.push(Span::styled(*key, Style::default().fg(accent())));
        hint_spans.push(Span::styled(format!(" {}", action), Style::default().fg(text_dim())));
    }

    let footer = Paragraph::new(Line::from(hint_spans))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 95 } else { 70 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let section = |title: &'static str| {
        Line::from(Span::styled(title, Style::default().fg(header()).add_modifier(Modifier::BOLD)))
    };
    let binding = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), Style::default().fg(accent())),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        section("═══ Navigation ═══"),
        binding("Tab/S-Tab", "Switch tab (Database ↔ Groups)"),
        binding("1 / 2", "Jump to tab"),
        binding("←/→ h/l", "Move focus between buttons"),
        binding("↑/↓ k/j", "Move focus between buttons"),
        Line::from(""),
        section("═══ Actions ═══"),
        binding("Enter/Space", "Activate focused button"),
        Line::from(Span::styled(
            "  No admin backend is attached; buttons have no effect.",
            Style::default().fg(text_dim()),
        )),
        Line::from(""),
        section("═══ Command Line ═══"),
        binding("--tab", "Start on database or groups"),
        binding("--describe", "Print panel layout as JSON"),
        binding("--snapshot", "Print one rendered frame"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(text_dim())),
            Span::styled("?", Style::default().fg(accent())),
            Span::styled("/", Style::default().fg(text_dim())),
            Span::styled("Esc", Style::default().fg(accent())),
            Span::styled(" to close", Style::default().fg(text_dim())),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" Help ", Style::default().fg(accent())))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render one frame off-screen and return it as plain text
pub fn render_to_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(draw)?;
    Ok(buffer_to_text(terminal.backend().buffer()))
}

/// One line per buffer row, trailing blanks trimmed
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
