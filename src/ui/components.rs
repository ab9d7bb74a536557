//! Reusable UI component helpers
//!
//! Cards, section boxes and buttons shared by the settings panels.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding},
};

use super::{accent, header, inactive, theme};
use crate::tabs::{ButtonSpec, ButtonTone, ButtonVariant};

/// Focus marker drawn in front of the focused button
pub const FOCUS_MARKER: &str = "▸ ";

const GAP: &str = "  ";

pub fn tone_color(tone: ButtonTone) -> Color {
    match tone {
        ButtonTone::Creation => theme().creation,
        ButtonTone::Neutral => theme().neutral,
        ButtonTone::Destructive => theme().destructive,
    }
}

/// Outer card that frames a whole panel
pub fn card(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent()))
        .padding(Padding::horizontal(1))
}

/// Titled box for one group of buttons inside a card
pub fn section_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(header()).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(inactive()))
}

/// Spans for a single button, marker included
pub fn button_spans(spec: &ButtonSpec, focused: bool) -> Vec<Span<'static>> {
    let color = tone_color(spec.tone);

    let marker = if focused {
        Span::styled(FOCUS_MARKER, Style::default().fg(accent()).add_modifier(Modifier::BOLD))
    } else {
        Span::raw(GAP)
    };

    let body = match spec.variant {
        ButtonVariant::Filled => Span::styled(
            format!(" {} ", spec.label),
            Style::default()
                .bg(color)
                .fg(theme().on_filled)
                .add_modifier(Modifier::BOLD),
        ),
        ButtonVariant::Outlined => Span::styled(
            format!("[{}]", spec.label),
            Style::default().fg(color),
        ),
    };

    vec![marker, body]
}

/// Columns a button occupies, marker included
pub fn button_width(spec: &ButtonSpec) -> u16 {
    (FOCUS_MARKER.chars().count() + spec.label.chars().count() + 2) as u16
}

/// One line holding a row of buttons; `focused` indexes into `buttons`
pub fn button_row(buttons: &[ButtonSpec], focused: Option<usize>) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, spec) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(GAP));
        }
        spans.extend(button_spans(spec, focused == Some(i)));
    }
    Line::from(spans)
}
