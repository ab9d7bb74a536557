//! Database settings panel: backup, maintenance and data management actions

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{ButtonSpec, ButtonTone, ButtonVariant, SectionSpec, SettingsTab};
use crate::admin::AdminAction;
use crate::ui::components::{button_row, card, section_block};
use crate::ui::header;

pub struct DatabaseSettingsTab;

impl DatabaseSettingsTab {
    pub const SECTIONS: [SectionSpec; 3] = [
        SectionSpec {
            title: "Backup & Restore",
            buttons: &[
                ButtonSpec {
                    label: "Create Backup",
                    action: AdminAction::CreateBackup,
                    variant: ButtonVariant::Filled,
                    tone: ButtonTone::Creation,
                },
                ButtonSpec {
                    label: "Restore Backup",
                    action: AdminAction::RestoreBackup,
                    variant: ButtonVariant::Outlined,
                    tone: ButtonTone::Neutral,
                },
            ],
        },
        SectionSpec {
            title: "Database Maintenance",
            buttons: &[
                ButtonSpec {
                    label: "Optimize Database",
                    action: AdminAction::OptimizeDatabase,
                    variant: ButtonVariant::Filled,
                    tone: ButtonTone::Neutral,
                },
                ButtonSpec {
                    label: "Rebuild Indexes",
                    action: AdminAction::RebuildIndexes,
                    variant: ButtonVariant::Outlined,
                    tone: ButtonTone::Neutral,
                },
            ],
        },
        SectionSpec {
            title: "Data Management",
            buttons: &[
                ButtonSpec {
                    label: "Generate Seed Script",
                    action: AdminAction::GenerateSeedScript,
                    variant: ButtonVariant::Outlined,
                    tone: ButtonTone::Neutral,
                },
                ButtonSpec {
                    label: "Clear All Data",
                    action: AdminAction::ClearAllData,
                    variant: ButtonVariant::Filled,
                    tone: ButtonTone::Destructive,
                },
            ],
        },
    ];

    /// Rows needed to draw every section in its own bordered box
    const FULL_HEIGHT: u16 = 9;
}

impl SettingsTab for DatabaseSettingsTab {
    fn title(&self) -> &'static str {
        "Database Settings"
    }

    fn buttons(&self) -> Vec<&'static ButtonSpec> {
        Self::SECTIONS.iter().flat_map(|s| s.buttons.iter()).collect()
    }

    fn render(&self, f: &mut Frame, area: Rect, focused: Option<usize>) {
        let block = card(self.title());
        let inner = block.inner(area);
        f.render_widget(block, area);

        // Short terminal: one borderless line per section
        let compact = inner.height < Self::FULL_HEIGHT;
        let row_height = if compact { 1 } else { 3 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(row_height),  // Backup & Restore
                Constraint::Length(row_height),  // Database Maintenance
                Constraint::Length(row_height),  // Data Management
                Constraint::Min(0),
            ])
            .split(inner);

        // Focus is a flat index across all sections
        let mut offset = 0;
        for (section, chunk) in Self::SECTIONS.iter().zip(chunks.iter()) {
            let local = focused
                .and_then(|i| i.checked_sub(offset))
                .filter(|i| *i < section.buttons.len());

            let row = button_row(section.buttons, local);
            let content = if compact {
                let mut spans = vec![Span::styled(
                    format!("{}:", section.title),
                    Style::default().fg(header()).add_modifier(Modifier::BOLD),
                )];
                spans.extend(row.spans);
                Paragraph::new(Line::from(spans))
            } else {
                Paragraph::new(row).block(section_block(section.title))
            };
            f.render_widget(content, *chunk);

            offset += section.buttons.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{render_to_text, count};

    const LABELS: [&str; 6] = [
        "Create Backup",
        "Restore Backup",
        "Optimize Database",
        "Rebuild Indexes",
        "Generate Seed Script",
        "Clear All Data",
    ];

    #[test]
    fn test_six_buttons_in_three_sections() {
        assert_eq!(DatabaseSettingsTab::SECTIONS.len(), 3);
        let labels: Vec<&str> = DatabaseSettingsTab.buttons().iter().map(|b| b.label).collect();
        assert_eq!(labels, LABELS);
    }

    #[test]
    fn test_tones_by_destructiveness() {
        for button in DatabaseSettingsTab.buttons() {
            let expected = match button.action {
                AdminAction::CreateBackup => ButtonTone::Creation,
                AdminAction::ClearAllData => ButtonTone::Destructive,
                _ => ButtonTone::Neutral,
            };
            assert_eq!(button.tone, expected, "{}", button.label);
        }
    }

    #[test]
    fn test_render_shows_every_label_once() {
        let text = render_to_text(100, 16, |f| {
            let area = f.area();
            DatabaseSettingsTab.render(f, area, None)
        });

        for label in LABELS {
            assert_eq!(count(&text, label), 1, "{}", label);
        }
        for section in DatabaseSettingsTab::SECTIONS {
            assert_eq!(count(&text, section.title), 1, "{}", section.title);
        }
        assert!(text.contains("Database Settings"));
        assert_eq!(count(&text, "▸"), 0);
    }

    #[test]
    fn test_focus_lands_in_the_right_section() {
        let text = render_to_text(100, 16, |f| {
            let area = f.area();
            DatabaseSettingsTab.render(f, area, Some(3))
        });

        assert_eq!(count(&text, "▸"), 1);
        let focused_line = text.lines().find(|l| l.contains('▸')).unwrap();
        assert!(focused_line.contains("▸ [Rebuild Indexes]"));
        assert!(focused_line.contains("Optimize Database"));
    }

    #[test]
    fn test_short_area_keeps_every_button() {
        // 5 inner rows: too short for bordered sections
        let text = render_to_text(100, 7, |f| {
            let area = f.area();
            DatabaseSettingsTab.render(f, area, Some(4))
        });

        for label in LABELS {
            assert_eq!(count(&text, label), 1, "{}", label);
        }
        let focused_line = text.lines().find(|l| l.contains('▸')).unwrap();
        assert!(focused_line.contains("Data Management:"));
        assert!(focused_line.contains("▸ [Generate Seed Script]"));
    }

    #[test]
    fn test_full_height_uses_section_boxes() {
        let text = render_to_text(100, 11, |f| {
            let area = f.area();
            DatabaseSettingsTab.render(f, area, None)
        });

        for section in DatabaseSettingsTab::SECTIONS {
            assert!(text.contains(&format!(" {} ", section.title)), "{}", section.title);
            assert!(!text.contains(&format!("{}:", section.title)));
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        let first = render_to_text(100, 16, |f| {
            let area = f.area();
            DatabaseSettingsTab.render(f, area, Some(5))
        });
        let second = render_to_text(100, 16, |f| {
            let area = f.area();
            DatabaseSettingsTab.render(f, area, Some(5))
        });
        assert_eq!(first, second);
    }
}
