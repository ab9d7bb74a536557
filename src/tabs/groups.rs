//! Group management panel
//!
//! No group data source is connected, so the table body always holds the
//! single placeholder row.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use super::{ButtonSpec, ButtonTone, ButtonVariant, SettingsTab};
use crate::admin::AdminAction;
use crate::ui::components::{button_row, button_width, card};
use crate::ui::{header, inactive, text, text_dim};

pub struct GroupManagementTab;

impl GroupManagementTab {
    pub const HEADER: &'static str = "Groups";

    pub const CREATE_GROUP: ButtonSpec = ButtonSpec {
        label: "Create Group",
        action: AdminAction::CreateGroup,
        variant: ButtonVariant::Filled,
        tone: ButtonTone::Creation,
    };

    pub const COLUMNS: [&'static str; 3] = ["Group Name", "Members", "Actions"];

    pub const PLACEHOLDER: &'static str = "No groups created yet";

    /// Body rows of the group table
    pub fn placeholder_rows() -> Vec<&'static str> {
        vec![Self::PLACEHOLDER]
    }

    /// Rows needed for the spaced, bordered table layout
    const FULL_HEIGHT: u16 = 7;

    fn widths() -> [Constraint; 3] {
        [
            Constraint::Percentage(45),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
        ]
    }
}

impl SettingsTab for GroupManagementTab {
    fn title(&self) -> &'static str {
        "Group Management"
    }

    fn buttons(&self) -> Vec<&'static ButtonSpec> {
        const BUTTONS: &[ButtonSpec] = &[GroupManagementTab::CREATE_GROUP];
        BUTTONS.iter().collect()
    }

    fn render(&self, f: &mut Frame, area: Rect, focused: Option<usize>) {
        let block = card(self.title());
        let inner = block.inner(area);
        f.render_widget(block, area);

        // Short terminal: drop the spacer, table border and header margin
        let compact = inner.height < Self::FULL_HEIGHT;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                           // Header with Create Group
                Constraint::Length(if compact { 0 } else { 1 }),
                Constraint::Min(2),                              // Table
            ])
            .split(inner);

        // Header: title on the left, action on the right
        let header_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(button_width(&Self::CREATE_GROUP)),
            ])
            .split(chunks[0]);

        let title = Paragraph::new(Line::from(Span::styled(
            Self::HEADER,
            Style::default().fg(text()).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, header_chunks[0]);

        let create = Paragraph::new(button_row(&[Self::CREATE_GROUP], focused))
            .alignment(Alignment::Right);
        f.render_widget(create, header_chunks[1]);

        // Table with header row only; the placeholder is drawn across all columns
        let header_margin = if compact { 0 } else { 1 };
        let header_row = Row::new(
            Self::COLUMNS
                .iter()
                .map(|c| Span::styled(*c, Style::default().fg(header()).add_modifier(Modifier::BOLD))),
        )
        .bottom_margin(header_margin);

        let mut table = Table::new(Vec::<Row>::new(), Self::widths()).header(header_row);
        let table_inner = if compact {
            chunks[2]
        } else {
            let table_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(inactive()));
            let table_inner = table_block.inner(chunks[2]);
            table = table.block(table_block);
            table_inner
        };
        f.render_widget(table, chunks[2]);

        // First body line sits below the header row and its margin
        let body_offset = 1 + header_margin;
        let body = Rect {
            y: table_inner.y.saturating_add(body_offset),
            height: table_inner.height.saturating_sub(body_offset),
            ..table_inner
        };
        let rows: Vec<Line> = Self::placeholder_rows()
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(text_dim()))))
            .collect();
        f.render_widget(Paragraph::new(rows).alignment(Alignment::Center), body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{count, render_to_text};

    #[test]
    fn test_single_create_group_button() {
        let buttons = GroupManagementTab.buttons();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].action, AdminAction::CreateGroup);
        assert_eq!(buttons[0].tone, ButtonTone::Creation);
    }

    #[test]
    fn test_render_headers_and_placeholder() {
        let text = render_to_text(80, 14, |f| {
            let area = f.area();
            GroupManagementTab.render(f, area, None)
        });

        for column in GroupManagementTab::COLUMNS {
            assert_eq!(count(&text, column), 1, "{}", column);
        }
        assert_eq!(count(&text, GroupManagementTab::PLACEHOLDER), 1);
        assert_eq!(count(&text, "Create Group"), 1);
        assert!(text.contains("Group Management"));
    }

    #[test]
    fn test_placeholder_is_centered_below_headers() {
        let text = render_to_text(80, 14, |f| {
            let area = f.area();
            GroupManagementTab.render(f, area, None)
        });
        let lines: Vec<&str> = text.lines().collect();

        let header_line = lines.iter().position(|l| l.contains("Group Name")).unwrap();
        let placeholder_line = lines
            .iter()
            .position(|l| l.contains(GroupManagementTab::PLACEHOLDER))
            .unwrap();
        assert_eq!(placeholder_line, header_line + 2);

        let line: Vec<char> = lines[placeholder_line].chars().collect();
        let start = lines[placeholder_line].find(GroupManagementTab::PLACEHOLDER).unwrap();
        let start = lines[placeholder_line][..start].chars().count();
        let end = start + GroupManagementTab::PLACEHOLDER.chars().count();
        let left = start;
        let right = line.len() - end;
        assert!(left.abs_diff(right) <= 1, "left {} right {}", left, right);
    }

    #[test]
    fn test_short_area_keeps_placeholder() {
        // 3 inner rows: header, column names, placeholder
        let text = render_to_text(100, 5, |f| {
            let area = f.area();
            GroupManagementTab.render(f, area, None)
        });
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(count(&text, "Create Group"), 1);
        let header_line = lines.iter().position(|l| l.contains("Group Name")).unwrap();
        assert!(lines[header_line].contains("Members"));
        assert!(lines[header_line + 1].contains(GroupManagementTab::PLACEHOLDER));
    }

    #[test]
    fn test_focused_create_group() {
        let text = render_to_text(80, 14, |f| {
            let area = f.area();
            GroupManagementTab.render(f, area, Some(0))
        });
        assert_eq!(count(&text, "▸  Create Group "), 1);
    }

    #[test]
    fn test_render_is_repeatable() {
        let first = render_to_text(80, 14, |f| {
            let area = f.area();
            GroupManagementTab.render(f, area, None)
        });
        let second = render_to_text(80, 14, |f| {
            let area = f.area();
            GroupManagementTab.render(f, area, None)
        });
        assert_eq!(first, second);
    }
}
