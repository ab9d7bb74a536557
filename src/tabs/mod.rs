//! Settings panels mounted by the host container
//!
//! Each panel is a unit struct over static content. Rendering depends only on
//! the target area, the host-supplied focus highlight, and the theme.

pub mod database;
pub mod groups;

use ratatui::{layout::Rect, Frame};
use serde::{Deserialize, Serialize};

use crate::admin::AdminAction;

pub use database::DatabaseSettingsTab;
pub use groups::GroupManagementTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Database,
    Groups,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Database, Tab::Groups];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Database => "Database",
            Tab::Groups => "Groups",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Database => 0,
            Tab::Groups => 1,
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Database => Tab::Groups,
            Tab::Groups => Tab::Database,
        }
    }

    pub fn previous(&self) -> Tab {
        // Two tabs, so backwards is the same cycle
        self.next()
    }

    pub fn panel(&self) -> &'static dyn SettingsTab {
        match self {
            Tab::Database => &DatabaseSettingsTab,
            Tab::Groups => &GroupManagementTab,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Filled,
    Outlined,
}

/// Color family of a button, by how destructive its action is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonTone {
    Creation,
    Neutral,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub action: AdminAction,
    pub variant: ButtonVariant,
    pub tone: ButtonTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSpec {
    pub title: &'static str,
    pub buttons: &'static [ButtonSpec],
}

/// A panel the host container can mount
pub trait SettingsTab {
    /// Card title
    fn title(&self) -> &'static str;

    /// Buttons in focus order
    fn buttons(&self) -> Vec<&'static ButtonSpec>;

    fn render(&self, f: &mut Frame, area: Rect, focused: Option<usize>);
}

/// Static layout of both panels, for `--describe`
pub fn describe() -> serde_json::Value {
    serde_json::json!({
        "database": {
            "title": DatabaseSettingsTab.title(),
            "sections": DatabaseSettingsTab::SECTIONS,
        },
        "groups": {
            "title": GroupManagementTab.title(),
            "header": GroupManagementTab::HEADER,
            "actions": [GroupManagementTab::CREATE_GROUP],
            "columns": GroupManagementTab::COLUMNS,
            "rows": GroupManagementTab::placeholder_rows(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Database.next(), Tab::Groups);
        assert_eq!(Tab::Groups.next(), Tab::Database);
        assert_eq!(Tab::Groups.previous(), Tab::Database);
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_describe_layout() {
        let layout = describe();

        let sections = layout["database"]["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 3);
        let buttons: usize = sections
            .iter()
            .map(|s| s["buttons"].as_array().unwrap().len())
            .sum();
        assert_eq!(buttons, 6);
        assert_eq!(sections[2]["buttons"][1]["action"], "clear-all-data");
        assert_eq!(sections[2]["buttons"][1]["tone"], "destructive");

        assert_eq!(layout["groups"]["columns"].as_array().unwrap().len(), 3);
        assert_eq!(layout["groups"]["rows"][0], "No groups created yet");
        assert_eq!(layout["groups"]["actions"][0]["label"], "Create Group");
    }

    #[test]
    fn test_describe_is_stable() {
        assert_eq!(
            serde_json::to_string(&describe()).unwrap(),
            serde_json::to_string(&describe()).unwrap()
        );
    }
}
