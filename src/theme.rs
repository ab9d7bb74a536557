//! Theme colors for the settings panels
//! Defaults can be overridden from the `[theme]` table of the config file.

use ratatui::style::Color;

use crate::config::ThemeConfig;

/// Theme colors for the UI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub creation: Color,         // Buttons that create something (green)
    pub neutral: Color,          // Non-destructive actions (purple)
    pub destructive: Color,      // Data-destroying actions (red)
    pub on_filled: Color,        // Label text on filled buttons
    pub accent: Color,           // Active borders, selected tab
    pub text: Color,             // Primary text
    pub text_dim: Color,         // Hints, placeholders
    pub inactive: Color,         // Inactive borders
    pub header: Color,           // Table headers, section titles
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            creation: Color::Rgb(34, 197, 94),     // #22c55e
            neutral: Color::Rgb(139, 92, 246),     // #8b5cf6
            destructive: Color::Rgb(239, 68, 68),  // #ef4444
            on_filled: Color::Rgb(255, 255, 255),
            accent: Color::Rgb(139, 92, 246),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            inactive: Color::Rgb(88, 91, 112),
            header: Color::Rgb(180, 190, 254),
        }
    }
}

impl Theme {
    /// Build a theme from config overrides; unparsable colors keep the default
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::default();

        let overrides = [
            (&config.creation, &mut theme.creation, "creation"),
            (&config.neutral, &mut theme.neutral, "neutral"),
            (&config.destructive, &mut theme.destructive, "destructive"),
            (&config.accent, &mut theme.accent, "accent"),
            (&config.text, &mut theme.text, "text"),
            (&config.text_dim, &mut theme.text_dim, "text_dim"),
        ];

        for (value, slot, key) in overrides {
            let Some(value) = value else { continue };
            match Self::parse_hex_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!("Ignoring invalid theme color {} = {:?}", key, value),
            }
        }

        theme
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    pub fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');
        if !s.is_ascii() {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}
