//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::Indicator;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for the logo, links and active elements.
    pub highlight: Color,
    /// Color of a healthy status circle.
    pub healthy: Color,
    /// Color of an unhealthy status circle.
    pub unhealthy: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for row headers ("Watcher URL", ...).
    pub header: Style,
    /// Style for the selected row.
    pub selected: Style,
    /// Style for link text.
    pub link: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            healthy: Color::Green,
            unhealthy: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            link: Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            healthy: Color::Green,
            unhealthy: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::DarkGray),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            link: Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Style of a status circle.
    pub fn indicator_style(&self, indicator: Indicator) -> Style {
        match indicator {
            Indicator::Healthy => Style::default().fg(self.healthy),
            Indicator::Unhealthy => Style::default().fg(self.unhealthy).add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_style() {
        let theme = Theme::dark();
        assert_eq!(theme.indicator_style(Indicator::Healthy).fg, Some(Color::Green));

        let unhealthy = theme.indicator_style(Indicator::Unhealthy);
        assert_eq!(unhealthy.fg, Some(Color::Red));
        assert!(unhealthy.add_modifier.contains(Modifier::BOLD));
    }
}
