use ratatui::style::{Modifier, Style};

use crate::config::ThemeConfig;

/// Resolved color palette, built once from config at startup.
///
/// Background stays `Reset` by default so the stage respects the
/// terminal's own background and transparency.
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: ratatui::style::Color,
    pub fg: ratatui::style::Color,
    pub fg_dim: ratatui::style::Color,
    pub stroke: ratatui::style::Color,
    pub stroke_active: ratatui::style::Color,
    pub border: ratatui::style::Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            bg: config.bg,
            fg: config.fg,
            fg_dim: config.fg_dim,
            stroke: config.stroke,
            stroke_active: config.stroke_active,
            border: config.border,
        }
    }

    pub fn style_default(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn style_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    pub fn style_border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    pub fn style_key_hint(&self) -> Style {
        Style::default()
            .fg(self.stroke)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn style_key_desc(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    pub fn style_active(&self) -> Style {
        Style::default()
            .fg(self.stroke_active)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
