use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons
    NerdFont, // Nerd Fonts glyphs
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub accent_color: Color,
    pub chrome_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            accent_color: Color::Cyan, // Action and menu icons
            chrome_color: Color::Gray, // Header affordances
        }
    }
}

/// Icon renderer that resolves symbolic icon identifiers to glyphs in
/// either emoji or Nerd Font mode. Identifiers are opaque string keys;
/// unknown ones fall back to a neutral dot.
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Resolve an icon identifier to its raw glyph string
    pub fn glyph_str(&self, id: &str) -> &'static str {
        let (emoji, nerd) = match id {
            "add" => ("➕", "\u{F067}"),
            "refresh" => ("🔄", "\u{F021}"),
            "list" => ("📋", "\u{F03A}"),
            "ellipsis-horizontal" => ("⠿", "\u{F141}"),
            "menu" => ("☰", "\u{F0C9}"),
            "image" => ("🖼", "\u{F03E}"),
            "add-circle" => ("⊕", "\u{F055}"),
            "arrow-back" => ("←", "\u{F060}"),
            "help-circle-outline" => ("❓", "\u{F059}"),
            _ => ("·", "·"),
        };

        match self.mode {
            IconMode::Emoji => emoji,
            IconMode::NerdFont => nerd,
        }
    }

    /// Accent-colored icon span for action buttons and menu rows
    pub fn glyph(&self, id: &str) -> Span<'static> {
        Span::styled(
            self.glyph_str(id),
            Style::default().fg(self.theme.accent_color),
        )
    }

    /// Muted icon span for header chrome
    pub fn chrome_glyph(&self, id: &str) -> Span<'static> {
        Span::styled(
            self.glyph_str(id),
            Style::default().fg(self.theme.chrome_color),
        )
    }
}
