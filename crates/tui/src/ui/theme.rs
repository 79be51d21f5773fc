use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub secondary: Color,
    pub accent: Color,
    pub positive: Color,
    pub border: Color,
    pub cursor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            panel: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            secondary: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(90, 180, 100),
            border: Color::Rgb(60, 66, 72),
            cursor: Color::Rgb(36, 44, 52),
        }
    }
}

impl Theme {
    /// Looks a color up by its semantic name, as row renderers ask for
    /// `"green"` or `"secondary"` rather than a concrete value.
    pub fn color(&self, name: &str) -> Option<Color> {
        match name {
            "background" => Some(self.background),
            "card" | "panel" => Some(self.panel),
            "foreground" | "text" => Some(self.text),
            "secondary" | "muted" => Some(self.secondary),
            "primary" | "accent" => Some(self.accent),
            "green" | "positive" => Some(self.positive),
            "border" => Some(self.border),
            _ => None,
        }
    }

    /// Like [`Theme::color`], falling back to the text color.
    pub fn color_or_text(&self, name: &str) -> Color {
        self.color(name).unwrap_or(self.text)
    }
}
