use ratatui::style::{Color, Modifier, Style};
use shopfront_types::Theme;

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selection: Color,
    pub price: Color,
    pub rating: Color,
    pub error: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(248, 249, 250),
        surface: Color::Rgb(255, 255, 255),
        text: Color::Rgb(33, 37, 41),
        muted: Color::Rgb(108, 117, 125),
        accent: Color::Rgb(13, 110, 253),
        border: Color::Rgb(206, 212, 218),
        selection: Color::Rgb(222, 235, 255),
        price: Color::Rgb(25, 135, 84),
        rating: Color::Rgb(204, 142, 0),
        error: Color::Rgb(220, 53, 69),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(18, 18, 18),
        surface: Color::Rgb(30, 30, 30),
        text: Color::Rgb(230, 230, 230),
        muted: Color::Rgb(150, 150, 150),
        accent: Color::Rgb(100, 181, 246),
        border: Color::Rgb(70, 70, 70),
        selection: Color::Rgb(45, 62, 80),
        price: Color::Rgb(129, 199, 132),
        rating: Color::Rgb(255, 213, 79),
        error: Color::Rgb(239, 83, 80),
    };

    pub fn from_theme(theme: Theme) -> Self {
        Self::for_dark(theme.is_dark())
    }

    pub fn for_dark(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(Palette::from_theme(Theme::Light), Palette::LIGHT);
        assert_eq!(Palette::from_theme(Theme::Dark), Palette::DARK);
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
    }
}
