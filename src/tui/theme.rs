//! Color themes for the TUI
//!
//! Both themes draw from the same nine-step grayscale palette
//! (<https://coolors.co/palette/f8f9fa-e9ecef-dee2e6-ced4da-adb5bd-6c757d-495057-343a40-212529>),
//! arranged dark-on-light or light-on-dark. The dark theme is the default.

use ratatui::style::{Color, Modifier, Style};

use crate::config::settings::ThemeKind;

/// Grayscale palette constants
pub mod palette {
    use ratatui::style::Color;

    pub const WHITE_SMOKE: Color = Color::Rgb(248, 249, 250); // #F8F9FA
    pub const LIGHT_GRAY: Color = Color::Rgb(233, 236, 239); // #E9ECEF
    pub const PLATINUM: Color = Color::Rgb(222, 226, 230); // #DEE2E6
    pub const FRENCH_GRAY: Color = Color::Rgb(206, 212, 218); // #CED4DA
    pub const CADET_GRAY: Color = Color::Rgb(173, 181, 189); // #ADB5BD
    pub const SLATE_GRAY: Color = Color::Rgb(108, 117, 125); // #6C757D
    pub const DARK_SLATE_GRAY: Color = Color::Rgb(73, 80, 87); // #495057
    pub const GUNMETAL: Color = Color::Rgb(52, 58, 64); // #343A40
    pub const RICH_BLACK: Color = Color::Rgb(33, 37, 41); // #212529
}

/// Resolved colors for every themed surface of the interface
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Which palette arrangement this is
    pub kind: ThemeKind,

    /// Whole-screen background
    pub background: Color,

    /// Header banner
    pub header_bg: Color,
    pub header_fg: Color,

    /// Form labels and section titles
    pub label: Color,

    /// Text inputs
    pub input_bg: Color,
    pub input_fg: Color,

    /// Expense table
    pub table_bg: Color,
    pub table_fg: Color,

    /// Selected table row
    pub selection_bg: Color,
    pub selection_fg: Color,

    /// Unfocused and focused borders
    pub border: Color,
    pub border_focused: Color,

    /// Key hints and other secondary text
    pub hint: Color,
}

impl Theme {
    /// Light-on-dark arrangement
    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: palette::RICH_BLACK,
            header_bg: palette::GUNMETAL,
            header_fg: palette::WHITE_SMOKE,
            label: palette::LIGHT_GRAY,
            input_bg: palette::DARK_SLATE_GRAY,
            input_fg: palette::WHITE_SMOKE,
            table_bg: palette::GUNMETAL,
            table_fg: palette::WHITE_SMOKE,
            selection_bg: palette::SLATE_GRAY,
            selection_fg: palette::WHITE_SMOKE,
            border: palette::SLATE_GRAY,
            border_focused: palette::CADET_GRAY,
            hint: palette::CADET_GRAY,
        }
    }

    /// Dark-on-light arrangement
    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: palette::WHITE_SMOKE,
            header_bg: palette::CADET_GRAY,
            header_fg: palette::WHITE_SMOKE,
            label: palette::DARK_SLATE_GRAY,
            input_bg: palette::LIGHT_GRAY,
            input_fg: palette::GUNMETAL,
            table_bg: palette::LIGHT_GRAY,
            table_fg: palette::GUNMETAL,
            selection_bg: palette::CADET_GRAY,
            selection_fg: palette::RICH_BLACK,
            border: palette::FRENCH_GRAY,
            border_focused: palette::DARK_SLATE_GRAY,
            hint: palette::SLATE_GRAY,
        }
    }

    /// Theme for a persisted preference
    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        Self::for_kind(self.kind.toggled())
    }

    /// Style for the header banner
    pub fn header_style(&self) -> Style {
        Style::default()
            .bg(self.header_bg)
            .fg(self.header_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a panel, depending on focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind_round_trips() {
        assert_eq!(Theme::for_kind(ThemeKind::Dark).kind, ThemeKind::Dark);
        assert_eq!(Theme::for_kind(ThemeKind::Light).kind, ThemeKind::Light);
    }

    #[test]
    fn test_toggled_flips_kind() {
        let theme = Theme::dark();
        assert_eq!(theme.toggled().kind, ThemeKind::Light);
        assert_eq!(theme.toggled().toggled().kind, ThemeKind::Dark);
    }
}
