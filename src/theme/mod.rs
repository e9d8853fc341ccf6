// Theme module - light and dark ratatui palettes
//
// The user preference (system/light/dark) is persisted with the other
// settings; this module only maps the resolved choice to concrete colors.

use ratatui::style::Color;

/// Semantic colors used across the TUI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub arabic: Color,
    pub translation: Color,
    pub reference: Color,
    pub progress_filled: Color,
    pub progress_empty: Color,
    pub favorite: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

const DARK: Palette = Palette {
    background: Color::Rgb(18, 22, 26),
    foreground: Color::Rgb(220, 223, 228),
    muted: Color::Rgb(120, 128, 140),
    border: Color::Rgb(60, 68, 80),
    accent: Color::Rgb(92, 184, 148),
    arabic: Color::Rgb(240, 230, 200),
    translation: Color::Rgb(200, 205, 215),
    reference: Color::Rgb(140, 148, 160),
    progress_filled: Color::Rgb(92, 184, 148),
    progress_empty: Color::Rgb(50, 56, 66),
    favorite: Color::Rgb(235, 180, 90),
    success: Color::Rgb(110, 200, 130),
    warning: Color::Rgb(235, 180, 90),
    error: Color::Rgb(230, 100, 100),
};

const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 247, 243),
    foreground: Color::Rgb(40, 44, 52),
    muted: Color::Rgb(130, 135, 145),
    border: Color::Rgb(200, 198, 190),
    accent: Color::Rgb(20, 120, 90),
    arabic: Color::Rgb(60, 45, 20),
    translation: Color::Rgb(60, 64, 72),
    reference: Color::Rgb(120, 124, 132),
    progress_filled: Color::Rgb(20, 120, 90),
    progress_empty: Color::Rgb(215, 213, 205),
    favorite: Color::Rgb(180, 120, 20),
    success: Color::Rgb(30, 130, 60),
    warning: Color::Rgb(180, 120, 20),
    error: Color::Rgb(180, 50, 50),
};

/// The palette for the resolved dark/light choice.
pub fn palette(dark: bool) -> Palette {
    if dark {
        DARK
    } else {
        LIGHT
    }
}
