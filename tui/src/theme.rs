//! Color theme and glyphs for the Rizal TUI.
//!
//! A warm archival palette (ink, parchment, Philippine gold) by default with
//! an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use rizal_types::ui::UiOptions;

/// Archival palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (ink) ===
    pub const BG_DARK: Color = Color::Rgb(24, 20, 18);
    pub const BG_PANEL: Color = Color::Rgb(34, 29, 26);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(52, 43, 37);
    pub const BG_POPUP: Color = Color::Rgb(44, 37, 32);
    pub const BG_BORDER: Color = Color::Rgb(92, 78, 66);

    // === Foregrounds (parchment) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(236, 226, 204);
    pub const TEXT_SECONDARY: Color = Color::Rgb(204, 190, 160);
    pub const TEXT_MUTED: Color = Color::Rgb(140, 128, 110);

    // === Brand ===
    pub const PRIMARY: Color = Color::Rgb(176, 58, 46); // flag red, darkened
    pub const GOLD: Color = Color::Rgb(222, 178, 74); // sun gold
    pub const BLUE: Color = Color::Rgb(74, 118, 186); // flag blue

    // === Semantic ===
    pub const SUCCESS: Color = Color::Rgb(132, 176, 102);
    pub const WARNING: Color = Color::Rgb(230, 180, 90);
    pub const ERROR: Color = Color::Rgb(226, 90, 80);
    pub const MAP_LAND: Color = Color::Rgb(110, 98, 82);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub blue: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub map_land: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::GOLD,
            blue: colors::BLUE,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
            map_land: colors::MAP_LAND,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_popup: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::White,
            accent: Color::Yellow,
            blue: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            map_land: Color::Gray,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for markers, bullets and controls.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub selected: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub marker: &'static str,
    pub active_marker: &'static str,
    pub play: &'static str,
    pub pause: &'static str,
    pub slider_fill: &'static str,
    pub slider_track: &'static str,
    pub slider_thumb: &'static str,
    pub correct: &'static str,
    pub wrong: &'static str,
    pub radio_on: &'static str,
    pub radio_off: &'static str,
    pub separator: &'static str,
    pub quote_open: &'static str,
    pub quote_close: &'static str,
    pub pin: &'static str,
    pub music: &'static str,
    pub pulse_frames: &'static [&'static str],
}

const PULSE_FRAMES: &[&str] = &["●", "◉", "○", "◉"];
const PULSE_FRAMES_ASCII: &[&str] = &["@", "O", "o", "O"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            selected: ">",
            expanded: "v",
            collapsed: ">",
            marker: "o",
            active_marker: "@",
            play: ">",
            pause: "||",
            slider_fill: "=",
            slider_track: "-",
            slider_thumb: "O",
            correct: "OK",
            wrong: "X",
            radio_on: "(*)",
            radio_off: "( )",
            separator: "|",
            quote_open: "\"",
            quote_close: "\"",
            pin: "#",
            music: "~",
            pulse_frames: PULSE_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            bullet: "•",
            selected: "▸",
            expanded: "▾",
            collapsed: "▸",
            marker: "●",
            active_marker: "◉",
            play: "▶",
            pause: "⏸",
            slider_fill: "━",
            slider_track: "─",
            slider_thumb: "◆",
            correct: "✓",
            wrong: "✗",
            radio_on: "◉",
            radio_off: "○",
            separator: "│",
            quote_open: "“",
            quote_close: "”",
            pin: "⌖",
            music: "♪",
            pulse_frames: PULSE_FRAMES,
        }
    }
}

/// Active-marker glyph for `tick`. Static when `reduced_motion` is enabled.
#[must_use]
pub fn pulse_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).pulse_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn quote(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_idle(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn cursor(palette: &Palette) -> Style {
        Style::default()
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use rizal_types::ui::UiOptions;

    use super::{glyphs, pulse_frame};

    #[test]
    fn pulse_frame_cycles_without_reduced_motion() {
        let options = UiOptions::default();
        assert_ne!(pulse_frame(0, options), pulse_frame(1, options));
    }

    #[test]
    fn pulse_frame_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        let frame0 = pulse_frame(0, options);
        assert_eq!(frame0, pulse_frame(1, options));
        assert_eq!(frame0, pulse_frame(100, options));
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [
            g.bullet,
            g.selected,
            g.marker,
            g.active_marker,
            g.play,
            g.pause,
            g.slider_thumb,
            g.radio_on,
            g.quote_open,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?} is not ascii");
        }
        assert!(g.pulse_frames.iter().all(|frame| frame.is_ascii()));
    }
}
