//! Rendering helpers shared by the section views.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{Palette, styles};

/// Bordered panel with a bold title, used for every card.
pub(crate) fn card<'a>(title: impl Into<Line<'a>>, palette: &Palette, focused: bool) -> Block<'a> {
    let border = if focused {
        palette.accent
    } else {
        palette.bg_border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
        .title(title)
}

/// Section heading and subtitle, centered.
pub(crate) fn section_header<'a>(
    title: &'a str,
    subtitle: &'a str,
    palette: &Palette,
) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(title, styles::heading(palette))).alignment(Alignment::Center),
        Line::from(Span::styled(subtitle, styles::muted(palette))).alignment(Alignment::Center),
        Line::default(),
    ]
}

/// Rectangle of at most `width` x `height`, centered in `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cut `text` to `max_width` display columns, ending with `...` when cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max_width >= 3 {
        out.push_str("...");
    }
    out
}
