use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use rizal_content::HERO_QUOTE;
use rizal_engine::App;

use crate::shared::centered_rect;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, _app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines = vec![
        Line::from(Span::styled("Dr. José Rizal", styles::heading(palette))),
        Line::from(Span::styled("The First Filipino", styles::title(palette))),
        Line::default(),
        Line::from(Span::styled(
            format!("{}{}{}", glyphs.quote_open, HERO_QUOTE.text, glyphs.quote_close),
            styles::quote(palette),
        )),
        Line::from(Span::styled(
            format!("— {}", HERO_QUOTE.attribution),
            styles::muted(palette),
        )),
        Line::default(),
        Line::default(),
        Line::from(Span::styled(
            format!(" {} Explore His Legacy ", glyphs.play),
            styles::nav_active(palette),
        )),
        Line::from(Span::styled("press Enter", styles::key_hint(palette))),
    ];

    let box_area = centered_rect(area, 72, lines.len() as u16 + 4);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        box_area,
    );
}
