use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use rizal_content::{CLOSING_QUOTE, FOOTER_MOTTO, PILLARS};
use rizal_engine::App;

use crate::shared::{card, section_header};
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, _app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(6),    // Pillars
            Constraint::Length(5), // Closing quote
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(section_header(
            "Rizal's Enduring Legacy",
            "More than a century after his death, Dr. José Rizal continues to inspire millions \
             as a symbol of peaceful reform and national pride.",
            palette,
        ))
        .wrap(Wrap { trim: true }),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, PILLARS.len().max(1) as u32);
            PILLARS.len()
        ])
        .split(rows[1]);
    for (pillar, &column) in PILLARS.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(pillar.body, styles::body(palette))),
            Line::default(),
            Line::from(Span::styled(pillar.footnote, styles::muted(palette))),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(card(
                    Span::styled(format!(" {} ", pillar.title), styles::heading(palette)),
                    palette,
                    false,
                ))
                .wrap(Wrap { trim: true }),
            column,
        );
    }

    let closing = vec![
        Line::default(),
        Line::from(Span::styled(
            format!(
                "{}{}{}",
                glyphs.quote_open, CLOSING_QUOTE.text, glyphs.quote_close
            ),
            styles::quote(palette),
        )),
        Line::from(Span::styled(
            format!("- {}", CLOSING_QUOTE.attribution),
            styles::muted(palette),
        )),
        Line::from(Span::styled(FOOTER_MOTTO, styles::muted(palette))),
    ];
    frame.render_widget(
        Paragraph::new(closing)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[2],
    );
}
