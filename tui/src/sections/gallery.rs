use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use rizal_content::PHOTOS;
use rizal_engine::{App, ModalEffectKind};
use rizal_types::Photo;

use crate::effects::apply_modal_effect;
use crate::shared::{card, centered_rect, section_header};
use crate::theme::{Glyphs, Palette, styles};

const COLUMNS: usize = 3;

pub(crate) fn draw(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    frame.render_widget(
        Paragraph::new(section_header(
            "Photo Gallery",
            "A visual journey through the life and legacy of the Philippines' national hero.",
            palette,
        ))
        .wrap(Wrap { trim: true }),
        rows[0],
    );

    draw_grid(frame, app, rows[1], palette, glyphs);

    if let Some(index) = app.gallery().lightbox()
        && let Some(photo) = PHOTOS.get(index)
    {
        draw_lightbox(frame, app, photo, area, palette, glyphs);
    }
}

fn draw_grid(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let row_count = PHOTOS.len().div_ceil(COLUMNS).max(1);
    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);
    let cursor = app.gallery().cursor();

    for (row, chunk) in PHOTOS.chunks(COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(grid_rows[row]);
        for (col, photo) in chunk.iter().enumerate() {
            let index = row * COLUMNS + col;
            let focused = index == cursor;
            let title_style = if focused {
                styles::title(palette).patch(styles::cursor(palette))
            } else {
                styles::title(palette)
            };
            let lines = vec![
                Line::from(Span::styled(photo.title, title_style)),
                Line::from(Span::styled(photo.description, styles::muted(palette))),
            ];
            let label = Span::styled(format!(" {} ", glyphs.pin), styles::muted(palette));
            frame.render_widget(
                Paragraph::new(lines)
                    .block(card(label, palette, focused))
                    .wrap(Wrap { trim: true }),
                cells[col],
            );
        }
    }
}

fn draw_lightbox(
    frame: &mut Frame,
    app: &mut App,
    photo: &Photo,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let base = centered_rect(area, area.width.saturating_sub(8).min(72), 12);

    let elapsed = app.frame_elapsed();
    let mut rect = base;
    let mut finished = false;
    if let Some(effect) = app.modal_effect_mut()
        && effect.kind() == ModalEffectKind::PopScale
    {
        effect.advance(elapsed);
        rect = apply_modal_effect(effect, base, area);
        finished = effect.is_finished();
    }
    if finished {
        app.clear_modal_effect();
    }

    let lines = vec![
        Line::from(Span::styled(photo.title, styles::heading(palette))),
        Line::default(),
        Line::from(Span::styled(photo.description, styles::body(palette))),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.pin), styles::muted(palette)),
            Span::styled(photo.asset, styles::muted(palette)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Esc", styles::key_highlight(palette)),
            Span::styled(" close", styles::key_hint(palette)),
        ]),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                card(
                    Span::styled(format!(" {} ", photo.title), styles::title(palette)),
                    palette,
                    true,
                )
                .style(Style::default().bg(palette.bg_popup)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
