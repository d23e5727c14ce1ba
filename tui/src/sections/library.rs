use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use rizal_content::{BOOKS, POEM};
use rizal_engine::{App, ModalEffectKind};
use rizal_types::Book;

use crate::effects::apply_modal_effect;
use crate::shared::{card, section_header};
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),       // Header
            Constraint::Percentage(45), // Book cards
            Constraint::Min(6),          // Poem spotlight
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(section_header(
            "The Library",
            "Discover the literary masterpieces that ignited a revolution and continue to \
             inspire millions.",
            palette,
        ))
        .wrap(Wrap { trim: true }),
        rows[0],
    );

    draw_books(frame, app, rows[1], palette, glyphs);
    draw_poem(frame, app, rows[2], palette, glyphs);
}

fn draw_books(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, BOOKS.len() as u32); BOOKS.len()])
        .split(area);

    let cursor = app.library().cursor();
    let flipped = app.library().flipped();

    // Advance the flip animation once per frame, for the flipped card only.
    let elapsed = app.frame_elapsed();
    let mut flip_done = false;
    let flip_effect = app
        .modal_effect_mut()
        .filter(|effect| effect.kind() == ModalEffectKind::Flip)
        .map(|effect| {
            effect.advance(elapsed);
            flip_done = effect.is_finished();
            effect.clone()
        });
    if flip_done {
        app.clear_modal_effect();
    }

    for (index, (book, &base)) in BOOKS.iter().zip(columns.iter()).enumerate() {
        let is_flipped = flipped == Some(index);
        let rect = match &flip_effect {
            Some(effect) if is_flipped => apply_modal_effect(effect, base, area),
            _ => base,
        };
        // Past the half-way point the card shows its back.
        let show_back = is_flipped
            && flip_effect
                .as_ref()
                .is_none_or(|effect| effect.progress() >= 0.5);
        frame.render_widget(Clear, base);
        frame.render_widget(
            book_card(book, index == cursor, show_back, palette, glyphs),
            rect,
        );
    }
}

fn book_card<'a>(
    book: &'a Book,
    focused: bool,
    back: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Paragraph<'a> {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", book.title), styles::title(palette)),
        Span::styled(format!("{} ", book.year), Style::default().fg(palette.accent)),
    ]);
    let lines = if back {
        vec![
            Line::from(Span::styled("Significance", styles::heading(palette))),
            Line::from(Span::styled(book.significance, styles::body(palette))),
        ]
    } else {
        vec![
            Line::from(Span::styled(book.summary, styles::body(palette))),
            Line::default(),
            Line::from(Span::styled(
                format!("{} Enter to flip", glyphs.selected),
                styles::key_hint(palette),
            )),
        ]
    };
    Paragraph::new(lines)
        .block(card(title, palette, focused))
        .wrap(Wrap { trim: true })
}

fn stanza_lines<'a>(stanzas: &'a [&'a [&'a str]], style: Style) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (i, stanza) in stanzas.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(stanza.iter().map(|&text| Line::from(Span::styled(text, style))));
    }
    lines
}

fn draw_poem(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let title = Line::from(vec![
        Span::styled(format!(" {} {} ", glyphs.music, POEM.title), styles::heading(palette)),
        Span::styled(format!("{} ", POEM.subtitle), styles::muted(palette)),
    ]);
    let block = card(title, palette, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let scroll = (app.library().poem_scroll(), 0);
    frame.render_widget(
        Paragraph::new(stanza_lines(POEM.original, styles::quote(palette))).scroll(scroll),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(stanza_lines(POEM.translation, styles::body(palette))).scroll(scroll),
        columns[1],
    );

    let notes = Line::from(vec![
        Span::styled(POEM.original_note, styles::muted(palette)),
        Span::raw("  "),
        Span::styled(POEM.translation_note, styles::muted(palette)),
    ]);
    frame.render_widget(Paragraph::new(notes), rows[1]);

    let audio = if app.audio_configured() {
        let state = if app.poem_playing() {
            Span::styled("  playing", styles::quote(palette))
        } else {
            Span::raw("")
        };
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.music), styles::key_highlight(palette)),
            Span::styled(POEM.audio_asset, styles::body(palette)),
            state,
            Span::styled("  p", styles::key_highlight(palette)),
            Span::styled(" play  ", styles::key_hint(palette)),
            Span::styled("s", styles::key_highlight(palette)),
            Span::styled(" stop", styles::key_hint(palette)),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.music), styles::muted(palette)),
            Span::styled(POEM.audio_asset, styles::muted(palette)),
            Span::styled(
                "  (set [library] audio_player to listen)",
                styles::key_hint(palette),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(audio).alignment(Alignment::Left), rows[2]);
}
