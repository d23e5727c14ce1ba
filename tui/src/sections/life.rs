use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use rizal_content::EVENTS;
use rizal_engine::App;

use crate::shared::section_header;
use crate::theme::{Glyphs, Palette, styles};

const YEAR_COLUMN: usize = 11;

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let life = app.life();
    let mut lines = section_header(
        "Life's Journey",
        "From humble beginnings to national hero, explore the pivotal moments that shaped \
         Dr. José Rizal's extraordinary life.",
        palette,
    );
    let mut cursor_line = 0;

    for (index, event) in EVENTS.iter().enumerate() {
        if !life.is_revealed(index) {
            lines.push(Line::from(Span::styled(
                format!("{:>YEAR_COLUMN$}  {}", "", glyphs.bullet),
                styles::muted(palette),
            )));
            continue;
        }

        let selected = index == life.cursor();
        let expanded = life.expanded() == Some(index);
        if selected {
            cursor_line = lines.len();
        }

        let toggle = if expanded {
            glyphs.expanded
        } else {
            glyphs.collapsed
        };
        let title_style = if selected {
            styles::title(palette).patch(styles::cursor(palette))
        } else {
            styles::title(palette)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>YEAR_COLUMN$}", event.year),
                Style::default().fg(palette.accent),
            ),
            Span::styled(format!("  {toggle} "), styles::muted(palette)),
            Span::styled(event.title, title_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(YEAR_COLUMN + 4)),
            Span::styled(event.description, styles::body(palette)),
        ]));
        if expanded {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(YEAR_COLUMN + 4)),
                Span::styled(event.details, Style::default().fg(palette.text_primary)),
            ]));
        }
        lines.push(Line::default());
    }

    // Keep the cursor entry and its details in view.
    let visible = usize::from(area.height);
    let scroll = (cursor_line + 6).saturating_sub(visible);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
        area,
    );
}
