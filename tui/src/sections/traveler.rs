use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use rizal_content::TRAVELER_LOCATIONS;
use rizal_engine::App;

use crate::shared::{card, section_header};
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Spacer
            Constraint::Min(4),    // Destination card
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(section_header(
            "The Traveler",
            "Follow Rizal's global footprint across continents, where each destination shaped \
             his vision for Philippine independence.",
            palette,
        ))
        .wrap(Wrap { trim: true }),
        rows[0],
    );

    let active = app.traveler().active_tab();
    let high_contrast = app.ui_options().high_contrast;
    let accent_of = |(r, g, b): (u8, u8, u8)| {
        if high_contrast {
            palette.accent
        } else {
            Color::Rgb(r, g, b)
        }
    };

    let mut tabs = Vec::new();
    for (index, location) in TRAVELER_LOCATIONS.iter().enumerate() {
        if index > 0 {
            tabs.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::muted(palette),
            ));
        }
        let style = if index == active {
            Style::default()
                .fg(palette.bg_dark)
                .bg(accent_of(location.accent))
                .add_modifier(Modifier::BOLD)
        } else {
            styles::nav_idle(palette)
        };
        tabs.push(Span::styled(format!(" {} ", location.name), style));
    }
    frame.render_widget(Paragraph::new(Line::from(tabs)), rows[1]);

    let Some(location) = TRAVELER_LOCATIONS.get(active) else {
        return;
    };
    let accent = accent_of(location.accent);
    let title = Line::from(vec![
        Span::styled(
            format!(" {} {} ", glyphs.pin, location.name),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", location.country), styles::muted(palette)),
    ]);
    let lines = vec![
        Line::from(Span::styled(location.period, Style::default().fg(accent))),
        Line::default(),
        Line::from(Span::styled(location.description, styles::body(palette))),
        Line::default(),
        Line::from(Span::styled("Historical Significance", styles::heading(palette))),
        Line::from(Span::styled(location.significance, styles::body(palette))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(card(title, palette, true).border_style(Style::default().fg(accent)))
            .wrap(Wrap { trim: true }),
        rows[3],
    );
}
