//! World Traveler view: journey map, year slider, and location cards.

use std::cmp::Ordering;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Paragraph, Wrap,
        canvas::{Canvas, Line as PathLine, Map, MapResolution},
    },
};

use rizal_engine::{App, RetainedMap, TimelineYear};
use rizal_types::LocationRecord;

use crate::shared::{card, section_header, truncate_to_width};
use crate::theme::{Glyphs, Palette, pulse_frame, styles};

/// Journey path dash and gap lengths, in degrees.
const DASH: f64 = 4.0;
const GAP: f64 = 3.0;

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Journey timeline controls
            Constraint::Min(8),    // Map + cards
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(section_header(
            "The World Traveler",
            "Follow Rizal's journey across continents, from Manila to Madrid, and discover how \
             his travels shaped his vision for the Philippines.",
            palette,
        ))
        .wrap(Wrap { trim: true }),
        rows[0],
    );

    draw_controls(frame, app, rows[1], palette, glyphs);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[2]);
    draw_map(frame, app, body[0], palette, glyphs);
    draw_cards(frame, app, body[1], palette, glyphs);
}

fn draw_controls(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let journey = app.journey();
    let block = card(
        Span::styled(" Journey Timeline ", styles::heading(palette)),
        palette,
        false,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (glyph, label) = if journey.is_playing() {
        (glyphs.pause, "Pause")
    } else {
        (glyphs.play, "Play")
    };
    let first = TimelineYear::MIN.to_string();
    let last = TimelineYear::MAX.to_string();
    // Play button, both end labels, and the current year around the track.
    let chrome = 10 + label.len() + first.len() + last.len() + 8;
    let track = usize::from(inner.width).saturating_sub(chrome).max(3);

    let slider_line = Line::from(vec![
        Span::styled(
            format!(" {glyph} {label} "),
            styles::nav_active(palette),
        ),
        Span::raw("  "),
        Span::styled(first, styles::muted(palette)),
        Span::raw(" "),
        Span::styled(
            slider(journey.year(), track, glyphs),
            Style::default().fg(palette.accent),
        ),
        Span::raw(" "),
        Span::styled(last, styles::muted(palette)),
        Span::raw("  "),
        Span::styled(
            journey.year().to_string(),
            styles::title(palette),
        ),
    ]);

    let visited = journey.state().visible().len();
    let total = journey.locations().len();
    let status = Line::from(vec![
        Span::styled(
            format!("{visited} of {total} locations visited"),
            styles::body(palette),
        ),
        Span::styled(
            match journey.active_location() {
                Some((_, record)) => format!("  {} {}", glyphs.pin, record.name),
                None => String::new(),
            },
            Style::default().fg(palette.accent),
        ),
    ]);

    frame.render_widget(Paragraph::new(vec![slider_line, status]), inner);
}

/// Year slider of `width` cells with the thumb at the year's position.
pub(crate) fn slider(year: TimelineYear, width: usize, glyphs: &Glyphs) -> String {
    if width == 0 {
        return String::new();
    }
    let thumb = (year.fraction() * (width - 1) as f64).round() as usize;
    let mut out = String::new();
    for cell in 0..width {
        out.push_str(match cell.cmp(&thumb) {
            Ordering::Less => glyphs.slider_fill,
            Ordering::Equal => glyphs.slider_thumb,
            Ordering::Greater => glyphs.slider_track,
        });
    }
    out
}

/// Split a polyline into dashes of `dash` length separated by `gap`, shifted
/// forward along the path by `phase`.
pub(crate) fn dashed_segments(
    points: &[(f64, f64)],
    dash: f64,
    gap: f64,
    phase: f64,
) -> Vec<[(f64, f64); 2]> {
    let mut out = Vec::new();
    if dash <= 0.0 || gap <= 0.0 {
        out.extend(points.windows(2).map(|pair| [pair[0], pair[1]]));
        return out;
    }
    let period = dash + gap;
    let mut offset = -phase;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let len = (b.0 - a.0).hypot(b.1 - a.1);
        if len <= f64::EPSILON {
            continue;
        }
        let at = |s: f64| (a.0 + (b.0 - a.0) * s / len, a.1 + (b.1 - a.1) * s / len);
        let mut s = 0.0;
        while s < len {
            let pos = (offset + s).rem_euclid(period);
            if pos < dash - 1e-9 {
                let end = (s + dash - pos).min(len);
                out.push([at(s), at(end)]);
                s = end;
            } else {
                s += period - pos;
            }
        }
        offset += len;
    }
    out
}

fn draw_map(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let map: &RetainedMap = app.journey().surface();
    let block = card(
        Span::styled(" Map ", styles::heading(palette)),
        palette,
        false,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Terminal cells are about twice as tall as they are wide.
    let aspect = f64::from(inner.width) / (f64::from(inner.height) * 2.0);
    let viewport = map.viewport(aspect);

    let active_id = app.journey().active_location().map(|(_, record)| record.id);
    let pulse = pulse_frame(app.anim_frame(), app.ui_options());
    let path: Vec<(f64, f64)> = map.polyline().iter().map(|c| (c.lng, c.lat)).collect();
    let phase = if app.ui_options().reduced_motion {
        0.0
    } else {
        app.anim_frame() as f64
    };
    let dashes = dashed_segments(&path, DASH, GAP, phase);

    let land = palette.map_land;
    let route = palette.primary;
    let marker_style = Style::default().fg(palette.blue).add_modifier(Modifier::BOLD);
    let active_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let marker_glyph = glyphs.marker;

    let canvas = Canvas::default()
        .background_color(palette.bg_panel)
        .marker(if app.ui_options().ascii_only {
            symbols::Marker::Dot
        } else {
            symbols::Marker::Braille
        })
        .x_bounds(viewport.lng)
        .y_bounds(viewport.lat)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: land,
                resolution: MapResolution::High,
            });
            ctx.layer();
            for [(x1, y1), (x2, y2)] in &dashes {
                ctx.draw(&PathLine::new(*x1, *y1, *x2, *y2, route));
            }
            ctx.layer();
            for marker in map.markers() {
                let (glyph, style) = if Some(marker.id) == active_id {
                    (pulse, active_style)
                } else {
                    (marker_glyph, marker_style)
                };
                ctx.print(
                    marker.at.lng,
                    marker.at.lat,
                    Span::styled(format!("{glyph}{}", marker.label), style),
                );
            }
        });
    frame.render_widget(canvas, inner);
}

fn draw_cards(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let journey = app.journey();
    let locations = journey.locations();
    let visible = journey.state().visible();
    let active = journey.active_location().map(|(a, _)| a.index);
    let cursor = app.journey_cursor();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(locations.len() as u16 + 2),
            Constraint::Min(4),
        ])
        .split(area);

    let list_block = card(
        Span::styled(" Locations ", styles::heading(palette)),
        palette,
        false,
    );
    let width = usize::from(list_block.inner(rows[0]).width);
    let lines: Vec<Line> = locations
        .iter()
        .enumerate()
        .map(|(index, location)| {
            let pointer = if index == cursor { glyphs.selected } else { " " };
            let glyph = if Some(index) == active {
                glyphs.active_marker
            } else if visible.contains(&index) {
                glyphs.marker
            } else {
                glyphs.bullet
            };
            let mut style = if Some(index) == active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else if visible.contains(&index) {
                styles::title(palette)
            } else {
                styles::muted(palette)
            };
            if index == cursor {
                style = style.patch(styles::cursor(palette));
            }
            let text = format!("{} {}, {}", location.name, location.country, location.period);
            Line::from(vec![
                Span::styled(format!("{pointer} {glyph} "), style),
                Span::styled(truncate_to_width(&text, width.saturating_sub(5)), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(list_block), rows[0]);

    if let Some(location) = locations.get(cursor) {
        draw_location_card(frame, location, Some(cursor) == active, rows[1], palette);
    }
}

fn draw_location_card(
    frame: &mut Frame,
    location: &LocationRecord,
    active: bool,
    area: Rect,
    palette: &Palette,
) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", location.name), styles::title(palette)),
        Span::styled(format!("{} ", location.country), styles::muted(palette)),
    ]);
    let lines = vec![
        Line::from(Span::styled(location.period, Style::default().fg(palette.accent))),
        Line::from(Span::styled(location.description, styles::body(palette))),
        Line::default(),
        Line::from(Span::styled("Historical Significance", styles::heading(palette))),
        Line::from(Span::styled(location.significance, styles::body(palette))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(card(title, palette, active))
            .wrap(Wrap { trim: true }),
        area,
    );
}
