//! TUI rendering for the Rizal explorer using ratatui.

mod effects;
mod input;
mod sections;
mod shared;
mod theme;

pub use effects::apply_modal_effect;
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, pulse_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use rizal_content::{FOOTER_TAGLINE, FOOTER_TITLE};
use rizal_engine::{App, SectionId, StatusKind};

use self::shared::{card, centered_rect};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1), // Navigation
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Section body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_nav(frame, app, chunks[0], &palette, &glyphs);

    let body = chunks[2];
    match app.current_section() {
        SectionId::Hero => sections::hero::draw(frame, app, body, &palette, &glyphs),
        SectionId::Timeline => sections::life::draw(frame, app, body, &palette, &glyphs),
        SectionId::Library => sections::library::draw(frame, app, body, &palette, &glyphs),
        SectionId::Map => sections::journey::draw(frame, app, body, &palette, &glyphs),
        SectionId::Gallery => sections::gallery::draw(frame, app, body, &palette, &glyphs),
        SectionId::Traveler => sections::traveler::draw(frame, app, body, &palette, &glyphs),
        SectionId::Quiz => sections::quiz::draw(frame, app, body, &palette, &glyphs),
        SectionId::Legacy => sections::legacy::draw(frame, app, body, &palette, &glyphs),
    }

    draw_footer(frame, app, chunks[3], &palette, &glyphs);

    if app.show_help() {
        draw_help(frame, app, &palette);
    }
}

fn draw_nav(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let current = app.current_section();
    let mut spans = vec![
        Span::styled("Dr. José Rizal", styles::heading(palette)),
        Span::styled(format!(" {} ", glyphs.separator), styles::muted(palette)),
    ];
    for (i, section) in SectionId::ALL.into_iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section.nav_label());
        let style = if section == current {
            styles::nav_active(palette)
        } else {
            styles::nav_idle(palette)
        };
        spans.push(Span::styled(label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = if let Some(status) = app.status() {
        let (prefix, color) = match status.kind {
            StatusKind::Warning => ("Warning: ", palette.warning),
            StatusKind::Info => ("", palette.success),
        };
        Line::from(Span::styled(
            format!(" {prefix}{}", status.text),
            Style::default().fg(color),
        ))
    } else {
        Line::from(vec![
            Span::styled(format!(" {FOOTER_TITLE}"), styles::title(palette)),
            Span::styled(format!(" {} ", glyphs.separator), styles::muted(palette)),
            Span::styled(FOOTER_TAGLINE, styles::muted(palette)),
            Span::styled(format!(" {} ", glyphs.separator), styles::muted(palette)),
            Span::styled("Tab", styles::key_highlight(palette)),
            Span::styled(" next  ", styles::key_hint(palette)),
            Span::styled("?", styles::key_highlight(palette)),
            Span::styled(" help  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Key bindings for the current section.
fn section_keys(section: SectionId) -> &'static [(&'static str, &'static str)] {
    match section {
        SectionId::Hero => &[("Enter", "Explore His Legacy")],
        SectionId::Timeline => &[("j/k", "move"), ("Enter", "expand / collapse")],
        SectionId::Library => &[
            ("h/l", "choose book"),
            ("Enter", "flip card"),
            ("j/k", "scroll poem"),
            ("p / s", "play / stop recording"),
        ],
        SectionId::Map => &[
            ("h/l", "year -/+"),
            ("Home/End", "1861 / 1896"),
            ("Space", "play / pause"),
            ("j/k", "choose location"),
            ("Enter", "fly to location"),
        ],
        SectionId::Gallery => &[("Arrows", "move"), ("Enter", "open / close")],
        SectionId::Traveler => &[("h/l", "switch tab")],
        SectionId::Quiz => &[
            ("a-d / j/k", "choose answer"),
            ("Enter", "submit / next"),
            ("r", "restart"),
        ],
        SectionId::Legacy => &[],
    }
}

fn draw_help(frame: &mut Frame, app: &App, palette: &Palette) {
    let global: [(&str, &str); 5] = [
        ("Tab / Shift-Tab", "next / previous section"),
        ("1-8", "jump to section"),
        ("Esc", "close overlay"),
        ("?", "toggle help"),
        ("q", "quit"),
    ];
    let mut lines = vec![
        Line::from(Span::styled(
            app.current_section().nav_label(),
            styles::heading(palette),
        )),
        Line::default(),
    ];
    let keys = section_keys(app.current_section()).iter().chain(global.iter());
    for (key, action) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("{key:>16}  "), styles::key_highlight(palette)),
            Span::styled(*action, styles::body(palette)),
        ]));
    }

    let height = lines.len() as u16 + 2;
    let area = centered_rect(frame.area(), 52, height);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(card(" Keys ", palette, true).style(Style::default().bg(palette.bg_popup)))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        area,
    );
}
