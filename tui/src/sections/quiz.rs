use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Padding, Paragraph, Wrap},
};

use rizal_engine::{App, ModalEffectKind, QuizOutcome, QuizPhase};
use rizal_types::QuizQuestion;

use crate::effects::apply_modal_effect;
use crate::shared::{card, centered_rect, section_header};
use crate::theme::{Glyphs, Palette, styles};

const CARD_WIDTH: u16 = 76;

pub(crate) fn draw(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if let Some(outcome) = app.quiz().outcome() {
        draw_complete(frame, outcome, area, palette);
        return;
    }
    let Some(question) = app.quiz().current_question() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);
    frame.render_widget(
        Paragraph::new(section_header(
            "Knowledge Check",
            "Test your understanding of Dr. José Rizal's life and legacy.",
            palette,
        ))
        .wrap(Wrap { trim: true }),
        rows[0],
    );

    let body = centered_rect(rows[1], CARD_WIDTH, rows[1].height);
    let block = card(
        Span::styled(
            format!(
                " Question {} of {} ",
                app.quiz().index() + 1,
                app.quiz().total()
            ),
            styles::heading(palette),
        ),
        palette,
        true,
    )
    .title_top(
        Line::from(Span::styled(
            format!(" Score: {}/{} ", app.quiz().score(), app.quiz().answered()),
            styles::muted(palette),
        ))
        .right_aligned(),
    );
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let phase = app.quiz().phase();
    let option_rows = question.options.len() as u16;
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Question
            Constraint::Length(option_rows + 1), // Options
            Constraint::Min(0),                  // Explanation
            Constraint::Length(1),               // Action
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            question.question,
            styles::title(palette),
        )))
        .wrap(Wrap { trim: true }),
        parts[0],
    );
    frame.render_widget(
        Paragraph::new(option_lines(question, phase, palette, glyphs)),
        parts[1],
    );

    if let QuizPhase::Revealed { .. } = phase {
        draw_explanation(frame, app, question, parts[2], palette);
    }

    let action = match phase {
        QuizPhase::Answering { selected: None } => {
            Span::styled("Submit Answer", styles::muted(palette))
        }
        QuizPhase::Answering { selected: Some(_) } => {
            Span::styled(" Submit Answer ", styles::nav_active(palette))
        }
        QuizPhase::Revealed { .. } => {
            let label = if app.quiz().is_last_question() {
                " See Results "
            } else {
                " Next Question "
            };
            Span::styled(label, styles::nav_active(palette))
        }
        QuizPhase::Complete => Span::raw(""),
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            action,
            Span::styled("  Enter", styles::key_highlight(palette)),
        ])),
        parts[3],
    );
}

fn option_lines<'a>(
    question: &'a QuizQuestion,
    phase: QuizPhase,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'a>> {
    let selected = match phase {
        QuizPhase::Answering { selected } => selected,
        QuizPhase::Revealed { selected, .. } => Some(selected),
        QuizPhase::Complete => None,
    };
    let revealed = matches!(phase, QuizPhase::Revealed { .. });

    question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let letter = char::from(b'a' + index as u8);
            let is_selected = selected == Some(index);
            let is_correct = question.is_correct(index);
            let radio = if is_selected {
                glyphs.radio_on
            } else {
                glyphs.radio_off
            };

            let (style, mark) = if revealed && is_correct {
                (
                    Style::default()
                        .fg(palette.success)
                        .add_modifier(Modifier::BOLD),
                    glyphs.correct,
                )
            } else if revealed && is_selected {
                (
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                    glyphs.wrong,
                )
            } else if is_selected {
                (styles::cursor(palette), "")
            } else {
                (styles::body(palette), "")
            };

            Line::from(vec![
                Span::styled(format!(" {letter} "), styles::key_highlight(palette)),
                Span::styled(format!("{radio} {option} "), style),
                Span::styled(mark, style),
            ])
        })
        .collect()
}

fn draw_explanation(
    frame: &mut Frame,
    app: &mut App,
    question: &QuizQuestion,
    area: Rect,
    palette: &Palette,
) {
    if area.height == 0 {
        return;
    }
    let elapsed = app.frame_elapsed();
    let mut rect = area;
    let mut finished = false;
    if let Some(effect) = app.modal_effect_mut()
        && effect.kind() == ModalEffectKind::SlideUp
    {
        effect.advance(elapsed);
        rect = apply_modal_effect(effect, area, frame.area()).intersection(area);
        finished = effect.is_finished();
    }
    if finished {
        app.clear_modal_effect();
    }

    let text = Line::from(vec![
        Span::styled("Explanation: ", styles::heading(palette)),
        Span::styled(question.explanation, styles::body(palette)),
    ]);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text)
            .block(card("", palette, false).style(Style::default().bg(palette.bg_highlight)))
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn draw_complete(frame: &mut Frame, outcome: QuizOutcome, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("Quiz Complete!", styles::heading(palette))),
        Line::default(),
        Line::from(Span::styled(
            format!("{}/{}", outcome.score, outcome.total),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(outcome.tier.message(), styles::body(palette))),
        Line::default(),
        Line::from(vec![
            Span::styled(" Try Again ", styles::nav_active(palette)),
            Span::styled("  r / Enter", styles::key_hint(palette)),
        ]),
    ];
    let rect = centered_rect(area, 52, lines.len() as u16 + 4);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(card("", palette, true).padding(Padding::uniform(1))),
        rect,
    );
}
