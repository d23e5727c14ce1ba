//! Quiz progression as seen on screen.

use rizal_content::QUESTIONS;
use rizal_engine::{App, SectionId};

use crate::common::{assert_screen_contains, render, still_settings_at};

fn answer_all(app: &mut App, pick: impl Fn(usize) -> usize) {
    for (index, _) in QUESTIONS.iter().enumerate() {
        app.quiz_select(pick(index));
        app.quiz_confirm();
        app.quiz_confirm();
    }
}

#[test]
fn first_question_is_shown() {
    let mut app = App::new(still_settings_at(SectionId::Quiz));
    let screen = render(&mut app);
    assert_screen_contains(
        &screen,
        &[
            "Knowledge Check",
            "Question 1 of 3",
            "Score: 0/0",
            QUESTIONS[0].question,
            "Submit Answer",
        ],
    );
}

#[test]
fn submitted_answer_reveals_explanation() {
    let mut app = App::new(still_settings_at(SectionId::Quiz));
    app.quiz_select(QUESTIONS[0].correct);
    app.quiz_confirm();

    let screen = render(&mut app);
    assert_screen_contains(&screen, &["Explanation:", "Score: 1/1", "Next Question"]);
}

#[test]
fn last_question_offers_results() {
    let mut app = App::new(still_settings_at(SectionId::Quiz));
    for question in &QUESTIONS[..QUESTIONS.len() - 1] {
        app.quiz_select(question.correct);
        app.quiz_confirm();
        app.quiz_confirm();
    }
    app.quiz_select(0);
    app.quiz_confirm();

    let screen = render(&mut app);
    assert_screen_contains(&screen, &["See Results"]);
}

#[test]
fn perfect_score_message() {
    let mut app = App::new(still_settings_at(SectionId::Quiz));
    answer_all(&mut app, |index| QUESTIONS[index].correct);

    let screen = render(&mut app);
    assert_screen_contains(
        &screen,
        &["Quiz Complete!", "3/3", "Perfect! You're a Rizal expert!", "Try Again"],
    );
}

#[test]
fn wrong_answers_get_encouragement_and_restart() {
    let mut app = App::new(still_settings_at(SectionId::Quiz));
    answer_all(&mut app, |index| (QUESTIONS[index].correct + 1) % 4);

    let screen = render(&mut app);
    assert_screen_contains(
        &screen,
        &["0/3", "Good effort! Learn more about Rizal's legacy."],
    );

    app.quiz_confirm();
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["Question 1 of 3"]);
}
