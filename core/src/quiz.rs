//! Knowledge-check quiz: linear progression with immediate feedback.

use rizal_types::QuizQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for a selection to be submitted.
    Answering { selected: Option<usize> },
    /// Submitted; correctness and explanation are shown.
    Revealed { selected: usize, correct: bool },
    Complete,
}

/// Closing message band, chosen by score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizTier {
    Perfect,
    Great,
    GoodEffort,
}

impl QuizTier {
    /// Minimum percentage for [`QuizTier::Great`].
    pub const GREAT_THRESHOLD: f64 = 66.0;

    #[must_use]
    pub fn for_score(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64 * 100.0
        };
        if total > 0 && score >= total {
            QuizTier::Perfect
        } else if percentage >= Self::GREAT_THRESHOLD {
            QuizTier::Great
        } else {
            QuizTier::GoodEffort
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            QuizTier::Perfect => "Perfect! You're a Rizal expert!",
            QuizTier::Great => "Great job! You know your history!",
            QuizTier::GoodEffort => "Good effort! Learn more about Rizal's legacy.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub tier: QuizTier,
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: &'static [QuizQuestion],
    index: usize,
    score: usize,
    phase: QuizPhase,
}

impl QuizEngine {
    #[must_use]
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::Complete
        } else {
            QuizPhase::Answering { selected: None }
        };
        Self {
            questions,
            index: 0,
            score: 0,
            phase,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions submitted so far.
    #[must_use]
    pub fn answered(&self) -> usize {
        match self.phase {
            QuizPhase::Answering { .. } => self.index,
            QuizPhase::Revealed { .. } => self.index + 1,
            QuizPhase::Complete => self.questions.len(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        match self.phase {
            QuizPhase::Complete => None,
            _ => self.questions.get(self.index),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// Pending or submitted selection for the current question.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::Answering { selected } => selected,
            QuizPhase::Revealed { selected, .. } => Some(selected),
            QuizPhase::Complete => None,
        }
    }

    /// Final result, once every question has been answered.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        self.is_complete().then(|| QuizOutcome {
            score: self.score,
            total: self.total(),
            tier: QuizTier::for_score(self.score, self.total()),
        })
    }

    pub fn select_option(&mut self, option: usize) {
        let Some(question) = self.current_question() else {
            return;
        };
        if let QuizPhase::Answering { selected } = &mut self.phase
            && option < question.options.len()
        {
            *selected = Some(option);
        }
    }

    /// Move the pending selection by `delta`, wrapping around the options.
    pub fn move_selection(&mut self, delta: isize) {
        let Some(question) = self.current_question() else {
            return;
        };
        let QuizPhase::Answering { selected } = self.phase else {
            return;
        };
        let count = question.options.len() as isize;
        if count == 0 {
            return;
        }
        let next = match selected {
            Some(current) => (current as isize + delta).rem_euclid(count),
            None if delta < 0 => count - 1,
            None => 0,
        };
        self.phase = QuizPhase::Answering {
            selected: Some(next as usize),
        };
    }

    /// Lock in the pending selection. No effect without a selection or once revealed.
    pub fn submit(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };
        let QuizPhase::Answering {
            selected: Some(selected),
        } = self.phase
        else {
            return;
        };
        let correct = question.is_correct(selected);
        if correct {
            self.score += 1;
        }
        tracing::debug!(question = self.index, selected, correct, "Quiz answer submitted");
        self.phase = QuizPhase::Revealed { selected, correct };
    }

    /// Advance past a revealed question.
    pub fn next(&mut self) {
        if !matches!(self.phase, QuizPhase::Revealed { .. }) {
            return;
        }
        if self.is_last_question() {
            self.phase = QuizPhase::Complete;
            tracing::info!(score = self.score, total = self.total(), "Quiz complete");
        } else {
            self.index += 1;
            self.phase = QuizPhase::Answering { selected: None };
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.questions);
    }
}

#[cfg(test)]
mod tests {
    use super::{QuizEngine, QuizPhase, QuizTier};
    use rizal_content::QUESTIONS;

    fn answer(quiz: &mut QuizEngine, option: usize) {
        quiz.select_option(option);
        quiz.submit();
        quiz.next();
    }

    #[test]
    fn starts_answering_first_question() {
        let quiz = QuizEngine::new(QUESTIONS);
        assert_eq!(quiz.phase(), QuizPhase::Answering { selected: None });
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.total(), 3);
    }

    #[test]
    fn submit_requires_selection() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.submit();
        assert_eq!(quiz.phase(), QuizPhase::Answering { selected: None });
    }

    #[test]
    fn correct_answer_scores_once() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.select_option(QUESTIONS[0].correct);
        quiz.submit();
        assert_eq!(quiz.score(), 1);
        assert_eq!(
            quiz.phase(),
            QuizPhase::Revealed {
                selected: 1,
                correct: true
            }
        );
        quiz.submit();
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn wrong_answer_does_not_score() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.select_option(0);
        quiz.submit();
        assert_eq!(quiz.score(), 0);
        assert!(matches!(
            quiz.phase(),
            QuizPhase::Revealed { correct: false, .. }
        ));
    }

    #[test]
    fn selection_locked_after_reveal() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.select_option(0);
        quiz.submit();
        quiz.select_option(1);
        quiz.move_selection(1);
        assert_eq!(quiz.selected(), Some(0));
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.select_option(17);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn next_only_after_reveal() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.next();
        assert_eq!(quiz.index(), 0);
        quiz.select_option(0);
        quiz.next();
        assert_eq!(quiz.index(), 0);
    }

    #[test]
    fn correct_wrong_correct_is_great_job() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        answer(&mut quiz, QUESTIONS[0].correct);
        answer(&mut quiz, (QUESTIONS[1].correct + 1) % 4);
        answer(&mut quiz, QUESTIONS[2].correct);

        let outcome = quiz.outcome().expect("quiz complete");
        assert_eq!((outcome.score, outcome.total), (2, 3));
        assert_eq!(outcome.tier, QuizTier::Great);
        assert!(outcome.tier.message().starts_with("Great job"));
    }

    #[test]
    fn score_never_exceeds_answered() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        for question in QUESTIONS {
            assert!(quiz.score() <= quiz.answered());
            quiz.select_option(question.correct);
            quiz.submit();
            assert!(quiz.score() <= quiz.answered());
            quiz.next();
        }
        assert_eq!(quiz.score(), quiz.total());
        assert_eq!(quiz.outcome().map(|o| o.tier), Some(QuizTier::Perfect));
    }

    #[test]
    fn restart_resets_everything() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        answer(&mut quiz, QUESTIONS[0].correct);
        quiz.select_option(2);
        quiz.submit();
        quiz.restart();
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.phase(), QuizPhase::Answering { selected: None });

        for question in QUESTIONS {
            answer(&mut quiz, question.correct);
        }
        quiz.restart();
        assert_eq!((quiz.score(), quiz.index()), (0, 0));
        assert!(!quiz.is_complete());
    }

    #[test]
    fn move_selection_wraps() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.move_selection(-1);
        assert_eq!(quiz.selected(), Some(3));
        quiz.move_selection(1);
        assert_eq!(quiz.selected(), Some(0));
        quiz.move_selection(1);
        assert_eq!(quiz.selected(), Some(1));
    }

    #[test]
    fn tiers_by_percentage() {
        assert_eq!(QuizTier::for_score(3, 3), QuizTier::Perfect);
        assert_eq!(QuizTier::for_score(2, 3), QuizTier::Great);
        assert_eq!(QuizTier::for_score(1, 3), QuizTier::GoodEffort);
        assert_eq!(QuizTier::for_score(0, 3), QuizTier::GoodEffort);
        assert_eq!(QuizTier::for_score(0, 0), QuizTier::GoodEffort);
    }

    #[test]
    fn empty_quiz_is_complete_immediately() {
        let quiz = QuizEngine::new(&[]);
        assert!(quiz.is_complete());
        assert!(quiz.current_question().is_none());
    }
}
