use prep_core::model::{Question, ScoreSummary};
use services::{ExpiryAction, QuizSession, SessionPhase, TickOutcome};

/// Render status of one cell in the question-overview grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionStatus {
    Current,
    Flagged,
    Answered,
    Unanswered,
}

impl QuestionStatus {
    /// CSS class hook for the overview cell.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            QuestionStatus::Current => "overview-cell overview-cell--current",
            QuestionStatus::Flagged => "overview-cell overview-cell--flagged",
            QuestionStatus::Answered => "overview-cell overview-cell--answered",
            QuestionStatus::Unanswered => "overview-cell",
        }
    }
}

/// View-model wrapping the quiz session for the quiz page.
///
/// Adds the bits of UI bookkeeping the pure machine refuses to carry: the
/// pending expiry prompt and the transient notice line.
pub struct QuizVm {
    session: QuizSession,
    expiry_prompt: bool,
    notice: Option<String>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            expiry_prompt: false,
            notice: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    #[must_use]
    pub fn into_session(self) -> QuizSession {
        self.session
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.session.current_question()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.session.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.session.is_empty()
    }

    /// Percentage of the progress bar: position, not answered count.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let len = self.session.len().max(1);
        (self.session.current_index() + 1) as f64 / len as f64 * 100.0
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.session.answered_count()
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&str> {
        let id = self.session.current_question().id.clone();
        self.session.answer_for(&id)
    }

    #[must_use]
    pub fn current_flagged(&self) -> bool {
        let id = self.session.current_question().id.clone();
        self.session.is_flagged(&id)
    }

    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.session.remaining_secs()
    }

    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.session.timer_active()
    }

    #[must_use]
    pub fn score(&self) -> Option<&ScoreSummary> {
        self.session.score()
    }

    /// True while the submit-or-continue dialog should be shown.
    #[must_use]
    pub fn expiry_prompt(&self) -> bool {
        self.expiry_prompt
    }

    /// Transient notice to render, cleared on the next interaction.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn status_of(&self, index: usize) -> QuestionStatus {
        if index == self.session.current_index() {
            return QuestionStatus::Current;
        }
        let Some(question) = self.session.quiz().question(index) else {
            return QuestionStatus::Unanswered;
        };
        if self.session.is_flagged(&question.id) {
            QuestionStatus::Flagged
        } else if self.session.answer_for(&question.id).is_some() {
            QuestionStatus::Answered
        } else {
            QuestionStatus::Unanswered
        }
    }

    // ─── Intents ───────────────────────────────────────────────────────────

    pub fn answer(&mut self, value: String) {
        self.notice = None;
        self.session.answer_current(value);
    }

    pub fn next(&mut self) {
        self.notice = None;
        self.session.next();
    }

    pub fn previous(&mut self) {
        self.notice = None;
        self.session.previous();
    }

    pub fn jump(&mut self, index: usize) {
        self.notice = None;
        self.session.jump(index);
    }

    pub fn skip(&mut self) {
        self.notice = Some("Question skipped".to_string());
        self.session.next();
    }

    pub fn toggle_flag(&mut self) {
        let flagged = self.session.toggle_flag();
        self.notice = Some(if flagged {
            "Question flagged for review".to_string()
        } else {
            "Question unflagged".to_string()
        });
    }

    /// Advances the countdown; fills the prompt/notice per expiry policy.
    pub fn tick(&mut self) {
        match self.session.tick() {
            TickOutcome::Expired(ExpiryAction::PromptSubmit) => {
                self.expiry_prompt = true;
            }
            TickOutcome::Expired(ExpiryAction::ContinueUntimed) => {
                self.notice = Some("Time's up for this question!".to_string());
            }
            TickOutcome::Running { .. } | TickOutcome::Inactive => {}
        }
    }

    /// "Continue without the timer" choice on the expiry dialog.
    pub fn continue_untimed(&mut self) {
        self.expiry_prompt = false;
        self.session.disable_timer();
    }

    /// Clears the expiry dialog before a submit proceeds.
    pub fn dismiss_expiry_prompt(&mut self) {
        self.expiry_prompt = false;
    }

    /// Records a failed submission message after the machine reverted.
    pub fn note_submit_failure(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }
}
