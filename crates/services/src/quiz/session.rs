use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::fmt;

use prep_core::model::{
    Question, QuestionId, Quiz, QuizConfig, ScoreSummary, TimerExpiryPolicy,
};

use crate::api::QuizSubmission;
use crate::error::QuizError;

//
// ─── PHASES AND TIMER EVENTS ───────────────────────────────────────────────────
//

/// Lifecycle phase of one quiz attempt.
///
/// `Idle` and `Abandoned` have no representation here: a session object
/// exists only between start and completion, so "idle" is the absence of a
/// session and abandoning is dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    Submitting,
    Completed,
}

/// What the caller should do after a countdown expires.
///
/// This is an effect description, not an effect: the session never submits
/// or shows UI by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryAction {
    /// Ask the user whether to submit now; timing is already off.
    PromptSubmit,
    /// Tell the user time is up and carry on untimed.
    ContinueUntimed,
}

/// Result of advancing the countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timing is off (disabled, expired earlier, or not in progress).
    Inactive,
    /// The countdown is still running with this many seconds left.
    Running { remaining: u32 },
    /// The countdown just hit zero; timing has been switched off.
    Expired(ExpiryAction),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state for one quiz attempt.
///
/// Holds the server-issued quiz, the cursor, the answer map, and the flag
/// set. All methods are synchronous and side-effect free; the network
/// transitions (start/submit) live in `QuizService`. Nothing here survives
/// a process restart: abandoning or reloading loses the attempt.
pub struct QuizSession {
    quiz: Quiz,
    current: usize,
    answers: HashMap<QuestionId, String>,
    flags: HashSet<QuestionId>,
    phase: SessionPhase,
    timer_active: bool,
    remaining_secs: Option<u32>,
    expiry_policy: TimerExpiryPolicy,
    started_at: DateTime<Utc>,
    score: Option<ScoreSummary>,
}

impl QuizSession {
    /// Creates a session in `InProgress` at question 0.
    ///
    /// When the configuration enables timing, the countdown is seeded from
    /// the first question's suggested allowance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the quiz has no questions.
    pub fn new(
        quiz: Quiz,
        config: &QuizConfig,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if quiz.is_empty() {
            return Err(QuizError::Empty);
        }

        let timer_active = config.enable_timer;
        let remaining_secs = timer_active
            .then(|| quiz.question(0).map(Question::time_allowance_secs))
            .flatten();

        Ok(Self {
            quiz,
            current: 0,
            answers: HashMap::new(),
            flags: HashSet::new(),
            phase: SessionPhase::InProgress,
            timer_active,
            remaining_secs,
            expiry_policy: config.expiry_policy,
            started_at,
            score: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Total number of questions in this attempt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quiz.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quiz.is_empty()
    }

    /// Zero-based index of the question under the cursor.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question under the cursor.
    ///
    /// # Panics
    ///
    /// Never panics: the index is clamped to the question sequence and the
    /// sequence is non-empty by construction.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current]
    }

    /// The recorded answer for `id`, if any.
    #[must_use]
    pub fn answer_for(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    /// The full answer map, keyed by question id.
    #[must_use]
    pub fn answers(&self) -> &HashMap<QuestionId, String> {
        &self.answers
    }

    /// Number of questions with a recorded answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_flagged(&self, id: &QuestionId) -> bool {
        self.flags.contains(id)
    }

    #[must_use]
    pub fn flagged(&self) -> &HashSet<QuestionId> {
        &self.flags
    }

    /// The score summary, present once the attempt completed.
    #[must_use]
    pub fn score(&self) -> Option<&ScoreSummary> {
        self.score.as_ref()
    }

    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.timer_active && self.phase == SessionPhase::InProgress
    }

    /// Seconds left on the current question's countdown, when timing.
    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.timer_active().then_some(self.remaining_secs).flatten()
    }

    /// Whole seconds since the attempt started.
    #[must_use]
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        let delta = now.signed_duration_since(self.started_at).num_seconds();
        u64::try_from(delta).unwrap_or(0)
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────
    //

    /// Moves to the next question. A no-op on the last question.
    pub fn next(&mut self) {
        self.jump(self.current.saturating_add(1));
    }

    /// Moves to the previous question. A no-op on the first question.
    pub fn previous(&mut self) {
        self.jump(self.current.saturating_sub(1));
    }

    /// Moves the cursor to `index`, clamped to the question sequence.
    ///
    /// Only permitted while in progress; any other phase is a no-op. When
    /// timing is active, landing on a question reseeds the countdown from
    /// its suggested allowance.
    pub fn jump(&mut self, index: usize) {
        if self.phase != SessionPhase::InProgress {
            return;
        }

        let clamped = index.min(self.quiz.len() - 1);
        self.current = clamped;
        if self.timer_active {
            self.remaining_secs = Some(self.current_question().time_allowance_secs());
        }
    }

    //
    // ─── ANSWERS AND FLAGS ─────────────────────────────────────────────────
    //

    /// Records (or overwrites) the answer for the question under the cursor.
    ///
    /// Does not advance the cursor. Ignored outside `InProgress`. The map
    /// can therefore only ever hold ids from this quiz's sequence.
    pub fn answer_current(&mut self, value: impl Into<String>) {
        if self.phase != SessionPhase::InProgress {
            return;
        }
        let id = self.current_question().id.clone();
        self.answers.insert(id, value.into());
    }

    /// Toggles the review flag on the question under the cursor.
    ///
    /// Returns whether the question is flagged afterwards. Purely cosmetic;
    /// flags never travel to the backend.
    pub fn toggle_flag(&mut self) -> bool {
        if self.phase != SessionPhase::InProgress {
            return false;
        }
        let id = self.current_question().id.clone();
        if self.flags.remove(&id) {
            false
        } else {
            self.flags.insert(id);
            true
        }
    }

    //
    // ─── TIMER ─────────────────────────────────────────────────────────────
    //

    /// Advances the countdown by one second.
    ///
    /// When the countdown reaches zero, timing switches off and the
    /// configured expiry action is returned for the caller to act on. The
    /// session never auto-submits.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.timer_active() {
            return TickOutcome::Inactive;
        }

        let Some(remaining) = self.remaining_secs else {
            return TickOutcome::Inactive;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.timer_active = false;
            self.remaining_secs = None;
            let action = match self.expiry_policy {
                TimerExpiryPolicy::PromptSubmit => ExpiryAction::PromptSubmit,
                TimerExpiryPolicy::ContinueUntimed => ExpiryAction::ContinueUntimed,
            };
            return TickOutcome::Expired(action);
        }

        self.remaining_secs = Some(remaining);
        TickOutcome::Running { remaining }
    }

    /// Turns timing off for the rest of the attempt.
    pub fn disable_timer(&mut self) {
        self.timer_active = false;
        self.remaining_secs = None;
    }

    //
    // ─── SUBMISSION ────────────────────────────────────────────────────────
    //

    /// Moves to `Submitting` and builds the wire payload: the whole answer
    /// map (possibly empty) plus elapsed seconds.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` unless the session is in progress.
    pub fn begin_submission(&mut self, now: DateTime<Utc>) -> Result<QuizSubmission, QuizError> {
        if self.phase != SessionPhase::InProgress {
            return Err(QuizError::NotInProgress);
        }

        self.phase = SessionPhase::Submitting;
        Ok(QuizSubmission {
            quiz_id: self.quiz.quiz_id.clone(),
            user_answers: self.answers.clone(),
            time_taken: self.elapsed_secs(now),
        })
    }

    /// Marks the attempt completed with the backend's score.
    pub(crate) fn complete_submission(&mut self, score: ScoreSummary) {
        self.phase = SessionPhase::Completed;
        self.score = Some(score);
    }

    /// Reverts a failed submission to `InProgress`.
    ///
    /// The answer map and flag set are untouched, so the attempt is not
    /// lost and can be retried.
    pub(crate) fn fail_submission(&mut self) {
        if self.phase == SessionPhase::Submitting {
            self.phase = SessionPhase::InProgress;
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("quiz_id", &self.quiz.quiz_id)
            .field("questions", &self.quiz.len())
            .field("current", &self.current)
            .field("answered", &self.answers.len())
            .field("flagged", &self.flags.len())
            .field("phase", &self.phase)
            .field("timer_active", &self.timer_active)
            .field("remaining_secs", &self.remaining_secs)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{Difficulty, QuestionType, QuizId};
    use prep_core::time::fixed_now;

    fn question(id: &str, allowance: u32) -> Question {
        Question {
            id: QuestionId::new(id),
            text: format!("Question {id}"),
            question_type: QuestionType::Descriptive,
            options: None,
            explanation: None,
            ai_answer: None,
            topic: "Algorithms".into(),
            difficulty: Difficulty::Medium,
            source_url: None,
            source_name: None,
            company: None,
            time_estimate: allowance,
        }
    }

    fn quiz(allowances: &[(&str, u32)]) -> Quiz {
        Quiz {
            quiz_id: QuizId::new("quiz-1"),
            questions: allowances
                .iter()
                .map(|(id, secs)| question(id, *secs))
                .collect(),
            enable_timer: true,
        }
    }

    fn timed_config() -> QuizConfig {
        QuizConfig::for_topics(vec!["Algorithms".into()])
    }

    fn untimed_config() -> QuizConfig {
        let mut config = timed_config();
        config.enable_timer = false;
        config
    }

    fn session(allowances: &[(&str, u32)], config: &QuizConfig) -> QuizSession {
        QuizSession::new(quiz(allowances), config, fixed_now()).unwrap()
    }

    #[test]
    fn start_seeds_countdown_from_first_question() {
        let session = session(&[("q1", 45), ("q2", 90)], &timed_config());
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.remaining_secs(), Some(45));
    }

    #[test]
    fn untimed_start_has_no_countdown() {
        let session = session(&[("q1", 45)], &untimed_config());
        assert!(!session.timer_active());
        assert_eq!(session.remaining_secs(), None);
    }

    #[test]
    fn empty_quiz_is_rejected() {
        let err = QuizSession::new(quiz(&[]), &timed_config(), fixed_now()).unwrap_err();
        assert!(matches!(err, QuizError::Empty));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut session = session(&[("q1", 60), ("q2", 60), ("q3", 60)], &untimed_config());

        session.previous();
        assert_eq!(session.current_index(), 0);

        session.next();
        session.next();
        assert_eq!(session.current_index(), 2);
        session.next();
        assert_eq!(session.current_index(), 2);

        session.jump(99);
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn navigation_reseeds_countdown_when_timing() {
        let mut session = session(&[("q1", 45), ("q2", 90)], &timed_config());
        session.tick();
        assert_eq!(session.remaining_secs(), Some(44));

        session.next();
        assert_eq!(session.remaining_secs(), Some(90));

        session.previous();
        assert_eq!(session.remaining_secs(), Some(45));
    }

    #[test]
    fn answers_overwrite_per_question() {
        let mut session = session(&[("q1", 60), ("q2", 60)], &untimed_config());

        session.answer_current("first");
        session.answer_current("second");
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.answer_for(&QuestionId::new("q1")), Some("second"));

        session.next();
        session.answer_current("B");
        assert_eq!(session.answered_count(), 2);
    }

    #[test]
    fn flag_toggle_is_an_idempotent_pair() {
        let mut session = session(&[("q1", 60)], &untimed_config());
        assert!(session.flagged().is_empty());

        assert!(session.toggle_flag());
        assert!(session.is_flagged(&QuestionId::new("q1")));
        assert!(!session.toggle_flag());
        assert!(session.flagged().is_empty());
    }

    #[test]
    fn tick_counts_down_and_expires_with_policy_action() {
        let mut config = timed_config();
        config.expiry_policy = TimerExpiryPolicy::ContinueUntimed;
        let mut session = QuizSession::new(quiz(&[("q1", 2)]), &config, fixed_now()).unwrap();

        assert_eq!(session.tick(), TickOutcome::Running { remaining: 1 });
        assert_eq!(
            session.tick(),
            TickOutcome::Expired(ExpiryAction::ContinueUntimed)
        );
        // Expiry switches timing off; further ticks are inert.
        assert!(!session.timer_active());
        assert_eq!(session.tick(), TickOutcome::Inactive);
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn prompt_policy_reports_prompt_action() {
        let mut session = session(&[("q1", 1)], &timed_config());
        assert_eq!(
            session.tick(),
            TickOutcome::Expired(ExpiryAction::PromptSubmit)
        );
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn disable_timer_stops_ticks() {
        let mut session = session(&[("q1", 60)], &timed_config());
        session.disable_timer();
        assert_eq!(session.tick(), TickOutcome::Inactive);
        assert_eq!(session.remaining_secs(), None);
    }

    #[test]
    fn submission_payload_carries_map_and_elapsed_time() {
        let mut session = session(&[("q1", 60), ("q2", 60)], &untimed_config());
        session.answer_current("A");

        let now = fixed_now() + chrono::Duration::seconds(42);
        let payload = session.begin_submission(now).unwrap();
        assert_eq!(session.phase(), SessionPhase::Submitting);
        assert_eq!(payload.quiz_id, QuizId::new("quiz-1"));
        assert_eq!(payload.time_taken, 42);
        assert_eq!(payload.user_answers.len(), 1);

        // While submitting, interaction is inert.
        session.answer_current("ignored");
        session.next();
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.current_index(), 0);
        assert!(session.begin_submission(now).is_err());
    }

    #[test]
    fn empty_answer_map_is_submittable() {
        let mut session = session(&[("q1", 60)], &untimed_config());
        let payload = session.begin_submission(fixed_now()).unwrap();
        assert!(payload.user_answers.is_empty());
    }

    #[test]
    fn failed_submission_reverts_with_answers_intact() {
        let mut session = session(&[("q1", 60)], &untimed_config());
        session.answer_current("A");
        let _ = session.begin_submission(fixed_now()).unwrap();

        session.fail_submission();
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.answer_for(&QuestionId::new("q1")), Some("A"));

        // The retry produces the same map.
        let retry = session.begin_submission(fixed_now()).unwrap();
        assert_eq!(retry.user_answers.len(), 1);
    }
}
