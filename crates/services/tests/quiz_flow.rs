use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;

use prep_core::model::{
    AnalyticsSnapshot, ChecklistSnapshot, Difficulty, Question, QuestionId, QuestionType, Quiz,
    QuizConfig, QuizId, ScoreSummary, User, UserId,
};
use prep_core::time::{Clock, fixed_now};
use services::{
    ApiError, Backend, ChatRequest, CompaniesUpdate, LoginRequest, QuizError, QuizService,
    QuizSubmission, RegisterRequest, RegisteredUser, SessionPhase, StartQuizRequest, TopicsUpdate,
};

/// Scripted backend: serves a fixed quiz, optionally fails submissions,
/// and records the submission bodies it receives.
#[derive(Clone, Default)]
struct FakeBackend {
    quiz: Arc<Mutex<Option<Quiz>>>,
    fail_submissions: Arc<Mutex<u32>>,
    submissions: Arc<Mutex<Vec<QuizSubmission>>>,
    start_requests: Arc<Mutex<Vec<StartQuizRequest>>>,
}

impl FakeBackend {
    fn with_quiz(quiz: Quiz) -> Self {
        let backend = Self::default();
        *backend.quiz.lock().unwrap() = Some(quiz);
        backend
    }

    fn fail_next_submissions(&self, count: u32) {
        *self.fail_submissions.lock().unwrap() = count;
    }

    fn submissions(&self) -> Vec<QuizSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    fn start_requests(&self) -> Vec<StartQuizRequest> {
        self.start_requests.lock().unwrap().clone()
    }
}

fn transport_error() -> ApiError {
    ApiError::Backend {
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        detail: "backend unavailable".into(),
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn topics(&self) -> Result<Vec<String>, ApiError> {
        Ok(vec!["Algorithms".into(), "SQL".into()])
    }

    async fn companies(&self) -> Result<Vec<String>, ApiError> {
        Ok(vec!["Google".into()])
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        Ok(RegisteredUser {
            id: UserId::new("u-new"),
            username: request.username.clone(),
            email: request.email.clone(),
        })
    }

    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        Ok(User {
            id: UserId::new("u-1"),
            username: "dana".into(),
            email: request.email.clone(),
            selected_topics: vec!["Algorithms".into()],
            custom_topics: Vec::new(),
            target_companies: Vec::new(),
            notification_frequency: 10,
            quiz_goal: 1,
            created_at: fixed_now(),
        })
    }

    async fn update_topics(&self, _: &UserId, _: &TopicsUpdate) -> Result<(), ApiError> {
        Ok(())
    }

    async fn update_companies(&self, _: &UserId, _: &CompaniesUpdate) -> Result<(), ApiError> {
        Ok(())
    }

    async fn analytics(&self, _: &UserId) -> Result<AnalyticsSnapshot, ApiError> {
        Ok(AnalyticsSnapshot::default())
    }

    async fn checklist(&self, _: &UserId) -> Result<ChecklistSnapshot, ApiError> {
        Ok(ChecklistSnapshot::default())
    }

    async fn start_quiz(&self, request: &StartQuizRequest) -> Result<Quiz, ApiError> {
        self.start_requests.lock().unwrap().push(request.clone());
        self.quiz
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(transport_error)
    }

    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<ScoreSummary, ApiError> {
        {
            let mut failures = self.fail_submissions.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(transport_error());
            }
        }

        self.submissions.lock().unwrap().push(submission.clone());

        // The backend scores unanswered questions as incorrect, so the
        // fake just counts submitted answers as correct.
        let total = self
            .quiz
            .lock()
            .unwrap()
            .as_ref()
            .map_or(0, |quiz| quiz.len() as u32);
        let scores: HashMap<QuestionId, bool> = submission
            .user_answers
            .keys()
            .map(|id| (id.clone(), true))
            .collect();
        Ok(ScoreSummary {
            quiz_id: submission.quiz_id.clone(),
            total_questions: total,
            correct_answers: scores.len() as u32,
            scores,
        })
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
        Ok(format!("echo: {}", request.message))
    }
}

fn question(id: &str) -> Question {
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
        time_estimate: 60,
    }
}

fn three_question_quiz() -> Quiz {
    Quiz {
        quiz_id: QuizId::new("quiz-1"),
        questions: vec![question("q1"), question("q2"), question("q3")],
        enable_timer: false,
    }
}

fn untimed_config() -> QuizConfig {
    let mut config = QuizConfig::for_topics(vec!["Algorithms".into()]);
    config.num_questions = 3;
    config.enable_timer = false;
    config
}

#[tokio::test]
async fn start_moves_idle_to_in_progress_and_seeds_timer() {
    let mut quiz = three_question_quiz();
    quiz.questions[0].time_estimate = 45;
    let backend = Arc::new(FakeBackend::with_quiz(quiz));
    let service = QuizService::new(Clock::fixed(fixed_now()), backend);

    let mut config = untimed_config();
    config.enable_timer = true;
    let session = service
        .start(&UserId::new("u-1"), &config)
        .await
        .expect("start quiz");

    assert_eq!(session.phase(), SessionPhase::InProgress);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.remaining_secs(), Some(45));
}

#[tokio::test]
async fn invalid_config_fails_before_any_request() {
    let backend = Arc::new(FakeBackend::with_quiz(three_question_quiz()));
    let service = QuizService::new(Clock::fixed(fixed_now()), Arc::clone(&backend));

    let empty_topics = QuizConfig::for_topics(Vec::new());
    let err = service
        .start(&UserId::new("u-1"), &empty_topics)
        .await
        .unwrap_err();
    assert!(matches!(err, QuizError::Config(_)));

    let mut too_many = untimed_config();
    too_many.num_questions = 51;
    let err = service
        .start(&UserId::new("u-1"), &too_many)
        .await
        .unwrap_err();
    assert!(matches!(err, QuizError::Config(_)));

    assert!(backend.start_requests().is_empty());
}

#[tokio::test]
async fn failed_start_leaves_caller_idle() {
    let backend = Arc::new(FakeBackend::default());
    let service = QuizService::new(Clock::fixed(fixed_now()), backend);

    let err = service
        .start(&UserId::new("u-1"), &untimed_config())
        .await
        .unwrap_err();
    assert!(matches!(err, QuizError::Api(_)));
    assert_eq!(err.detail(), Some("backend unavailable"));
}

#[tokio::test]
async fn end_to_end_answer_skip_submit() {
    let backend = Arc::new(FakeBackend::with_quiz(three_question_quiz()));
    let start_at = fixed_now();
    let start_service = QuizService::new(Clock::fixed(start_at), Arc::clone(&backend));
    let submit_service = QuizService::new(
        Clock::fixed(start_at + Duration::seconds(75)),
        Arc::clone(&backend),
    );

    let mut session = start_service
        .start(&UserId::new("u-1"), &untimed_config())
        .await
        .expect("start quiz");

    session.answer_current("A");
    session.next();
    session.answer_current("B");
    session.next(); // q3 skipped

    let score = submit_service.submit(&mut session).await.expect("submit");
    assert_eq!(session.phase(), SessionPhase::Completed);
    assert_eq!(score.total_questions, 3);
    assert_eq!(score.correct_answers, 2);

    let submissions = backend.submissions();
    assert_eq!(submissions.len(), 1);
    let body = &submissions[0];
    assert_eq!(body.quiz_id, QuizId::new("quiz-1"));
    assert_eq!(body.time_taken, 75);
    assert_eq!(body.user_answers.len(), 2);
    assert_eq!(body.user_answers[&QuestionId::new("q1")], "A");
    assert_eq!(body.user_answers[&QuestionId::new("q2")], "B");
    assert!(!body.user_answers.contains_key(&QuestionId::new("q3")));
}

#[tokio::test]
async fn empty_answer_map_submits_and_scores_zero() {
    let backend = Arc::new(FakeBackend::with_quiz(three_question_quiz()));
    let service = QuizService::new(Clock::fixed(fixed_now()), Arc::clone(&backend));

    let mut session = service
        .start(&UserId::new("u-1"), &untimed_config())
        .await
        .expect("start quiz");

    let score = service.submit(&mut session).await.expect("submit");
    assert_eq!(score.correct_answers, 0);
    assert_eq!(score.total_questions, 3);

    let submissions = backend.submissions();
    assert!(submissions[0].user_answers.is_empty());
}

#[tokio::test]
async fn failed_submission_reverts_and_retry_succeeds() {
    let backend = Arc::new(FakeBackend::with_quiz(three_question_quiz()));
    let service = QuizService::new(Clock::fixed(fixed_now()), Arc::clone(&backend));

    let mut session = service
        .start(&UserId::new("u-1"), &untimed_config())
        .await
        .expect("start quiz");
    session.answer_current("A");

    backend.fail_next_submissions(1);
    let err = service.submit(&mut session).await.unwrap_err();
    assert!(matches!(err, QuizError::Api(_)));
    assert_eq!(session.phase(), SessionPhase::InProgress);
    assert_eq!(session.answer_for(&QuestionId::new("q1")), Some("A"));
    assert!(session.score().is_none());

    // The attempt is not lost: the retry carries the same answers.
    let score = service.submit(&mut session).await.expect("retry");
    assert_eq!(session.phase(), SessionPhase::Completed);
    assert_eq!(score.correct_answers, 1);
}

#[tokio::test]
async fn double_submit_is_rejected() {
    let backend = Arc::new(FakeBackend::with_quiz(three_question_quiz()));
    let service = QuizService::new(Clock::fixed(fixed_now()), backend);

    let mut session = service
        .start(&UserId::new("u-1"), &untimed_config())
        .await
        .expect("start quiz");

    service.submit(&mut session).await.expect("submit");
    let err = service.submit(&mut session).await.unwrap_err();
    assert!(matches!(err, QuizError::NotInProgress));
}
