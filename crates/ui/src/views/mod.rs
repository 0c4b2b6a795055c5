mod chat;
mod checklist;
mod dashboard;
mod history;
mod login;
mod mentors;
mod pickers;
mod practice;
mod quiz;
mod register;
mod settings;
mod state;

pub use chat::ChatView;
pub use checklist::ChecklistView;
pub use dashboard::DashboardView;
pub use history::HistoryView;
pub use login::LoginView;
pub use mentors::MentorsView;
pub use practice::PracticeView;
pub use quiz::QuizView;
pub use register::RegisterView;
pub use settings::SettingsView;
pub use state::{
    ActiveQuiz, AuthState, LastScore, ViewError, ViewState, view_state_from_resource,
};
