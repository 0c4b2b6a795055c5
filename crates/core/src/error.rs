use thiserror::Error;

use crate::model::QuizConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    QuizConfig(#[from] QuizConfigError),
}
