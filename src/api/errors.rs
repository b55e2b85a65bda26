use serde::{Deserialize, Serialize};

use crate::domain::DiceError;
use crate::engine::{LedgerError, SessionError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, кость = 7).
    BadRequest(String),

    /// Команда не может быть выполнена в текущей фазе раунда.
    InvalidCommand(String),

    /// Ошибка леджера (фишки, номера ставок).
    LedgerError(String),

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::LedgerError(err.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Ledger(e) => e.into(),
            other => ApiError::InvalidCommand(other.to_string()),
        }
    }
}

impl From<DiceError> for ApiError {
    fn from(err: DiceError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
