use crate::domain::Chips;

use thiserror::Error;

/// Ошибки леджера. Любая из них означает, что состояние не изменилось.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Недостаточно фишек: нужно {needed}, доступно {available}")]
    InsufficientFunds { needed: Chips, available: Chips },

    #[error("Номер {0} недопустим для Place-ставки")]
    InvalidPlaceNumber(u8),

    #[error("На номер {0} уже есть Place-ставка, используйте increase/decrease")]
    DuplicatePlaceBet(u8),

    #[error("На номер {0} нет Place-ставки")]
    NoPlaceBet(u8),

    #[error("Ставка {amount} меньше минимальной {min}")]
    BelowMinimum { amount: Chips, min: Chips },
}

/// Ошибки сессии (стол + раунд + кости).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Раунд уже идёт")]
    RoundInProgress,

    #[error("Сейчас нельзя ставить на {0}")]
    BettingClosed(u8),
}
