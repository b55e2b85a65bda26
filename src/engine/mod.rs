//! Движок крэпса: леджер ставок, автомат раунда, выплаты, сессия стола.
//!
//! Высокоуровневый объект: `CrapsSession`
//! Основные операции:
//!   - `start_round` – линейная ставка + переход в come-out
//!   - `shoot` / `roll` – бросок и расчёт
//!   - `finish_round` – сброс после решённого раунда

pub mod errors;
pub mod ledger;
pub mod payout;
pub mod round;
pub mod round_history;
pub mod session;
pub mod validation;

pub use errors::{LedgerError, SessionError};
pub use ledger::Ledger;
pub use payout::{place_bet_odds, place_bet_payout};
pub use round::{RollOutcome, RoundStateMachine};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use session::{CrapsSession, TableSnapshot};

use crate::domain::DiceRoll;

/// Источник случайных костей для engine.
/// Реализации - в infra (обёртки над `rand` и заскриптованные броски).
pub trait DiceSource {
    /// Одна кость, 1..=6.
    fn roll_die(&mut self) -> u8;

    /// Пара костей. Значения вне 1..=6 приводятся к диапазону.
    fn roll_pair(&mut self) -> DiceRoll {
        let die1 = self.roll_die();
        let die2 = self.roll_die();
        DiceRoll::clamped(die1, die2)
    }
}
