use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Стартовый банкролл по умолчанию.
pub const DEFAULT_STARTING_BANKROLL: Chips = Chips(1_000);

/// Настройки стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrapsConfig {
    /// С чем игрок садится за стол и к чему возвращается после `new_game`.
    pub starting_bankroll: Chips,

    /// Минимальная ставка (линия и Place).
    ///
    /// 0 = без минимума, ставка в 0 фишек принимается как вырожденный случай.
    pub min_bet: Chips,
}

impl Default for CrapsConfig {
    fn default() -> Self {
        Self {
            starting_bankroll: DEFAULT_STARTING_BANKROLL,
            min_bet: Chips::ZERO,
        }
    }
}

impl CrapsConfig {
    pub fn with_bankroll(starting_bankroll: Chips) -> Self {
        Self {
            starting_bankroll,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.starting_bankroll.is_zero() {
            return Err("CrapsConfig: starting_bankroll = 0".into());
        }
        if self.min_bet > self.starting_bankroll {
            return Err("CrapsConfig: min_bet > starting_bankroll".into());
        }
        Ok(())
    }
}
