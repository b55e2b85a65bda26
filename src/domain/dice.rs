use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Кость вне диапазона 1..=6.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DiceError {
    #[error("Значение кости {0} вне диапазона 1..=6")]
    OutOfRange(u8),
}

/// Бросок двух костей. Значения проверены при создании,
/// в том числе при десериализации.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawDiceRoll")]
pub struct DiceRoll {
    die1: u8,
    die2: u8,
}

/// Непроверенный бросок из внешних данных.
#[derive(Deserialize)]
struct RawDiceRoll {
    die1: u8,
    die2: u8,
}

impl TryFrom<RawDiceRoll> for DiceRoll {
    type Error = DiceError;

    fn try_from(raw: RawDiceRoll) -> Result<Self, Self::Error> {
        DiceRoll::new(raw.die1, raw.die2)
    }
}

impl DiceRoll {
    pub fn new(die1: u8, die2: u8) -> Result<Self, DiceError> {
        for die in [die1, die2] {
            if !(1..=6).contains(&die) {
                return Err(DiceError::OutOfRange(die));
            }
        }
        Ok(Self { die1, die2 })
    }

    /// Без ошибки: значения прижимаются к 1..=6.
    pub fn clamped(die1: u8, die2: u8) -> Self {
        Self {
            die1: die1.clamp(1, 6),
            die2: die2.clamp(1, 6),
        }
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    /// Сумма очков (2..=12).
    pub fn total(&self) -> u8 {
        self.die1 + self.die2
    }
}
