//! Доменная модель крэпса: фишки, кости, ставки, фазы раунда, конфиг стола.

pub mod bets;
pub mod chips;
pub mod config;
pub mod dice;
pub mod phase;

/// Номер раунда внутри сессии (монотонный счётчик).
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use bets::*;
pub use chips::*;
pub use config::*;
pub use dice::*;
pub use phase::*;
