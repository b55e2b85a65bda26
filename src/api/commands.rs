use serde::{Deserialize, Serialize};

use crate::api::dto::LineBetKindApi;
use crate::domain::chips::Chips;

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`CrapsOperation`),
/// которые Linera экспонирует наружу в виде GraphQL mutations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Линейная ставка и начало раунда (только из ожидания ставки).
    StartRound(StartRoundCommand),

    /// Бросок с известными значениями костей (кости бросил клиент).
    Roll(RollCommand),

    /// Бросок костями сессии.
    Shoot,

    /// Новая Place-ставка на номер.
    PlacePlaceBet(PlaceBetCommand),

    /// Добавить к существующей Place-ставке.
    IncreasePlaceBet(PlaceBetCommand),

    /// Уменьшить Place-ставку (до нуля - снять).
    DecreasePlaceBet(PlaceBetCommand),

    /// Снять Place-ставку с полным возвратом.
    TakeDownPlaceBet { number: u8 },

    /// Сброс после решённого раунда.
    FinishRound,

    /// Новая игра со стартовым банкроллом.
    NewGame,
}

/// Линейная ставка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartRoundCommand {
    pub kind: LineBetKindApi,
    pub amount: Chips,
}

/// Значения костей. Проверяются на 1..=6 при выполнении.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollCommand {
    pub die1: u8,
    pub die2: u8,
}

/// Place-ставка: номер + сумма.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceBetCommand {
    pub number: u8,
    pub amount: Chips,
}
