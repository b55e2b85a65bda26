use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Номера, на которые разрешены Place-ставки (и которые могут стать поинтом).
pub const PLACE_NUMBERS: [u8; 6] = [4, 5, 6, 8, 9, 10];

/// Является ли число допустимым номером для Place-ставки / поинта.
pub fn is_place_number(number: u8) -> bool {
    PLACE_NUMBERS.contains(&number)
}

/// Тип линейной ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LineBetKind {
    /// Ставка вместе с шутером: 7/11 на come-out выигрывают, 2/3/12 проигрывают,
    /// дальше выигрывает поинт, проигрывает семёрка.
    Pass,
    /// Ставка против шутера. 12 на come-out - пуш (bar 12).
    DontPass,
}

/// Единственная линейная ставка игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineBet {
    pub kind: LineBetKind,
    pub amount: Chips,
}

impl LineBet {
    pub fn new(kind: LineBetKind, amount: Chips) -> Self {
        Self { kind, amount }
    }
}

/// Place-ставка на конкретный номер.
///
/// В леджере хранится как `number -> amount`; этот тип - для чтения наружу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceBet {
    pub number: u8,
    pub amount: Chips,
}
