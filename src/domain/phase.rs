use serde::{Deserialize, Serialize};

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Начальное состояние: ждём линейную ставку, кости игнорируются.
    #[default]
    WaitingForBet,
    /// Ставка есть, ждём первый бросок раунда.
    ComeOut,
    /// Поинт установлен (4, 5, 6, 8, 9, 10).
    Point(u8),
    /// Раунд решён. Показываем результат до `reset()`.
    Resolved { won: bool },
}

impl Phase {
    /// Идёт ли раунд (кости что-то значат).
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::ComeOut | Phase::Point(_))
    }

    pub fn point(&self) -> Option<u8> {
        match self {
            Phase::Point(p) => Some(*p),
            _ => None,
        }
    }
}

/// Почему раунд решился именно так.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResolutionReason {
    /// 7 или 11 на come-out.
    Natural,
    /// 2, 3 или 12 на come-out (для Don't Pass - только 2 и 3).
    Craps,
    /// 12 на come-out для Don't Pass: ставка возвращается.
    BarTwelvePush,
    /// Поинт выпал повторно.
    PointMade,
    /// Семёрка при установленном поинте.
    SevenOut,
}
