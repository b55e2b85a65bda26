use serde::{Deserialize, Serialize};

use crate::domain::{Chips, LineBetKind, ResolutionReason, RoundId};

/// Тип события за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Линейная ставка сделана, раунд начался.
    RoundStarted {
        round_id: RoundId,
        kind: LineBetKind,
        amount: Chips,
    },

    /// Брошены кости.
    DiceRolled { die1: u8, die2: u8, total: u8 },

    /// Поинт установлен.
    PointEstablished { point: u8 },

    /// Place-ставка поставлена/изменена/снята. `amount` - итоговая сумма на номере.
    PlaceBetChanged { number: u8, amount: Chips },

    /// Сыграла Place-ставка.
    PlaceBetPaid { number: u8, credited: Chips },

    /// Seven-out: Place-ставки сгорели.
    PlaceBetsForfeited { amount: Chips },

    /// Раунд решён.
    RoundResolved {
        round_id: RoundId,
        won: bool,
        reason: ResolutionReason,
        bankroll_after: Chips,
    },

    /// Стол вернулся в ожидание ставки.
    RoundReset { round_id: RoundId },

    /// Новая игра со стартовым банкроллом.
    BankrollReset { bankroll: Chips },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u64,
    pub kind: RoundEventKind,
}

/// История сессии. Живёт только в памяти.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = u64::try_from(self.events.len()).unwrap_or(u64::MAX);
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn last(&self) -> Option<&RoundEventKind> {
        self.events.last().map(|e| &e.kind)
    }
}
