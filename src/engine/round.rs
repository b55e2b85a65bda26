use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{is_place_number, Chips, DiceRoll, LineBetKind, Phase, ResolutionReason};
use crate::engine::ledger::Ledger;

/// Что произошло после броска (для UI и истории).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RollOutcome {
    /// Бросок ничего не значит: нет активного раунда или нет линейной ставки.
    Ignored,
    /// Come-out установил поинт.
    PointEstablished(u8),
    /// Поинт не выпал, семёрки не было. Возможно, сыграла Place-ставка.
    KeepRolling {
        /// `(номер, зачислено)`, если выплачена Place-ставка.
        place_bet_win: Option<(u8, Chips)>,
    },
    /// Раунд решён.
    Resolved {
        won: bool,
        reason: ResolutionReason,
        /// Сколько сгорело на Place-ставках (только seven-out).
        place_bets_forfeited: Chips,
    },
}

/// Конечный автомат раунда крэпса.
///
/// Сам фишек не хранит: все расчёты идут через переданный `Ledger`.
/// Недопустимые переходы - тихие no-op.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundStateMachine {
    phase: Phase,
    point: Option<u8>,
    last_place_bet_winnings: Chips,
    last_place_bet_winning_number: Option<u8>,
}

impl RoundStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn point(&self) -> Option<u8> {
        self.point
    }

    /// Выигрыш последней сыгравшей Place-ставки (ставка + выплата), иначе 0.
    pub fn last_place_bet_winnings(&self) -> Chips {
        self.last_place_bet_winnings
    }

    pub fn last_place_bet_winning_number(&self) -> Option<u8> {
        self.last_place_bet_winning_number
    }

    /// Ставка сделана: `WaitingForBet -> ComeOut`. В других фазах ничего не делает.
    pub fn place_bet(&mut self) {
        if self.phase == Phase::WaitingForBet {
            self.phase = Phase::ComeOut;
        }
    }

    /// Обработать бросок костей.
    pub fn roll(&mut self, ledger: &mut Ledger, dice: DiceRoll) -> RollOutcome {
        let total = dice.total();

        match self.phase {
            Phase::ComeOut => self.handle_come_out(ledger, total),
            Phase::Point(point) => self.handle_point_roll(ledger, total, point),
            Phase::WaitingForBet | Phase::Resolved { .. } => RollOutcome::Ignored,
        }
    }

    /// Можно ли сейчас поставить (или добавить) Place-ставку на `number`.
    pub fn can_place_bet(&self, number: u8) -> bool {
        match self.phase {
            Phase::Point(point) => number != point && is_place_number(number),
            _ => false,
        }
    }

    /// Вернуться к `WaitingForBet`.
    ///
    /// Неразыгранные Place-ставки возвращаются, а не сгорают. Так же
    /// возвращается линейная ставка, если раунд прервали до решения.
    pub fn reset(&mut self, ledger: &mut Ledger) {
        self.phase = Phase::WaitingForBet;
        self.point = None;
        self.last_place_bet_winnings = Chips::ZERO;
        self.last_place_bet_winning_number = None;

        ledger.clear_place_bets();
        ledger.push_line_bet();
    }

    fn handle_come_out(&mut self, ledger: &mut Ledger, total: u8) -> RollOutcome {
        let Some(kind) = ledger.line_bet_kind() else {
            return RollOutcome::Ignored;
        };

        match (kind, total) {
            (LineBetKind::Pass, 7 | 11) => {
                info!(total, "come-out natural, pass line wins");
                ledger.win_line_bet();
                self.resolve(true, ResolutionReason::Natural, Chips::ZERO)
            }
            (LineBetKind::Pass, 2 | 3 | 12) => {
                info!(total, "come-out craps, pass line loses");
                ledger.lose_line_bet();
                self.resolve(false, ResolutionReason::Craps, Chips::ZERO)
            }
            (LineBetKind::DontPass, 7 | 11) => {
                info!(total, "come-out natural, don't pass loses");
                ledger.lose_line_bet();
                self.resolve(false, ResolutionReason::Natural, Chips::ZERO)
            }
            (LineBetKind::DontPass, 2 | 3) => {
                info!(total, "come-out craps, don't pass wins");
                ledger.win_line_bet();
                self.resolve(true, ResolutionReason::Craps, Chips::ZERO)
            }
            (LineBetKind::DontPass, 12) => {
                info!("come-out bar 12, don't pass pushes");
                ledger.push_line_bet();
                self.resolve(false, ResolutionReason::BarTwelvePush, Chips::ZERO)
            }
            // 4, 5, 6, 8, 9, 10
            (_, point) => {
                info!(point, "point established");
                self.point = Some(point);
                self.phase = Phase::Point(point);
                RollOutcome::PointEstablished(point)
            }
        }
    }

    fn handle_point_roll(&mut self, ledger: &mut Ledger, total: u8, point: u8) -> RollOutcome {
        let Some(kind) = ledger.line_bet_kind() else {
            return RollOutcome::Ignored;
        };

        self.last_place_bet_winnings = Chips::ZERO;
        self.last_place_bet_winning_number = None;

        if total == point {
            // Place-ставки здесь не рассчитываются: их вернёт reset().
            info!(point, ?kind, "point made");
            let won = kind == LineBetKind::Pass;
            if won {
                ledger.win_line_bet();
            } else {
                ledger.lose_line_bet();
            }
            return self.resolve(won, ResolutionReason::PointMade, Chips::ZERO);
        }

        if total == 7 {
            info!(point, ?kind, "seven out");
            let forfeited = ledger.place_bets_total();
            ledger.resolve_place_bets(total, true);
            let won = kind == LineBetKind::DontPass;
            if won {
                ledger.win_line_bet();
            } else {
                ledger.lose_line_bet();
            }
            return self.resolve(won, ResolutionReason::SevenOut, forfeited);
        }

        let winnings = ledger.resolve_place_bets(total, false);
        let place_bet_win = if winnings.is_zero() {
            None
        } else {
            info!(number = total, %winnings, "place bet hit");
            self.last_place_bet_winnings = winnings;
            self.last_place_bet_winning_number = Some(total);
            Some((total, winnings))
        };

        RollOutcome::KeepRolling { place_bet_win }
    }

    fn resolve(&mut self, won: bool, reason: ResolutionReason, place_bets_forfeited: Chips) -> RollOutcome {
        self.phase = Phase::Resolved { won };
        self.point = None;
        RollOutcome::Resolved {
            won,
            reason,
            place_bets_forfeited,
        }
    }
}
