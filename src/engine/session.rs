// src/engine/session.rs

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Chips, CrapsConfig, DiceRoll, LineBet, LineBetKind, Phase, PlaceBet, RoundId};
use crate::engine::errors::SessionError;
use crate::engine::ledger::Ledger;
use crate::engine::round::{RollOutcome, RoundStateMachine};
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::validation::{validate_place_bet, validate_round_start};
use crate::engine::DiceSource;

/// Снимок стола после очередного вызова. Его читает презентационный слой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSnapshot {
    pub round_id: RoundId,
    pub phase: Phase,
    pub point: Option<u8>,
    pub bankroll: Chips,
    pub line_bet: Option<LineBet>,
    pub place_bets: Vec<PlaceBet>,
    pub last_place_bet_winnings: Chips,
    pub last_place_bet_winning_number: Option<u8>,
}

/// Сессия за столом: один игрок, один шутер.
///
/// Явный объект-контекст: создаётся хост-приложением и передаётся
/// туда, где нужен. Держит:
/// - леджер (банкролл и ставки);
/// - автомат раунда;
/// - источник костей (в тестах - заскриптованный);
/// - историю событий сессии.
pub struct CrapsSession<D: DiceSource> {
    config: CrapsConfig,
    ledger: Ledger,
    round: RoundStateMachine,
    dice: D,
    round_id: RoundId,
    history: RoundHistory,
}

impl<D: DiceSource> CrapsSession<D> {
    pub fn new(config: CrapsConfig, dice: D) -> Self {
        Self {
            ledger: Ledger::from_config(&config),
            config,
            round: RoundStateMachine::new(),
            dice,
            round_id: 0,
            history: RoundHistory::new(),
        }
    }

    pub fn config(&self) -> &CrapsConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn round(&self) -> &RoundStateMachine {
        &self.round
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    /// Номер текущего (или последнего) раунда. 0 - раундов ещё не было.
    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn bankroll(&self) -> Chips {
        self.ledger.bankroll()
    }

    /// Денег нет ни в банкролле, ни на столе: пора начинать новую игру.
    pub fn is_broke(&self) -> bool {
        self.ledger.bankroll().is_zero()
            && self.ledger.line_bet().is_none()
            && self.ledger.place_bets_total().is_zero()
    }

    pub fn can_place_bet(&self, number: u8) -> bool {
        self.round.can_place_bet(number)
    }

    /// Линейная ставка + переход в come-out.
    pub fn start_round(&mut self, kind: LineBetKind, amount: Chips) -> Result<(), SessionError> {
        validate_round_start(&self.round)?;
        self.ledger.place_line_bet(kind, amount)?;
        self.round.place_bet();

        self.round_id += 1;
        self.history.push(RoundEventKind::RoundStarted {
            round_id: self.round_id,
            kind,
            amount,
        });
        Ok(())
    }

    /// Бросить кости из источника сессии.
    pub fn shoot(&mut self) -> (DiceRoll, RollOutcome) {
        let dice = self.dice.roll_pair();
        let outcome = self.roll(dice);
        (dice, outcome)
    }

    /// Применить уже известный бросок.
    pub fn roll(&mut self, dice: DiceRoll) -> RollOutcome {
        let outcome = self.round.roll(&mut self.ledger, dice);
        if outcome == RollOutcome::Ignored {
            debug!(total = dice.total(), phase = ?self.round.phase(), "roll ignored");
            return outcome;
        }

        self.history.push(RoundEventKind::DiceRolled {
            die1: dice.die1(),
            die2: dice.die2(),
            total: dice.total(),
        });

        match outcome {
            RollOutcome::Ignored => {}
            RollOutcome::PointEstablished(point) => {
                self.history.push(RoundEventKind::PointEstablished { point });
            }
            RollOutcome::KeepRolling { place_bet_win } => {
                if let Some((number, credited)) = place_bet_win {
                    self.history
                        .push(RoundEventKind::PlaceBetPaid { number, credited });
                }
            }
            RollOutcome::Resolved {
                won,
                reason,
                place_bets_forfeited,
            } => {
                if !place_bets_forfeited.is_zero() {
                    self.history.push(RoundEventKind::PlaceBetsForfeited {
                        amount: place_bets_forfeited,
                    });
                }
                self.history.push(RoundEventKind::RoundResolved {
                    round_id: self.round_id,
                    won,
                    reason,
                    bankroll_after: self.ledger.bankroll(),
                });
            }
        }

        outcome
    }

    pub fn place_place_bet(&mut self, number: u8, amount: Chips) -> Result<(), SessionError> {
        validate_place_bet(&self.round, number)?;
        self.ledger.place_place_bet(number, amount)?;
        self.history
            .push(RoundEventKind::PlaceBetChanged { number, amount });
        Ok(())
    }

    pub fn increase_place_bet(&mut self, number: u8, amount: Chips) -> Result<Chips, SessionError> {
        validate_place_bet(&self.round, number)?;
        let total = self.ledger.increase_place_bet(number, amount)?;
        self.history.push(RoundEventKind::PlaceBetChanged {
            number,
            amount: total,
        });
        Ok(total)
    }

    pub fn decrease_place_bet(&mut self, number: u8, amount: Chips) -> Result<Chips, SessionError> {
        let total = self.ledger.decrease_place_bet(number, amount)?;
        self.history.push(RoundEventKind::PlaceBetChanged {
            number,
            amount: total,
        });
        Ok(total)
    }

    pub fn take_down_place_bet(&mut self, number: u8) -> Chips {
        let refunded = self.ledger.take_down_place_bet(number);
        if !refunded.is_zero() {
            self.history.push(RoundEventKind::PlaceBetChanged {
                number,
                amount: Chips::ZERO,
            });
        }
        refunded
    }

    /// Сброс после решённого раунда (или отмена текущего).
    pub fn finish_round(&mut self) {
        self.round.reset(&mut self.ledger);
        self.history.push(RoundEventKind::RoundReset {
            round_id: self.round_id,
        });
    }

    /// Новая игра: стартовый банкролл, пустая история.
    pub fn new_game(&mut self) {
        self.round.reset(&mut self.ledger);
        self.ledger.reset_bankroll();
        self.round_id = 0;
        self.history.clear();
        self.history.push(RoundEventKind::BankrollReset {
            bankroll: self.ledger.bankroll(),
        });
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            round_id: self.round_id,
            phase: self.round.phase(),
            point: self.round.point(),
            bankroll: self.ledger.bankroll(),
            line_bet: self.ledger.line_bet().copied(),
            place_bets: self.ledger.place_bets().collect(),
            last_place_bet_winnings: self.round.last_place_bet_winnings(),
            last_place_bet_winning_number: self.round.last_place_bet_winning_number(),
        }
    }
}
