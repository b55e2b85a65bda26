use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{is_place_number, Chips, CrapsConfig, LineBet, LineBetKind, PlaceBet};
use crate::engine::errors::LedgerError;
use crate::engine::payout::place_bet_payout;

/// Банкролл игрока и все его ставки.
///
/// Про фазы раунда ничего не знает: это делает `RoundStateMachine`.
/// Каждая операция либо выполняется целиком, либо возвращает ошибку
/// и ничего не меняет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledger {
    bankroll: Chips,
    starting_bankroll: Chips,
    min_bet: Chips,
    line_bet: Option<LineBet>,
    /// Place-ставки: номер -> сумма. Не больше одной на номер.
    place_bets: BTreeMap<u8, Chips>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::from_config(&CrapsConfig::default())
    }
}

impl Ledger {
    pub fn new(starting_bankroll: Chips) -> Self {
        Self::from_config(&CrapsConfig::with_bankroll(starting_bankroll))
    }

    pub fn from_config(config: &CrapsConfig) -> Self {
        Self {
            bankroll: config.starting_bankroll,
            starting_bankroll: config.starting_bankroll,
            min_bet: config.min_bet,
            line_bet: None,
            place_bets: BTreeMap::new(),
        }
    }

    pub fn bankroll(&self) -> Chips {
        self.bankroll
    }

    pub fn starting_bankroll(&self) -> Chips {
        self.starting_bankroll
    }

    pub fn line_bet(&self) -> Option<&LineBet> {
        self.line_bet.as_ref()
    }

    pub fn line_bet_kind(&self) -> Option<LineBetKind> {
        self.line_bet.map(|b| b.kind)
    }

    /// Place-ставки по возрастанию номера.
    pub fn place_bets(&self) -> impl Iterator<Item = PlaceBet> + '_ {
        self.place_bets
            .iter()
            .map(|(&number, &amount)| PlaceBet { number, amount })
    }

    /// Сколько всего лежит на Place-ставках.
    pub fn place_bets_total(&self) -> Chips {
        self.place_bets.values().copied().sum()
    }

    pub fn has_place_bet(&self, number: u8) -> bool {
        self.place_bets.contains_key(&number)
    }

    pub fn place_bet_amount(&self, number: u8) -> Option<Chips> {
        self.place_bets.get(&number).copied()
    }

    // ---------------------------------------------------------------
    // Линейная ставка
    // ---------------------------------------------------------------

    /// Поставить на линию.
    ///
    /// Предыдущая нерешённая ставка перезаписывается (её стейк не возвращается),
    /// поэтому вызывать повторно до решения раунда нельзя.
    pub fn place_line_bet(&mut self, kind: LineBetKind, amount: Chips) -> Result<(), LedgerError> {
        self.check_min_bet(amount)?;
        self.debit(amount)?;

        if let Some(previous) = self.line_bet {
            warn!(?previous, "line bet overwritten before it was resolved");
        }
        self.line_bet = Some(LineBet::new(kind, amount));
        debug!(?kind, %amount, bankroll = %self.bankroll, "line bet placed");
        Ok(())
    }

    /// Выигрыш 1:1: возвращаем ставку плюс столько же. Возвращает зачисленное.
    pub fn win_line_bet(&mut self) -> Chips {
        let Some(bet) = self.line_bet.take() else {
            return Chips::ZERO;
        };
        let credit = bet.amount + bet.amount;
        self.bankroll += credit;
        debug!(kind = ?bet.kind, %credit, bankroll = %self.bankroll, "line bet won");
        credit
    }

    /// Проигрыш: ставка уже списана при размещении, просто убираем её.
    pub fn lose_line_bet(&mut self) {
        if let Some(bet) = self.line_bet.take() {
            debug!(kind = ?bet.kind, amount = %bet.amount, "line bet lost");
        }
    }

    /// Пуш: возвращаем ровно ставку.
    pub fn push_line_bet(&mut self) -> Chips {
        let Some(bet) = self.line_bet.take() else {
            return Chips::ZERO;
        };
        self.bankroll += bet.amount;
        debug!(kind = ?bet.kind, amount = %bet.amount, "line bet pushed");
        bet.amount
    }

    // ---------------------------------------------------------------
    // Place-ставки
    // ---------------------------------------------------------------

    pub fn place_place_bet(&mut self, number: u8, amount: Chips) -> Result<(), LedgerError> {
        if !is_place_number(number) {
            return Err(LedgerError::InvalidPlaceNumber(number));
        }
        if self.has_place_bet(number) {
            return Err(LedgerError::DuplicatePlaceBet(number));
        }
        self.check_min_bet(amount)?;
        self.debit(amount)?;

        self.place_bets.insert(number, amount);
        debug!(number, %amount, bankroll = %self.bankroll, "place bet placed");
        Ok(())
    }

    /// Добавить к существующей Place-ставке. Возвращает новую сумму.
    pub fn increase_place_bet(&mut self, number: u8, amount: Chips) -> Result<Chips, LedgerError> {
        let current = self
            .place_bet_amount(number)
            .ok_or(LedgerError::NoPlaceBet(number))?;
        self.debit(amount)?;

        let total = current + amount;
        self.place_bets.insert(number, total);
        debug!(number, %amount, %total, "place bet increased");
        Ok(total)
    }

    /// Уменьшить Place-ставку. Снятая часть возвращается в банкролл.
    ///
    /// Уменьшение до нуля (или больше, чем стоит) снимает ставку целиком,
    /// в этом случае возвращается `Chips::ZERO`.
    pub fn decrease_place_bet(&mut self, number: u8, amount: Chips) -> Result<Chips, LedgerError> {
        let current = self
            .place_bet_amount(number)
            .ok_or(LedgerError::NoPlaceBet(number))?;

        if amount >= current {
            self.place_bets.remove(&number);
            self.bankroll += current;
            debug!(number, refunded = %current, "place bet decreased to zero, removed");
            return Ok(Chips::ZERO);
        }

        let total = current - amount;
        self.place_bets.insert(number, total);
        self.bankroll += amount;
        debug!(number, refunded = %amount, %total, "place bet decreased");
        Ok(total)
    }

    /// Снять Place-ставку с полным возвратом. 0, если ставки не было.
    pub fn take_down_place_bet(&mut self, number: u8) -> Chips {
        match self.place_bets.remove(&number) {
            Some(amount) => {
                self.bankroll += amount;
                debug!(number, %amount, "place bet taken down");
                amount
            }
            None => Chips::ZERO,
        }
    }

    /// Расчёт Place-ставок после броска.
    ///
    /// - `seven_out`: все Place-ставки сгорают, возвращает 0;
    /// - иначе выплачивается только ставка на `total` (ставка + выигрыш),
    ///   остальные остаются на столе.
    pub fn resolve_place_bets(&mut self, total: u8, seven_out: bool) -> Chips {
        if seven_out {
            self.lose_all_place_bets();
            return Chips::ZERO;
        }

        let Some(stake) = self.place_bets.remove(&total) else {
            return Chips::ZERO;
        };
        let credit = stake + place_bet_payout(total, stake);
        self.bankroll += credit;
        debug!(number = total, %stake, %credit, bankroll = %self.bankroll, "place bet paid");
        credit
    }

    /// Вернуть все Place-ставки (отмена / сброс раунда, не проигрыш).
    pub fn clear_place_bets(&mut self) -> Chips {
        let refunded = self.place_bets_total();
        self.bankroll += refunded;
        self.place_bets.clear();
        if !refunded.is_zero() {
            debug!(%refunded, "place bets returned");
        }
        refunded
    }

    /// Все Place-ставки проиграны. Возвращает сгоревшую сумму.
    pub fn lose_all_place_bets(&mut self) -> Chips {
        let forfeited = self.place_bets_total();
        self.place_bets.clear();
        if !forfeited.is_zero() {
            debug!(%forfeited, "place bets lost");
        }
        forfeited
    }

    /// Новая игра: стартовый банкролл, никаких ставок.
    pub fn reset_bankroll(&mut self) {
        self.bankroll = self.starting_bankroll;
        self.line_bet = None;
        self.place_bets.clear();
        debug!(bankroll = %self.bankroll, "bankroll reset");
    }

    fn check_min_bet(&self, amount: Chips) -> Result<(), LedgerError> {
        if amount < self.min_bet {
            return Err(LedgerError::BelowMinimum {
                amount,
                min: self.min_bet,
            });
        }
        Ok(())
    }

    /// Списание с проверкой до мутации.
    fn debit(&mut self, amount: Chips) -> Result<(), LedgerError> {
        self.bankroll = self
            .bankroll
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds {
                needed: amount,
                available: self.bankroll,
            })?;
        Ok(())
    }
}
