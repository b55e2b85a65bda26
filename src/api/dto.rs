use serde::{Deserialize, Serialize};

use crate::domain::RoundId;

/// Фаза раунда без данных (для GraphQL-enum). Поинт и результат - отдельными полями.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(async_graphql::Enum))]
pub enum PhaseApi {
    WaitingForBet,
    ComeOut,
    Point,
    Resolved,
}

/// Внешнее представление типа линейной ставки (API-слой).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(async_graphql::Enum))]
pub enum LineBetKindApi {
    Pass,
    DontPass,
}

/// Итог броска для фронта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(async_graphql::Enum))]
pub enum RollOutcomeApi {
    /// Бросок проигнорирован (нет активного раунда).
    Ignored,
    PointEstablished,
    KeepRolling,
    Won,
    Lost,
    /// Bar 12 для Don't Pass: ставка вернулась.
    Push,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(async_graphql::Enum))]
pub enum ResolutionReasonApi {
    Natural,
    Craps,
    BarTwelvePush,
    PointMade,
    SevenOut,
}

/// DTO линейной ставки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(async_graphql::SimpleObject))]
pub struct LineBetDto {
    pub kind: LineBetKindApi,
    pub amount: u64,
}

/// DTO Place-ставки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(async_graphql::SimpleObject))]
pub struct PlaceBetDto {
    pub number: u8,
    pub amount: u64,
    /// Сколько принесёт выигрыш (без возврата ставки).
    pub potential_payout: u64,
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(async_graphql::SimpleObject))]
pub struct TableViewDto {
    pub round_id: RoundId,
    pub phase: PhaseApi,
    /// Поинт (только в фазе Point).
    pub point: Option<u8>,
    /// Результат раунда (только в фазе Resolved).
    pub won: Option<bool>,
    pub bankroll: u64,
    pub line_bet: Option<LineBetDto>,
    pub place_bets: Vec<PlaceBetDto>,
    pub place_bets_total: u64,
    pub last_place_bet_winnings: u64,
    pub last_place_bet_winning_number: Option<u8>,
    /// Номера, на которые сейчас открыт приём Place-ставок.
    pub open_place_numbers: Vec<u8>,
}

/// DTO результата броска.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(async_graphql::SimpleObject))]
pub struct RollResultDto {
    pub die1: u8,
    pub die2: u8,
    pub total: u8,
    pub outcome: RollOutcomeApi,
    pub reason: Option<ResolutionReasonApi>,
    pub place_bet_winning_number: Option<u8>,
    pub place_bet_winnings: u64,
    pub place_bets_forfeited: u64,
    pub table: TableViewDto,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Вернуть обновлённое состояние стола.
    TableState(TableViewDto),

    /// Результат броска.
    RollResult(RollResultDto),

    /// Place-ставка изменена: новая сумма на номере (0 - снята).
    PlaceBetUpdated {
        number: u8,
        amount: u64,
        table: TableViewDto,
    },

    /// Ставка снята, фишки вернулись.
    Refunded { amount: u64, table: TableViewDto },
}
