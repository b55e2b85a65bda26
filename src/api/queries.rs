use serde::{Deserialize, Serialize};

use crate::domain::PLACE_NUMBERS;
use crate::engine::{place_bet_payout, CrapsSession, DiceSource, RoundHistory};
use crate::infra::mapping::{line_bet_kind_to_api, phase_to_api};

use super::dto::{LineBetDto, PlaceBetDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние стола.
    GetTable,

    /// Открыт ли приём Place-ставок на номер.
    CanPlaceBet { number: u8 },

    /// История текущей сессии.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Table(TableViewDto),
    CanPlaceBet(bool),
    History(RoundHistory),
}

/// Сформировать DTO стола из сессии.
pub fn build_table_view<D: DiceSource>(session: &CrapsSession<D>) -> TableViewDto {
    let snapshot = session.snapshot();
    let (phase, point, won) = phase_to_api(snapshot.phase);

    let place_bets: Vec<PlaceBetDto> = snapshot
        .place_bets
        .iter()
        .map(|b| PlaceBetDto {
            number: b.number,
            amount: b.amount.0,
            potential_payout: place_bet_payout(b.number, b.amount).0,
        })
        .collect();

    let open_place_numbers = PLACE_NUMBERS
        .iter()
        .copied()
        .filter(|&n| session.can_place_bet(n))
        .collect();

    TableViewDto {
        round_id: snapshot.round_id,
        phase,
        point,
        won,
        bankroll: snapshot.bankroll.0,
        line_bet: snapshot.line_bet.map(|b| LineBetDto {
            kind: line_bet_kind_to_api(b.kind),
            amount: b.amount.0,
        }),
        place_bets_total: place_bets.iter().map(|b| b.amount).sum(),
        place_bets,
        last_place_bet_winnings: snapshot.last_place_bet_winnings.0,
        last_place_bet_winning_number: snapshot.last_place_bet_winning_number,
        open_place_numbers,
    }
}
