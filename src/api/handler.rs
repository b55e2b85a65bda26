use crate::api::commands::{Command, PlaceBetCommand, RollCommand, StartRoundCommand};
use crate::api::dto::{CommandResponse, RollResultDto};
use crate::api::errors::ApiError;
use crate::api::queries::{build_table_view, Query, QueryResponse};
use crate::domain::{Chips, DiceRoll};
use crate::engine::{CrapsSession, DiceSource, RollOutcome};
use crate::infra::mapping::{line_bet_kind_from_api, reason_to_api, roll_outcome_to_api};

/// Применить команду к сессии.
pub fn execute_command<D: DiceSource>(
    session: &mut CrapsSession<D>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::StartRound(StartRoundCommand { kind, amount }) => {
            session.start_round(line_bet_kind_from_api(kind), amount)?;
            Ok(CommandResponse::TableState(build_table_view(session)))
        }

        Command::Roll(RollCommand { die1, die2 }) => {
            let dice = DiceRoll::new(die1, die2)?;
            let outcome = session.roll(dice);
            Ok(CommandResponse::RollResult(build_roll_result(session, dice, outcome)))
        }

        Command::Shoot => {
            let (dice, outcome) = session.shoot();
            Ok(CommandResponse::RollResult(build_roll_result(session, dice, outcome)))
        }

        Command::PlacePlaceBet(PlaceBetCommand { number, amount }) => {
            session.place_place_bet(number, amount)?;
            Ok(place_bet_updated(session, number, amount))
        }

        Command::IncreasePlaceBet(PlaceBetCommand { number, amount }) => {
            let total = session.increase_place_bet(number, amount)?;
            Ok(place_bet_updated(session, number, total))
        }

        Command::DecreasePlaceBet(PlaceBetCommand { number, amount }) => {
            let total = session.decrease_place_bet(number, amount)?;
            Ok(place_bet_updated(session, number, total))
        }

        Command::TakeDownPlaceBet { number } => {
            let refunded = session.take_down_place_bet(number);
            Ok(CommandResponse::Refunded {
                amount: refunded.0,
                table: build_table_view(session),
            })
        }

        Command::FinishRound => {
            session.finish_round();
            Ok(CommandResponse::TableState(build_table_view(session)))
        }

        Command::NewGame => {
            session.new_game();
            Ok(CommandResponse::TableState(build_table_view(session)))
        }
    }
}

/// Ответить на запрос "только чтение".
pub fn execute_query<D: DiceSource>(session: &CrapsSession<D>, query: Query) -> QueryResponse {
    match query {
        Query::GetTable => QueryResponse::Table(build_table_view(session)),
        Query::CanPlaceBet { number } => QueryResponse::CanPlaceBet(session.can_place_bet(number)),
        Query::GetHistory => QueryResponse::History(session.history().clone()),
    }
}

fn place_bet_updated<D: DiceSource>(
    session: &CrapsSession<D>,
    number: u8,
    amount: Chips,
) -> CommandResponse {
    CommandResponse::PlaceBetUpdated {
        number,
        amount: amount.0,
        table: build_table_view(session),
    }
}

fn build_roll_result<D: DiceSource>(
    session: &CrapsSession<D>,
    dice: DiceRoll,
    outcome: RollOutcome,
) -> RollResultDto {
    let (reason, forfeited) = match outcome {
        RollOutcome::Resolved {
            reason,
            place_bets_forfeited,
            ..
        } => (Some(reason_to_api(reason)), place_bets_forfeited),
        _ => (None, Chips::ZERO),
    };

    let (win_number, winnings) = match outcome {
        RollOutcome::KeepRolling {
            place_bet_win: Some((number, credited)),
        } => (Some(number), credited),
        _ => (None, Chips::ZERO),
    };

    RollResultDto {
        die1: dice.die1(),
        die2: dice.die2(),
        total: dice.total(),
        outcome: roll_outcome_to_api(&outcome),
        reason,
        place_bet_winning_number: win_number,
        place_bet_winnings: winnings.0,
        place_bets_forfeited: forfeited.0,
        table: build_table_view(session),
    }
}
