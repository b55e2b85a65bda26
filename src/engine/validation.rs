use crate::domain::Phase;
use crate::engine::errors::SessionError;
use crate::engine::round::RoundStateMachine;

/// Можно ли начать новый раунд (сделать линейную ставку).
pub fn validate_round_start(round: &RoundStateMachine) -> Result<(), SessionError> {
    match round.phase() {
        Phase::WaitingForBet => Ok(()),
        _ => Err(SessionError::RoundInProgress),
    }
}

/// Можно ли поставить или добавить Place-ставку на `number`.
///
/// Уменьшать и снимать ставки можно в любой фазе, это не проверяется.
pub fn validate_place_bet(round: &RoundStateMachine, number: u8) -> Result<(), SessionError> {
    if round.can_place_bet(number) {
        Ok(())
    } else {
        Err(SessionError::BettingClosed(number))
    }
}
