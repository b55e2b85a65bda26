use crate::api::dto::{LineBetKindApi, PhaseApi, ResolutionReasonApi, RollOutcomeApi};
use crate::domain::{LineBetKind, Phase, ResolutionReason};
use crate::engine::RollOutcome;

/// Маппинг типа линейной ставки между API и domain.
pub fn line_bet_kind_from_api(api: LineBetKindApi) -> LineBetKind {
    match api {
        LineBetKindApi::Pass => LineBetKind::Pass,
        LineBetKindApi::DontPass => LineBetKind::DontPass,
    }
}

pub fn line_bet_kind_to_api(domain: LineBetKind) -> LineBetKindApi {
    match domain {
        LineBetKind::Pass => LineBetKindApi::Pass,
        LineBetKind::DontPass => LineBetKindApi::DontPass,
    }
}

/// Фаза -> (тег, поинт, результат).
pub fn phase_to_api(phase: Phase) -> (PhaseApi, Option<u8>, Option<bool>) {
    match phase {
        Phase::WaitingForBet => (PhaseApi::WaitingForBet, None, None),
        Phase::ComeOut => (PhaseApi::ComeOut, None, None),
        Phase::Point(p) => (PhaseApi::Point, Some(p), None),
        Phase::Resolved { won } => (PhaseApi::Resolved, None, Some(won)),
    }
}

pub fn reason_to_api(reason: ResolutionReason) -> ResolutionReasonApi {
    match reason {
        ResolutionReason::Natural => ResolutionReasonApi::Natural,
        ResolutionReason::Craps => ResolutionReasonApi::Craps,
        ResolutionReason::BarTwelvePush => ResolutionReasonApi::BarTwelvePush,
        ResolutionReason::PointMade => ResolutionReasonApi::PointMade,
        ResolutionReason::SevenOut => ResolutionReasonApi::SevenOut,
    }
}

/// Итог броска для фронта. Пуш отделяем от проигрыша, хотя фаза - `Resolved { won: false }`.
pub fn roll_outcome_to_api(outcome: &RollOutcome) -> RollOutcomeApi {
    match outcome {
        RollOutcome::Ignored => RollOutcomeApi::Ignored,
        RollOutcome::PointEstablished(_) => RollOutcomeApi::PointEstablished,
        RollOutcome::KeepRolling { .. } => RollOutcomeApi::KeepRolling,
        RollOutcome::Resolved {
            reason: ResolutionReason::BarTwelvePush,
            ..
        } => RollOutcomeApi::Push,
        RollOutcome::Resolved { won: true, .. } => RollOutcomeApi::Won,
        RollOutcome::Resolved { won: false, .. } => RollOutcomeApi::Lost,
    }
}
