use craps_engine::domain::{Chips, CrapsConfig, DiceRoll, LineBetKind, Phase, ResolutionReason};
use craps_engine::engine::{CrapsSession, RollOutcome, RoundEventKind, SessionError};
use craps_engine::engine::LedgerError;
use craps_engine::infra::ScriptedDice;

fn dice(a: u8, b: u8) -> DiceRoll {
    DiceRoll::new(a, b).unwrap()
}

fn session(rolls: &[(u8, u8)]) -> CrapsSession<ScriptedDice> {
    CrapsSession::new(CrapsConfig::default(), ScriptedDice::from_rolls(rolls))
}

//
// Старт раунда
//
#[test]
fn new_session_waits_for_bet() {
    let s = session(&[]);
    assert_eq!(s.phase(), Phase::WaitingForBet);
    assert_eq!(s.bankroll(), Chips(1_000));
    assert_eq!(s.round_id(), 0);
    assert!(s.history().is_empty());
    assert!(!s.is_broke());
}

#[test]
fn start_round_places_line_bet() {
    let mut s = session(&[]);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();

    assert_eq!(s.phase(), Phase::ComeOut);
    assert_eq!(s.bankroll(), Chips(900));
    assert_eq!(s.round_id(), 1);
    assert_eq!(
        s.history().last(),
        Some(&RoundEventKind::RoundStarted {
            round_id: 1,
            kind: LineBetKind::Pass,
            amount: Chips(100),
        })
    );
}

#[test]
fn start_round_twice_is_rejected() {
    let mut s = session(&[]);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();

    assert_eq!(
        s.start_round(LineBetKind::DontPass, Chips(100)),
        Err(SessionError::RoundInProgress)
    );
    assert_eq!(s.bankroll(), Chips(900));
    assert_eq!(s.ledger().line_bet().unwrap().kind, LineBetKind::Pass);
}

#[test]
fn start_round_without_funds_keeps_waiting() {
    let mut s = session(&[]);
    let err = s.start_round(LineBetKind::Pass, Chips(5_000)).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Ledger(LedgerError::InsufficientFunds { .. })
    ));
    assert_eq!(s.phase(), Phase::WaitingForBet);
    assert_eq!(s.round_id(), 0);
    assert!(s.history().is_empty());
}

//
// Броски
//
#[test]
fn shoot_uses_session_dice() {
    let mut s = session(&[(3, 4)]);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();

    let (roll, outcome) = s.shoot();

    assert_eq!(roll, dice(3, 4));
    assert!(matches!(
        outcome,
        RollOutcome::Resolved {
            won: true,
            reason: ResolutionReason::Natural,
            ..
        }
    ));
    assert_eq!(s.bankroll(), Chips(1_100));
}

#[test]
fn dice_script_can_be_extended_mid_session() {
    let mut s = session(&[]);
    s.dice_mut().push_roll(4, 4);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();

    let (roll, outcome) = s.shoot();
    assert_eq!(roll, dice(4, 4));
    assert_eq!(outcome, RollOutcome::PointEstablished(8));

    s.dice_mut().push_roll(6, 2);
    // курсор сценария уже на втором броске
    let (roll, outcome) = s.shoot();
    assert_eq!(roll, dice(6, 2));
    assert!(matches!(
        outcome,
        RollOutcome::Resolved {
            won: true,
            reason: ResolutionReason::PointMade,
            ..
        }
    ));
    assert_eq!(s.bankroll(), Chips(1_100));
}

#[test]
fn ignored_roll_leaves_no_history() {
    let mut s = session(&[]);
    assert_eq!(s.roll(dice(3, 4)), RollOutcome::Ignored);
    assert!(s.history().is_empty());
}

#[test]
fn point_round_history_is_ordered() {
    let mut s = session(&[(2, 3), (4, 4), (1, 4)]);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();

    s.shoot(); // поинт 5
    s.place_place_bet(8, Chips(60)).unwrap();
    s.shoot(); // 8 – Place-ставка сыграла
    s.shoot(); // 5 – поинт

    let kinds: Vec<RoundEventKind> = s.history().events.iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            RoundEventKind::RoundStarted {
                round_id: 1,
                kind: LineBetKind::Pass,
                amount: Chips(100),
            },
            RoundEventKind::DiceRolled { die1: 2, die2: 3, total: 5 },
            RoundEventKind::PointEstablished { point: 5 },
            RoundEventKind::PlaceBetChanged { number: 8, amount: Chips(60) },
            RoundEventKind::DiceRolled { die1: 4, die2: 4, total: 8 },
            RoundEventKind::PlaceBetPaid { number: 8, credited: Chips(130) },
            RoundEventKind::DiceRolled { die1: 1, die2: 4, total: 5 },
            RoundEventKind::RoundResolved {
                round_id: 1,
                won: true,
                reason: ResolutionReason::PointMade,
                bankroll_after: Chips(1_170),
            },
        ]
    );

    let indices: Vec<u64> = s.history().events.iter().map(|e| e.index).collect();
    assert_eq!(indices, (0..8).collect::<Vec<u64>>());
}

#[test]
fn seven_out_records_forfeit_before_resolution() {
    let mut s = session(&[(3, 3), (3, 4)]);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();
    s.shoot();
    s.place_place_bet(5, Chips(50)).unwrap();
    s.place_place_bet(8, Chips(60)).unwrap();

    s.shoot();

    let n = s.history().len();
    let events = &s.history().events;
    assert_eq!(
        events[n - 2].kind,
        RoundEventKind::PlaceBetsForfeited { amount: Chips(110) }
    );
    assert!(matches!(
        events[n - 1].kind,
        RoundEventKind::RoundResolved {
            won: false,
            reason: ResolutionReason::SevenOut,
            ..
        }
    ));
    assert_eq!(s.bankroll(), Chips(790));
}

//
// Place-ставки через сессию
//
#[test]
fn place_bets_only_during_point() {
    let mut s = session(&[(2, 2)]);

    assert_eq!(
        s.place_place_bet(6, Chips(60)),
        Err(SessionError::BettingClosed(6))
    );

    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();
    assert_eq!(
        s.place_place_bet(6, Chips(60)),
        Err(SessionError::BettingClosed(6))
    );

    s.shoot(); // поинт 4
    assert_eq!(
        s.place_place_bet(4, Chips(60)),
        Err(SessionError::BettingClosed(4))
    );
    s.place_place_bet(6, Chips(60)).unwrap();
    assert_eq!(s.bankroll(), Chips(840));
}

#[test]
fn duplicate_place_bet_surfaces_ledger_error() {
    let mut s = session(&[(2, 2)]);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();
    s.shoot();
    s.place_place_bet(6, Chips(60)).unwrap();

    assert_eq!(
        s.place_place_bet(6, Chips(60)),
        Err(SessionError::Ledger(LedgerError::DuplicatePlaceBet(6)))
    );
}

#[test]
fn adjust_place_bets_through_session() {
    let mut s = session(&[(2, 2)]);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();
    s.shoot();
    s.place_place_bet(6, Chips(60)).unwrap();

    assert_eq!(s.increase_place_bet(6, Chips(30)).unwrap(), Chips(90));
    assert_eq!(s.decrease_place_bet(6, Chips(40)).unwrap(), Chips(50));
    assert_eq!(s.take_down_place_bet(6), Chips(50));
    assert_eq!(s.bankroll(), Chips(900));
    assert_eq!(
        s.history().last(),
        Some(&RoundEventKind::PlaceBetChanged {
            number: 6,
            amount: Chips::ZERO,
        })
    );
}

#[test]
fn take_down_allowed_after_resolution() {
    let mut s = session(&[(2, 2), (1, 3)]);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();
    s.shoot();
    s.place_place_bet(9, Chips(50)).unwrap();
    s.shoot(); // поинт сделан

    assert_eq!(s.phase(), Phase::Resolved { won: true });
    assert_eq!(s.take_down_place_bet(9), Chips(50));
    assert_eq!(s.bankroll(), Chips(1_100));
}

//
// Сброс и новая игра
//
#[test]
fn finish_round_returns_to_waiting() {
    let mut s = session(&[(2, 2), (2, 2)]);
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();
    s.shoot();
    s.place_place_bet(6, Chips(60)).unwrap();
    s.shoot();

    s.finish_round();

    assert_eq!(s.phase(), Phase::WaitingForBet);
    assert_eq!(s.bankroll(), Chips(1_100));
    assert_eq!(s.history().last(), Some(&RoundEventKind::RoundReset { round_id: 1 }));

    s.start_round(LineBetKind::DontPass, Chips(10)).unwrap();
    assert_eq!(s.round_id(), 2);
}

#[test]
fn is_broke_when_nothing_left() {
    let config = CrapsConfig::with_bankroll(Chips(100));
    let mut s = CrapsSession::new(config, ScriptedDice::from_rolls(&[(1, 1)]));

    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();
    assert!(!s.is_broke(), "stake still on the table");

    s.shoot();
    assert_eq!(s.phase(), Phase::Resolved { won: false });
    assert!(s.is_broke());
}

#[test]
fn new_game_restores_starting_bankroll() {
    let config = CrapsConfig::with_bankroll(Chips(100));
    let mut s = CrapsSession::new(config, ScriptedDice::from_rolls(&[(1, 1)]));
    s.start_round(LineBetKind::Pass, Chips(100)).unwrap();
    s.shoot();

    s.new_game();

    assert_eq!(s.phase(), Phase::WaitingForBet);
    assert_eq!(s.bankroll(), Chips(100));
    assert_eq!(s.round_id(), 0);
    assert_eq!(s.history().len(), 1);
    assert_eq!(
        s.history().last(),
        Some(&RoundEventKind::BankrollReset { bankroll: Chips(100) })
    );
}

#[test]
fn snapshot_reflects_table() {
    let mut s = session(&[(5, 5), (4, 5)]);
    s.start_round(LineBetKind::DontPass, Chips(50)).unwrap();
    s.shoot(); // поинт 10
    s.place_place_bet(9, Chips(25)).unwrap();
    s.shoot(); // 9

    let snap = s.snapshot();
    assert_eq!(snap.round_id, 1);
    assert_eq!(snap.phase, Phase::Point(10));
    assert_eq!(snap.point, Some(10));
    // 1000 - 50 - 25 + (25 + 35)
    assert_eq!(snap.bankroll, Chips(985));
    assert!(snap.place_bets.is_empty());
    assert_eq!(snap.last_place_bet_winnings, Chips(60));
    assert_eq!(snap.last_place_bet_winning_number, Some(9));
    assert_eq!(snap.line_bet.unwrap().kind, LineBetKind::DontPass);
}
