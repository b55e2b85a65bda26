// src/bin/craps_dev_cli.rs
//
// Локальный прогон стола: N раундов на детерминированных костях.
//
//   cargo run --bin craps_dev_cli -- [seed] [rounds]
//   RUST_LOG=craps_engine=info cargo run --bin craps_dev_cli

use craps_engine::domain::{Chips, CrapsConfig, LineBetKind, Phase, PLACE_NUMBERS};
use craps_engine::engine::{CrapsSession, RollOutcome};
use craps_engine::infra::DeterministicDice;
use tracing_subscriber::EnvFilter;

/// Сколько бросков максимум на один раунд, чтобы прогон гарантированно закончился.
const MAX_ROLLS_PER_ROUND: usize = 200;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let rounds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    println!("=== CRAPS DEV CLI === seed={} rounds={}\n", seed, rounds);

    let config = CrapsConfig::default();
    if let Err(err) = config.validate() {
        eprintln!("Некорректный конфиг: {}", err);
        return;
    }

    let mut session = CrapsSession::new(config, DeterministicDice::from_seed(seed));

    for n in 1..=rounds {
        if session.is_broke() {
            println!("Банкролл пуст – новая игра.");
            session.new_game();
        }

        // Чередуем Pass / Don't Pass, ставим 10% банкролла (минимум 5).
        let kind = if n % 2 == 1 { LineBetKind::Pass } else { LineBetKind::DontPass };
        let amount = Chips((session.bankroll().0 / 10).max(5).min(session.bankroll().0));

        if let Err(err) = session.start_round(kind, amount) {
            println!("Раунд {}: ставка не принята: {}", n, err);
            break;
        }
        println!("Раунд {}: {:?} {} (банкролл {})", n, kind, amount, session.bankroll());

        for _ in 0..MAX_ROLLS_PER_ROUND {
            let (dice, outcome) = session.shoot();
            println!("  бросок {}+{}={}", dice.die1(), dice.die2(), dice.total());

            match outcome {
                RollOutcome::PointEstablished(point) => {
                    println!("  поинт {}", point);
                    place_inside_numbers(&mut session, point);
                }
                RollOutcome::KeepRolling {
                    place_bet_win: Some((number, credited)),
                } => {
                    println!("  Place {} сыграла: +{}", number, credited);
                }
                RollOutcome::Resolved { won, reason, place_bets_forfeited } => {
                    println!(
                        "  итог: {} ({:?}), сгорело на Place: {}",
                        if won { "выигрыш" } else { "нет выигрыша" },
                        reason,
                        place_bets_forfeited
                    );
                    break;
                }
                _ => {}
            }
        }

        if !matches!(session.phase(), Phase::Resolved { .. }) {
            println!("  раунд не решился за {} бросков, отменяем", MAX_ROLLS_PER_ROUND);
        }
        session.finish_round();
        println!("  банкролл после раунда: {}\n", session.bankroll());
    }

    println!("Событий в истории: {}", session.history().len());
    println!("Итоговый банкролл: {}", session.bankroll());
}

/// Стандартные $6 на 6 и 8, если они не поинт и хватает денег.
fn place_inside_numbers(session: &mut CrapsSession<DeterministicDice>, point: u8) {
    for number in PLACE_NUMBERS.iter().copied().filter(|n| matches!(n, 6 | 8)) {
        if number == point {
            continue;
        }
        match session.place_place_bet(number, Chips(6)) {
            Ok(()) => println!("  Place $6 на {}", number),
            Err(err) => println!("  Place на {} не принята: {}", number, err),
        }
    }
}
