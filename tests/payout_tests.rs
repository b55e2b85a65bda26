//! Таблица выплат Place-ставок и округление.

use craps_engine::domain::Chips;
use craps_engine::engine::{place_bet_odds, place_bet_payout};

//
// Стандартные казино-ставки
//
#[test]
fn payout_six_and_eight_pay_seven_to_six() {
    assert_eq!(place_bet_payout(6, Chips(12)), Chips(14));
    assert_eq!(place_bet_payout(8, Chips(12)), Chips(14));
    assert_eq!(place_bet_payout(6, Chips(6)), Chips(7));
    assert_eq!(place_bet_payout(8, Chips(60)), Chips(70));
}

#[test]
fn payout_five_and_nine_pay_seven_to_five() {
    assert_eq!(place_bet_payout(5, Chips(10)), Chips(14));
    assert_eq!(place_bet_payout(9, Chips(10)), Chips(14));
    assert_eq!(place_bet_payout(5, Chips(5)), Chips(7));
    assert_eq!(place_bet_payout(9, Chips(50)), Chips(70));
}

#[test]
fn payout_four_and_ten_pay_nine_to_five() {
    assert_eq!(place_bet_payout(4, Chips(10)), Chips(18));
    assert_eq!(place_bet_payout(10, Chips(10)), Chips(18));
    assert_eq!(place_bet_payout(4, Chips(5)), Chips(9));
    assert_eq!(place_bet_payout(10, Chips(50)), Chips(90));
}

#[test]
fn payout_for_non_place_numbers_is_zero() {
    for n in [0, 1, 2, 3, 7, 11, 12, 13] {
        assert_eq!(place_bet_payout(n, Chips(10)), Chips::ZERO, "number {}", n);
        assert!(place_bet_odds(n).is_none());
    }
}

//
// Округление: половина вверх
//
#[test]
fn payout_rounds_to_nearest() {
    // 7 * 7/6 = 8.17 -> 8
    assert_eq!(place_bet_payout(6, Chips(7)), Chips(8));
    // 13 * 7/6 = 15.17 -> 15
    assert_eq!(place_bet_payout(8, Chips(13)), Chips(15));
    // 7 * 7/5 = 9.8 -> 10
    assert_eq!(place_bet_payout(5, Chips(7)), Chips(10));
    // 13 * 7/5 = 18.2 -> 18
    assert_eq!(place_bet_payout(9, Chips(13)), Chips(18));
    // 7 * 9/5 = 12.6 -> 13
    assert_eq!(place_bet_payout(4, Chips(7)), Chips(13));
    // 13 * 9/5 = 23.4 -> 23
    assert_eq!(place_bet_payout(10, Chips(13)), Chips(23));
}

#[test]
fn payout_exact_half_rounds_up() {
    // 3 * 7/6 = 3.5 -> 4
    assert_eq!(place_bet_payout(6, Chips(3)), Chips(4));
    // 1 * 7/6 = 1.17 -> 1
    assert_eq!(place_bet_payout(8, Chips(1)), Chips(1));
}

#[test]
fn payout_of_zero_stake_is_zero() {
    for n in [4, 5, 6, 8, 9, 10] {
        assert_eq!(place_bet_payout(n, Chips::ZERO), Chips::ZERO);
    }
}

#[test]
fn payout_does_not_overflow_on_huge_stakes() {
    // 9/5 от u64::MAX не влезает в u64 – прижимаемся к максимуму.
    assert_eq!(place_bet_payout(4, Chips(u64::MAX)), Chips(u64::MAX));

    // 7/6 от половины влезает.
    let half = Chips(u64::MAX / 2);
    assert!(place_bet_payout(6, half) > half);
}
