use crate::domain::Chips;

/// Коэффициент выплаты Place-ставки как дробь `(num, den)`.
///
/// 6/8 платят 7:6, 5/9 - 7:5, 4/10 - 9:5.
pub fn place_bet_odds(number: u8) -> Option<(u64, u64)> {
    match number {
        6 | 8 => Some((7, 6)),
        5 | 9 => Some((7, 5)),
        4 | 10 => Some((9, 5)),
        _ => None,
    }
}

/// Выигрыш Place-ставки (без возврата самой ставки).
///
/// Округление - половина вверх: $7 на 6 = 8.17 → 8, $7 на 5 = 9.8 → 10.
/// Для номеров вне 4/5/6/8/9/10 - 0.
pub fn place_bet_payout(number: u8, stake: Chips) -> Chips {
    match place_bet_odds(number) {
        Some((num, den)) => stake.mul_ratio_round_half_up(num, den),
        None => Chips::ZERO,
    }
}
