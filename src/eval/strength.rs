use crate::domain::card::Card;

use super::evaluator::Evaluator;

/// Грубая оценка силы стартовой руки в [0, 1] без общих карт.
///
/// Пары: 0.40 (двойки) .. 0.90 (тузы). Непарные руки растут с суммой рангов,
/// плюс бонусы за одномастность и связность.
pub fn preflop_strength(hole: &[Card]) -> f64 {
    let [a, b] = hole else {
        return 0.0;
    };
    let hi = a.rank.max(b.rank).value() as f64;
    let lo = a.rank.min(b.rank).value() as f64;

    if a.rank == b.rank {
        return 0.40 + (hi - 2.0) / 12.0 * 0.50;
    }

    let mut score = ((hi - 2.0) + (lo - 2.0)) / 24.0 * 0.60;
    if a.suit == b.suit {
        score += 0.05;
    }
    let gap = hi - lo;
    if gap == 1.0 || (hi == 14.0 && lo == 2.0) {
        score += 0.03;
    } else if gap == 2.0 {
        score += 0.01;
    }
    score.clamp(0.0, 1.0)
}

/// Сила руки на любой улице: до флопа – эвристика, после – нормализованный ранг.
pub fn hand_strength<E: Evaluator + ?Sized>(evaluator: &E, hole: &[Card], community: &[Card]) -> f64 {
    if community.is_empty() {
        preflop_strength(hole)
    } else {
        evaluator.normalized_strength(hole, community)
    }
}
