use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};

use super::hand_rank::{HandCategory, HandScore, SCORE_CEILING};
use super::lookup_tables::{detect_straight, rank_to_bit, straight_ranks, RankMask};

/// Результат оценки руки: числовой ранг (меньше = сильнее) и категория.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evaluation {
    pub rank: u32,
    pub category: HandCategory,
}

/// Оценщик силы руки. Чистая функция от карманных и общих карт.
pub trait Evaluator {
    /// `hole` – 2 карты, `community` – от 0 до 5 карт.
    fn evaluate(&self, hole: &[Card], community: &[Card]) -> Evaluation;

    /// Худший возможный ранг; все ранги лежат в `1..=worst_rank()`.
    fn worst_rank(&self) -> u32;

    /// Сила руки в [0, 1]: 1 – лучшая возможная, около 0 – худшая.
    fn normalized_strength(&self, hole: &[Card], community: &[Card]) -> f64 {
        let worst = self.worst_rank().max(1) as f64;
        let rank = self.evaluate(hole, community).rank as f64;
        (1.0 - (rank - 1.0) / worst).clamp(0.0, 1.0)
    }
}

/// Стандартный оценщик холдема: лучшая 5-карточная комбинация из доступных карт.
///
/// При меньше чем 5 картах (префлоп) учитываются только пары/сеты/каре и старшие карты.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl Evaluator for StandardEvaluator {
    fn evaluate(&self, hole: &[Card], community: &[Card]) -> Evaluation {
        let mut all_cards = Vec::with_capacity(hole.len() + community.len());
        all_cards.extend_from_slice(hole);
        all_cards.extend_from_slice(community);

        let score = best_score(&all_cards);
        Evaluation {
            rank: SCORE_CEILING - score.0,
            category: score.category(),
        }
    }

    fn worst_rank(&self) -> u32 {
        SCORE_CEILING
    }
}

/// Лучшая комбинация среди всех 5-карточных подмножеств (или сама рука, если карт < 5).
fn best_score(cards: &[Card]) -> HandScore {
    if cards.len() <= 5 {
        return score_cards(cards);
    }

    let n = cards.len();
    let mut idx = [0usize, 1, 2, 3, 4];
    let mut best = score_cards(&pick(cards, &idx));

    // Перебор сочетаний C(n, 5) в лексикографическом порядке.
    loop {
        let Some(i) = (0..5).rev().find(|&i| idx[i] < n - 5 + i) else {
            break;
        };
        idx[i] += 1;
        for j in (i + 1)..5 {
            idx[j] = idx[j - 1] + 1;
        }
        best = best.max(score_cards(&pick(cards, &idx)));
    }

    best
}

fn pick(cards: &[Card], idx: &[usize; 5]) -> [Card; 5] {
    idx.map(|i| cards[i])
}

/// Оценка не более чем 5 карт.
fn score_cards(cards: &[Card]) -> HandScore {
    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 15];
    let mut rank_mask: RankMask = 0;

    for card in cards {
        suit_counts[card.suit.index()] += 1;
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = cards.len() == 5 && suit_counts.iter().any(|&c| c == 5);
    let straight_high = if cards.len() == 5 {
        detect_straight(rank_mask)
    } else {
        None
    };

    // (rank, count), сначала по количеству, затем по рангу – оба по убыванию.
    let mut groups: Vec<(Rank, u8)> = Rank::ALL
        .iter()
        .rev()
        .filter_map(|&r| {
            let c = rank_counts[r.value() as usize];
            (c > 0).then_some((r, c))
        })
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let pattern: Vec<u8> = groups.iter().map(|g| g.1).collect();
    let ordered = padded(groups.iter().map(|g| g.0));

    if is_flush {
        if let Some(high) = straight_high {
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandScore::from_category_and_ranks(category, straight_ranks(high));
        }
    }

    let category = match pattern.as_slice() {
        [4, ..] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        _ if straight_high.is_some() => HandCategory::Straight,
        [3, ..] => HandCategory::ThreeOfAKind,
        [2, 2, ..] => HandCategory::TwoPair,
        [2, ..] => HandCategory::Pair,
        _ => HandCategory::HighCard,
    };

    let ranks = match (category, straight_high) {
        (HandCategory::Straight, Some(high)) => straight_ranks(high),
        _ => ordered,
    };
    HandScore::from_category_and_ranks(category, ranks)
}

/// Первые 5 рангов; недостающие добиваются двойками (они не различают руки).
fn padded(ranks: impl Iterator<Item = Rank>) -> [Rank; 5] {
    let mut out = [Rank::Two; 5];
    for (slot, r) in out.iter_mut().zip(ranks) {
        *slot = r;
    }
    out
}
