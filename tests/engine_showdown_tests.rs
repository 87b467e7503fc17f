//! Side pot / showdown tests.
//!
//! Здесь мы проверяем:
//! - формирование уровней по вкладам;
//! - деление единого банка с округлением вниз;
//! - выплаты по уровням, включая уровень без активных претендентов.

use holdem_sim::domain::Chips;
use holdem_sim::engine::pot::Pot;
use holdem_sim::engine::showdown::{best_seats, distribute_side_pots, distribute_single_pot};
use holdem_sim::engine::side_pots::compute_side_pots;
use holdem_sim::eval::{Evaluation, HandCategory};

/// Утилита: результат оценки с заданным рангом.
fn ranked(seat: usize, rank: u32) -> (usize, Evaluation) {
    (
        seat,
        Evaluation {
            rank,
            category: HandCategory::Pair,
        },
    )
}

fn contributions(amounts: &[u64]) -> Vec<Chips> {
    amounts.iter().copied().map(Chips).collect()
}

//
// ====================== SIDE POTS ======================
//

/// 3 игрока all-in: 100, 200, 300.
#[test]
fn side_pots_three_levels() {
    let pots = compute_side_pots(&contributions(&[100, 200, 300]));

    let info: Vec<(u64, Vec<usize>)> = pots
        .iter()
        .map(|p| (p.amount.0, p.eligible_seats.clone()))
        .collect();
    assert_eq!(
        info,
        vec![(300, vec![0, 1, 2]), (200, vec![1, 2]), (100, vec![2])]
    );
}

#[test]
fn side_pots_equal_contributions_make_one_pot() {
    let pots = compute_side_pots(&contributions(&[50, 50, 50]));
    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].amount, Chips(150));
}

/// Нулевые вклады не создают уровней и не попадают в eligible.
#[test]
fn side_pots_skip_zero_contributions() {
    let pots = compute_side_pots(&contributions(&[0, 40, 40]));
    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].amount, Chips(80));
    assert_eq!(pots[0].eligible_seats, vec![1, 2]);
}

#[test]
fn side_pots_sum_to_total() {
    let contrib = contributions(&[7, 130, 45, 45, 300]);
    let total: Chips = contrib.iter().sum();
    let pots_total: Chips = compute_side_pots(&contrib).iter().map(|p| p.amount).sum();
    assert_eq!(pots_total, total);
}

//
// ====================== SINGLE POT ======================
//

#[test]
fn best_seats_returns_all_tied() {
    let results = vec![ranked(0, 7), ranked(1, 3), ranked(2, 3)];
    assert_eq!(best_seats(&results), vec![1, 2]);
    assert!(best_seats(&[]).is_empty());
}

/// Утилита: банк с заданной суммой.
fn pot_of(amount: u64) -> Pot {
    let mut pot = Pot::new();
    pot.add(Chips(amount));
    pot
}

/// Банк 101 на двоих: по 50, одна фишка остаётся.
#[test]
fn single_pot_tie_floor_split() {
    let results = vec![ranked(0, 5), ranked(1, 5), ranked(2, 9)];
    let dist = distribute_single_pot(&pot_of(101), &results);

    assert_eq!(dist.winners, vec![0, 1]);
    assert_eq!(dist.awards, vec![(0, Chips(50)), (1, Chips(50))]);
    assert_eq!(dist.unassigned, Chips(1));
}

#[test]
fn single_pot_without_contenders_stays_unassigned() {
    let dist = distribute_single_pot(&pot_of(40), &[]);
    assert!(dist.awards.is_empty());
    assert_eq!(dist.unassigned, Chips(40));
}

#[test]
fn pot_split_matches_chips_split() {
    let mut pot = Pot::new();
    pot.add(Chips(60));
    pot.add(Chips(41));
    assert_eq!(pot.total(), Chips(101));
    assert_eq!(pot.split(2), (Chips(50), Chips(1)));
}

//
// ====================== TIERED PAYOUT ======================
//

/// Короткий стек с лучшей рукой забирает только свой уровень.
#[test]
fn tiered_payout_short_stack_wins_main_pot() {
    let results = vec![ranked(0, 1), ranked(1, 5), ranked(2, 5)];
    let dist = distribute_side_pots(&contributions(&[6, 10, 10]), &results);

    assert_eq!(dist.winners, vec![0]);
    assert_eq!(dist.awards, vec![(0, Chips(18)), (1, Chips(4)), (2, Chips(4))]);
    assert_eq!(dist.unassigned, Chips::ZERO);
}

/// Верхний уровень внёс только сфолдивший игрок: он достаётся лучшей руке.
#[test]
fn tiered_payout_carries_uncontested_level() {
    // Место 1 сфолдило (нет в results), но внесло больше всех.
    let results = vec![ranked(0, 3), ranked(2, 7)];
    let dist = distribute_side_pots(&contributions(&[10, 30, 10]), &results);

    let paid: Chips = dist.awards.iter().map(|(_, a)| *a).sum();
    assert_eq!(paid, Chips(50));
    assert!(dist.awards.iter().all(|(seat, _)| *seat == 0));
    assert_eq!(dist.unassigned, Chips::ZERO);
}

#[test]
fn tiered_payout_remainders_accumulate() {
    let results = vec![ranked(0, 2), ranked(1, 2), ranked(2, 2)];
    let dist = distribute_side_pots(&contributions(&[11, 11, 11]), &results);

    assert_eq!(dist.awards, vec![(0, Chips(11)), (1, Chips(11)), (2, Chips(11))]);
    assert_eq!(dist.unassigned, Chips::ZERO);

    let dist = distribute_side_pots(&contributions(&[5, 5]), &[ranked(0, 2), ranked(1, 2)]);
    assert_eq!(dist.unassigned, Chips::ZERO);

    let dist = distribute_side_pots(
        &contributions(&[5, 5, 5]),
        &[ranked(0, 2), ranked(1, 2)],
    );
    // 15 на двоих: по 7, одна фишка остаётся.
    assert_eq!(dist.awards, vec![(0, Chips(7)), (1, Chips(7))]);
    assert_eq!(dist.unassigned, Chips(1));
}
