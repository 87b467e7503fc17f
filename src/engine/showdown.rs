use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::engine::pot::Pot;
use crate::engine::seat::Seat;
use crate::engine::side_pots::compute_side_pots;
use crate::eval::{Evaluation, Evaluator};

/// Результат распределения банка.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
    /// (место, сумма) по порядку выплат.
    pub awards: Vec<(usize, Chips)>,
    /// Победители главного (или единственного) банка.
    pub winners: Vec<usize>,
    /// Остаток от деления, который никому не достался.
    pub unassigned: Chips,
}

/// Оценить руки всех активных игроков против полного борда.
pub fn evaluate_active<E: Evaluator + ?Sized>(
    seats: &[Seat],
    community: &[Card],
    evaluator: &E,
) -> Vec<(usize, Evaluation)> {
    seats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.actor.active)
        .map(|(i, s)| (i, evaluator.evaluate(&s.actor.hand, community)))
        .collect()
}

/// Места с наименьшим (лучшим) рангом. Несколько мест – ничья.
pub fn best_seats(results: &[(usize, Evaluation)]) -> Vec<usize> {
    let Some(best) = results.iter().map(|(_, e)| e.rank).min() else {
        return Vec::new();
    };
    results
        .iter()
        .filter(|(_, e)| e.rank == best)
        .map(|(seat, _)| *seat)
        .collect()
}

/// Единый банк: лучшие руки делят его поровну с округлением вниз,
/// остаток не распределяется.
pub fn distribute_single_pot(pot: &Pot, results: &[(usize, Evaluation)]) -> Distribution {
    let winners = best_seats(results);
    if winners.is_empty() {
        return Distribution {
            unassigned: pot.total(),
            ..Distribution::default()
        };
    }

    let (share, remainder) = pot.split(winners.len());
    Distribution {
        awards: winners.iter().map(|&seat| (seat, share)).collect(),
        winners,
        unassigned: remainder,
    }
}

/// Расширение: деление банка по уровням вкладов.
///
/// Каждый уровень разыгрывается между активными игроками, внёсшими не меньше
/// этого уровня. Уровень без активных претендентов переносится в следующий;
/// то, что осталось после последнего, забирают лучшие руки среди всех активных.
pub fn distribute_side_pots(contributions: &[Chips], results: &[(usize, Evaluation)]) -> Distribution {
    let mut dist = Distribution {
        winners: best_seats(results),
        ..Distribution::default()
    };
    let mut carry = Chips::ZERO;

    for pot in compute_side_pots(contributions) {
        let contenders: Vec<(usize, Evaluation)> = results
            .iter()
            .filter(|(seat, _)| pot.eligible_seats.contains(seat))
            .copied()
            .collect();

        let amount = pot.amount + carry;
        let winners = best_seats(&contenders);
        if winners.is_empty() {
            carry = amount;
            continue;
        }
        carry = Chips::ZERO;

        let (share, remainder) = amount.split(winners.len());
        dist.awards.extend(winners.iter().map(|&seat| (seat, share)));
        dist.unassigned += remainder;
    }

    if !carry.is_zero() {
        let (share, remainder) = carry.split(dist.winners.len());
        dist.awards.extend(dist.winners.iter().map(|&seat| (seat, share)));
        dist.unassigned += remainder;
    }

    dist
}
