use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Сайд-пот: часть банка, за которую борются только игроки,
/// внёсшие не меньше соответствующего уровня.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Индексы мест, внёсших хотя бы этот уровень (включая сфолдивших).
    pub eligible_seats: Vec<usize>,
}

/// Разбить вклады по уровням.
///
/// Вход: `contributions[seat]` – сколько суммарно внёс игрок за раздачу.
/// Выход: поты "от младших к старшим"; сумма потов равна сумме вкладов.
pub fn compute_side_pots(contributions: &[Chips]) -> Vec<SidePot> {
    let mut levels: Vec<Chips> = contributions.iter().copied().filter(|c| !c.is_zero()).collect();
    levels.sort();
    levels.dedup();

    let mut pots = Vec::with_capacity(levels.len());
    let mut prev_level = Chips::ZERO;

    for level in levels {
        let eligible: Vec<usize> = contributions
            .iter()
            .enumerate()
            .filter(|(_, c)| **c >= level)
            .map(|(seat, _)| seat)
            .collect();

        // Игроки ниже уровня тоже докладывают в этот пот то, что внесли сверх prev_level.
        let amount: Chips = contributions
            .iter()
            .map(|c| (*c).min(level).saturating_sub(prev_level))
            .sum();

        pots.push(SidePot {
            amount,
            eligible_seats: eligible,
        });
        prev_level = level;
    }

    pots
}
