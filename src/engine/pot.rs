use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Общий банк раздачи. Внутри раздачи только растёт.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Chips {
        self.total
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Поровну между `winners` победителями, с округлением вниз.
    /// Возвращает (долю каждого, нераспределённый остаток).
    pub fn split(&self, winners: usize) -> (Chips, Chips) {
        self.total.split(winners)
    }
}
