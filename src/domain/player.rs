use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;

/// Позиция за столом. Переназначается каждую раздачу от кнопки дилера.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    Dealer,
    SmallBlind,
    BigBlind,
    UnderTheGun,
    /// k-я средняя позиция после UTG (k >= 1).
    MiddlePosition(u8),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Dealer => write!(f, "Dealer"),
            Position::SmallBlind => write!(f, "Small Blind"),
            Position::BigBlind => write!(f, "Big Blind"),
            Position::UnderTheGun => write!(f, "Under the Gun"),
            Position::MiddlePosition(k) => write!(f, "Middle Position {k}"),
        }
    }
}

/// Участник игры. Стек переживает раздачи, остальное сбрасывается в начале каждой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
    chips: Chips,
    /// Карманные карты: 0 или 2.
    pub hand: Vec<Card>,
    /// false после fold или если игрок выбыл (нулевой стек на старте раздачи).
    pub active: bool,
    /// Вклад на текущей улице.
    pub current_bet: Chips,
    pub position: Option<Position>,
    pub is_bot: bool,
}

impl Actor {
    pub fn new(name: impl Into<String>, chips: Chips, is_bot: bool) -> Self {
        Self {
            name: name.into(),
            chips,
            hand: Vec::new(),
            active: true,
            current_bet: Chips::ZERO,
            position: None,
            is_bot,
        }
    }

    pub fn human(name: impl Into<String>, chips: Chips) -> Self {
        Self::new(name, chips, false)
    }

    pub fn bot(name: impl Into<String>, chips: Chips) -> Self {
        Self::new(name, chips, true)
    }

    pub fn chips(&self) -> Chips {
        self.chips
    }

    /// Может ли игрок ещё что-то делать на улице.
    pub fn can_act(&self) -> bool {
        self.active && !self.chips.is_zero()
    }

    /// Активен, но стек пуст: ждёт шоудауна.
    pub fn is_all_in(&self) -> bool {
        self.active && self.chips.is_zero()
    }

    /// Перенести до `amount` фишек из стека в текущую ставку.
    /// Возвращает реально внесённую сумму: `min(amount, chips)`.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.current_bet += paid;
        paid
    }

    pub fn fold(&mut self) {
        self.active = false;
    }

    /// Зачислить выигрыш.
    pub fn award(&mut self, amount: Chips) {
        self.chips += amount;
    }

    /// Сброс перед новой раздачей. Игрок без фишек сразу выбывает.
    pub fn reset_for_hand(&mut self) {
        self.hand.clear();
        self.current_bet = Chips::ZERO;
        self.active = !self.chips.is_zero();
        self.position = None;
    }

    pub fn reset_bet(&mut self) {
        self.current_bet = Chips::ZERO;
    }
}
