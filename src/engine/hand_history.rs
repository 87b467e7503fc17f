use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{format_cards, Card};
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::engine::actions::AppliedAction;
use crate::eval::HandCategory;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Кнопка и блайнды (фактически внесённые суммы).
    BlindsPosted {
        dealer: String,
        small_blind: (String, Chips),
        big_blind: (String, Chips),
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { actor: String, cards: Vec<Card> },

    /// Открыты общие карты; `cards` – весь борд после открытия.
    BoardDealt { street: Street, cards: Vec<Card> },

    /// Действие игрока применено.
    ActionApplied(AppliedAction),

    /// Ответ провайдера отклонён, игрока переспросили.
    ActionRejected { actor: String, reason: String },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        actor: String,
        hole_cards: Vec<Card>,
        rank: u32,
        category: HandCategory,
    },

    /// Выплата из банка.
    PotAwarded { actor: String, amount: Chips },
}

/// Событие с порядковым номером внутри раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Лог событий одной раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandLog {
    pub events: Vec<HandEvent>,
}

impl HandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let index = self.events.len() as u32;
        self.events.push(HandEvent { index, kind });
    }

    /// Все применённые действия по порядку.
    pub fn actions(&self) -> impl Iterator<Item = &AppliedAction> {
        self.events.iter().filter_map(|e| match &e.kind {
            HandEventKind::ActionApplied(a) => Some(a),
            _ => None,
        })
    }

    pub fn rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, HandEventKind::ActionRejected { .. }))
            .count()
    }
}

/// Итог одного игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActorSnapshot {
    pub name: String,
    pub hole_cards: Vec<Card>,
    /// Категория руки с учётом открытого борда (None – игрок не получал карт).
    pub category: Option<HandCategory>,
    pub folded: bool,
}

/// Неизменяемый снимок завершённой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandHistoryEntry {
    pub hand_number: u64,
    pub winners: Vec<String>,
    /// None, если все кроме одного сфолдили и шоудауна не было.
    pub winning_category: Option<HandCategory>,
    pub pot: Chips,
    pub community: Vec<Card>,
    pub street_reached: Street,
    pub actors: Vec<ActorSnapshot>,
    pub awards: Vec<(String, Chips)>,
    /// Остаток от деления банка между победителями, который никому не достался.
    pub unassigned: Chips,
    pub log: HandLog,
}

impl HandHistoryEntry {
    pub fn is_winner(&self, name: &str) -> bool {
        self.winners.iter().any(|w| w == name)
    }

    pub fn awarded_to(&self, name: &str) -> Chips {
        self.awards
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, amount)| *amount)
            .sum()
    }
}

impl fmt::Display for HandHistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hand #{}: {} won {} chips",
            self.hand_number,
            self.winners.join(", "),
            self.pot
        )?;
        match self.winning_category {
            Some(category) => write!(f, " with {category}")?,
            None => write!(f, " (uncontested)")?,
        }
        if !self.community.is_empty() {
            write!(f, " | board: {}", format_cards(&self.community))?;
        }
        if !self.unassigned.is_zero() {
            write!(f, " | unassigned: {}", self.unassigned)?;
        }
        Ok(())
    }
}

/// История раздач: только добавление, записи не меняются.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    entries: Vec<HandHistoryEntry>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: HandHistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HandHistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HandHistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// В скольких раздачах игрок был среди победителей.
    pub fn wins_for(&self, name: &str) -> usize {
        self.entries.iter().filter(|e| e.is_winner(name)).count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl fmt::Display for HandHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
