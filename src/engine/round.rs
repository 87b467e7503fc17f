use log::info;

use crate::domain::card::{format_cards, Card};
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandLog};
use crate::engine::pot::Pot;

/// Всё изменяемое состояние одной раздачи.
///
/// Живёт от старта раздачи до выплаты; движок улиц получает его явно.
#[derive(Clone, Debug)]
pub struct RoundContext {
    pub hand_number: u64,
    pub dealer_index: usize,
    pub street: Street,
    pub community: Vec<Card>,
    pub pot: Pot,
    pub deck: Deck,
    /// Суммарный вклад каждого места за раздачу (индекс = место).
    pub contributions: Vec<Chips>,
    pub log: HandLog,
}

impl RoundContext {
    pub fn new(hand_number: u64, dealer_index: usize, deck: Deck, seat_count: usize) -> Self {
        Self {
            hand_number,
            dealer_index,
            street: Street::PreFlop,
            community: Vec::with_capacity(5),
            pot: Pot::new(),
            deck,
            contributions: vec![Chips::ZERO; seat_count],
            log: HandLog::new(),
        }
    }

    /// Учесть фишки, внесённые местом `seat`: банк и вклад растут на одну сумму.
    pub fn contribute(&mut self, seat: usize, amount: Chips) {
        if amount.is_zero() {
            return;
        }
        self.pot.add(amount);
        if let Some(c) = self.contributions.get_mut(seat) {
            *c += amount;
        }
    }

    /// Перейти на улицу `street` и открыть её общие карты (флоп 3, тёрн/ривер по 1).
    pub fn reveal(&mut self, street: Street) -> Result<(), EngineError> {
        let cards = self.deck.draw(street.cards_revealed())?;
        self.community.extend(cards);
        self.street = street;

        info!("{street}: {}", format_cards(&self.community));
        self.log.push(HandEventKind::BoardDealt {
            street,
            cards: self.community.clone(),
        });
        Ok(())
    }

    pub fn record(&mut self, kind: HandEventKind) {
        self.log.push(kind);
    }
}
