use log::info;

use crate::domain::card::format_cards;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::domain::player::Actor;
use crate::domain::table::TableConfig;
use crate::engine::betting::{run_street, BettingRules, StreetSummary};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{ActorSnapshot, HandEventKind, HandHistory, HandHistoryEntry};
use crate::engine::positions::{blind_seats, first_to_act, next_dealer, positions_from};
use crate::engine::round::RoundContext;
use crate::engine::seat::{count_active, Seat};
use crate::engine::showdown::{distribute_side_pots, distribute_single_pot, evaluate_active, Distribution};
use crate::eval::{Evaluator, HandCategory, StandardEvaluator};
use crate::infra::rng::{RandomSource, SystemRng};
use crate::players::ActionProvider;

/// Состояние стола после раздачи.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableStatus {
    Continue,
    /// Фишки остались только у одного игрока.
    Winner(String),
}

/// Итог сыгранной раздачи.
#[derive(Clone, Debug, PartialEq)]
pub struct HandOutcome {
    pub entry: HandHistoryEntry,
    /// Боты, убранные со стола после раздачи.
    pub eliminated: Vec<String>,
    pub status: TableStatus,
}

/// Контроллер раздач: места, кнопка, история.
///
/// Жизненный цикл раздачи:
///   `start_hand` → `deal_hole` → улицы (`betting_street` / `RoundContext::reveal`)
///   → `finish_hand` (шоудаун или выплата единственному) → `cleanup`.
/// `play_hand` проходит его целиком.
pub struct Game<R: RandomSource = SystemRng, E: Evaluator = StandardEvaluator> {
    config: TableConfig,
    seats: Vec<Seat>,
    dealer_index: Option<usize>,
    history: HandHistory,
    rng: R,
    evaluator: E,
    hands_played: u64,
}

impl Game<SystemRng, StandardEvaluator> {
    pub fn with_config(config: TableConfig) -> Result<Self, EngineError> {
        Self::new(config, SystemRng, StandardEvaluator)
    }
}

impl<R: RandomSource, E: Evaluator> Game<R, E> {
    pub fn new(config: TableConfig, rng: R, evaluator: E) -> Result<Self, EngineError> {
        config
            .validate()
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        Ok(Self {
            config,
            seats: Vec::new(),
            dealer_index: None,
            history: HandHistory::new(),
            rng,
            evaluator,
            hands_played: 0,
        })
    }

    /// Посадить игрока. Имена за столом уникальны.
    pub fn seat(&mut self, actor: Actor, provider: impl ActionProvider + 'static) -> Result<(), EngineError> {
        if self.seats.len() >= self.config.max_seats as usize {
            return Err(EngineError::TableFull(self.config.max_seats));
        }
        if self.seats.iter().any(|s| s.actor.name == actor.name) {
            return Err(EngineError::DuplicateName(actor.name));
        }
        self.seats.push(Seat::new(actor, provider));
        Ok(())
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.seats.iter().map(|s| &s.actor).find(|a| a.name == name)
    }

    pub fn dealer_index(&self) -> Option<usize> {
        self.dealer_index
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Сумма стеков за столом (без банка текущей раздачи).
    pub fn total_chips(&self) -> Chips {
        self.seats.iter().map(|s| s.actor.chips()).sum()
    }

    /// Сыграть одну раздачу целиком.
    pub fn play_hand(&mut self) -> Result<HandOutcome, EngineError> {
        let mut round = self.start_hand()?;
        self.deal_hole(&mut round)?;

        loop {
            self.betting_street(&mut round)?;
            let next = round.street.next();
            if count_active(&self.seats) <= 1 || next == Street::Showdown {
                break;
            }
            round.reveal(next)?;
        }

        let entry = self.finish_hand(round);
        let (status, eliminated) = self.cleanup();
        Ok(HandOutcome {
            entry,
            eliminated,
            status,
        })
    }

    /// Новая раздача: сдвиг кнопки, позиции, сброс игроков, свежая колода и банк, блайнды.
    pub fn start_hand(&mut self) -> Result<RoundContext, EngineError> {
        let seat_count = self.seats.len();
        let funded = self.seats.iter().filter(|s| !s.actor.chips().is_zero()).count();
        if seat_count == 1 {
            return Err(EngineError::GameOver);
        }
        if funded < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }

        let dealer = next_dealer(self.dealer_index, seat_count);
        self.dealer_index = Some(dealer);
        self.hands_played += 1;

        for (seat, position) in self.seats.iter_mut().zip(positions_from(dealer, seat_count)) {
            seat.actor.reset_for_hand();
            seat.actor.position = Some(position);
        }

        let deck = Deck::shuffled(&mut self.rng);
        let mut round = RoundContext::new(self.hands_played, dealer, deck, seat_count);
        info!(
            "=== Раздача #{}: дилер {} ===",
            self.hands_played, self.seats[dealer].actor.name
        );

        let (sb_seat, bb_seat) = blind_seats(dealer, seat_count);
        let sb_paid = self.post_blind(&mut round, sb_seat, self.config.small_blind);
        let bb_paid = self.post_blind(&mut round, bb_seat, self.config.big_blind);

        round.record(HandEventKind::BlindsPosted {
            dealer: self.seats[dealer].actor.name.clone(),
            small_blind: (self.seats[sb_seat].actor.name.clone(), sb_paid),
            big_blind: (self.seats[bb_seat].actor.name.clone(), bb_paid),
        });

        Ok(round)
    }

    /// Блайнд: не больше, чем есть у игрока (неполный блайнд = all-in).
    fn post_blind(&mut self, round: &mut RoundContext, seat: usize, amount: Chips) -> Chips {
        let actor = &mut self.seats[seat].actor;
        let paid = actor.commit(amount);
        round.contribute(seat, paid);
        info!("{} ставит блайнд {paid}", actor.name);
        paid
    }

    /// По 2 карманные карты каждому игроку в раздаче.
    pub fn deal_hole(&mut self, round: &mut RoundContext) -> Result<(), EngineError> {
        for seat in self.seats.iter_mut().filter(|s| s.actor.active) {
            let cards = round.deck.draw(2)?;
            seat.actor.hand.extend_from_slice(&cards);
            round.record(HandEventKind::HoleCardsDealt {
                actor: seat.actor.name.clone(),
                cards,
            });
        }
        Ok(())
    }

    /// Торговля на текущей улице раунда.
    pub fn betting_street(&mut self, round: &mut RoundContext) -> Result<StreetSummary, EngineError> {
        let seat_count = self.seats.len();
        let first = first_to_act(round.street, round.dealer_index, seat_count);
        let baseline = match round.street {
            Street::PreFlop => self.config.big_blind,
            _ => Chips::ZERO,
        };
        let rules = BettingRules::from(&self.config);

        let summary = run_street(&mut self.seats, round, &rules, first, baseline)?;
        info!(
            "{} закрыт: действий {}, в игре {}, банк {}",
            round.street,
            summary.actions,
            summary.active_after,
            round.pot.total()
        );
        Ok(summary)
    }

    /// Завершить раздачу: выплатить банк и заархивировать снимок.
    pub fn finish_hand(&mut self, mut round: RoundContext) -> HandHistoryEntry {
        let total = round.pot.total();
        let active = count_active(&self.seats);

        let (dist, winning_category) = if active == 1 {
            let winner = self.seats.iter().position(|s| s.actor.active);
            let dist = Distribution {
                awards: winner.map(|seat| (seat, total)).into_iter().collect(),
                winners: winner.into_iter().collect(),
                unassigned: Chips::ZERO,
            };
            (dist, None)
        } else {
            round.street = Street::Showdown;
            self.showdown(&mut round)
        };

        for &(seat, amount) in &dist.awards {
            let actor = &mut self.seats[seat].actor;
            actor.award(amount);
            info!("{} получает {amount}", actor.name);
            round.record(HandEventKind::PotAwarded {
                actor: actor.name.clone(),
                amount,
            });
        }
        if !dist.unassigned.is_zero() {
            info!("{} фишек остаются нераспределёнными после деления", dist.unassigned);
        }

        let entry = HandHistoryEntry {
            hand_number: round.hand_number,
            winners: dist
                .winners
                .iter()
                .map(|&seat| self.seats[seat].actor.name.clone())
                .collect(),
            winning_category,
            pot: total,
            street_reached: round.street,
            actors: self.snapshots(&round),
            awards: dist
                .awards
                .iter()
                .map(|&(seat, amount)| (self.seats[seat].actor.name.clone(), amount))
                .collect(),
            unassigned: dist.unassigned,
            community: round.community,
            log: round.log,
        };
        info!("{entry}");
        self.history.append(entry.clone());
        entry
    }

    /// Шоудаун: оценка активных рук и распределение банка.
    fn showdown(&self, round: &mut RoundContext) -> (Distribution, Option<HandCategory>) {
        let results = evaluate_active(&self.seats, &round.community, &self.evaluator);
        for (seat, evaluation) in &results {
            let actor = &self.seats[*seat].actor;
            info!(
                "{}: {} – {}",
                actor.name,
                format_cards(&actor.hand),
                evaluation.category
            );
            round.record(HandEventKind::ShowdownReveal {
                actor: actor.name.clone(),
                hole_cards: actor.hand.clone(),
                rank: evaluation.rank,
                category: evaluation.category,
            });
        }

        let dist = if self.config.side_pots {
            distribute_side_pots(&round.contributions, &results)
        } else {
            distribute_single_pot(&round.pot, &results)
        };
        let winning_category = results
            .iter()
            .find(|(seat, _)| dist.winners.contains(seat))
            .map(|(_, e)| e.category);
        (dist, winning_category)
    }

    fn snapshots(&self, round: &RoundContext) -> Vec<ActorSnapshot> {
        self.seats
            .iter()
            .map(|s| {
                let dealt = s.actor.hand.len() == 2;
                ActorSnapshot {
                    name: s.actor.name.clone(),
                    hole_cards: s.actor.hand.clone(),
                    category: dealt
                        .then(|| self.evaluator.evaluate(&s.actor.hand, &round.community).category),
                    folded: dealt && !s.actor.active,
                }
            })
            .collect()
    }

    /// Убрать ботов без фишек. Кнопка сдвигается так, чтобы следующая
    /// раздача началась с места сразу после прежнего дилера.
    pub fn cleanup(&mut self) -> (TableStatus, Vec<String>) {
        let keep: Vec<bool> = self
            .seats
            .iter()
            .map(|s| !(s.actor.is_bot && s.actor.chips().is_zero()))
            .collect();

        if let Some(dealer) = self.dealer_index {
            let kept_before = keep[..dealer].iter().filter(|k| **k).count();
            let remaining = keep.iter().filter(|k| **k).count();
            self.dealer_index = if keep[dealer] {
                Some(kept_before)
            } else if remaining > 0 {
                Some((kept_before + remaining - 1) % remaining)
            } else {
                None
            };
        }

        let mut eliminated = Vec::new();
        let mut flags = keep.into_iter();
        self.seats.retain(|s| {
            let kept = flags.next().unwrap_or(true);
            if !kept {
                info!("{} выбывает", s.actor.name);
                eliminated.push(s.actor.name.clone());
            }
            kept
        });

        let mut funded = self.seats.iter().filter(|s| !s.actor.chips().is_zero());
        let status = match (funded.next(), funded.next()) {
            (Some(only), None) => {
                info!("Победитель игры: {}", only.actor.name);
                TableStatus::Winner(only.actor.name.clone())
            }
            _ => TableStatus::Continue,
        };
        (status, eliminated)
    }
}
