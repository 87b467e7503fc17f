use std::collections::VecDeque;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::table::TableConfig;
use crate::engine::actions::{Action, AppliedAction};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::HandEventKind;
use crate::engine::positions::rotation_from;
use crate::engine::round::RoundContext;
use crate::engine::seat::{count_active, Seat};
use crate::engine::validation::{valid_actions, validate_action};
use crate::players::BettingContext;

/// Состояние раунда ставок на конкретной улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    pub street: Street,
    /// Текущая целевая ставка, до которой должны дотянуться игроки.
    pub running_bet: Chips,
    /// Место последнего агрессора (bet/raise).
    pub last_aggressor: Option<usize>,
    /// Очередь мест, которые ещё должны сделать ход на этой улице.
    pub to_act: VecDeque<usize>,
}

impl BettingState {
    pub fn new(street: Street, running_bet: Chips, to_act: impl IntoIterator<Item = usize>) -> Self {
        Self {
            street,
            running_bet,
            last_aggressor: None,
            to_act: to_act.into_iter().collect(),
        }
    }

    pub fn next_to_act(&mut self) -> Option<usize> {
        self.to_act.pop_front()
    }

    /// Убрать место из очереди, если оно там есть.
    pub fn mark_acted(&mut self, seat: usize) {
        self.to_act.retain(|s| *s != seat);
    }

    /// После bet/raise: новая ставка и заново открытая очередь для всех остальных.
    pub fn on_raise(&mut self, seat: usize, new_bet: Chips, new_to_act: impl IntoIterator<Item = usize>) {
        self.running_bet = new_bet;
        self.last_aggressor = Some(seat);
        self.to_act = new_to_act.into_iter().collect();
    }

    /// Улица завершена, когда никому больше не нужно ходить.
    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}

/// Правила торговли, которые движку нужны от конфига стола.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BettingRules {
    pub min_raise: Chips,
    pub max_invalid_attempts: u32,
}

impl From<&TableConfig> for BettingRules {
    fn from(config: &TableConfig) -> Self {
        Self {
            min_raise: config.min_raise,
            max_invalid_attempts: config.max_invalid_attempts,
        }
    }
}

/// Итог одной улицы.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreetSummary {
    /// Сколько действий применено.
    pub actions: usize,
    /// Максимальная ставка, на которой улица закрылась.
    pub final_bet: Chips,
    /// Место последнего bet/raise (None, если ставок не было).
    pub last_aggressor: Option<usize>,
    /// Сколько игроков осталось в раздаче.
    pub active_after: usize,
}

/// Провести одну улицу торговли до согласованного состояния.
///
/// - `first_to_act` – место, с которого начинается круг;
/// - `baseline` – уже поставленная ставка (большой блайнд на префлопе, иначе 0).
///
/// Улица заканчивается, когда в раздаче остался один игрок или каждый, кто
/// может ходить, ответил на последнее повышение. Сфолдившие и игроки без
/// фишек пропускаются, но остаются в круге. По завершении `current_bet`
/// всех игроков обнуляется.
pub fn run_street(
    seats: &mut [Seat],
    round: &mut RoundContext,
    rules: &BettingRules,
    first_to_act: usize,
    baseline: Chips,
) -> Result<StreetSummary, EngineError> {
    let seat_count = seats.len();
    if seat_count == 0 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let order: Vec<usize> = rotation_from(first_to_act % seat_count, seat_count)
        .filter(|&s| seats[s].actor.can_act())
        .collect();
    let mut state = BettingState::new(round.street, baseline, order);
    let mut actions = 0;

    while !state.is_round_complete() && count_active(seats) > 1 {
        let Some(seat) = state.next_to_act() else {
            break;
        };
        if !needs_to_act(seats, seat, state.running_bet) {
            continue;
        }

        let action = request_action(seats, seat, round, &state, rules);
        apply_action(seats, seat, action, round, &mut state);
        actions += 1;
    }

    for s in seats.iter_mut() {
        s.actor.reset_bet();
    }

    Ok(StreetSummary {
        actions,
        final_bet: state.running_bet,
        last_aggressor: state.last_aggressor,
        active_after: count_active(seats),
    })
}

/// Нужно ли месту ходить. Игрок, уравнявший ставку, когда больше ни у кого
/// из оставшихся нет фишек, не ходит: ему некому ставить.
fn needs_to_act(seats: &[Seat], seat: usize, running_bet: Chips) -> bool {
    let actor = &seats[seat].actor;
    if !actor.can_act() {
        return false;
    }
    let others_can_act = seats
        .iter()
        .enumerate()
        .any(|(i, s)| i != seat && s.actor.can_act());
    others_can_act || actor.current_bet < running_bet
}

/// Опрашивать провайдера, пока он не вернёт допустимое действие.
///
/// После `max_invalid_attempts` отказов подряд выбирается пассивное действие,
/// чтобы раздача всё равно дошла до конца.
fn request_action(
    seats: &mut [Seat],
    seat: usize,
    round: &mut RoundContext,
    state: &BettingState,
    rules: &BettingRules,
) -> Action {
    let active_players = count_active(seats);
    let Seat { actor, provider } = &mut seats[seat];
    let mut rejections = Vec::new();

    let action = {
        let ctx = BettingContext {
            street: state.street,
            running_bet: state.running_bet,
            pot: round.pot.total(),
            community: &round.community,
            active_players,
            valid: valid_actions(actor, state.running_bet, rules.min_raise),
        };

        let mut chosen = None;
        for _ in 0..rules.max_invalid_attempts {
            let action = provider.choose(actor, &ctx);
            match validate_action(&action, &ctx.valid) {
                Ok(()) => {
                    chosen = Some(action);
                    break;
                }
                Err(err) => {
                    warn!("{}: отклонено {action}: {err}", actor.name);
                    provider.rejected(actor, &err);
                    rejections.push(err.to_string());
                }
            }
        }

        chosen.unwrap_or_else(|| {
            let fallback = ctx.valid.passive();
            warn!(
                "{}: {} отказов подряд, принудительно {fallback}",
                actor.name, rules.max_invalid_attempts
            );
            fallback
        })
    };

    for reason in rejections {
        round.record(HandEventKind::ActionRejected {
            actor: actor.name.clone(),
            reason,
        });
    }
    action
}

/// Применить уже проверенное действие.
fn apply_action(
    seats: &mut [Seat],
    seat: usize,
    action: Action,
    round: &mut RoundContext,
    state: &mut BettingState,
) {
    let actor = &mut seats[seat].actor;
    let to_call = state.running_bet.saturating_sub(actor.current_bet);

    let paid = match action {
        Action::Fold => {
            actor.fold();
            Chips::ZERO
        }
        Action::Check => Chips::ZERO,
        // Не хватает на колл – игрок идёт all-in на остаток и остаётся в раздаче.
        Action::Call => actor.commit(to_call),
        Action::Bet(amount) => actor.commit(amount),
        Action::Raise(amount) => actor.commit(to_call + amount),
    };
    round.contribute(seat, paid);

    let new_bet = actor.current_bet;
    let applied = AppliedAction {
        actor: actor.name.clone(),
        action,
        paid,
        stack_after: actor.chips(),
        pot_after: round.pot.total(),
    };
    debug!(
        "{}: {} (внесено {}, стек {}, банк {})",
        applied.actor, action, paid, applied.stack_after, applied.pot_after
    );
    round.record(HandEventKind::ActionApplied(applied));

    if matches!(action, Action::Bet(_) | Action::Raise(_)) && new_bet > state.running_bet {
        let reopened: Vec<usize> = rotation_from(seat, seats.len())
            .skip(1)
            .filter(|&s| seats[s].actor.can_act())
            .collect();
        state.on_raise(seat, new_bet, reopened);
    } else {
        state.mark_acted(seat);
    }
}
