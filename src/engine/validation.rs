use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Actor;
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::EngineError;

/// Допустимые действия игрока в текущий момент улицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidActions {
    kinds: Vec<ActionKind>,
    /// Сколько нужно доплатить до текущей ставки.
    pub to_call: Chips,
    /// Границы суммы для Bet/Raise (для Raise – прибавка сверх уравнивания).
    pub min_amount: Chips,
    pub max_amount: Chips,
}

impl ValidActions {
    pub fn kinds(&self) -> &[ActionKind] {
        &self.kinds
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Пассивный выбор: check, если можно, иначе fold.
    pub fn passive(&self) -> Action {
        if self.contains(ActionKind::Check) {
            Action::Check
        } else {
            Action::Fold
        }
    }
}

/// Множество допустимых действий по соотношению ставки игрока и текущей ставки улицы:
/// - ставки нет: check / bet;
/// - игрок не дотягивает: fold / call / raise;
/// - игрок уравнял ненулевую ставку: check / raise.
///
/// Bet и Raise не предлагаются, если на минимальную сумму не хватает фишек.
pub fn valid_actions(actor: &Actor, running_bet: Chips, min_raise: Chips) -> ValidActions {
    let to_call = running_bet.saturating_sub(actor.current_bet);
    let affordable = actor.chips().saturating_sub(to_call);
    let can_raise = affordable >= min_raise;

    let mut kinds = Vec::with_capacity(3);
    if running_bet.is_zero() {
        kinds.push(ActionKind::Check);
        if can_raise {
            kinds.push(ActionKind::Bet);
        }
    } else if to_call.is_zero() {
        kinds.push(ActionKind::Check);
        if can_raise {
            kinds.push(ActionKind::Raise);
        }
    } else {
        kinds.push(ActionKind::Fold);
        kinds.push(ActionKind::Call);
        if can_raise {
            kinds.push(ActionKind::Raise);
        }
    }

    ValidActions {
        kinds,
        to_call,
        min_amount: min_raise,
        max_amount: affordable,
    }
}

/// Проверка выбранного действия. Ничего не меняет в состоянии.
pub fn validate_action(action: &Action, valid: &ValidActions) -> Result<(), EngineError> {
    let kind = action.kind();
    if !valid.contains(kind) {
        let allowed: Vec<String> = valid.kinds().iter().map(|k| k.to_string()).collect();
        return Err(EngineError::InvalidAction(format!(
            "{kind} сейчас недоступен, можно: {}",
            allowed.join("/")
        )));
    }

    match action {
        Action::Bet(amount) | Action::Raise(amount) => {
            if *amount < valid.min_amount || *amount > valid.max_amount {
                return Err(EngineError::InvalidAction(format!(
                    "сумма {amount} вне диапазона [{}, {}]",
                    valid.min_amount, valid.max_amount
                )));
            }
            Ok(())
        }
        Action::Fold | Action::Check | Action::Call => Ok(()),
    }
}
