use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Действие игрока. Закрытый набор, обрабатывается исчерпывающим `match`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Открывающая ставка на улице без ставок: сколько внести.
    Bet(Chips),
    /// Повышение: на сколько поднять текущую ставку сверх уравнивания.
    Raise(Chips),
}

/// Тип действия без суммы – элемент множества допустимых действий.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Bet(_) => ActionKind::Bet,
            Action::Raise(_) => ActionKind::Raise,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Bet(amount) | Action::Raise(amount) => write!(f, "{} {}", self.kind(), amount),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// Что реально произошло после применения действия (для истории и логов).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppliedAction {
    pub actor: String,
    pub action: Action,
    /// Сколько фишек ушло в банк этим действием (с учётом all-in усечения).
    pub paid: Chips,
    pub stack_after: Chips,
    pub pot_after: Chips,
}
