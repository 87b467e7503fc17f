use std::collections::VecDeque;

use crate::domain::player::Actor;
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::EngineError;

use super::provider::{ActionProvider, BettingContext};

/// Что делать, когда сценарий закончился.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptFallback {
    /// check, иначе call (всё уравнивает, никогда не сбрасывает).
    CheckOrCall,
    /// check, иначе fold.
    CheckOrFold,
}

/// Провайдер для тестов: отдаёт действия из заранее заданного списка.
///
/// Отклонённый ответ не повторяется – следующий вызов берёт следующий
/// элемент сценария. Так в сценарий можно вписать заведомо неверные ходы.
#[derive(Clone, Debug)]
pub struct ScriptedProvider {
    script: VecDeque<Action>,
    fallback: ScriptFallback,
    asked: usize,
    rejected: usize,
}

impl ScriptedProvider {
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: ScriptFallback::CheckOrCall,
            asked: 0,
            rejected: 0,
        }
    }

    pub fn with_fallback(mut self, fallback: ScriptFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Всегда check/call.
    pub fn calling_station() -> Self {
        Self::new([])
    }

    /// Всегда check/fold.
    pub fn folder() -> Self {
        Self::new([]).with_fallback(ScriptFallback::CheckOrFold)
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Сколько раз движок спросил действие.
    pub fn asked(&self) -> usize {
        self.asked
    }

    /// Сколько ответов движок отклонил.
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }
}

impl ActionProvider for ScriptedProvider {
    fn choose(&mut self, _actor: &Actor, ctx: &BettingContext<'_>) -> Action {
        self.asked += 1;
        if let Some(action) = self.script.pop_front() {
            return action;
        }
        match self.fallback {
            ScriptFallback::CheckOrFold => ctx.valid.passive(),
            ScriptFallback::CheckOrCall => {
                if ctx.valid.contains(ActionKind::Check) {
                    Action::Check
                } else {
                    Action::Call
                }
            }
        }
    }

    fn rejected(&mut self, _actor: &Actor, _error: &EngineError) {
        self.rejected += 1;
    }
}
