use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::Actor;
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;
use crate::engine::validation::ValidActions;

/// Что видит игрок в момент хода.
#[derive(Clone, Debug)]
pub struct BettingContext<'a> {
    pub street: Street,
    /// Текущая (максимальная) ставка улицы.
    pub running_bet: Chips,
    pub pot: Chips,
    pub community: &'a [Card],
    /// Сколько игроков ещё в раздаче (не сфолдили).
    pub active_players: usize,
    pub valid: ValidActions,
}

/// Источник решений для одного игрока: человек, бот или скрипт в тестах.
///
/// Вызывается синхронно; движок ждёт ответа. Недопустимый ответ
/// отклоняется через `rejected`, после чего `choose` вызывается снова.
pub trait ActionProvider {
    fn choose(&mut self, actor: &Actor, ctx: &BettingContext<'_>) -> Action;

    /// Уведомление об отклонённом ответе.
    fn rejected(&mut self, _actor: &Actor, _error: &EngineError) {}
}
