use core::fmt;

use crate::domain::player::Actor;
use crate::players::ActionProvider;

/// Место за столом: игрок и тот, кто принимает за него решения.
pub struct Seat {
    pub actor: Actor,
    pub provider: Box<dyn ActionProvider>,
}

impl Seat {
    pub fn new(actor: Actor, provider: impl ActionProvider + 'static) -> Self {
        Self {
            actor,
            provider: Box::new(provider),
        }
    }
}

impl fmt::Debug for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seat").field("actor", &self.actor).finish_non_exhaustive()
    }
}

/// Сколько игроков ещё не сфолдили.
pub fn count_active(seats: &[Seat]) -> usize {
    seats.iter().filter(|s| s.actor.active).count()
}
