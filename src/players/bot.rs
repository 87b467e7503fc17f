use log::debug;

use crate::domain::chips::Chips;
use crate::domain::player::Actor;
use crate::domain::table::BotConfig;
use crate::engine::actions::{Action, ActionKind};
use crate::engine::validation::ValidActions;
use crate::eval::{hand_strength, Evaluator, StandardEvaluator};
use crate::infra::rng::RandomSource;

use super::provider::{ActionProvider, BettingContext};

/// Бот с пороговой политикой по силе руки.
///
/// - сила < `fold_below`: check, если можно, иначе fold;
/// - сила >= `raise_above`: bet/raise случайного размера;
/// - между ними: call/check.
pub struct BotProvider<R: RandomSource, E: Evaluator = StandardEvaluator> {
    config: BotConfig,
    rng: R,
    evaluator: E,
}

impl<R: RandomSource> BotProvider<R, StandardEvaluator> {
    pub fn new(config: BotConfig, rng: R) -> Self {
        Self::with_evaluator(config, rng, StandardEvaluator)
    }
}

impl<R: RandomSource, E: Evaluator> BotProvider<R, E> {
    pub fn with_evaluator(config: BotConfig, rng: R, evaluator: E) -> Self {
        Self {
            config,
            rng,
            evaluator,
        }
    }

    /// Размер bet/raise: равномерно из [min, min(доступно, min * max_raise_multiple)].
    fn sizing(&mut self, valid: &ValidActions) -> Chips {
        let low = valid.min_amount.0;
        let cap = low.saturating_mul(self.config.max_raise_multiple);
        let high = cap.min(valid.max_amount.0).max(low);
        Chips(self.rng.range_inclusive(low, high))
    }

    fn decide(&mut self, strength: f64, valid: &ValidActions) -> Action {
        let can = |k| valid.contains(k);

        if strength >= self.config.raise_above {
            if can(ActionKind::Raise) {
                return Action::Raise(self.sizing(valid));
            }
            if can(ActionKind::Bet) {
                return Action::Bet(self.sizing(valid));
            }
        }

        if strength < self.config.fold_below {
            return valid.passive();
        }

        if can(ActionKind::Call) {
            Action::Call
        } else {
            valid.passive()
        }
    }
}

impl<R: RandomSource, E: Evaluator> ActionProvider for BotProvider<R, E> {
    fn choose(&mut self, actor: &Actor, ctx: &BettingContext<'_>) -> Action {
        let strength = hand_strength(&self.evaluator, &actor.hand, ctx.community);
        let action = self.decide(strength, &ctx.valid);
        debug!("{}: сила {strength:.2} → {action}", actor.name);
        action
    }
}
