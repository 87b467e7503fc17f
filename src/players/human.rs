use dialoguer::{Input, Select};
use log::error;

use crate::domain::card::format_cards;
use crate::domain::chips::Chips;
use crate::domain::player::Actor;
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::EngineError;
use crate::engine::validation::ValidActions;

use super::provider::{ActionProvider, BettingContext};

/// Игрок за консолью. Выбор действия – меню, сумма – ввод числа.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanProvider;

impl HumanProvider {
    fn label(kind: ActionKind, valid: &ValidActions) -> String {
        match kind {
            ActionKind::Call => format!("Call {}", valid.to_call),
            ActionKind::Bet => format!("Bet ({}..={})", valid.min_amount, valid.max_amount),
            ActionKind::Raise => format!("Raise by ({}..={})", valid.min_amount, valid.max_amount),
            ActionKind::Fold => "Fold".to_string(),
            ActionKind::Check => "Check".to_string(),
        }
    }

    fn amount(valid: &ValidActions) -> Result<Chips, dialoguer::Error> {
        let (low, high) = (valid.min_amount.0, valid.max_amount.0);
        let value = Input::<u64>::new()
            .with_prompt(format!("Amount ({low}..={high})"))
            .validate_with(move |v: &u64| -> Result<(), String> {
                if (low..=high).contains(v) {
                    Ok(())
                } else {
                    Err(format!("enter a value between {low} and {high}"))
                }
            })
            .interact_text()?;
        Ok(Chips(value))
    }

    fn prompt(actor: &Actor, ctx: &BettingContext<'_>) -> Result<Action, dialoguer::Error> {
        println!();
        println!(
            "[{}] {} | hand: {} | board: {}",
            ctx.street,
            actor.name,
            format_cards(&actor.hand),
            if ctx.community.is_empty() {
                "-".to_string()
            } else {
                format_cards(ctx.community)
            }
        );
        println!(
            "pot {} | current bet {} | your bet {} | chips {}",
            ctx.pot,
            ctx.running_bet,
            actor.current_bet,
            actor.chips()
        );

        let kinds = ctx.valid.kinds();
        let labels: Vec<String> = kinds.iter().map(|k| Self::label(*k, &ctx.valid)).collect();
        let selection = Select::new()
            .with_prompt("Your action")
            .items(&labels)
            .default(0)
            .interact()?;

        Ok(match kinds[selection] {
            ActionKind::Fold => Action::Fold,
            ActionKind::Check => Action::Check,
            ActionKind::Call => Action::Call,
            ActionKind::Bet => Action::Bet(Self::amount(&ctx.valid)?),
            ActionKind::Raise => Action::Raise(Self::amount(&ctx.valid)?),
        })
    }
}

impl ActionProvider for HumanProvider {
    fn choose(&mut self, actor: &Actor, ctx: &BettingContext<'_>) -> Action {
        Self::prompt(actor, ctx).unwrap_or_else(|e| {
            error!("ошибка ввода ({e}), {} делает пассивный ход", actor.name);
            ctx.valid.passive()
        })
    }

    fn rejected(&mut self, _actor: &Actor, error: &EngineError) {
        println!("Invalid action: {error}. Please try again.");
    }
}
