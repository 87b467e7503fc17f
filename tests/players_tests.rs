//! Тесты источников решений (crate::players).

use holdem_sim::domain::{Actor, BotConfig, Card, Chips, Street, TableConfig};
use holdem_sim::engine::{
    valid_actions, validate_action, Action, ActionKind, EngineError, Game, TableStatus,
};
use holdem_sim::eval::StandardEvaluator;
use holdem_sim::infra::DeterministicRng;
use holdem_sim::players::{ActionProvider, BettingContext, BotProvider, ScriptFallback, ScriptedProvider};

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

/// Утилита: игрок с рукой `hole` и уже поставленными `bet` фишками.
fn actor_with(hole: &str, chips: u64, bet: u64) -> Actor {
    let mut actor = Actor::bot("Bot", Chips(chips));
    actor.hand = cards(hole);
    actor.commit(Chips(bet));
    actor
}

fn context<'a>(actor: &Actor, running_bet: u64, community: &'a [Card]) -> BettingContext<'a> {
    BettingContext {
        street: if community.is_empty() {
            Street::PreFlop
        } else {
            Street::Flop
        },
        running_bet: Chips(running_bet),
        pot: Chips(running_bet * 2),
        community,
        active_players: 3,
        valid: valid_actions(actor, Chips(running_bet), Chips(10)),
    }
}

//
// ====================== BOT ======================
//

/// Бот при любом раскладе отвечает допустимым действием.
#[test]
fn bot_always_returns_valid_action() {
    let hands = ["Ah Ad", "7h 2d", "Kh Qd", "9s 8s", "Jc Jd"];
    let boards = [cards(""), cards("Ac 7s 2h"), cards("Kd Qh 3c 4s 9d")];

    for seed in 0..10u64 {
        let mut bot = BotProvider::new(BotConfig::default(), DeterministicRng::from_seed(seed));
        for hole in hands {
            for board in &boards {
                for (chips, bet, running) in [(1000, 0, 0), (1000, 0, 40), (1000, 10, 10), (25, 0, 20)] {
                    let actor = actor_with(hole, chips, bet);
                    let ctx = context(&actor, running, board);
                    let action = bot.choose(&actor, &ctx);
                    assert!(
                        validate_action(&action, &ctx.valid).is_ok(),
                        "seed {seed}, {hole}, running {running}: {action}"
                    );
                }
            }
        }
    }
}

#[test]
fn bot_raises_with_premium_hand() {
    let mut bot = BotProvider::new(BotConfig::default(), DeterministicRng::from_seed(7));
    let actor = actor_with("Ah Ad", 1000, 0);
    let ctx = context(&actor, 10, &[]);

    match bot.choose(&actor, &ctx) {
        Action::Raise(amount) => {
            assert!(amount >= Chips(10));
            // Не больше min_raise * max_raise_multiple.
            assert!(amount <= Chips(50));
        }
        other => panic!("ожидали raise, получили {other}"),
    }
}

#[test]
fn bot_folds_trash_facing_bet_and_checks_when_free() {
    let mut bot = BotProvider::new(BotConfig::default(), DeterministicRng::from_seed(1));

    let facing = actor_with("7h 2d", 1000, 0);
    assert_eq!(bot.choose(&facing, &context(&facing, 40, &[])), Action::Fold);

    let free = actor_with("7h 2d", 1000, 10);
    assert_eq!(bot.choose(&free, &context(&free, 10, &[])), Action::Check);
}

#[test]
fn bot_calls_with_medium_hand() {
    let mut bot = BotProvider::new(BotConfig::default(), DeterministicRng::from_seed(3));
    let actor = actor_with("Kh Qd", 1000, 0);
    assert_eq!(bot.choose(&actor, &context(&actor, 20, &[])), Action::Call);
}

/// Стол из ботов: каждая раздача завершается, фишки сохраняются.
#[test]
fn bots_play_until_winner_conserving_chips() {
    let config = TableConfig {
        starting_chips: Chips(200),
        ..TableConfig::default()
    };
    let mut game = Game::new(config.clone(), DeterministicRng::from_seed(99), StandardEvaluator).unwrap();
    for i in 0..4u64 {
        game.seat(
            Actor::bot(format!("Bot {i}"), config.starting_chips),
            BotProvider::new(config.bots.clone(), DeterministicRng::from_seed(i)),
        )
        .unwrap();
    }

    for _ in 0..300 {
        match game.play_hand() {
            Ok(outcome) if outcome.status == TableStatus::Continue => {}
            Ok(_) | Err(EngineError::GameOver) => break,
            Err(e) => panic!("раздача упала: {e}"),
        }
    }

    let unassigned: Chips = game.history().entries().iter().map(|e| e.unassigned).sum();
    assert_eq!(game.total_chips() + unassigned, Chips(800));
    assert!(!game.history().is_empty());
}

//
// ====================== SCRIPTED ======================
//

#[test]
fn scripted_plays_script_then_fallback() {
    let actor = actor_with("Ah Kd", 1000, 0);
    let facing = context(&actor, 20, &[]);

    let mut station = ScriptedProvider::new([Action::Raise(Chips(10))]);
    assert_eq!(station.remaining(), 1);
    assert_eq!(station.choose(&actor, &facing), Action::Raise(Chips(10)));
    assert_eq!(station.choose(&actor, &facing), Action::Call);
    assert_eq!(station.remaining(), 0);
    assert_eq!(station.asked(), 2);

    let mut folder = ScriptedProvider::calling_station().with_fallback(ScriptFallback::CheckOrFold);
    assert_eq!(folder.choose(&actor, &facing), Action::Fold);

    let free = context(&actor, 0, &[]);
    assert_eq!(folder.choose(&actor, &free), Action::Check);
    assert!(free.valid.contains(ActionKind::Bet));
}

#[test]
fn scripted_counts_rejections() {
    let actor = actor_with("Ah Kd", 1000, 0);
    let mut provider = ScriptedProvider::folder();

    provider.rejected(&actor, &EngineError::InvalidAction("test".into()));
    provider.rejected(&actor, &EngineError::InvalidAction("test".into()));
    assert_eq!(provider.rejected_count(), 2);
    assert_eq!(provider.asked(), 0);
}
