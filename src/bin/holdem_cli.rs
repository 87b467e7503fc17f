// src/bin/holdem_cli.rs

use std::path::PathBuf;

use clap::Parser;
use dialoguer::Confirm;
use log::{error, info};

use holdem_sim::domain::chips::Chips;
use holdem_sim::domain::player::Actor;
use holdem_sim::domain::table::TableConfig;
use holdem_sim::engine::{EngineError, Game, TableStatus};
use holdem_sim::eval::StandardEvaluator;
use holdem_sim::infra::{init_terminal_logging, DeterministicRng};
use holdem_sim::players::{BotProvider, HumanProvider};

/// Консольный холдем: один человек против ботов.
#[derive(Parser, Debug)]
#[command(author, version, about = "No-limit hold'em against bots", long_about = None)]
struct Args {
    /// Имя игрока за консолью.
    #[arg(long, default_value = "Player")]
    name: String,
    /// Сколько ботов посадить.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=8))]
    bots: u8,
    /// Стартовый стек (перекрывает значение из конфига).
    #[arg(long)]
    chips: Option<u64>,
    /// Seed для колоды и ботов; без него берётся случайный.
    #[arg(long)]
    seed: Option<u64>,
    /// Остановиться после стольких раздач.
    #[arg(long)]
    hands: Option<u64>,
    /// JSON-конфиг стола.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Подробный лог (каждое действие, решения ботов).
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_terminal_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => TableConfig::from_json_file(path)?,
        None => TableConfig::default(),
    };
    if let Some(chips) = args.chips {
        config.starting_chips = Chips(chips);
    }
    config.max_seats = config.max_seats.max(args.bots + 1);
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed = {seed}");

    let mut game = Game::new(config.clone(), DeterministicRng::from_seed(seed), StandardEvaluator)?;
    game.seat(Actor::human(args.name.clone(), config.starting_chips), HumanProvider)?;
    for i in 1..=args.bots {
        let bot_rng = DeterministicRng::from_seed(seed.wrapping_add(i as u64));
        game.seat(
            Actor::bot(format!("Bot{i}"), config.starting_chips),
            BotProvider::new(config.bots.clone(), bot_rng),
        )?;
    }

    loop {
        if args.hands.is_some_and(|limit| game.hands_played() >= limit) {
            info!("лимит раздач исчерпан");
            break;
        }

        let outcome = match game.play_hand() {
            Ok(outcome) => outcome,
            Err(EngineError::NotEnoughPlayers | EngineError::GameOver) => {
                info!("играть больше не с кем");
                break;
            }
            Err(e) => {
                error!("раздача прервана: {e}");
                return Err(e.into());
            }
        };

        println!();
        println!("{}", outcome.entry);
        for name in &outcome.eliminated {
            println!("{name} is out of chips and leaves the table.");
        }

        if let TableStatus::Winner(name) = &outcome.status {
            println!("{name} wins the game!");
            break;
        }
        let busted = game
            .actor(&args.name)
            .map_or(true, |human| human.chips().is_zero());
        if busted {
            println!("You are out of chips. Game over.");
            break;
        }

        let stacks: Vec<String> = game
            .seats()
            .iter()
            .map(|s| format!("{} {}", s.actor.name, s.actor.chips()))
            .collect();
        println!("Stacks: {}", stacks.join(", "));

        if args.hands.is_none() {
            let more = Confirm::new()
                .with_prompt("Play another hand?")
                .default(true)
                .interact()
                .unwrap_or(false);
            if !more {
                break;
            }
        }
    }

    println!();
    println!("{}", game.history());
    Ok(())
}
