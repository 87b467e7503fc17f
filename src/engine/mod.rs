//! Покерный движок: улицы торговли, банк, позиции, шоудаун.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `Game::play_hand` – сыграть раздачу целиком;
//!   - `run_street` – провести одну улицу торговли над явным `RoundContext`;
//!   - `distribute_single_pot` / `distribute_side_pots` – выплаты на шоудауне.

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod round;
pub mod seat;
pub mod showdown;
pub mod side_pots;
pub mod validation;

pub use actions::{Action, ActionKind, AppliedAction};
pub use betting::{run_street, BettingRules, BettingState, StreetSummary};
pub use errors::EngineError;
pub use game_loop::{Game, HandOutcome, TableStatus};
pub use hand_history::{ActorSnapshot, HandEvent, HandEventKind, HandHistory, HandHistoryEntry, HandLog};
pub use pot::Pot;
pub use round::RoundContext;
pub use seat::Seat;
pub use side_pots::SidePot;
pub use validation::{valid_actions, validate_action, ValidActions};

pub use crate::infra::rng::RandomSource;
