//! Источники решений игроков.

pub mod bot;
pub mod human;
pub mod provider;
pub mod scripted;

pub use bot::BotProvider;
pub use human::HumanProvider;
pub use provider::{ActionProvider, BettingContext};
pub use scripted::{ScriptFallback, ScriptedProvider};
