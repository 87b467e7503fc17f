//! Доменная модель: карты, колода, фишки, игроки, улицы, конфиг стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

pub use card::{format_cards, Card, CardParseError, Rank, Suit};
pub use chips::Chips;
pub use deck::Deck;
pub use hand::Street;
pub use player::{Actor, Position};
pub use table::{BotConfig, ConfigError, TableConfig, MAX_SEATS_LIMIT};
