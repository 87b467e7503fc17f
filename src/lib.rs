//! Симулятор безлимитного холдема за одним столом.
//!
//! Слои:
//! - `domain` – карты, фишки, колода, игроки, конфиг стола;
//! - `eval` – оценка рук;
//! - `engine` – улицы торговли, банк, позиции, шоудаун, история;
//! - `players` – источники решений (человек, бот, сценарий);
//! - `infra` – RNG и логирование.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod players;
