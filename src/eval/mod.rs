//! Оценка силы рук (Texas Hold'em).
//!
//! Для движка это внешний коллаборатор: `Evaluator::evaluate(hole, community)`
//! возвращает ранг (меньше = сильнее) и категорию для отчётов.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod strength;

pub use evaluator::{Evaluation, Evaluator, StandardEvaluator};
pub use hand_rank::HandCategory;
pub use strength::{hand_strength, preflop_strength};
