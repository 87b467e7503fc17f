//! Инфраструктура вокруг движка:
//! - RNG-реализации (системный и детерминированный);
//! - инициализация логирования для бинарника.

pub mod logging;
pub mod rng;

pub use logging::init_terminal_logging;
pub use rng::{DeterministicRng, RandomSource, SystemRng};
