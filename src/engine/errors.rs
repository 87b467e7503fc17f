use thiserror::Error;

/// Ошибки движка.
///
/// `InvalidAction` никогда не выходит наружу из улицы торговли: движок
/// показывает её провайдеру и переспрашивает того же игрока.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("в колоде недостаточно карт: нужно {requested}, осталось {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("недопустимое действие: {0}")]
    InvalidAction(String),

    #[error("недостаточно игроков с фишками для раздачи")]
    NotEnoughPlayers,

    #[error("стол заполнен (максимум {0} мест)")]
    TableFull(u8),

    #[error("игрок с именем {0:?} уже сидит за столом")]
    DuplicateName(String),

    #[error("недопустимый конфиг: {0}")]
    InvalidConfig(String),

    #[error("игра окончена, за столом остался один игрок")]
    GameOver,
}
