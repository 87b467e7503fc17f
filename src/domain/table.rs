use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Больше игроков колода не обслужит: 23 * 2 + 5 = 51 карта.
pub const MAX_SEATS_LIMIT: u8 = 23;

/// Ошибки загрузки/проверки конфига стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("некорректный JSON конфига: {0}")]
    Json(#[from] serde_json::Error),

    #[error("недопустимый конфиг: {0}")]
    Invalid(String),
}

/// Параметры политики ботов. Пороговые значения силы руки в [0, 1].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BotConfig {
    /// Ниже этой силы бот сбрасывает против ставки (или чекает).
    pub fold_below: f64,
    /// Выше этой силы бот ставит/повышает.
    pub raise_above: f64,
    /// Верхняя граница рейза в единицах минимального рейза.
    pub max_raise_multiple: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            fold_below: 0.3,
            raise_above: 0.7,
            max_raise_multiple: 5,
        }
    }
}

/// Конфиг стола: блайнды, минимальный рейз, стартовые стеки и т.д.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Минимальный bet и минимальное повышение raise.
    pub min_raise: Chips,
    pub starting_chips: Chips,
    pub max_seats: u8,
    /// Делить банк по уровням вкладов (расширение; по умолчанию один общий банк).
    pub side_pots: bool,
    /// Сколько подряд отклонённых ответов терпим от провайдера действий.
    pub max_invalid_attempts: u32,
    pub bots: BotConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: Chips(5),
            big_blind: Chips(10),
            min_raise: Chips(10),
            starting_chips: Chips(1000),
            max_seats: 9,
            side_pots: false,
            max_invalid_attempts: 25,
            bots: BotConfig::default(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.small_blind.is_zero() || self.big_blind.is_zero() {
            return Err(ConfigError::Invalid("блайнды должны быть больше нуля".into()));
        }
        if self.big_blind < self.small_blind {
            return Err(ConfigError::Invalid(format!(
                "big_blind ({}) < small_blind ({})",
                self.big_blind, self.small_blind
            )));
        }
        if self.min_raise.is_zero() {
            return Err(ConfigError::Invalid("min_raise = 0".into()));
        }
        if !(2..=MAX_SEATS_LIMIT).contains(&self.max_seats) {
            return Err(ConfigError::Invalid(format!(
                "max_seats = {}, допустимо 2..={MAX_SEATS_LIMIT}",
                self.max_seats
            )));
        }
        if self.max_invalid_attempts == 0 {
            return Err(ConfigError::Invalid("max_invalid_attempts = 0".into()));
        }
        let bots = &self.bots;
        if !(0.0..=1.0).contains(&bots.fold_below)
            || !(0.0..=1.0).contains(&bots.raise_above)
            || bots.fold_below > bots.raise_above
        {
            return Err(ConfigError::Invalid(format!(
                "пороги ботов: fold_below={} raise_above={}",
                bots.fold_below, bots.raise_above
            )));
        }
        if bots.max_raise_multiple == 0 {
            return Err(ConfigError::Invalid("bots.max_raise_multiple = 0".into()));
        }
        Ok(())
    }

    /// Разобрать JSON; отсутствующие поля берутся из `Default`.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
