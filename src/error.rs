use thiserror::Error;

/// Invalid configuration. These are programming or operator errors and are
/// never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Level name is not one of FIRE, WATER, EARTH, WIND.
    #[error("unknown level: {0:?}")]
    UnknownLevel(String),
    /// Level index outside 0..=3.
    #[error("level index {0} out of range (expected 0..=3)")]
    LevelIndexOutOfRange(usize),
    /// Player speed is not one of 3, 5, 7.
    #[error("invalid player speed: {0:?} (expected 3, 5 or 7)")]
    InvalidSpeed(String),
    /// Boolean setting that is not `1`/`true`/`0`/`false`.
    #[error("invalid value {value:?} for {key}")]
    InvalidFlag { key: &'static str, value: String },
}
