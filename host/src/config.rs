//! Runner configuration from environment variables.

use std::env;

use duel_core::Mode;

#[derive(Clone, Debug)]
pub struct Config {
    pub mode: Mode,
    pub seed: u32,
    /// Simulated time between frames.
    pub frame_ms: u64,
    /// Hard stop for scripts that never finish a match.
    pub max_frames: usize,
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match env::var("DUEL_MODE") {
            Ok(raw) => Mode::parse(&raw).ok_or(ConfigError::Invalid("DUEL_MODE", raw))?,
            Err(_) => Mode::Pva,
        };

        let seed = match env::var("DUEL_SEED") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("DUEL_SEED", raw))?,
            Err(_) => rand::random(),
        };

        Ok(Self {
            mode,
            seed,
            frame_ms: parse_or("DUEL_FRAME_MS", 16)?,
            max_frames: parse_or("DUEL_MAX_FRAMES", 20_000)?,
            log_level: env::var("DUEL_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key, raw)),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
