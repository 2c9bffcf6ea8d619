//! Runtime configuration read from `BLOCKFALL_*` environment variables.

use std::env;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::input::{DEFAULT_KEY_RELEASE_TIMEOUT_MS, DEFAULT_REPEAT_DELAY_MS};
use crate::types::{Timings, FRAME_RATE, MOVE_WAIT_MS, ROTATE_WAIT_MS, UPDATE_START_SPEED_MS};

pub const DEFAULT_LOG_PATH: &str = "blockfall.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub fps: u32,
    pub timings: Timings,
    pub seed: u32,
    /// `None` disables file logging.
    pub log_path: Option<String>,
    pub key_release_timeout_ms: u32,
    /// How long a pressed Down key stays held before terminal auto-repeat kicks in.
    pub repeat_delay_ms: u32,
    /// Variables that were set but could not be used, as `(name, raw value)`.
    ///
    /// Parsing happens before the logger exists, so the driver reports these once
    /// logging is up.
    pub rejected: Vec<(&'static str, String)>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset variables use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut rejected = Vec::new();
        let mut parse = |name: &'static str, default: u32, min: u32| -> u32 {
            let Some(raw) = lookup(name) else {
                return default;
            };
            match parse_trimmed::<u32>(&raw) {
                Some(v) if v >= min => v,
                _ => {
                    rejected.push((name, raw));
                    default
                }
            }
        };

        let fps = parse("BLOCKFALL_FPS", FRAME_RATE, 1);
        let timings = Timings {
            start_speed_ms: parse("BLOCKFALL_START_SPEED_MS", UPDATE_START_SPEED_MS, 1),
            move_wait_ms: parse("BLOCKFALL_MOVE_WAIT_MS", MOVE_WAIT_MS, 0),
            rotate_wait_ms: parse("BLOCKFALL_ROTATE_WAIT_MS", ROTATE_WAIT_MS, 0),
        };
        let seed = parse("BLOCKFALL_SEED", clock_seed(), 0);
        let key_release_timeout_ms = parse(
            "BLOCKFALL_KEY_RELEASE_MS",
            DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            1,
        );
        let repeat_delay_ms = parse("BLOCKFALL_REPEAT_DELAY_MS", DEFAULT_REPEAT_DELAY_MS, 0);

        let log_path = match lookup("BLOCKFALL_LOG_PATH") {
            None => Some(DEFAULT_LOG_PATH.to_string()),
            Some(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(s.to_string())
                }
            }
        };

        Self {
            fps,
            timings,
            seed,
            log_path,
            key_release_timeout_ms,
            repeat_delay_ms,
            rejected,
        }
    }

    /// Target time between frames.
    pub fn frame_ms(&self) -> u64 {
        (1000 / u64::from(self.fps.max(1))).max(1)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_trimmed<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
