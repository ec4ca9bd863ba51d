use thiserror::Error;

use crate::MIN_DIVISOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("divisor must be at least 2, got {0}")]
    DivisorTooSmall(u32),
}

/// Condition under which `Cooldown` hands back to `Idle`.
///
/// Both rules agree for every register state the divider can reach by ticking. They only
/// part ways after a counter value past the limit has been loaded from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CooldownExit {
    /// `counter >= divisor - 1`
    #[default]
    AtOrPastLimit,
    /// `counter == divisor - 1`
    AtLimit,
}

/// Construction-time parameters of a [`ClockDivider`](crate::ClockDivider).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    divisor: u32,
    idle_high: bool,
    cooldown_exit: CooldownExit,
}

impl Config {
    /// `divisor` ticks per output period, idle level high.
    pub fn new(divisor: u32) -> Self {
        Self {
            divisor,
            idle_high: true,
            cooldown_exit: CooldownExit::default(),
        }
    }

    pub fn with_idle_high(mut self, idle_high: bool) -> Self {
        self.idle_high = idle_high;
        self
    }

    pub fn with_cooldown_exit(mut self, exit: CooldownExit) -> Self {
        self.cooldown_exit = exit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divisor < MIN_DIVISOR {
            return Err(ConfigError::DivisorTooSmall(self.divisor));
        }
        Ok(())
    }

    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    pub fn idle_high(&self) -> bool {
        self.idle_high
    }

    pub fn cooldown_exit(&self) -> CooldownExit {
        self.cooldown_exit
    }

    /// Ticks the output spends at each level, rounded down.
    pub fn half_period(&self) -> u32 {
        self.divisor / 2
    }
}
