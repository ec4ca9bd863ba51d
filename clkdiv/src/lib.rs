pub mod config;
pub mod divider;
pub mod fsm;
pub mod monitor;
pub mod regs;
pub mod trace;
pub mod units;

pub use config::{Config, ConfigError, CooldownExit};
pub use divider::{ClockDivider, Lines};
pub use fsm::State;
pub use monitor::{Violation, WaveMonitor, MAX_RECORDED_VIOLATIONS};
pub use regs::Registers;
pub use trace::init_tracing;

/// Smallest divisor that still yields a two-level output.
pub const MIN_DIVISOR: u32 = 2;
