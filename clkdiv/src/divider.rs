use crate::config::{Config, ConfigError, CooldownExit};
use crate::fsm::{Inputs, State};
use crate::regs::Registers;
use crate::trace::{debug, trace, warn};
use crate::units::{EdgeDetector, PeriodCounter};

bitflags::bitflags! {
    /// Lines driven by the divider during one tick.
    pub struct Lines: u8 {
        const CLOCK = 0b01;
        const IDLE  = 0b10;
    }
}

impl Lines {
    pub fn clock_level(self) -> bool {
        self.contains(Lines::CLOCK)
    }

    pub fn idle(self) -> bool {
        self.contains(Lines::IDLE)
    }
}

/// Gated clock divider.
///
/// Every call to [`tick`](Self::tick) is one reference tick. While enabled the output
/// spends `divisor / 2` ticks away from the idle level and the rest of the period at it.
/// Once the output has left the idle level it is never pulled back early: dropping
/// `enable` lets the period finish through `Cooldown` before the divider goes `Idle`.
#[derive(Debug)]
pub struct ClockDivider {
    config: Config,
    state: State,
    counter: PeriodCounter,
    edge: EdgeDetector,
    recoveries: usize,
}

impl ClockDivider {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            divisor = config.divisor(),
            idle_high = config.idle_high(),
            "clock divider created"
        );

        Ok(Self {
            config,
            state: State::Idle,
            counter: PeriodCounter::new(config.divisor()),
            edge: EdgeDetector::new(config.idle_high()),
            recoveries: 0,
        })
    }

    /// Idle-high divider with the canonical cooldown exit.
    pub fn with_divisor(divisor: u32) -> Result<Self, ConfigError> {
        Self::new(Config::new(divisor))
    }

    /// Advances one reference tick and returns the lines driven during it.
    pub fn tick(&mut self, enable: bool) -> Lines {
        let inputs = Inputs {
            enable,
            reached_half: self.counter.reached_half(),
            reached_end: self.counter.reached_end(),
            returned_to_idle: self.edge.returned_to_idle(),
            cooldown_done: match self.config.cooldown_exit() {
                CooldownExit::AtOrPastLimit => self.counter.reached_end(),
                CooldownExit::AtLimit => self.counter.at_limit(),
            },
        };

        let out = self.state.decode(&inputs, self.config.idle_high());
        let next = self.state.next(&inputs);
        if next != self.state {
            trace!(
                from = ?self.state,
                to = ?next,
                count = self.counter.count(),
                "state transition"
            );
        }

        self.counter.tick(out.restart);
        self.edge.tick(out.level);
        self.state = next;

        let mut lines = Lines::empty();
        lines.set(Lines::CLOCK, out.level);
        lines.set(Lines::IDLE, out.idle);
        lines
    }

    /// Back to the state right after construction.
    pub fn reset(&mut self) {
        debug!(from = ?self.state, "clock divider reset");
        self.state = State::Idle;
        self.counter.reset();
        self.edge.reset();
    }

    pub fn registers(&self) -> Registers {
        Registers {
            state: self.state as u8,
            level: self.edge.level(),
            prev_level: self.edge.prev_level(),
            counter: self.counter.count(),
        }
    }

    /// Overwrites the register bank.
    ///
    /// A state encoding outside the three known states is not reachable by ticking; it is
    /// forced to `Idle` and counted in [`recoveries`](Self::recoveries).
    pub fn load_registers(&mut self, regs: Registers) {
        self.state = match State::try_from(regs.state) {
            Ok(state) => state,
            Err(_) => {
                warn!(state = regs.state, "invalid state encoding, forcing divider to idle");
                self.recoveries += 1;
                State::Idle
            }
        };
        self.counter.load(regs.counter);
        self.edge.load(regs.level, regs.prev_level);
    }

    pub fn recoveries(&self) -> usize {
        self.recoveries
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn counter(&self) -> u32 {
        self.counter.count()
    }

    /// Level emitted on the last tick.
    pub fn clock_level(&self) -> bool {
        self.edge.level()
    }

    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }
}
