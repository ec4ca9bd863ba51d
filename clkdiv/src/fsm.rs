//! Three-state control of the divided clock.
//!
//! Outputs are decoded from the state the machine is in *before* the tick commits, and the
//! next state is chosen from the same snapshot. Nothing here looks at the next state.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum State {
    /// Output parked at the idle level, waiting for `enable`.
    #[default]
    Idle = 0b00,
    /// Output toggling at every half period.
    Running = 0b01,
    /// Output parked at the idle level until the current period has run out.
    Cooldown = 0b10,
}

/// A state register value outside the three encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid state encoding {0:#04b}")]
pub struct InvalidState(pub u8);

impl TryFrom<u8> for State {
    type Error = InvalidState;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b00 => Ok(State::Idle),
            0b01 => Ok(State::Running),
            0b10 => Ok(State::Cooldown),
            _ => Err(InvalidState(bits)),
        }
    }
}

/// Signals sampled by the state machine on one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inputs {
    pub enable: bool,
    pub reached_half: bool,
    pub reached_end: bool,
    pub returned_to_idle: bool,
    pub cooldown_done: bool,
}

/// What a state drives for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decode {
    pub level: bool,
    pub idle: bool,
    pub restart: bool,
}

impl State {
    pub fn decode(self, inputs: &Inputs, idle_high: bool) -> Decode {
        match self {
            State::Idle => Decode {
                level: idle_high,
                idle: true,
                // counting starts from zero on the first Running tick
                restart: inputs.enable,
            },
            State::Running => Decode {
                level: !(inputs.reached_half ^ idle_high),
                idle: false,
                restart: inputs.reached_end,
            },
            State::Cooldown => Decode {
                level: idle_high,
                idle: false,
                restart: false,
            },
        }
    }

    pub fn next(self, inputs: &Inputs) -> State {
        match self {
            State::Idle if inputs.enable => State::Running,
            State::Running if !inputs.enable && inputs.returned_to_idle => State::Cooldown,
            State::Cooldown if inputs.cooldown_done => State::Idle,
            state => state,
        }
    }

    /// One-letter tag used by waveform dumps.
    pub fn tag(self) -> char {
        match self {
            State::Idle => 'I',
            State::Running => 'R',
            State::Cooldown => 'C',
        }
    }
}
