use bit_field::BitField;

use crate::fsm::State;

/// Raw snapshot of the divider's register bank.
///
/// Packed layout of [`Registers::to_u64`]:
///
/// ```text
///  63        32  31    10    9      8     7       0
/// [  counter  ] [ zero  ] [prev] [level] [  state  ]
/// ```
///
/// `state` is kept as its raw encoding so a snapshot can carry any bit pattern; the divider
/// decides what to do with an invalid one when it is loaded.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub state: u8,
    pub level: bool,
    pub prev_level: bool,
    pub counter: u32,
}

impl Registers {
    pub fn to_u64(self) -> u64 {
        let mut word = 0u64;
        word.set_bits(0..8, self.state as u64);
        word.set_bit(8, self.level);
        word.set_bit(9, self.prev_level);
        word.set_bits(32..64, self.counter as u64);
        word
    }
}

impl From<u64> for Registers {
    fn from(word: u64) -> Self {
        Self {
            state: word.get_bits(0..8) as u8,
            level: word.get_bit(8),
            prev_level: word.get_bit(9),
            counter: word.get_bits(32..64) as u32,
        }
    }
}

impl std::fmt::Debug for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match State::try_from(self.state) {
            Ok(state) => write!(f, "{:?}", state)?,
            Err(_) => write!(f, "?{}", self.state)?,
        }
        write!(
            f,
            " sclk={} prev={} count={}",
            self.level as u8, self.prev_level as u8, self.counter
        )
    }
}
