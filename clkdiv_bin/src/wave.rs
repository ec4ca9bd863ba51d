use clkdiv::{Lines, State};

const HIGH: char = '-';
const LOW: char = '_';

/// Text rows of a logic-analyzer style capture.
#[derive(Debug, Default)]
pub struct Waveform {
    enable: String,
    sclk: String,
    state: String,
}

impl Waveform {
    pub fn push(&mut self, enable: bool, lines: Lines, state: State) {
        self.enable.push(level(enable));
        self.sclk.push(level(lines.clock_level()));
        self.state.push(state.tag());
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Renders the capture in blocks of at most `width` ticks.
    pub fn render(&self, width: usize) -> String {
        let width = width.max(1);
        let mut out = String::new();
        let rows = [
            ("enable", &self.enable),
            ("sclk", &self.sclk),
            ("state", &self.state),
        ];

        for start in (0..self.len()).step_by(width) {
            let end = (start + width).min(self.len());
            if start > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{:>8} {}\n", "tick", start));
            for (name, row) in rows {
                out.push_str(&format!("{:>8} {}\n", name, &row[start..end]));
            }
        }
        out
    }
}

fn level(high: bool) -> char {
    if high {
        HIGH
    } else {
        LOW
    }
}
