use crate::divider::Lines;

/// Violations kept in detail; later ones are only counted.
pub const MAX_RECORDED_VIOLATIONS: usize = 16;

/// A run of one level that ended before half a period had passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Tick on which the short run ended, i.e. the first tick of the next level.
    pub tick: u64,
    pub level: bool,
    pub run: u32,
}

/// Watches the emitted clock and checks every completed run against the half period.
///
/// The run that ends with the first toggle is not checked: the divider leaves its initial
/// `Idle` as soon as it is enabled.
#[derive(Debug)]
pub struct WaveMonitor {
    half: u32,
    ticks: u64,
    level: Option<bool>,
    run: u32,
    toggles: usize,
    shortest: Option<u32>,
    violation_count: usize,
    violations: Vec<Violation>,
}

impl WaveMonitor {
    pub fn new(divisor: u32) -> Self {
        Self {
            half: divisor / 2,
            ticks: 0,
            level: None,
            run: 0,
            toggles: 0,
            shortest: None,
            violation_count: 0,
            violations: Vec::new(),
        }
    }

    pub fn observe(&mut self, lines: Lines) {
        let level = lines.clock_level();
        match self.level {
            Some(prev) if prev != level => {
                self.toggles += 1;
                if self.toggles > 1 {
                    self.shortest = Some(self.shortest.map_or(self.run, |s| s.min(self.run)));
                    if self.run < self.half {
                        self.violation_count += 1;
                        if self.violations.len() < MAX_RECORDED_VIOLATIONS {
                            self.violations.push(Violation {
                                tick: self.ticks,
                                level: prev,
                                run: self.run,
                            });
                        }
                    }
                }
                self.run = 1;
            }
            _ => self.run += 1,
        }
        self.level = Some(level);
        self.ticks += 1;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn toggles(&self) -> usize {
        self.toggles
    }

    /// Shortest checked run, `None` until two toggles have been seen.
    pub fn shortest_run(&self) -> Option<u32> {
        self.shortest
    }

    /// The first [`MAX_RECORDED_VIOLATIONS`] violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn violation_count(&self) -> usize {
        self.violation_count
    }

    pub fn is_clean(&self) -> bool {
        self.violation_count == 0
    }
}
