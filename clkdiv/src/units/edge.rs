/// Keeps the last two emitted clock levels and flags a return to the idle level.
///
/// The flag is raised on the tick *after* the idle level was emitted, never on the same
/// tick, so `enable` is only ever compared against a registered edge.
#[derive(Debug)]
pub struct EdgeDetector {
    idle_level: bool,
    level: bool,
    prev_level: bool,
}

impl EdgeDetector {
    pub fn new(idle_level: bool) -> Self {
        Self {
            idle_level,
            level: idle_level,
            prev_level: idle_level,
        }
    }

    pub fn tick(&mut self, level: bool) {
        self.prev_level = self.level;
        self.level = level;
    }

    pub fn returned_to_idle(&self) -> bool {
        self.level == self.idle_level && self.prev_level != self.idle_level
    }

    pub fn level(&self) -> bool {
        self.level
    }

    pub fn prev_level(&self) -> bool {
        self.prev_level
    }

    pub(crate) fn load(&mut self, level: bool, prev_level: bool) {
        self.level = level;
        self.prev_level = prev_level;
    }

    pub fn reset(&mut self) {
        self.level = self.idle_level;
        self.prev_level = self.idle_level;
    }
}
