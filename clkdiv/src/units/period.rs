/// Counts ticks since the last restart.
///
/// `reached_end` and `reached_half` are read from the value the counter holds before the
/// tick commits.
#[derive(Debug)]
pub struct PeriodCounter {
    count: u32,
    limit: u32,
    half: u32,
}

impl PeriodCounter {
    pub fn new(divisor: u32) -> Self {
        Self {
            count: 0,
            limit: divisor.saturating_sub(1),
            half: divisor / 2,
        }
    }

    pub fn tick(&mut self, restart: bool) {
        // wrapping at the limit keeps the count in range while nobody restarts it
        self.count = if restart || self.count >= self.limit {
            0
        } else {
            self.count + 1
        };
    }

    pub fn reached_end(&self) -> bool {
        self.count >= self.limit
    }

    pub fn at_limit(&self) -> bool {
        self.count == self.limit
    }

    pub fn reached_half(&self) -> bool {
        self.count >= self.half
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub(crate) fn load(&mut self, count: u32) {
        self.count = count;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
