mod edge;
mod period;

pub use edge::EdgeDetector;
pub use period::PeriodCounter;
