/// One step of a step-function table: any value at or above `at` earns
/// `points`, until the next breakpoint takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub at: u64,
    pub points: u32,
}

/// An ascending table of breakpoints.
///
/// `lookup` returns the points of the largest breakpoint whose `at` is less
/// than or equal to the value. A value below the first breakpoint scores 0.
#[derive(Debug, Clone, Copy)]
pub struct StepTable {
    breakpoints: &'static [Breakpoint],
}

impl StepTable {
    pub const fn new(breakpoints: &'static [Breakpoint]) -> Self {
        Self { breakpoints }
    }

    pub fn breakpoints(&self) -> &'static [Breakpoint] {
        self.breakpoints
    }

    pub fn lookup(&self, value: u64) -> u32 {
        self.breakpoints
            .iter()
            .rev()
            .find(|b| b.at <= value)
            .map(|b| b.points)
            .unwrap_or(0)
    }
}
