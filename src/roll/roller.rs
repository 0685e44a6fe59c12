use crate::common::{Sides, UInt};
use rand::Rng;

/// The injected randomness source: one uniform draw in `[1, sides]` per call.
///
/// Blanket-implemented for every [`rand::Rng`], so a seeded [`DefaultRoller`]
/// replays a roll exactly and tests substitute deterministic sequences.
pub trait Roller {
    fn roll(&mut self, sides: Sides) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: Sides) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

/// The roller used when none is injected; seedable for deterministic replay.
pub type DefaultRoller = rand::rngs::StdRng;

#[cfg(test)]
pub(crate) use mock::{BrokenRoller, MaxRoller, StepRoller};

#[cfg(test)]
mod mock {
    use super::*;

    /// Emits a wrapping arithmetic sequence, the same die giving the same
    /// value at the same position every run.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: UInt, step: UInt) -> Self {
            Self {
                current: initial,
                step,
            }
        }
    }

    impl Roller for StepRoller {
        fn roll(&mut self, sides: Sides) -> UInt {
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            ret
        }
    }

    /// Always rolls the maximum face; every die is an explosion candidate.
    pub(crate) struct MaxRoller;

    impl Roller for MaxRoller {
        fn roll(&mut self, sides: Sides) -> UInt {
            sides.get()
        }
    }

    /// Violates the roller contract by returning a fixed value regardless of
    /// the requested range.
    pub(crate) struct BrokenRoller(pub UInt);

    impl Roller for BrokenRoller {
        fn roll(&mut self, _sides: Sides) -> UInt {
            self.0
        }
    }
}
