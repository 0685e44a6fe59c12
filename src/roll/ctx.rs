use super::{error::RollError, roller::DefaultRoller, roller::Roller};
use crate::common::{Sides, UInt};
use rand::SeedableRng;

/// Hard cap on dice appended by explosion within a single group.
pub const DEFAULT_EXPLOSION_LIMIT: usize = 100;

/// Carries the randomness source through one `roll()` call and enforces both
/// the explosion cap and the roller's range contract.
pub struct RollContext<R = DefaultRoller> {
    roller: R,
    explosion_limit: usize,
}

impl<R: Roller> RollContext<R> {
    pub fn new(roller: R) -> Self {
        Self::with_explosion_limit(roller, DEFAULT_EXPLOSION_LIMIT)
    }

    pub fn with_explosion_limit(roller: R, explosion_limit: usize) -> Self {
        Self {
            roller,
            explosion_limit,
        }
    }

    pub fn explosion_limit(&self) -> usize {
        self.explosion_limit
    }

    pub(crate) fn roll_one(&mut self, sides: Sides) -> Result<UInt, RollError> {
        let value = self.roller.roll(sides);
        if value < 1 || value > sides.get() {
            return Err(RollError::RandomSourceContract {
                value,
                sides: sides.get(),
            });
        }
        Ok(value)
    }
}

impl RollContext {
    /// A context whose rolls replay exactly for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(DefaultRoller::seed_from_u64(seed))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(DefaultRoller::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::super::roller::BrokenRoller;
    use super::*;

    #[test]
    fn test_contract_violation_is_fatal() {
        let mut ctx = RollContext::new(BrokenRoller(7));
        let err = ctx.roll_one(Sides::new(6).unwrap()).unwrap_err();
        assert_eq!(err, RollError::RandomSourceContract { value: 7, sides: 6 });
    }

    #[test]
    fn test_zero_is_a_contract_violation() {
        let mut ctx = RollContext::new(BrokenRoller(0));
        assert!(ctx.roll_one(Sides::new(6).unwrap()).is_err());
    }
}
