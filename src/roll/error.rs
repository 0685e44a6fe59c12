use crate::common::UInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("dice group exceeded {limit} explosions")]
    ExplosionLimitExceeded { limit: usize },
    #[error("random source returned {value} for a {sides}-sided die")]
    RandomSourceContract { value: UInt, sides: UInt },
}
