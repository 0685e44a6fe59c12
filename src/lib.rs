//! A dice expression engine: parse strings like `4d6dl1+2` or `2d20kh1`,
//! evaluate them with an injectable randomness source, and keep the full
//! per-die provenance of every result.
//!
//! The one-shot [`roll`] function covers the simple case:
//!
//! ```
//! let result = dicebox::roll("4d6dl1+2").unwrap();
//! assert!(result.total >= 5);
//! println!("{}", dicebox::format(&result));
//! ```
//!
//! For history, deterministic replay, or announcing results on a channel,
//! use a [`Session`]:
//!
//! ```
//! use dicebox::{RollOptions, Session};
//!
//! let session = Session::seeded(42);
//! session.roll("2d20kh1+5", RollOptions::default()).unwrap();
//! assert_eq!(session.recent(10).len(), 1);
//! ```

mod common;
mod error;
mod format;
mod history;
pub mod parse;
pub mod roll;
mod session;

pub use common::{Count, Int, KeepDrop, Modifier, NonEmpty, Sides, UInt};
pub use error::Error;
pub use format::format;
pub use history::{History, DEFAULT_HISTORY_CAPACITY};
pub use roll::{
    evaluate, Die, GroupRoll, RollContext, RollError, RollResult, Roller,
    DEFAULT_EXPLOSION_LIMIT,
};
pub use session::{d20_expression, Advantage, RollEvent, RollOptions, Session};

/// Roll an expression once against a thread-local roller, with no session
/// state involved.
pub fn roll(expression: &str) -> Result<RollResult, Error> {
    let normalized = parse::normalize(expression);
    if normalized.is_empty() {
        return Err(Error::EmptyExpression);
    }
    let expr = parse::parse_normalized(normalized)?;
    let result = roll::evaluate(&expr, &mut RollContext::new(rand::thread_rng()))?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_stays_in_range() {
        for _ in 0..100 {
            let result = roll("3d6").unwrap();
            assert!((3..=18).contains(&result.total));
        }
    }

    #[test]
    fn test_roll_rejects_empty() {
        assert_eq!(roll(""), Err(Error::EmptyExpression));
        assert_eq!(roll(" \t "), Err(Error::EmptyExpression));
    }
}
