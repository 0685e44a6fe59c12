use crate::parse::ParseError;
use crate::roll::RollError;

/// Every way a roll can fail, from the session surface down.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The input was empty (or whitespace-only) after normalization.
    #[error("cannot roll an empty expression")]
    EmptyExpression,
    #[error(transparent)]
    Roll(#[from] RollError),
}
