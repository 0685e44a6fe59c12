use std::fmt::{self, Write};
use std::num::{NonZeroU32, NonZeroUsize};

/// Signed type for subtotals and totals; wide enough that no single
/// `u32`-faced die can overflow it.
pub type Int = i64;
pub type UInt = u32;

/// Number of faces on a die. `d0` is rejected by the lexer, so zero is
/// unrepresentable here.
pub type Sides = NonZeroU32;

/// Number of dice in a group; defaults to 1 when the notation omits it.
pub type Count = NonZeroUsize;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// A keep/drop rule over a rolled dice group. The argument is how many dice
/// the rule selects; the notation defaults it to 1 (`dl` == `dl1`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeepDrop {
    DropLowest(usize),
    DropHighest(usize),
    KeepHighest(usize),
    KeepLowest(usize),
}

impl fmt::Display for KeepDrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DropLowest(n) => write!(f, "dl{}", n),
            Self::DropHighest(n) => write!(f, "dh{}", n),
            Self::KeepHighest(n) => write!(f, "kh{}", n),
            Self::KeepLowest(n) => write!(f, "kl{}", n),
        }
    }
}

/// The modifier attached to a dice group. At most one applies per group:
/// either a keep/drop selection or an explosion rule, never both.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Modifier {
    KeepDrop(KeepDrop),
    /// Explode dice at or above the threshold; `None` means the maximum face.
    Explode(Option<UInt>),
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepDrop(kd) => fmt::Display::fmt(kd, f),
            Self::Explode(None) => f.write_char('x'),
            Self::Explode(Some(threshold)) => write!(f, "x>{}", threshold),
        }
    }
}

impl From<KeepDrop> for Modifier {
    fn from(kd: KeepDrop) -> Self {
        Self::KeepDrop(kd)
    }
}
