use crate::common::*;
use std::fmt;

/// A `count`d`sides` literal as recognized by the lexer, before any modifier
/// or flat integer is attached. `count` is `None` when the notation omitted
/// it (`d20`); the distinction matters to the parser's sign handling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dice {
    pub count: Option<Count>,
    pub sides: Sides,
}

impl Dice {
    pub fn new(count: Option<Count>, sides: Sides) -> Self {
        Self { count, sides }
    }

    pub fn count(&self) -> Count {
        self.count.unwrap_or(Count::MIN)
    }
}

/// A parsed expression: the normalized source text plus its terms in source
/// order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub text: String,
    pub terms: Vec<Term>,
}

impl Expression {
    pub(crate) fn new(text: String, terms: Vec<Term>) -> Self {
        Self { text, terms }
    }

    pub fn group_terms(&self) -> impl Iterator<Item = &GroupTerm> {
        self.terms.iter().filter_map(|term| match term {
            Term::Group(group) => Some(group),
            Term::Flat(_) => None,
        })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Term {
    Group(GroupTerm),
    Flat(Int),
}

/// One dice group: `count` dice of `sides` faces, an optional modifier, and a
/// constant added to the group's subtotal.
///
/// The parser always emits signed integers as standalone [`Term::Flat`]s, so
/// `flat` stays 0 on parsed terms; it participates in evaluation and
/// rendering for terms built programmatically.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupTerm {
    pub count: Count,
    pub sides: Sides,
    // only count and sides are part of the serialized group shape
    #[cfg_attr(feature = "serde", serde(skip))]
    pub modifier: Option<Modifier>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub flat: Int,
}

impl GroupTerm {
    pub fn new(count: Count, sides: Sides) -> Self {
        Self {
            count,
            sides,
            modifier: None,
            flat: 0,
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<Modifier>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn with_flat(mut self, flat: Int) -> Self {
        self.flat = flat;
        self
    }
}

impl From<Dice> for GroupTerm {
    fn from(dice: Dice) -> Self {
        Self::new(dice.count(), dice.sides)
    }
}

impl fmt::Display for GroupTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if let Some(modifier) = &self.modifier {
            write!(f, "{}", modifier)?;
        }
        if self.flat > 0 {
            write!(f, "+{}", self.flat)?;
        } else if self.flat < 0 {
            write!(f, "{}", self.flat)?;
        }
        Ok(())
    }
}
