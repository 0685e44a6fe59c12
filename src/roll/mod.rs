mod ctx;
mod error;
mod group;
mod roller;

pub use ctx::{RollContext, DEFAULT_EXPLOSION_LIMIT};
pub use error::RollError;
pub use group::{roll_group, Die, GroupRoll};
pub use roller::{DefaultRoller, Roller};

#[cfg(test)]
pub(crate) use roller::StepRoller;

use crate::common::Int;
use crate::format;
use crate::parse::ast::{Expression, Term};
use chrono::{DateTime, Utc};
use std::fmt;

/// The complete, immutable record of one evaluated expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollResult {
    pub expression: String,
    pub groups: Vec<GroupRoll>,
    pub flat_modifier_sum: Int,
    pub total: Int,
    pub formula: String,
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.formula, self.total)
    }
}

/// Evaluate a parsed expression with the given context: every dice group in
/// source order against the one shared roller, flat terms summed separately.
/// An error leaves no partial result behind.
pub fn evaluate<R: Roller>(
    expr: &Expression,
    ctx: &mut RollContext<R>,
) -> Result<RollResult, RollError> {
    let mut groups = Vec::new();
    let mut flat_modifier_sum = 0;

    for term in &expr.terms {
        match term {
            Term::Group(group) => groups.push(roll_group(group, ctx)?),
            Term::Flat(value) => flat_modifier_sum += value,
        }
    }

    let total = groups.iter().map(|g| g.subtotal).sum::<Int>() + flat_modifier_sum;
    let formula = format::formula(&groups, flat_modifier_sum);

    Ok(RollResult {
        expression: expr.text.clone(),
        groups,
        flat_modifier_sum,
        total,
        formula,
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::roller::StepRoller;
    use super::*;
    use crate::parse::parse;

    fn check(s: &str, expected: Int) {
        let expr = parse(s).unwrap();
        let mut ctx = RollContext::new(StepRoller::new(10, 1));
        let actual = evaluate(&expr, &mut ctx).unwrap();
        assert_eq!(expected, actual.total, "{}", s);
    }

    #[test]
    fn test_eval_plain_groups() {
        check("1d20", 10);
        check("2d4", 2 + 3);
        check("8d6", 4 + 5 + 6 + 1 + 2 + 3 + 4 + 5);
    }

    #[test]
    fn test_eval_keep_drop() {
        // 2d20 rolls 10, 11
        check("2d20kh1", 11);
        check("2d20kl1", 10);
        // 4d6 rolls 4, 5, 6, 1
        check("4d6dl1", 4 + 5 + 6);
        check("4d6dh1", 4 + 5 + 1);
    }

    #[test]
    fn test_eval_mixed_terms() {
        // 3d8 rolls 2, 3, 4; 1d4 rolls 1
        check("3d8+1d4+2", 2 + 3 + 4 + 1 + 2);
        check("1d20-3", 10 - 3);
        check("+5-2", 3);
        // the minus peels the count off into a flat term: d20 rolls 10,
        // then a single d4 rolls 3
        check("1d20-1d4", 10 - 1 + 3);
    }

    #[test]
    fn test_total_matches_parts() {
        let expr = parse("4d6dl1+1d8+3-1").unwrap();
        let mut ctx = RollContext::new(StepRoller::new(10, 1));
        let result = evaluate(&expr, &mut ctx).unwrap();

        let group_sum: Int = result.groups.iter().map(|g| g.subtotal).sum();
        assert_eq!(result.total, group_sum + result.flat_modifier_sum);
        assert_eq!(result.flat_modifier_sum, 2);
        assert_eq!(result.groups.len(), 2);
    }

    #[test]
    fn test_seeded_replay_is_identical() {
        let expr = parse("4d6dl1+2d20kh1+1d6x").unwrap();
        let a = evaluate(&expr, &mut RollContext::seeded(42)).unwrap();
        let b = evaluate(&expr, &mut RollContext::seeded(42)).unwrap();
        assert_eq!(a.groups, b.groups);
        assert_eq!(a.total, b.total);
        assert_eq!(a.formula, b.formula);
    }
}
