use super::{ctx::RollContext, error::RollError, roller::Roller};
use crate::common::*;
use crate::parse::ast::GroupTerm;
use std::cmp::Reverse;

/// One rolled die. The flags change while modifiers run; `result` and
/// `sides` never do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Die {
    pub result: UInt,
    pub sides: Sides,
    pub kept: bool,
    pub exploded: bool,
}

impl Die {
    fn new(sides: Sides, result: UInt) -> Self {
        Self {
            result,
            sides,
            kept: true,
            exploded: false,
        }
    }
}

/// The outcome of one dice group, in roll order with exploded dice appended.
/// Dropped dice stay in `dice` with `kept == false`.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupRoll {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub term: GroupTerm,
    pub dice: NonEmpty<Die>,
    pub subtotal: Int,
}

impl GroupRoll {
    pub fn kept(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter().filter(|die| die.kept)
    }

    pub fn dropped(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter().filter(|die| !die.kept)
    }
}

/// Roll one group: primary dice, then the modifier, then the subtotal. A
/// term carries at most one modifier, so explosion and keep/drop never apply
/// to the same group.
pub fn roll_group<R: Roller>(
    term: &GroupTerm,
    ctx: &mut RollContext<R>,
) -> Result<GroupRoll, RollError> {
    let count = term.count.get();
    let mut dice = Vec::with_capacity(count);
    for _ in 0..count {
        dice.push(Die::new(term.sides, ctx.roll_one(term.sides)?));
    }

    match term.modifier {
        Some(Modifier::Explode(threshold)) => explode(&mut dice, term.sides, threshold, ctx)?,
        Some(Modifier::KeepDrop(kd)) => keep_drop(&mut dice, kd, count),
        None => {}
    }

    let subtotal: Int =
        dice.iter().filter(|d| d.kept).map(|d| d.result as Int).sum::<Int>() + term.flat;
    // `count` is nonzero, so at least one die was rolled
    let dice = NonEmpty::try_from_vec(dice).expect("dice group is never empty");

    Ok(GroupRoll {
        term: *term,
        dice,
        subtotal,
    })
}

/// Append one die for every primary die at or above the threshold. Appended
/// dice never re-trigger, so a chain cannot form; the cap still bounds
/// pathological counts.
fn explode<R: Roller>(
    dice: &mut Vec<Die>,
    sides: Sides,
    threshold: Option<UInt>,
    ctx: &mut RollContext<R>,
) -> Result<(), RollError> {
    let threshold = threshold.unwrap_or_else(|| sides.get());
    let primary = dice.len();
    let mut appended = 0;

    for i in 0..primary {
        if dice[i].result < threshold {
            continue;
        }
        appended += 1;
        if appended > ctx.explosion_limit() {
            return Err(RollError::ExplosionLimitExceeded {
                limit: ctx.explosion_limit(),
            });
        }
        dice[i].exploded = true;
        let result = ctx.roll_one(sides)?;
        dice.push(Die::new(sides, result));
    }
    Ok(())
}

/// Mark dice as kept or dropped. Selection sorts an index-tagged copy so that
/// ties always go to the earlier roll, and at least one die stays kept: drops
/// are capped at `count - 1`, keeps clamped to one or more.
fn keep_drop(dice: &mut [Die], kd: KeepDrop, count: usize) {
    let mut ranked: Vec<(usize, UInt)> = dice
        .iter()
        .enumerate()
        .map(|(i, die)| (i, die.result))
        .collect();

    match kd {
        KeepDrop::DropLowest(n) => {
            ranked.sort_by_key(|&(i, value)| (value, i));
            for &(i, _) in ranked.iter().take(n.min(count - 1)) {
                dice[i].kept = false;
            }
        }
        KeepDrop::DropHighest(n) => {
            ranked.sort_by_key(|&(i, value)| (Reverse(value), i));
            for &(i, _) in ranked.iter().take(n.min(count - 1)) {
                dice[i].kept = false;
            }
        }
        KeepDrop::KeepHighest(n) => {
            ranked.sort_by_key(|&(i, value)| (Reverse(value), i));
            keep_only(dice, &ranked, n);
        }
        KeepDrop::KeepLowest(n) => {
            ranked.sort_by_key(|&(i, value)| (value, i));
            keep_only(dice, &ranked, n);
        }
    }
}

fn keep_only(dice: &mut [Die], ranked: &[(usize, UInt)], n: usize) {
    for die in dice.iter_mut() {
        die.kept = false;
    }
    for &(i, _) in ranked.iter().take(n.max(1)) {
        dice[i].kept = true;
    }
}
