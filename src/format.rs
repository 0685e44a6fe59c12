//! Pure rendering of roll results. Everything here reads the provenance
//! already recorded on the result (kept flags, exploded flags, term order)
//! and never re-rolls or re-derives it.

use crate::common::Int;
use crate::roll::{Die, GroupRoll, RollResult};

/// Render a full breakdown: the expression, every group's kept dice followed
/// by its dropped dice, the flat-term sum, and the total.
pub fn format(result: &RollResult) -> String {
    format!(
        "{} = {} = {}",
        result.expression,
        formula(&result.groups, result.flat_modifier_sum),
        result.total
    )
}

/// The breakdown stored on the result: groups in source order, kept results
/// first, dropped results in a trailing parenthetical.
pub(crate) fn formula(groups: &[GroupRoll], flat_modifier_sum: Int) -> String {
    if groups.is_empty() {
        return flat_modifier_sum.to_string();
    }

    let mut out = groups
        .iter()
        .map(group_breakdown)
        .collect::<Vec<_>>()
        .join(" + ");

    if flat_modifier_sum > 0 {
        out.push_str(&format!(" + {}", flat_modifier_sum));
    } else if flat_modifier_sum < 0 {
        out.push_str(&format!(" - {}", -flat_modifier_sum));
    }
    out
}

fn group_breakdown(group: &GroupRoll) -> String {
    let kept: Vec<String> = group.kept().map(die_value).collect();
    let mut out = format!("[{}]", kept.join(", "));

    let dropped: Vec<String> = group.dropped().map(die_value).collect();
    if !dropped.is_empty() {
        out.push_str(&format!(" (dropped: {})", dropped.join(", ")));
    }

    if group.term.flat > 0 {
        out.push_str(&format!(" + {}", group.term.flat));
    } else if group.term.flat < 0 {
        out.push_str(&format!(" - {}", -group.term.flat));
    }
    out
}

fn die_value(die: &Die) -> String {
    if die.exploded {
        format!("{}!", die.result)
    } else {
        die.result.to_string()
    }
}
