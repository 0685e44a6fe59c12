use crate::roll::RollResult;
use std::collections::VecDeque;

/// How many results a session retains unless told otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A bounded buffer of completed rolls. Once full, pushing evicts the oldest
/// entry; only fully evaluated results are ever stored.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<RollResult>,
    capacity: usize,
}

impl History {
    /// A capacity of zero is treated as one; a history that can hold nothing
    /// has no reason to exist.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, result: RollResult) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(result);
    }

    /// Up to `limit` results, most recent first.
    pub fn recent(&self, limit: usize) -> Vec<RollResult> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn last(&self) -> Option<&RollResult> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::{evaluate, RollContext};

    fn result(expression: &str) -> RollResult {
        let expr = crate::parse::parse(expression).unwrap();
        evaluate(&expr, &mut RollContext::seeded(1)).unwrap()
    }

    #[test]
    fn test_recent_is_most_recent_first() {
        let mut history = History::default();
        history.push(result("1d4"));
        history.push(result("1d6"));
        history.push(result("1d8"));

        let recent = history.recent(10);
        let expressions: Vec<&str> =
            recent.iter().map(|r| r.expression.as_str()).collect();
        assert_eq!(expressions, vec!["1d8", "1d6", "1d4"]);
        assert_eq!(history.last().unwrap().expression, "1d8");
    }

    #[test]
    fn test_recent_respects_limit() {
        let mut history = History::default();
        for _ in 0..5 {
            history.push(result("1d6"));
        }
        assert_eq!(history.recent(2).len(), 2);
        assert_eq!(history.recent(0).len(), 0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::with_capacity(2);
        history.push(result("1d4"));
        history.push(result("1d6"));
        history.push(result("1d8"));

        assert_eq!(history.len(), 2);
        let recent = history.recent(10);
        let expressions: Vec<&str> =
            recent.iter().map(|r| r.expression.as_str()).collect();
        assert_eq!(expressions, vec!["1d8", "1d6"]);
    }

    #[test]
    fn test_zero_capacity_still_holds_one() {
        let mut history = History::with_capacity(0);
        history.push(result("1d6"));
        history.push(result("1d8"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().expression, "1d8");
    }

    #[test]
    fn test_clear() {
        let mut history = History::default();
        history.push(result("1d6"));
        history.clear();
        assert!(history.is_empty());
        assert!(history.last().is_none());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }
}
