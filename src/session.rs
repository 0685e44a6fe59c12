//! The stateful surface most callers use: one [`Session`] owns a roll
//! context, a bounded history, and an optional channel results are announced
//! on. `roll` takes `&self`, so a session shared behind an [`Arc`] can serve
//! several threads at once.
//!
//! [`Arc`]: std::sync::Arc

use crate::common::Int;
use crate::error::Error;
use crate::history::History;
use crate::parse;
use crate::roll::{evaluate, DefaultRoller, RollContext, RollResult, Roller};
use std::sync::{mpsc, Mutex, PoisonError};

/// Per-roll options. The defaults announce the result on the sink (when one
/// is attached) with no flavor text and no speaker.
#[derive(Debug, Clone)]
pub struct RollOptions {
    pub send_result: bool,
    pub flavor: Option<String>,
    pub speaker: Option<String>,
}

impl Default for RollOptions {
    fn default() -> Self {
        Self {
            send_result: true,
            flavor: None,
            speaker: None,
        }
    }
}

/// What the sink receives for each announced roll.
#[derive(Debug, Clone)]
pub struct RollEvent {
    pub result: RollResult,
    pub flavor: Option<String>,
    pub speaker: Option<String>,
}

/// Advantage state for a d20 test.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Advantage {
    Normal,
    Advantage,
    Disadvantage,
}

/// The expression for a d20 test with the given advantage state and bonus,
/// e.g. `d20_expression(Advantage::Advantage, 5)` is `"2d20kh1+5"`.
pub fn d20_expression(advantage: Advantage, bonus: Int) -> String {
    let mut out = match advantage {
        Advantage::Normal => String::from("1d20"),
        Advantage::Advantage => String::from("2d20kh1"),
        Advantage::Disadvantage => String::from("2d20kl1"),
    };
    if bonus > 0 {
        out.push_str(&format!("+{}", bonus));
    } else if bonus < 0 {
        out.push_str(&format!("{}", bonus));
    }
    out
}

pub struct Session<R = DefaultRoller> {
    ctx: Mutex<RollContext<R>>,
    history: Mutex<History>,
    sink: Option<mpsc::Sender<RollEvent>>,
}

impl Session {
    /// A session with an entropy-seeded roller and the default history size.
    pub fn new() -> Self {
        Self::with_context(RollContext::default())
    }

    /// A session whose rolls replay exactly for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_context(RollContext::seeded(seed))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Roller> Session<R> {
    pub fn with_context(ctx: RollContext<R>) -> Self {
        Self {
            ctx: Mutex::new(ctx),
            history: Mutex::new(History::default()),
            sink: None,
        }
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history = Mutex::new(History::with_capacity(capacity));
        self
    }

    /// Attach a channel that each announced result is sent on. Sends are
    /// fire-and-forget; a dropped receiver never fails the roll.
    pub fn with_sink(mut self, sink: mpsc::Sender<RollEvent>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Parse and evaluate `expression`, record the result in history, and
    /// announce it on the sink when one is attached and the options ask for
    /// it. A failed roll touches neither history nor sink.
    pub fn roll(&self, expression: &str, options: RollOptions) -> Result<RollResult, Error> {
        let normalized = parse::normalize(expression);
        if normalized.is_empty() {
            return Err(Error::EmptyExpression);
        }
        let expr = parse::parse_normalized(normalized)?;

        let result = {
            let mut ctx = lock(&self.ctx);
            evaluate(&expr, &mut ctx)?
        };
        log::debug!("rolled {}: {}", result.expression, result);

        lock(&self.history).push(result.clone());

        if options.send_result {
            if let Some(sink) = &self.sink {
                let event = RollEvent {
                    result: result.clone(),
                    flavor: options.flavor,
                    speaker: options.speaker,
                };
                if sink.send(event).is_err() {
                    log::debug!("roll sink disconnected; result kept in history only");
                }
            }
        }

        Ok(result)
    }

    /// Up to `limit` past results, most recent first.
    pub fn recent(&self, limit: usize) -> Vec<RollResult> {
        lock(&self.history).recent(limit)
    }

    pub fn last_roll(&self) -> Option<RollResult> {
        lock(&self.history).last().cloned()
    }

    pub fn clear_history(&self) {
        lock(&self.history).clear();
    }
}

// A panic while holding either lock leaves only complete state behind
// (history pushes are single calls), so a poisoned lock is still usable.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
