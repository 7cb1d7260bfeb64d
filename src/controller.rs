// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounced query controller for interactive callers.
//!
//! Keystrokes arrive through [`QueryController::on_query_input`]; the caller's
//! event loop calls [`QueryController::poll`] on every tick. Once the input has
//! been quiet for the debounce delay, the latest text runs through the engine
//! exactly once.
//!
//! ```text
//!            input               input (restart timer)
//!   Idle ───────────▶ PendingDebounce ◀──┐
//!    ▲                      │  └─────────┘
//!    │                      │ delay elapsed
//!    │                      ▼
//!    └────────────────── Executing
//! ```
//!
//! There are no threads or timers here. Time only moves when the caller polls,
//! and execution is synchronous inside `poll`, so two invocations can never
//! overlap or complete out of order. Every keystroke bumps a generation
//! counter; an outcome always carries the generation of the keystroke that
//! produced its text, which lets callers drop anything stale they may have
//! queued themselves.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::{SearchConfig, DEBOUNCE_MS};
use crate::inverted::SearchIndex;
use crate::normalize::trimmed_len;
use crate::scoring::MIN_QUERY_CHARS;
use crate::search::score_query;
use crate::types::ResultItem;

/// Something that answers a query synchronously.
pub trait QueryEngine {
    fn execute(&self, query: &str) -> Vec<ResultItem>;
}

impl<F> QueryEngine for F
where
    F: Fn(&str) -> Vec<ResultItem>,
{
    fn execute(&self, query: &str) -> Vec<ResultItem> {
        self(query)
    }
}

impl QueryEngine for SearchIndex {
    fn execute(&self, query: &str) -> Vec<ResultItem> {
        score_query(query, self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    PendingDebounce,
    Executing,
}

/// What a fired debounce produced.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub generation: u64,
    pub query: String,
    pub results: Vec<ResultItem>,
    /// False when the query was too short and the engine was skipped.
    pub executed: bool,
}

#[derive(Debug)]
struct Pending {
    query: String,
    generation: u64,
    since: Instant,
}

pub struct QueryController<E> {
    engine: E,
    delay: Duration,
    min_query_chars: usize,
    state: ControllerState,
    pending: Option<Pending>,
    generation: u64,
}

impl<E: QueryEngine> QueryController<E> {
    /// Controller with the default 300 ms delay.
    pub fn new(engine: E) -> Self {
        QueryController::with_delay(engine, Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_delay(engine: E, delay: Duration) -> Self {
        QueryController {
            engine,
            delay,
            min_query_chars: MIN_QUERY_CHARS,
            state: ControllerState::Idle,
            pending: None,
            generation: 0,
        }
    }

    pub fn from_config(engine: E, config: &SearchConfig) -> Self {
        QueryController {
            min_query_chars: config.min_query_chars,
            ..QueryController::with_delay(engine, config.debounce())
        }
    }

    pub fn on_query_input(&mut self, text: &str) -> u64 {
        self.on_query_input_at(text, Instant::now())
    }

    /// Record a keystroke at `now`. Any pending invocation is replaced and the
    /// timer restarts. Returns the keystroke's generation.
    pub fn on_query_input_at(&mut self, text: &str, now: Instant) -> u64 {
        self.generation += 1;
        if let Some(previous) = self.pending.take() {
            trace!(discarded = previous.generation, "debounce restarted");
        }
        self.pending = Some(Pending {
            query: text.to_string(),
            generation: self.generation,
            since: now,
        });
        self.state = ControllerState::PendingDebounce;
        self.generation
    }

    pub fn poll(&mut self) -> Option<QueryOutcome> {
        self.poll_at(Instant::now())
    }

    /// Fire the pending query if the input has been quiet for the full delay.
    pub fn poll_at(&mut self, now: Instant) -> Option<QueryOutcome> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now.saturating_duration_since(pending.since) >= self.delay);
        if !due {
            return None;
        }
        let Pending { query, generation, .. } = self.pending.take()?;

        if trimmed_len(&query) < self.min_query_chars {
            self.state = ControllerState::Idle;
            debug!(generation, "query below threshold; skipped engine");
            return Some(QueryOutcome {
                generation,
                query,
                results: Vec::new(),
                executed: false,
            });
        }

        self.state = ControllerState::Executing;
        let results = self.engine.execute(&query);
        self.state = ControllerState::Idle;
        debug!(generation, results = results.len(), "debounced query executed");

        Some(QueryOutcome {
            generation,
            query,
            results,
            executed: true,
        })
    }

    /// Drop any pending invocation without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.state = ControllerState::Idle;
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn pending_query(&self) -> Option<&str> {
        self.pending.as_ref().map(|pending| pending.query.as_str())
    }

    /// When the pending query becomes due, so an event loop can sleep until then.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.since + self.delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
