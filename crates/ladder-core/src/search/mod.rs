//! Concurrent best-effort route search.
//!
//! Workers pull exploration tasks from a shared priority queue (shortest path
//! first), expand them with [`weighed_siblings`] and push each extension back.
//! Completed routes flow to a collector on the calling thread, which stops the
//! search on a deadline, a route count, or an idle queue, then cancels the
//! workers and keeps the shortest route it saw.
//!
//! The result is a short route, not a guaranteed shortest one.

mod collector;
mod queue;

use std::fmt;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, debug_span, trace};

use crate::candidates::{weighed_siblings, Candidate};
use crate::error::LadderError;
use crate::index::PrefixIndex;
use crate::route::Route;
use crate::settings::{settings, SearchSettings, MAX_DEADLINE_MS};

use collector::RouteCollector;
use queue::{CancelToken, QueueStats, Task, WorkQueue};

/// Longest wall-clock budget a search runs for; larger deadlines are clamped.
pub const MAX_DEADLINE: Duration = Duration::from_millis(MAX_DEADLINE_MS);

/// Lifecycle of one search. The last three states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Dispatching,
    Collecting,
    /// Stopped after collecting more than `max_routes` routes.
    Found,
    TimedOut,
    /// Every task finished and the queue stayed idle for the quiescence period.
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::TimedOut | Self::Exhausted)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Dispatching => "dispatching",
            Self::Collecting => "collecting",
            Self::Found => "found",
            Self::TimedOut => "timed out",
            Self::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Per-search limits. Defaults come from the `[search]` settings section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_routes: usize,
    pub deadline: Duration,
    pub quiescence: Duration,
    pub depth_multiplier: usize,
    /// 0 means one worker per logical CPU.
    pub workers: usize,
    pub queue_capacity: usize,
}

impl From<&SearchSettings> for SearchConfig {
    fn from(s: &SearchSettings) -> Self {
        Self {
            max_routes: s.max_routes,
            deadline: Duration::from_millis(s.deadline_ms),
            quiescence: Duration::from_millis(s.quiescence_ms),
            depth_multiplier: s.depth_multiplier,
            workers: s.workers,
            queue_capacity: s.queue_capacity,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&settings().search)
    }
}

impl SearchConfig {
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_max_routes(mut self, max_routes: usize) -> Self {
        self.max_routes = max_routes;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_quiescence(mut self, quiescence: Duration) -> Self {
        self.quiescence = quiescence;
        self
    }

    /// Resolved worker count, never zero.
    pub fn worker_count(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }
}

/// Outcome of [`RouteSearch::search`].
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Shortest route collected.
    pub route: Route,
    pub state: SearchState,
    pub routes_collected: usize,
    pub tasks_executed: usize,
    pub tasks_dropped: usize,
    pub elapsed: Duration,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} route(s), {} task(s) run, {} dropped, {:.1?}",
            self.state, self.routes_collected, self.tasks_executed, self.tasks_dropped, self.elapsed
        )
    }
}

/// Route finder over a read-only index.
pub struct RouteSearch<'a> {
    index: &'a PrefixIndex,
    config: SearchConfig,
}

impl<'a> RouteSearch<'a> {
    pub fn new(index: &'a PrefixIndex) -> Self {
        Self::with_config(index, SearchConfig::default())
    }

    pub fn with_config(index: &'a PrefixIndex, config: SearchConfig) -> Self {
        Self { index, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Shortest route the search discovers from `origin` to `target`.
    pub fn find_route(&self, origin: &str, target: &str) -> Result<Route, LadderError> {
        self.search(origin, target).map(|report| report.route)
    }

    /// Run one search and report how it ended.
    ///
    /// Errors only for invalid inputs or a worker pool that cannot start; a
    /// search that runs but finds nothing yields `NoRoute`.
    pub fn search(&self, origin: &str, target: &str) -> Result<SearchReport, LadderError> {
        let started = Instant::now();
        let _span = debug_span!("search", origin, target).entered();

        if origin == target {
            return Err(LadderError::SameWord(origin.to_string()));
        }
        if !self.index.exists(target) {
            return Err(LadderError::NotFound(target.to_string()));
        }

        let siblings = match weighed_siblings(self.index, origin, target) {
            Ok(siblings) => siblings,
            Err(LadderError::NoMatches(_)) => return Err(no_route(origin, target)),
            Err(e) => return Err(e),
        };

        if siblings.iter().any(|c| c.word() == target) {
            debug!("target is a direct neighbor");
            return Ok(SearchReport {
                route: Route::from_words(vec![origin.to_string(), target.to_string()]),
                state: SearchState::Found,
                routes_collected: 1,
                tasks_executed: 0,
                tasks_dropped: 0,
                elapsed: started.elapsed(),
            });
        }

        let (best, state, collected, stats) = self.explore(origin, target, siblings, started)?;
        let Some(best) = best else {
            debug!(%state, tasks = stats.executed, "search finished without a route");
            return Err(no_route(origin, target));
        };
        let report = SearchReport {
            route: Route::from_words(best),
            state,
            routes_collected: collected,
            tasks_executed: stats.executed,
            tasks_dropped: stats.dropped,
            elapsed: started.elapsed(),
        };
        debug!(%report, "search finished");
        Ok(report)
    }

    fn explore(
        &self,
        origin: &str,
        target: &str,
        siblings: Vec<Candidate>,
        started: Instant,
    ) -> Result<(Option<Vec<String>>, SearchState, usize, QueueStats), LadderError> {
        let mut state = SearchState::Idle;
        let queue = WorkQueue::new(self.config.queue_capacity);
        let cancel = CancelToken::default();
        let (route_tx, route_rx) = mpsc::channel();

        transition(&mut state, SearchState::Dispatching);
        for sibling in siblings {
            let weight = sibling.weight();
            queue.push(vec![origin.to_string(), sibling.into_word()], weight);
        }

        let explorer = Explorer {
            index: self.index,
            target,
            max_len: self
                .config
                .depth_multiplier
                .saturating_mul(origin.chars().count()),
            queue: &queue,
            cancel: &cancel,
        };
        let workers = self.config.worker_count();
        let deadline = started + self.config.deadline.min(MAX_DEADLINE);

        let mut collector = RouteCollector::new(self.config.max_routes);
        thread::scope(|scope| {
            for id in 0..workers {
                let routes = route_tx.clone();
                let explorer = &explorer;
                let spawned = thread::Builder::new()
                    .name(format!("ladder-worker-{id}"))
                    .spawn_scoped(scope, move || explorer.run(routes));
                if let Err(e) = spawned {
                    cancel.cancel();
                    queue.close();
                    return Err(LadderError::Workers(e.to_string()));
                }
            }
            drop(route_tx);

            transition(&mut state, SearchState::Collecting);
            let end = collector.collect(&route_rx, &queue, deadline, self.config.quiescence);
            transition(&mut state, end);

            cancel.cancel();
            queue.close();
            Ok(())
        })?;

        let collected = collector.received();
        Ok((collector.into_best(), state, collected, queue.stats()))
    }
}

fn transition(state: &mut SearchState, next: SearchState) {
    debug_assert!(!state.is_terminal());
    debug!(from = %state, to = %next, "search state");
    *state = next;
}

fn no_route(origin: &str, target: &str) -> LadderError {
    LadderError::NoRoute {
        origin: origin.to_string(),
        target: target.to_string(),
    }
}

/// State shared by every worker of one search.
struct Explorer<'a> {
    index: &'a PrefixIndex,
    target: &'a str,
    /// Paths this long are not expanded further.
    max_len: usize,
    queue: &'a WorkQueue,
    cancel: &'a CancelToken,
}

impl Explorer<'_> {
    fn run(&self, routes: Sender<Vec<String>>) {
        while let Some(task) = self.queue.pop(self.cancel) {
            self.expand(&task, &routes);
            self.queue.finish();
        }
    }

    fn expand(&self, task: &Task, routes: &Sender<Vec<String>>) {
        let carry = task.carry();
        if carry.len() >= self.max_len {
            trace!(word = task.word(), "depth cap");
            return;
        }
        let Ok(ranked) = weighed_siblings(self.index, task.word(), self.target) else {
            return;
        };

        for candidate in ranked {
            if carry.iter().any(|w| w == candidate.word()) {
                continue;
            }
            if self.cancel.is_cancelled() {
                return;
            }

            let weight = candidate.weight();
            let reached = candidate.word() == self.target;
            let mut next = carry.to_vec();
            next.push(candidate.into_word());

            if reached {
                trace!(len = next.len(), "route found");
                // The collector may already have stopped listening.
                let _ = routes.send(next);
                return;
            }
            self.queue.push(next, weight);
        }
    }
}
