use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::queue::WorkQueue;
use super::SearchState;

/// Receives completed routes and decides when the search stops.
///
/// Each path is expanded by exactly one task, so every received route is
/// distinct.
#[derive(Debug)]
pub(super) struct RouteCollector {
    best: Option<Vec<String>>,
    received: usize,
    max_routes: usize,
}

impl RouteCollector {
    pub fn new(max_routes: usize) -> Self {
        Self {
            best: None,
            received: 0,
            max_routes,
        }
    }

    /// Record a route. Returns true once more than `max_routes` have arrived.
    pub fn offer(&mut self, route: Vec<String>) -> bool {
        self.received += 1;
        let shorter = self
            .best
            .as_ref()
            .map_or(true, |best| route.len() < best.len());
        if shorter {
            trace!(len = route.len(), "new shortest route");
            self.best = Some(route);
        }
        self.received > self.max_routes
    }

    pub fn received(&self) -> usize {
        self.received
    }

    pub fn into_best(self) -> Option<Vec<String>> {
        self.best
    }

    /// Drain `routes` until the deadline passes, enough routes arrive, or the
    /// queue has sat idle for `quiescence`. Returns the terminal state.
    pub fn collect(
        &mut self,
        routes: &Receiver<Vec<String>>,
        queue: &WorkQueue,
        deadline: Instant,
        quiescence: Duration,
    ) -> SearchState {
        let poll = quiescence.max(Duration::from_millis(1));
        let mut idle_since: Option<Instant> = None;

        loop {
            let now = Instant::now();
            if now >= deadline {
                debug!(received = self.received, "deadline reached");
                return SearchState::TimedOut;
            }

            match routes.recv_timeout(poll.min(deadline - now)) {
                Ok(route) => {
                    idle_since = None;
                    if self.offer(route) {
                        debug!(received = self.received, "route limit reached");
                        return SearchState::Found;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    debug!(received = self.received, "all workers gone");
                    return SearchState::Exhausted;
                }
            }

            if queue.is_idle() {
                let since = *idle_since.get_or_insert_with(Instant::now);
                if since.elapsed() >= quiescence {
                    // A route sent just before the queue went idle is already
                    // in the channel.
                    while let Ok(route) = routes.try_recv() {
                        self.offer(route);
                    }
                    debug!(received = self.received, "search space exhausted");
                    return SearchState::Exhausted;
                }
            } else {
                idle_since = None;
            }
        }
    }
}
