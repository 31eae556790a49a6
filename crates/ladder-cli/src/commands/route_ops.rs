use std::time::Duration;

use ladder_core::{PrefixIndex, Route, RouteSearch, SearchConfig};

/// Per-invocation overrides of the `[search]` settings.
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    pub json: bool,
    pub deadline_ms: Option<u64>,
    pub max_routes: Option<usize>,
    pub workers: Option<usize>,
}

impl RouteOptions {
    pub fn config(&self) -> SearchConfig {
        let mut config = SearchConfig::default();
        if let Some(ms) = self.deadline_ms {
            config = config.with_deadline(Duration::from_millis(ms));
        }
        if let Some(n) = self.max_routes {
            config = config.with_max_routes(n);
        }
        if let Some(n) = self.workers {
            config = config.with_workers(n);
        }
        config
    }
}

/// `a -> b -> c`, or a JSON array of the words.
pub fn format_route(route: &Route, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string(route)
    } else {
        Ok(route.to_string())
    }
}

pub fn route(index: &PrefixIndex, origin: &str, target: &str, opts: &RouteOptions) {
    let search = RouteSearch::with_config(index, opts.config());
    let report = die!(search.search(origin, target), "Error: {}");
    eprintln!("{report}");
    let out = die!(format_route(&report.route, opts.json), "Error encoding JSON: {}");
    println!("{out}");
}
