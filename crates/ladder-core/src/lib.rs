pub mod candidates;
pub mod error;
pub mod index;
pub mod neighbors;
pub mod route;
pub mod search;
pub mod settings;

pub use error::LadderError;
pub use index::PrefixIndex;
pub use route::Route;
pub use search::{RouteSearch, SearchConfig, SearchReport, SearchState};
