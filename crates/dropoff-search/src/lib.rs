//! Nearby-search ranking pipeline.
//!
//! A pure, synchronous pass over an in-memory candidate list: Haversine
//! distance annotation, radius / category / open-now filtering, a stable
//! sort, and limit truncation. No I/O and no shared state, so concurrent
//! searches need no coordination. Retrieval and geocoding belong to the caller.

mod geo;
mod hours;
mod pipeline;
mod request;

pub use geo::{distance_miles, EARTH_RADIUS_MILES};
pub use hours::{is_open_at, is_open_now, WallClock};
pub use pipeline::search;
pub use request::{ScoredCenter, SearchRequest, SortKey, DEFAULT_LIMIT, DEFAULT_RADIUS_MILES};
