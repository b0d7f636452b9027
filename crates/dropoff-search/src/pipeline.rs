//! Candidate ranking: distance annotation, filtering, ordering, truncation.

use dropoff_core::Center;

use crate::hours;
use crate::request::{ScoredCenter, SearchRequest, SortKey};
use crate::{geo, WallClock};

/// Rank `candidates` against the request.
///
/// Stages run in a fixed order (annotate distances, filter by radius, then
/// category, then open-now, sort, truncate) because the order decides which
/// centers survive truncation. Every sort is stable, so equal keys keep
/// their candidate order; `open_first` deliberately applies no secondary
/// distance key.
///
/// There are no error paths: empty input or filters that exclude everything
/// produce an empty vector.
#[must_use]
pub fn search(
    request: &SearchRequest,
    candidates: Vec<Center>,
    clock: WallClock,
) -> Vec<ScoredCenter> {
    let mut results: Vec<ScoredCenter> = candidates
        .into_iter()
        .map(|center| {
            let distance = geo::distance_miles(&request.origin, &center.coordinate());
            ScoredCenter { center, distance }
        })
        .filter(|scored| scored.distance <= request.radius_miles)
        .collect();

    if !request.categories.is_empty() {
        results.retain(|scored| scored.center.matches_any_category(&request.categories));
    }

    if request.open_now {
        results.retain(|scored| open_at(&scored.center, clock));
    }

    match request.sort_by {
        SortKey::Distance => results.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
        SortKey::Name => results.sort_by_cached_key(|s| s.center.name.to_lowercase()),
        SortKey::Category => results.sort_by_cached_key(|s| {
            s.center
                .categories
                .first()
                .map(|tag| tag.name.to_lowercase())
                .unwrap_or_default()
        }),
        // false < true, so open (negated to false) sorts first.
        SortKey::OpenFirst => results.sort_by_cached_key(|s| !open_at(&s.center, clock)),
    }

    results.truncate(request.limit);
    results
}

fn open_at(center: &Center, clock: WallClock) -> bool {
    center
        .hours_of_operation
        .as_ref()
        .is_some_and(|schedule| hours::is_open_at(schedule, clock.day, clock.clock))
}
