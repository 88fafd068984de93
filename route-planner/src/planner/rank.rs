//! Route ranking.
//!
//! Orders found routes most-efficient-first using an in-place binary
//! min-heap: build the heap, repeatedly move the minimum to the end of the
//! shrinking active range, then reverse the array once.

use std::cmp::Ordering;

use crate::domain::{Metric, Route};

/// Error from ranking routes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// Routes in one ranking call must share a metric
    #[error("route {index} is ranked by {found} but the batch is ranked by {expected}")]
    MixedMetrics {
        expected: Metric,
        found: Metric,
        index: usize,
    },
}

/// Rank routes ascending by the metric they carry.
///
/// Ties on the metric are broken by the other metric, then by fewer hops,
/// then by the city names along the path, so ranking is deterministic and
/// idempotent.
///
/// # Errors
///
/// Returns [`RankError::MixedMetrics`] if the routes don't all carry the
/// same metric.
pub fn rank_routes(routes: Vec<Route>) -> Result<Vec<Route>, RankError> {
    if let Some(first) = routes.first() {
        let expected = first.metric();
        if let Some((index, route)) = routes
            .iter()
            .enumerate()
            .find(|(_, r)| r.metric() != expected)
        {
            return Err(RankError::MixedMetrics {
                expected,
                found: route.metric(),
                index,
            });
        }
    }

    Ok(heap_sort_by(routes, rank_order))
}

/// Re-derive every route with `metric` and rank the result.
pub fn rerank(routes: Vec<Route>, metric: Metric) -> Vec<Route> {
    let routes = routes.into_iter().map(|r| r.with_metric(metric)).collect();
    heap_sort_by(routes, rank_order)
}

/// Total order used for ranking routes that share a metric.
pub(crate) fn rank_order(a: &Route, b: &Route) -> Ordering {
    let secondary = match a.metric() {
        Metric::Cost => Metric::Time,
        Metric::Time => Metric::Cost,
    };

    a.cmp_rank(b)
        .then_with(|| {
            secondary
                .select(a.total_cost(), a.total_time())
                .cmp(&secondary.select(b.total_cost(), b.total_time()))
        })
        .then_with(|| a.hop_count().cmp(&b.hop_count()))
        .then_with(|| a.path().cmp(b.path()))
}

/// Sort ascending with a binary min-heap.
///
/// Empty and single-element inputs are returned unchanged.
pub fn heap_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut heap = items;
    let len = heap.len();
    if len <= 1 {
        return heap;
    }

    // Build phase: heapify every non-leaf, last one first
    for idx in (0..len / 2).rev() {
        sift_down(&mut heap, idx, len, &mut compare);
    }

    // Extraction: minimum goes just before the previously extracted tail
    for end in (1..len).rev() {
        heap.swap(0, end);
        sift_down(&mut heap, 0, end, &mut compare);
    }

    // Descending at this point
    heap.reverse();
    heap
}

/// Restore the min-heap property below `idx` within `heap[..size]`.
fn sift_down<T, F>(heap: &mut [T], mut idx: usize, size: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * idx + 1;
        let right = left + 1;
        let mut smallest = idx;

        if left < size && compare(&heap[left], &heap[smallest]) == Ordering::Less {
            smallest = left;
        }
        if right < size && compare(&heap[right], &heap[smallest]) == Ordering::Less {
            smallest = right;
        }

        if smallest == idx {
            return;
        }

        heap.swap(idx, smallest);
        idx = smallest;
    }
}
