use crate::router::{Metric, INF, MAX_LINK_COST};

/// Adds two metrics, treating INF as absorbing.
///
/// A finite sum never becomes INF: it saturates at `INF - 1`. Link costs are capped at
/// [`MAX_LINK_COST`], so sums along a path never get there.
///
/// # Examples
///
/// ```
/// use dvsim::router::INF;
/// use dvsim::util::sum_inf;
///
/// assert_eq!(sum_inf(3, 4), 7);
/// assert_eq!(sum_inf(INF, 1), INF);
/// assert_eq!(sum_inf(INF - 1, INF - 1), INF - 1);
/// ```
pub fn sum_inf(cost_a: Metric, cost_b: Metric) -> Metric {
    if cost_a == INF || cost_b == INF {
        INF
    } else {
        cost_a.saturating_add(cost_b).min(INF - 1)
    }
}

/// Converts a raw link cost into a finite metric, None if it is negative or above [`MAX_LINK_COST`]
pub fn metric_from_cost(cost: i64) -> Option<Metric> {
    if cost < 0 || cost > MAX_LINK_COST as i64 {
        None
    } else {
        Some(cost as Metric)
    }
}
