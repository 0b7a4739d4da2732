//! Short-term memory: a FIFO-bounded list of recently visited points.

use std::collections::VecDeque;

use crate::objective::Point;

/// Returns `true` if `candidate` lies strictly closer than `tolerance` to
/// any point of `memory`.
pub fn is_tabu<'a, I>(candidate: &Point, memory: I, tolerance: f64) -> bool
where
    I: IntoIterator<Item = &'a Point>,
{
    memory
        .into_iter()
        .any(|past| candidate.distance(past) < tolerance)
}

/// Insertion-ordered tabu list with a fixed capacity.
///
/// Pushing beyond capacity evicts the oldest entry, so the length never
/// exceeds `capacity`.
#[derive(Debug, Clone)]
pub struct TabuList {
    entries: VecDeque<Point>,
    capacity: usize,
    tolerance: f64,
}

impl TabuList {
    /// Creates an empty list.
    pub fn new(capacity: usize, tolerance: f64) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            tolerance,
        }
    }

    /// Appends `point`, then evicts the oldest entry if over capacity.
    pub fn push(&mut self, point: Point) {
        self.entries.push_back(point);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Proximity membership test against every stored point.
    pub fn contains(&self, candidate: &Point) -> bool {
        is_tabu(candidate, &self.entries, self.tolerance)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored points, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_tabu_within_radius() {
        let memory = [Point::xy(1.0, 1.0), Point::xy(5.0, 5.0)];
        assert!(is_tabu(&Point::xy(5.005, 5.0), &memory, 0.01));
        assert!(!is_tabu(&Point::xy(5.02, 5.0), &memory, 0.01));
    }

    #[test]
    fn test_is_tabu_strict_inequality() {
        let memory = [Point::xy(0.0, 0.0)];
        // Distance exactly equal to the tolerance is not tabu.
        assert!(!is_tabu(&Point::xy(0.5, 0.0), &memory, 0.5));
    }

    #[test]
    fn test_is_tabu_empty_memory() {
        let memory: [Point; 0] = [];
        assert!(!is_tabu(&Point::xy(0.0, 0.0), &memory, 1.0));
    }

    #[test]
    fn test_fifo_eviction() {
        let mut list = TabuList::new(2, 0.01);
        list.push(Point::xy(1.0, 1.0));
        list.push(Point::xy(2.0, 2.0));
        list.push(Point::xy(3.0, 3.0));

        assert_eq!(list.len(), 2);
        assert!(!list.contains(&Point::xy(1.0, 1.0)), "oldest should be evicted");
        assert!(list.contains(&Point::xy(2.0, 2.0)));
        assert!(list.contains(&Point::xy(3.0, 3.0)));
        let order: Vec<f64> = list.iter().map(Point::x).collect();
        assert_eq!(order, vec![2.0, 3.0]);
    }

    proptest! {
        #[test]
        fn prop_length_never_exceeds_capacity(
            capacity in 1usize..20,
            pushes in prop::collection::vec((0.0f64..10.0, 0.0f64..10.0), 0..100),
        ) {
            let mut list = TabuList::new(capacity, 0.01);
            for (x, y) in pushes {
                list.push(Point::xy(x, y));
                prop_assert!(list.len() <= capacity);
            }
        }
    }
}
