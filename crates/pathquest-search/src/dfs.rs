use std::collections::HashSet;
use std::time::Instant;

use pathquest_grid::Point;

use crate::observer::{StepEvent, StepObserver};
use crate::result::{Algorithm, SearchOutcome, SearchResult};
use crate::traits::SearchGrid;

/// Depth-first search from `start` to `goal`.
///
/// Identical bookkeeping to [`bfs`](crate::bfs::bfs) but with a LIFO
/// stack. Neighbors are pushed in *reverse* canonical order so that, with
/// stack semantics, expansion proceeds in canonical order. Returns the
/// first path found by depth-first exploration, which may be far from
/// shortest.
pub fn dfs<G: SearchGrid>(
    grid: &G,
    start: Point,
    goal: Point,
    observer: &mut impl StepObserver,
) -> SearchOutcome {
    let started = Instant::now();

    let mut stack: Vec<(Point, Vec<Point>)> = vec![(start, vec![start])];
    let mut visited: HashSet<Point> = HashSet::new();
    visited.insert(start);
    let mut visited_order: Vec<Point> = Vec::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(8);

    while let Some((current, path)) = stack.pop() {
        if observer.is_cancelled() {
            return SearchOutcome::Cancelled;
        }

        visited_order.push(current);
        observer.on_step(&StepEvent {
            algorithm: Algorithm::Dfs,
            visited_order: &visited_order,
            current_path: &path,
            elapsed: started.elapsed(),
            visited_count: visited_order.len(),
        });

        if current == goal {
            return SearchOutcome::Completed(SearchResult {
                path: Some(path),
                elapsed: started.elapsed(),
                visited_count: visited_order.len(),
            });
        }

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &n in nbuf.iter().rev() {
            if grid.is_obstacle(n) || !visited.insert(n) {
                continue;
            }
            let mut next = path.clone();
            next.push(n);
            stack.push((n, next));
        }
    }

    SearchOutcome::Completed(SearchResult {
        path: None,
        elapsed: started.elapsed(),
        visited_count: visited_order.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::SilentObserver;
    use crate::testutil::{CancelAfter, assert_valid_path, completed};
    use pathquest_grid::GridMap;

    #[test]
    fn connects_start_to_goal() {
        let grid = GridMap::from_layout(&["S..", "...", "..G"]).unwrap();
        let result = completed(dfs(&grid, grid.start(), grid.goal(), &mut SilentObserver));
        let path = result.path.as_deref().unwrap();
        assert_valid_path(&grid, path);
        assert!(result.visited_count >= path.len());
    }

    #[test]
    fn expands_in_canonical_order() {
        // Reverse-pushed neighbors pop canonically: from the corner the
        // first in-bounds canonical direction is down.
        struct FirstTwo(Vec<Point>);
        impl crate::observer::StepObserver for FirstTwo {
            fn on_step(&mut self, step: &StepEvent<'_>) {
                if self.0.len() < 2 {
                    self.0.push(*step.visited_order.last().unwrap());
                }
            }
            fn is_cancelled(&self) -> bool {
                false
            }
        }
        let grid = GridMap::from_layout(&["S..", "...", "..G"]).unwrap();
        let mut obs = FirstTwo(Vec::new());
        completed(dfs(&grid, grid.start(), grid.goal(), &mut obs));
        assert_eq!(obs.0[0], Point::new(0, 0));
        assert_eq!(obs.0[1], Point::new(0, 1));
    }

    #[test]
    fn solid_wall_exhausts_start_side() {
        let grid = GridMap::from_layout(&["S#.", ".#.", ".#G"]).unwrap();
        let result = completed(dfs(&grid, grid.start(), grid.goal(), &mut SilentObserver));
        assert!(result.path.is_none());
        assert_eq!(result.visited_count, 3);
    }

    #[test]
    fn deterministic_over_reruns() {
        let grid = GridMap::from_layout(&["S.#.", "..#.", "....", "..#G"]).unwrap();
        let a = completed(dfs(&grid, grid.start(), grid.goal(), &mut SilentObserver));
        let b = completed(dfs(&grid, grid.start(), grid.goal(), &mut SilentObserver));
        assert_eq!(a.path, b.path);
        assert_eq!(a.visited_count, b.visited_count);
    }

    #[test]
    fn cancellation_aborts_without_result() {
        let grid = GridMap::from_layout(&["S....", ".....", "....G"]).unwrap();
        let mut cancel = CancelAfter::new(1);
        match dfs(&grid, grid.start(), grid.goal(), &mut cancel) {
            SearchOutcome::Cancelled => {}
            SearchOutcome::Completed(_) => panic!("expected cancellation"),
        }
    }
}
