use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use pathquest_grid::Point;

use crate::observer::{StepEvent, StepObserver};
use crate::result::{Algorithm, SearchOutcome, SearchResult};
use crate::traits::SearchGrid;

/// Breadth-first search from `start` to `goal`.
///
/// Expands the frontier level by level (FIFO), marking cells visited at
/// enqueue time so no cell is enqueued twice. Because every move costs one
/// edge regardless of direction, the returned path is shortest by edge
/// count.
pub fn bfs<G: SearchGrid>(
    grid: &G,
    start: Point,
    goal: Point,
    observer: &mut impl StepObserver,
) -> SearchOutcome {
    let started = Instant::now();

    let mut queue: VecDeque<(Point, Vec<Point>)> = VecDeque::new();
    queue.push_back((start, vec![start]));
    let mut visited: HashSet<Point> = HashSet::new();
    visited.insert(start);
    let mut visited_order: Vec<Point> = Vec::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(8);

    while let Some((current, path)) = queue.pop_front() {
        if observer.is_cancelled() {
            return SearchOutcome::Cancelled;
        }

        visited_order.push(current);
        observer.on_step(&StepEvent {
            algorithm: Algorithm::Bfs,
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
        for &n in &nbuf {
            if grid.is_obstacle(n) || !visited.insert(n) {
                continue;
            }
            let mut next = path.clone();
            next.push(n);
            queue.push_back((n, next));
        }
    }

    SearchOutcome::Completed(SearchResult {
        path: None,
        elapsed: started.elapsed(),
        visited_count: visited_order.len(),
    })
}
