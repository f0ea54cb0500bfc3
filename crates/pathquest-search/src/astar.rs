use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

use pathquest_grid::Point;

use crate::distance::euclidean;
use crate::observer::{StepEvent, StepObserver};
use crate::result::{Algorithm, SearchOutcome, SearchResult};
use crate::traits::SearchGrid;

/// Heap entry ordered by `f` for use in `BinaryHeap`.
struct HeapEntry {
    f: f64,
    pos: Point,
    path: Vec<Point>,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; ties go
        // to the smaller cell in row-major order.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from `start` to `goal`.
///
/// The priority is `f = g + h` with unit step cost `g` (diagonal moves
/// cost the same as orthogonal ones) and Euclidean straight-line `h`. A
/// `cost_so_far` map records the best known `g` per cell; a neighbor is
/// re-pushed whenever its cost improves, so the same cell can sit in the
/// heap several times. Stale pops still count as expansions, which means
/// `visited_count` can exceed the number of distinct cells explored. Both
/// quirks are kept on purpose to match the reference behavior.
pub fn astar<G: SearchGrid>(
    grid: &G,
    start: Point,
    goal: Point,
    observer: &mut impl StepObserver,
) -> SearchOutcome {
    let started = Instant::now();

    let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
    open.push(HeapEntry {
        f: 0.0,
        pos: start,
        path: vec![start],
    });
    let mut cost_so_far: HashMap<Point, i32> = HashMap::new();
    cost_so_far.insert(start, 0);
    let mut visited_order: Vec<Point> = Vec::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(8);

    while let Some(HeapEntry {
        pos: current, path, ..
    }) = open.pop()
    {
        if observer.is_cancelled() {
            return SearchOutcome::Cancelled;
        }

        visited_order.push(current);
        observer.on_step(&StepEvent {
            algorithm: Algorithm::AStar,
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

        // Every popped entry has a recorded cost.
        let current_cost = cost_so_far[&current];

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if grid.is_obstacle(n) {
                continue;
            }
            let new_cost = current_cost + 1;
            let improved = match cost_so_far.get(&n) {
                None => true,
                Some(&c) => new_cost < c,
            };
            if !improved {
                continue;
            }
            cost_so_far.insert(n, new_cost);
            let mut next = path.clone();
            next.push(n);
            open.push(HeapEntry {
                f: new_cost as f64 + euclidean(n, goal),
                pos: n,
                path: next,
            });
        }
    }

    SearchOutcome::Completed(SearchResult {
        path: None,
        elapsed: started.elapsed(),
        visited_count: visited_order.len(),
    })
}
