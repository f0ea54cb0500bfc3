//! Search results, the algorithm dispatcher, and the three-way
//! comparison routine.

use std::fmt;
use std::time::Duration;

use pathquest_grid::Point;

use crate::astar::astar;
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::observer::{SilentObserver, StepObserver};
use crate::traits::SearchGrid;

/// The three search algorithms, in their fixed comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    /// All algorithms, in the order the comparison runs them.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate statistics from one completed search. Owned by the caller,
/// created fresh per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The start→goal path, or `None` when the goal is unreachable.
    /// Unreachability is a normal outcome, not an error.
    pub path: Option<Vec<Point>>,
    /// Wall-clock time the search took.
    pub elapsed: Duration,
    /// Number of node expansions (A* stale pops included).
    pub visited_count: usize,
}

impl SearchResult {
    /// Path length in cells, 0 when no path was found.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}

/// How a search invocation ended.
///
/// Cancellation abandons the search with no partial result; it is a
/// control signal, not an error, and the caller is expected to shut down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Completed(SearchResult),
    Cancelled,
}

/// Run the given algorithm on `grid` from `start` to `goal`.
pub fn run<G: SearchGrid>(
    algorithm: Algorithm,
    grid: &G,
    start: Point,
    goal: Point,
    observer: &mut impl StepObserver,
) -> SearchOutcome {
    match algorithm {
        Algorithm::Bfs => bfs(grid, start, goal, observer),
        Algorithm::Dfs => dfs(grid, start, goal, observer),
        Algorithm::AStar => astar(grid, start, goal, observer),
    }
}

/// Results of running all three algorithms on one grid, with the derived
/// "best" labels. Computed once, immutable.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonReport {
    /// One result per algorithm, in [`Algorithm::ALL`] order.
    pub results: Vec<(Algorithm, SearchResult)>,
    /// Lowest elapsed time.
    pub fastest: Algorithm,
    /// Shortest path; `None` when no algorithm found a path.
    pub shortest: Option<Algorithm>,
    /// Fewest node expansions.
    pub fewest_visited: Algorithm,
}

/// Run BFS, DFS and A* back to back (no visualization) and rank them.
///
/// Ties are broken by first-encountered order over the fixed
/// [BFS, DFS, A*] sequence. An absent path disqualifies an algorithm from
/// the "shortest" ranking.
pub fn compare<G: SearchGrid>(grid: &G, start: Point, goal: Point) -> ComparisonReport {
    let mut silent = SilentObserver;
    let results: Vec<(Algorithm, SearchResult)> = Algorithm::ALL
        .into_iter()
        .map(|alg| match run(alg, grid, start, goal, &mut silent) {
            SearchOutcome::Completed(result) => (alg, result),
            SearchOutcome::Cancelled => unreachable!("silent searches are never cancelled"),
        })
        .collect();

    for (alg, result) in &results {
        log::debug!(
            "{alg}: elapsed {:?}, path {} cells, visited {}",
            result.elapsed,
            result.path_len(),
            result.visited_count
        );
    }

    let fastest = stable_min(&results, |r| r.elapsed);
    let fewest_visited = stable_min(&results, |r| r.visited_count);
    let shortest = results
        .iter()
        .filter(|(_, r)| r.path.is_some())
        .fold(None::<&(Algorithm, SearchResult)>, |best, entry| {
            match best {
                Some(b) if b.1.path_len() <= entry.1.path_len() => Some(b),
                _ => Some(entry),
            }
        })
        .map(|(alg, _)| *alg);

    ComparisonReport {
        results,
        fastest,
        shortest,
        fewest_visited,
    }
}

/// Stable minimum: keeps the earliest entry on ties.
fn stable_min<K: Ord>(
    results: &[(Algorithm, SearchResult)],
    key: impl Fn(&SearchResult) -> K,
) -> Algorithm {
    let mut best = &results[0];
    for entry in &results[1..] {
        if key(&entry.1) < key(&best.1) {
            best = entry;
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::assert_valid_path;
    use pathquest_grid::GridMap;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
        assert_eq!(Algorithm::Dfs.to_string(), "DFS");
        assert_eq!(Algorithm::AStar.to_string(), "A*");
    }

    #[test]
    fn compare_ranks_open_grid() {
        let grid = GridMap::from_layout(&["S..", "...", "..G"]).unwrap();
        let report = compare(&grid, grid.start(), grid.goal());

        assert_eq!(report.results.len(), 3);
        let algs: Vec<Algorithm> = report.results.iter().map(|(a, _)| *a).collect();
        assert_eq!(algs, Algorithm::ALL);

        // BFS and A* both find the 3-cell diagonal; DFS can't beat it, so
        // the stable tie-break crowns BFS.
        assert_eq!(report.shortest, Some(Algorithm::Bfs));
        for (_, result) in &report.results {
            assert_valid_path(&grid, result.path.as_deref().unwrap());
        }

        // Derived labels agree with a recomputation over the results.
        let min_visited = report
            .results
            .iter()
            .map(|(_, r)| r.visited_count)
            .min()
            .unwrap();
        let (first_min, _) = report
            .results
            .iter()
            .find(|(_, r)| r.visited_count == min_visited)
            .unwrap();
        assert_eq!(report.fewest_visited, *first_min);

        let min_elapsed = report.results.iter().map(|(_, r)| r.elapsed).min().unwrap();
        let (first_fast, _) = report
            .results
            .iter()
            .find(|(_, r)| r.elapsed == min_elapsed)
            .unwrap();
        assert_eq!(report.fastest, *first_fast);
    }

    #[test]
    fn compare_with_unreachable_goal() {
        let grid = GridMap::from_layout(&["S#G"]).unwrap();
        let report = compare(&grid, grid.start(), grid.goal());
        assert_eq!(report.shortest, None);
        for (_, result) in &report.results {
            assert!(result.path.is_none());
            assert_eq!(result.path_len(), 0);
            assert_eq!(result.visited_count, 1);
        }
    }

    #[test]
    fn connectivity_and_bfs_minimality_on_random_grids() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = GridMap::generate(20, 20, 0.3, &mut rng);
            let report = compare(&grid, grid.start(), grid.goal());

            let found: Vec<bool> = report
                .results
                .iter()
                .map(|(_, r)| r.path.is_some())
                .collect();
            // Connectivity is algorithm-independent.
            assert!(
                found.iter().all(|&f| f) || found.iter().all(|&f| !f),
                "seed {seed}: algorithms disagree on reachability"
            );

            if found[0] {
                let bfs_len = report.results[0].1.path_len();
                for (alg, result) in &report.results {
                    let path = result.path.as_deref().unwrap();
                    assert_valid_path(&grid, path);
                    // BFS is optimal by edge count; the Euclidean heuristic
                    // is not strictly admissible under unit step cost, so
                    // A* only gets an upper bound here.
                    assert!(
                        bfs_len <= path.len(),
                        "seed {seed}: BFS ({bfs_len}) longer than {alg} ({})",
                        path.len()
                    );
                }
            }
        }
    }

    #[test]
    fn visited_count_covers_path_for_bfs_and_dfs() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = GridMap::generate(12, 12, 0.3, &mut rng);
            let report = compare(&grid, grid.start(), grid.goal());
            for (_, result) in &report.results[..2] {
                if result.path.is_some() {
                    assert!(result.visited_count >= result.path_len());
                }
            }
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pathquest_grid::GridMap;

    #[test]
    fn search_result_round_trip() {
        let result = SearchResult {
            path: Some(vec![Point::new(0, 0), Point::new(1, 1)]),
            elapsed: Duration::from_micros(1234),
            visited_count: 7,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn comparison_report_round_trip() {
        let grid = GridMap::from_layout(&["S..", "...", "..G"]).unwrap();
        let report = compare(&grid, grid.start(), grid.goal());
        let json = serde_json::to_string(&report).unwrap();
        let back: ComparisonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.fastest, report.fastest);
        assert_eq!(back.shortest, report.shortest);
        assert_eq!(back.results.len(), 3);
    }
}
