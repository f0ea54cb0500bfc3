//! The obstacle grid: [`CellKind`] and [`GridMap`].
//!
//! A [`GridMap`] is an immutable snapshot once constructed: searches only
//! ever read it, so several searches can safely share one map.

use rand::{Rng, RngExt};

use crate::geom::Point;

/// Default grid width (columns).
pub const DEFAULT_WIDTH: i32 = 20;
/// Default grid height (rows).
pub const DEFAULT_HEIGHT: i32 = 20;
/// Default fraction of cells turned into obstacles.
pub const DEFAULT_OBSTACLE_FRACTION: f64 = 0.3;

/// Classification of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Obstacle,
    Start,
    Goal,
}

/// The canonical neighbor order: up, down, left, right, then the four
/// diagonals. Every traversal enumerates neighbors in this order so that
/// results are deterministic.
const DIRS_8: [Point; 8] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// A fixed-size 2D grid of [`CellKind`] values with exactly one start and
/// one goal cell.
///
/// Invariants, enforced at construction:
/// - exactly one cell is `Start` and exactly one is `Goal`,
/// - start and goal are distinct,
/// - neither sits on an `Obstacle`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    cells: Vec<CellKind>,
    width: i32,
    height: i32,
    start: Point,
    goal: Point,
}

impl GridMap {
    /// Generate a random grid.
    ///
    /// Places `floor(obstacle_fraction * width * height)` obstacles on
    /// distinct cells by rejection sampling, then picks start and goal at
    /// uniformly random free cells, retrying the whole pair until both are
    /// free and distinct.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are not positive or if the obstacle
    /// fraction leaves fewer than two free cells.
    pub fn generate(width: i32, height: i32, obstacle_fraction: f64, rng: &mut impl Rng) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let total = (width * height) as usize;
        let obstacles = (obstacle_fraction * total as f64) as usize;
        assert!(
            total - obstacles >= 2,
            "obstacle fraction leaves no room for start and goal"
        );

        let mut cells = vec![CellKind::Empty; total];

        // Obstacles: rejection-sample distinct free cells. Retries are
        // unbounded but expected O(1) at low density.
        for _ in 0..obstacles {
            loop {
                let idx = rng.random_range(0..total);
                if cells[idx] == CellKind::Empty {
                    cells[idx] = CellKind::Obstacle;
                    break;
                }
            }
        }

        // Start and goal: retry the whole pair until both land on free,
        // distinct cells.
        let (start, goal) = loop {
            let s = rng.random_range(0..total);
            let g = rng.random_range(0..total);
            if s != g && cells[s] == CellKind::Empty && cells[g] == CellKind::Empty {
                cells[s] = CellKind::Start;
                cells[g] = CellKind::Goal;
                break (
                    Point::new((s % width as usize) as i32, (s / width as usize) as i32),
                    Point::new((g % width as usize) as i32, (g / width as usize) as i32),
                );
            }
        };

        log::debug!(
            "generated {}x{} grid: {} obstacles, start {}, goal {}",
            width,
            height,
            obstacles,
            start,
            goal
        );

        Self {
            cells,
            width,
            height,
            start,
            goal,
        }
    }

    /// Parse a grid from rows of `.` (empty), `#` (obstacle), `S` (start)
    /// and `G` (goal).
    ///
    /// Returns `None` if the rows are not rectangular, contain an unknown
    /// character, or do not hold exactly one `S` and one `G`.
    pub fn from_layout(rows: &[&str]) -> Option<Self> {
        let height = rows.len() as i32;
        let width = rows.first()?.chars().count() as i32;
        if width == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity((width * height) as usize);
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as i32 != width {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let kind = match ch {
                    '.' => CellKind::Empty,
                    '#' => CellKind::Obstacle,
                    'S' => {
                        if start.replace(p).is_some() {
                            return None;
                        }
                        CellKind::Start
                    }
                    'G' => {
                        if goal.replace(p).is_some() {
                            return None;
                        }
                        CellKind::Goal
                    }
                    _ => return None,
                };
                cells.push(kind);
            }
        }

        Some(Self {
            cells,
            width,
            height,
            start: start?,
            goal: goal?,
        })
    }

    /// Width of the grid (columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid (rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The unique start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The unique goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` lies within grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Classify a cell, or `None` if out of bounds.
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Whether `p` is an in-bounds obstacle.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.kind(p) == Some(CellKind::Obstacle)
    }

    /// Append the in-bounds neighbors of `p` to `buf`, in the canonical
    /// order (up, down, left, right, then diagonals).
    ///
    /// Obstacles are *not* filtered out here; traversals filter obstacles
    /// and already-visited cells themselves. The caller clears `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in DIRS_8 {
            let n = p + d;
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.cells.iter().enumerate().map(|(i, &kind)| {
            let p = Point::new(i as i32 % self.width, i as i32 / self.width);
            (p, kind)
        })
    }
}
