use pathquest_grid::{GridMap, Point};

/// Grid interface consumed by the search algorithms.
///
/// All three searches share the same uniform-cost, 8-directional movement
/// model, so a single trait covers them.
pub trait SearchGrid {
    /// Append the in-bounds neighbors of `p` to `buf`, in the canonical
    /// order (up, down, left, right, then the four diagonals). The caller
    /// clears `buf` before calling. Obstacles are not filtered here.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` cannot be entered.
    fn is_obstacle(&self, p: Point) -> bool;
}

impl SearchGrid for GridMap {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        GridMap::neighbors(self, p, buf);
    }

    #[inline]
    fn is_obstacle(&self, p: Point) -> bool {
        GridMap::is_obstacle(self, p)
    }
}
