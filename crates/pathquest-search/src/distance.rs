use pathquest_grid::Point;

/// Euclidean (L2) distance between two points.
///
/// This is the A* heuristic: straight-line distance, paired with the unit
/// step cost (see [`crate::astar`]).
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between two points.
///
/// Two cells are 8-directionally adjacent exactly when their Chebyshev
/// distance is 1.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_basics() {
        let o = Point::ZERO;
        assert_eq!(euclidean(o, Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(o, o), 0.0);
        assert!((euclidean(o, Point::new(1, 1)) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn chebyshev_is_adjacency() {
        let c = Point::new(2, 2);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                assert_eq!(chebyshev(c, c.shift(dx, dy)), 1);
            }
        }
        assert_eq!(chebyshev(c, c.shift(2, 1)), 2);
    }
}
