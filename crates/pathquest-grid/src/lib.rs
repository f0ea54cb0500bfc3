//! **pathquest-grid** — grid model for the pathquest search visualizer.
//!
//! Provides the geometry primitive ([`Point`]) and the obstacle grid
//! ([`GridMap`]): cell classification, canonical 8-way neighbor
//! enumeration, and randomized generation with invariant enforcement.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{
    CellKind, DEFAULT_HEIGHT, DEFAULT_OBSTACLE_FRACTION, DEFAULT_WIDTH, GridMap,
};
