//! The cooperative-yield seam between the searches and a presentation
//! layer: one callback per node expansion, plus a cancellation poll.

use std::time::Duration;

use pathquest_grid::Point;

use crate::result::Algorithm;

/// A snapshot of search progress, emitted once per node expansion.
#[derive(Debug)]
pub struct StepEvent<'a> {
    /// Which algorithm is running.
    pub algorithm: Algorithm,
    /// Every cell expanded so far, in expansion order.
    pub visited_order: &'a [Point],
    /// The path from start to the cell just expanded.
    pub current_path: &'a [Point],
    /// Time since the search began.
    pub elapsed: Duration,
    /// Number of expansions so far (equals `visited_order.len()`).
    pub visited_count: usize,
}

/// Receives [`StepEvent`]s and supplies the cancellation signal.
///
/// The searches invoke [`on_step`](Self::on_step) after every expansion and
/// poll [`is_cancelled`](Self::is_cancelled) every iteration; a `true`
/// answer aborts the search immediately with no partial result.
pub trait StepObserver {
    fn on_step(&mut self, step: &StepEvent<'_>);

    fn is_cancelled(&self) -> bool;
}

/// Observer that ignores every step and never cancels. Used for
/// non-visualized runs such as the comparison routine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl StepObserver for SilentObserver {
    fn on_step(&mut self, _step: &StepEvent<'_>) {}

    fn is_cancelled(&self) -> bool {
        false
    }
}
