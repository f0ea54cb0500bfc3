//! Terminal rendering and the animating step observer.

use std::collections::HashSet;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    queue,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathquest_grid::{CellKind, GridMap, Point};
use pathquest_search::{Algorithm, ComparisonReport, SearchResult, StepEvent, StepObserver};

/// Each grid cell is drawn two characters wide so it looks square.
const CELL_W: u16 = 2;
/// Delay between animation frames.
const STEP_DELAY: Duration = Duration::from_millis(50);

const EMPTY_COLOR: Color = Color::White;
const OBSTACLE_COLOR: Color = Color::Black;
const START_COLOR: Color = Color::Green;
const GOAL_COLOR: Color = Color::Red;
const VISIT_COLOR: Color = Color::Rgb {
    r: 173,
    g: 216,
    b: 230,
};
const PATH_COLOR: Color = Color::Blue;

/// One line of the status panel under the grid.
pub struct Status<'a> {
    pub algorithm: Option<Algorithm>,
    pub elapsed: Duration,
    pub path_len: usize,
    pub visited_count: usize,
    pub grid: &'a GridMap,
}

impl Status<'_> {
    pub fn from_result<'a>(
        grid: &'a GridMap,
        algorithm: Algorithm,
        result: &SearchResult,
    ) -> Status<'a> {
        Status {
            algorithm: Some(algorithm),
            elapsed: result.elapsed,
            path_len: result.path_len(),
            visited_count: result.visited_count,
            grid,
        }
    }
}

/// Whether a key event is the quit signal (q, Escape or Ctrl+C).
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q' | 'Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Render a full frame: grid with overlays, controls legend, status panel.
pub fn draw_frame(
    out: &mut impl Write,
    grid: &GridMap,
    visited: &[Point],
    path: &[Point],
    status: &Status<'_>,
) -> io::Result<()> {
    let visited: HashSet<Point> = visited.iter().copied().collect();
    let path: HashSet<Point> = path.iter().copied().collect();

    queue!(out, terminal::Clear(ClearType::All))?;

    for (p, kind) in grid.iter() {
        // Start and goal are never overdrawn by visited/path overlays.
        let color = match kind {
            CellKind::Start => START_COLOR,
            CellKind::Goal => GOAL_COLOR,
            CellKind::Obstacle => OBSTACLE_COLOR,
            CellKind::Empty if path.contains(&p) => PATH_COLOR,
            CellKind::Empty if visited.contains(&p) => VISIT_COLOR,
            CellKind::Empty => EMPTY_COLOR,
        };
        queue!(
            out,
            cursor::MoveTo(p.x as u16 * CELL_W, p.y as u16),
            SetBackgroundColor(color),
            Print("  "),
        )?;
    }
    queue!(out, SetBackgroundColor(Color::Reset))?;

    draw_legend(out, grid)?;
    draw_status(out, status)?;
    out.flush()
}

fn draw_legend(out: &mut impl Write, grid: &GridMap) -> io::Result<()> {
    const LINES: [&str; 7] = [
        "Controls:",
        "B - Run BFS",
        "D - Run DFS",
        "A - Run A*",
        "C - Compare",
        "R - Reset",
        "Q - Quit",
    ];
    let x = grid.width() as u16 * CELL_W + 2;
    queue!(out, SetForegroundColor(Color::Reset))?;
    for (i, line) in LINES.iter().enumerate() {
        queue!(out, cursor::MoveTo(x, i as u16), Print(line))?;
    }
    Ok(())
}

fn draw_status(out: &mut impl Write, status: &Status<'_>) -> io::Result<()> {
    let y = status.grid.height() as u16 + 1;
    let text = match status.algorithm {
        Some(alg) => format!(
            "Algorithm: {}   Time: {:.4}s   Path: {} steps   Visited: {} nodes",
            alg,
            status.elapsed.as_secs_f64(),
            status.path_len,
            status.visited_count
        ),
        None => "Press B (BFS), D (DFS), A (A*), C (compare), R (reset), Q (quit)".to_string(),
    };
    queue!(out, cursor::MoveTo(0, y), Print(text))
}

/// Render the comparison screen. The caller waits for a key afterwards.
pub fn draw_comparison(out: &mut impl Write, report: &ComparisonReport) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(ClearType::All),
        SetBackgroundColor(Color::Reset),
        cursor::MoveTo(2, 1),
        Print("Algorithm Comparison Results"),
    )?;

    let mut y = 3;
    for (alg, result) in &report.results {
        let line = format!(
            "{:<4} Time={:.4}s  Path={}  Visited={}",
            alg.to_string(),
            result.elapsed.as_secs_f64(),
            result.path_len(),
            result.visited_count
        );
        queue!(out, cursor::MoveTo(2, y), Print(line))?;
        y += 1;
    }

    let shortest = report
        .shortest
        .map_or("N/A".to_string(), |alg| alg.to_string());
    queue!(
        out,
        cursor::MoveTo(2, y + 1),
        SetForegroundColor(PATH_COLOR),
        Print(format!(
            "Best: Time={}  Path={}  Visited={}",
            report.fastest, shortest, report.fewest_visited
        )),
        SetForegroundColor(Color::Reset),
        cursor::MoveTo(2, y + 3),
        Print("Press any key to continue"),
    )?;
    out.flush()
}

/// Observer that renders one frame per node expansion, sleeps for the
/// animation delay, and polls the terminal for the quit signal.
pub struct TermObserver<'a> {
    grid: &'a GridMap,
    out: io::Stdout,
    cancelled: bool,
    error: Option<io::Error>,
}

impl<'a> TermObserver<'a> {
    pub fn new(grid: &'a GridMap) -> Self {
        Self {
            grid,
            out: io::stdout(),
            cancelled: false,
            error: None,
        }
    }

    /// A render/poll error that occurred during animation, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn step(&mut self, step: &StepEvent<'_>) -> io::Result<()> {
        let status = Status {
            algorithm: Some(step.algorithm),
            elapsed: step.elapsed,
            path_len: step.current_path.len(),
            visited_count: step.visited_count,
            grid: self.grid,
        };
        draw_frame(
            &mut self.out,
            self.grid,
            step.visited_order,
            step.current_path,
            &status,
        )?;

        // The frame delay doubles as the input poll window.
        if event::poll(STEP_DELAY)? {
            if let Event::Key(key) = event::read()? {
                if is_quit_key(&key) {
                    self.cancelled = true;
                }
            }
        }
        Ok(())
    }
}

impl StepObserver for TermObserver<'_> {
    fn on_step(&mut self, step: &StepEvent<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.step(step) {
            // Treat a broken terminal like a quit signal.
            self.error = Some(e);
            self.cancelled = true;
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_borrows_grid_not_result() {
        let grid = GridMap::from_layout(&["S..", "...", "..G"]).unwrap();
        let status = {
            // The result may be dropped; only the grid borrow lives on.
            let result = SearchResult {
                path: Some(vec![grid.start(), grid.goal()]),
                elapsed: Duration::from_millis(3),
                visited_count: 5,
            };
            Status::from_result(&grid, Algorithm::Bfs, &result)
        };
        assert_eq!(status.algorithm, Some(Algorithm::Bfs));
        assert_eq!(status.path_len, 2);
        assert_eq!(status.visited_count, 5);
        assert_eq!(status.grid.start(), grid.start());
    }

    #[test]
    fn quit_keys() {
        let key = KeyEvent::new;
        assert!(is_quit_key(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&key(KeyCode::Char('Q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(&key(KeyCode::Char('b'), KeyModifiers::NONE)));
    }
}
