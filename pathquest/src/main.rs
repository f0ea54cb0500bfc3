//! pathquest — an interactive terminal visualizer for grid search.
//!
//! Generates a random 20x20 grid with obstacles, start and goal, then
//! animates BFS, DFS and A* exploring it. `C` runs all three silently and
//! shows a ranked comparison.

mod ui;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{self, ClearType},
};

use pathquest_grid::{DEFAULT_HEIGHT, DEFAULT_OBSTACLE_FRACTION, DEFAULT_WIDTH, GridMap};
use pathquest_search::{Algorithm, SearchOutcome, SearchResult, compare, run};

use ui::TermObserver;

/// Restores the terminal even when the loop exits early with `?`.
struct TerminalGuard;

impl TerminalGuard {
    fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let grid = GridMap::generate(
        DEFAULT_WIDTH,
        DEFAULT_HEIGHT,
        DEFAULT_OBSTACLE_FRACTION,
        &mut rng,
    );

    let _guard = TerminalGuard::init()?;
    event_loop(&grid)?;
    Ok(())
}

fn event_loop(grid: &GridMap) -> io::Result<()> {
    let mut out = io::stdout();
    let mut last: Option<(Algorithm, SearchResult)> = None;
    let mut dirty = true;

    loop {
        if dirty {
            draw_idle(&mut out, grid, &last)?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if ui::is_quit_key(&key) => return Ok(()),
            Event::Key(key) => {
                use crossterm::event::KeyCode;
                match key.code {
                    KeyCode::Char('b' | 'B') => match animate(Algorithm::Bfs, grid)? {
                        Some(result) => last = Some((Algorithm::Bfs, result)),
                        None => return Ok(()),
                    },
                    KeyCode::Char('d' | 'D') => match animate(Algorithm::Dfs, grid)? {
                        Some(result) => last = Some((Algorithm::Dfs, result)),
                        None => return Ok(()),
                    },
                    KeyCode::Char('a' | 'A') => match animate(Algorithm::AStar, grid)? {
                        Some(result) => last = Some((Algorithm::AStar, result)),
                        None => return Ok(()),
                    },
                    KeyCode::Char('c' | 'C') => {
                        let report = compare(grid, grid.start(), grid.goal());
                        ui::draw_comparison(&mut out, &report)?;
                        if wait_any_key()? {
                            return Ok(());
                        }
                    }
                    KeyCode::Char('r' | 'R') => last = None,
                    _ => {}
                }
                dirty = true;
            }
            Event::Resize(..) => dirty = true,
            _ => {}
        }
    }
}

/// Run one algorithm with per-step animation.
///
/// Returns `Ok(None)` when the user quit mid-search; the search is
/// abandoned with no partial result and the whole app shuts down.
fn animate(algorithm: Algorithm, grid: &GridMap) -> io::Result<Option<SearchResult>> {
    let mut observer = TermObserver::new(grid);
    let outcome = run(algorithm, grid, grid.start(), grid.goal(), &mut observer);
    if let Some(e) = observer.take_error() {
        return Err(e);
    }
    match outcome {
        SearchOutcome::Completed(result) => Ok(Some(result)),
        SearchOutcome::Cancelled => Ok(None),
    }
}

/// Draw the resting frame: the grid plus the last result, if any.
fn draw_idle(
    out: &mut impl Write,
    grid: &GridMap,
    last: &Option<(Algorithm, SearchResult)>,
) -> io::Result<()> {
    match last {
        Some((algorithm, result)) => {
            let status = ui::Status::from_result(grid, *algorithm, result);
            ui::draw_frame(out, grid, &[], result.path.as_deref().unwrap_or(&[]), &status)
        }
        None => {
            let status = ui::Status {
                algorithm: None,
                elapsed: Duration::ZERO,
                path_len: 0,
                visited_count: 0,
                grid,
            };
            ui::draw_frame(out, grid, &[], &[], &status)
        }
    }
}

/// Block until any key is pressed. Returns `true` on the quit signal.
fn wait_any_key() -> io::Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            return Ok(ui::is_quit_key(&key));
        }
    }
}
