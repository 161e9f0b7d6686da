//! Interactive terminal visualizer.
//!
//! Keys: `1`-`4` run A*, Dijkstra, BFS or DFS; `n` draws a new random grid;
//! `c` clears all obstacles; `q`/`Esc` quits (or cancels a running search).

use std::process::ExitCode;

use gridsearch_core::{Grid, Point};
use gridsearch_demos::term::{Command, TerminalView};
use gridsearch_demos::{ConfigError, DemoConfig};
use gridsearch_paths::{Algorithm, SearchStatus, search};

const HELP: &str = "1 A*  2 Dijkstra  3 BFS  4 DFS  n new grid  c clear  q quit";

fn run(mut config: DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = config.build_grid();
    let (start, end) = config.endpoints();

    let mut view = TerminalView::open(config.delay)?;
    reset(&mut view, &grid, start, end, HELP)?;

    if let Some(algorithm) = config.algorithm {
        run_one(&mut view, algorithm, &grid, start, end)?;
    }

    loop {
        match view.wait_command()? {
            Command::Quit => break,
            Command::Run(i) => {
                let Some(&algorithm) = Algorithm::ALL.get(i) else {
                    continue;
                };
                reset(&mut view, &grid, start, end, "")?;
                run_one(&mut view, algorithm, &grid, start, end)?;
            }
            Command::NewGrid => {
                config.seed = rand::random();
                grid = config.build_grid();
                reset(&mut view, &grid, start, end, HELP)?;
            }
            Command::ClearObstacles => {
                grid.clear_obstacles();
                grid.update_neighbors();
                reset(&mut view, &grid, start, end, HELP)?;
            }
        }
    }

    view.close();
    Ok(())
}

fn reset(
    view: &mut TerminalView,
    grid: &Grid,
    start: Point,
    end: Point,
    status: &str,
) -> std::io::Result<()> {
    view.token().reset();
    view.draw_grid(grid, start, end)?;
    view.status(status)
}

fn run_one(
    view: &mut TerminalView,
    algorithm: Algorithm,
    grid: &Grid,
    start: Point,
    end: Point,
) -> Result<(), Box<dyn std::error::Error>> {
    view.status(&format!("{algorithm} running... (q cancels)"))?;
    let out = search(algorithm, grid, start, end, view)?;
    if let Some(e) = view.take_error() {
        return Err(e.into());
    }
    let expanded = out.expanded;
    let line = match (out.status, out.length) {
        (SearchStatus::Found, Some(length)) => {
            format!("{algorithm}: path length {length}, {expanded} expanded | {HELP}")
        }
        (SearchStatus::Cancelled, _) => format!("{algorithm}: cancelled | {HELP}"),
        _ => format!("{algorithm}: no path, {expanded} expanded | {HELP}"),
    };
    // A cancel key pressed during the run should not end the session.
    view.token().reset();
    view.status(&line)?;
    Ok(())
}

fn main() -> ExitCode {
    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(ConfigError::Help) => {
            println!("usage: visualize [options]\n{}", ConfigError::Help);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("visualize: {e}");
            ExitCode::FAILURE
        }
    }
}
