//! Shared setup for the gridsearch demos.
//!
//! Both binaries build a random obstacle grid from a [`DemoConfig`]: the
//! headless `compare` binary runs every algorithm and prints a report, the
//! `visualize` binary animates one run at a time in the terminal.

pub mod term;

use std::fmt;
use std::time::{Duration, Instant};

use gridsearch_core::{Grid, MapGen, Point};
use gridsearch_paths::{Algorithm, NoopObserver, ParseAlgorithmError, SearchError, SearchStatus, search};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const DEFAULT_SIZE: i32 = 30;
pub const DEFAULT_DENSITY: f64 = 0.3;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(15);

const USAGE: &str = "\
Options:
  --size N          grid side length (default 30)
  --density F       obstacle probability 0.0-1.0 (default 0.3)
  --seed N          RNG seed (default: random)
  --algorithm NAME  astar, dijkstra, bfs or dfs (default: all / astar)
  --delay-ms N      animation delay per step (default 15)
  --help            show this text";

// ---------------------------------------------------------------------------
// DemoConfig
// ---------------------------------------------------------------------------

/// Settings shared by the demo binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub size: i32,
    pub density: f64,
    pub seed: u64,
    /// `None` means "every algorithm" for `compare` and A* for `visualize`.
    pub algorithm: Option<Algorithm>,
    pub delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            density: DEFAULT_DENSITY,
            seed: rand::random(),
            algorithm: None,
            delay: DEFAULT_DELAY,
        }
    }
}

impl DemoConfig {
    /// Parse `--flag value` pairs (the program name must already be
    /// skipped). Unknown flags and malformed values are errors.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cfg = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let flag = flag.as_ref();
            if flag == "--help" || flag == "-h" {
                return Err(ConfigError::Help);
            }
            let value = args
                .next()
                .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
            let value = value.as_ref();
            match flag {
                "--size" => cfg.size = parse_value(flag, value)?,
                "--density" => cfg.density = parse_value(flag, value)?,
                "--seed" => cfg.seed = parse_value(flag, value)?,
                "--algorithm" => cfg.algorithm = Some(value.parse()?),
                "--delay-ms" => cfg.delay = Duration::from_millis(parse_value(flag, value)?),
                _ => return Err(ConfigError::UnknownFlag(flag.to_string())),
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::InvalidValue {
                flag: "--size".to_string(),
                value: self.size.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidValue {
                flag: "--density".to_string(),
                value: self.density.to_string(),
            });
        }
        Ok(())
    }

    /// Corner-to-corner endpoints.
    pub fn endpoints(&self) -> (Point, Point) {
        (Point::ZERO, Point::new(self.size - 1, self.size - 1))
    }

    /// Build the grid described by this config: random obstacles away from
    /// the endpoints, neighbour lists computed.
    pub fn build_grid(&self) -> Grid {
        let mut grid = Grid::new(self.size);
        let (start, end) = self.endpoints();
        let mut mg = MapGen::new(StdRng::seed_from_u64(self.seed));
        let placed = mg.scatter(&mut grid, self.density, &[start, end]);
        grid.update_neighbors();
        let (size, seed) = (self.size, self.seed);
        log::info!("built {size}x{size} grid with {placed} obstacles (seed {seed})");
        grid
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// Errors from [`DemoConfig::from_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `--help` was requested.
    Help,
    UnknownFlag(String),
    MissingValue(String),
    InvalidValue { flag: String, value: String },
    Algorithm(ParseAlgorithmError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str(USAGE),
            Self::UnknownFlag(flag) => write!(f, "unknown flag {flag}\n{USAGE}"),
            Self::MissingValue(flag) => write!(f, "missing value for {flag}"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value {value:?} for {flag}"),
            Self::Algorithm(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ParseAlgorithmError> for ConfigError {
    fn from(e: ParseAlgorithmError) -> Self {
        Self::Algorithm(e)
    }
}

// ---------------------------------------------------------------------------
// Headless comparison
// ---------------------------------------------------------------------------

/// One row of the comparison table.
#[derive(Debug, Clone)]
pub struct Report {
    pub algorithm: Algorithm,
    pub status: SearchStatus,
    pub length: Option<usize>,
    pub expanded: usize,
    pub elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = self
            .length
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        write!(
            f,
            "{:<9} {:<10} {:>7} {:>9} {:>10.3?}",
            self.algorithm.name(),
            format!("{:?}", self.status),
            length,
            self.expanded,
            self.elapsed
        )
    }
}

/// Run the selected algorithms (all of them if none is selected) on the
/// config's grid.
pub fn compare(config: &DemoConfig) -> Result<Vec<Report>, SearchError> {
    let grid = config.build_grid();
    let (start, end) = config.endpoints();
    let algorithms = match config.algorithm {
        Some(a) => vec![a],
        None => Algorithm::ALL.to_vec(),
    };

    algorithms
        .into_iter()
        .map(|algorithm| {
            let t0 = Instant::now();
            let out = search(algorithm, &grid, start, end, &mut NoopObserver)?;
            Ok(Report {
                algorithm,
                status: out.status,
                length: out.length,
                expanded: out.expanded,
                elapsed: t0.elapsed(),
            })
        })
        .collect()
}
