//! Headless comparison: run every algorithm on one random grid and print
//! path length, expansions and time for each.

use std::process::ExitCode;

use gridsearch_demos::{ConfigError, DemoConfig, compare};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(ConfigError::Help) => {
            println!("usage: compare [options]\n{}", ConfigError::Help);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            log::error!("{e}");
            return ExitCode::from(2);
        }
    };

    let reports = match compare(&config) {
        Ok(r) => r,
        Err(e) => {
            log::error!("search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{:<9} {:<10} {:>7} {:>9} {:>10}",
        "algorithm", "status", "length", "expanded", "time"
    );
    for r in &reports {
        println!("{r}");
    }
    ExitCode::SUCCESS
}
