//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::Strategy;

#[derive(Parser, Debug, Clone)]
#[command(name = "life-heatmap")]
#[command(about = "Conway's Game of Life with neighbor-count coloring")]
pub struct Args {
    /// Generations per second while running (1-120)
    #[arg(long, default_value = "60", value_parser = parse_rate)]
    pub tps: f32,

    /// Preset stamped at the grid center on startup (e.g. glider, pulsar, acorn)
    #[arg(short = 'p', long)]
    pub pattern: Option<String>,

    /// Snapshot file restored on startup
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// Snapshot file written by the save key
    #[arg(long, default_value = "life_snapshot.json")]
    pub save: PathBuf,

    /// Split each generation's rows across worker threads
    #[arg(long, default_value = "false")]
    pub parallel: bool,
}

fn parse_rate(value: &str) -> Result<f32, String> {
    let rate: f32 = value.parse().map_err(|err| format!("{err}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("rate must be a positive number, got {value}"))
    }
}

impl Args {
    pub fn strategy(&self) -> Strategy {
        if self.parallel {
            Strategy::ParallelRows
        } else {
            Strategy::Serial
        }
    }
}
