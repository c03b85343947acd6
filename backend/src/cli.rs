//! Command-line interface for the `health-metrics` binary

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use health_metrics_shared::LbmHeightBasis;
use std::io::Read;
use std::path::PathBuf;

use crate::repositories::HealthDataSnapshot;

#[derive(Parser, Debug)]
#[command(name = "health-metrics")]
#[command(about = "Compute a health metrics report from a user data snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot JSON file (reads stdin when omitted or "-")
    pub snapshot: Option<PathBuf>,

    /// Day to report on, YYYY-MM-DD (defaults to today, UTC)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Override the height unit fed into the lean body mass formula
    #[arg(long, env = "HM_LBM_HEIGHT_BASIS")]
    pub lbm_height_basis: Option<LbmHeightBasis>,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Read and parse the snapshot named on the command line
    pub fn read_snapshot(&self) -> Result<HealthDataSnapshot> {
        let json = match self.snapshot.as_deref() {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot {}", path.display()))?,
            _ => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read snapshot from stdin")?;
                buf
            }
        };
        HealthDataSnapshot::from_json(&json)
    }
}
