// src/cli.rs
use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "phone_ranker", version, about = "Normalize, rank and browse smartphone listings")]
pub struct Cli {
    /// TOML configuration file (defaults to ./ranker.toml when present)
    #[arg(short, long, global = true, env = "PHONE_RANKER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Clean the raw sales workbook into the normalized catalog
    Normalize {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Score the normalized catalog and keep the top models per brand
    Rank {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },
    /// Normalize then rank
    Run {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(long)]
        normalized: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },
    /// Serve the dashboard over the ranked workbook
    Serve {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        addr: Option<String>,
    },
}

impl Command {
    /// Command-line flags win over the configuration file.
    pub fn apply(&self, config: &mut AppConfig) {
        let paths = &mut config.paths;
        match self {
            Command::Normalize { input, output } => {
                set(&mut paths.raw_input, input);
                set(&mut paths.normalized_output, output);
            }
            Command::Rank { input, output, top_n } => {
                set(&mut paths.normalized_output, input);
                set(&mut paths.ranked_output, output);
                set(&mut config.ranking.top_n, top_n);
            }
            Command::Run { input, normalized, output, top_n } => {
                set(&mut paths.raw_input, input);
                set(&mut paths.normalized_output, normalized);
                set(&mut paths.ranked_output, output);
                set(&mut config.ranking.top_n, top_n);
            }
            Command::Serve { input, addr } => {
                set(&mut paths.ranked_output, input);
                set(&mut config.dashboard.addr, addr);
            }
        }
    }
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}
