use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Headerless order list: `name, <d0>x<d1>x<d2>, quantity, YYYY-MM-DD HH:MM:SS`
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "ga")]
    pub algorithm: Algorithm,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Genetic algorithm, per time bucket, retried until it beats the baseline
    #[value(name = "ga")]
    Genetic,
    /// Simulated annealing over the whole baseline
    #[value(name = "sa")]
    Annealing,
}
