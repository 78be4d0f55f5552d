use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use log::LevelFilter;

const DATA_DIR_NAME: &str = ".trainlog";
const DEFAULT_FILE_NAME: &str = "training.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub format: OutputFormat,
    pub with_total: bool,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn new(
        file: Option<PathBuf>,
        format: OutputFormat,
        no_total: bool,
        verbose: u8,
    ) -> Result<Self> {
        let data_file = match file {
            Some(path) => path,
            None => default_data_file()?,
        };
        Ok(Self {
            data_file,
            format,
            with_total: !no_total,
            log_level: level_for(verbose),
        })
    }
}

/// `~/.trainlog/training.yml`
pub fn default_data_file() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DATA_DIR_NAME).join(DEFAULT_FILE_NAME))
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
