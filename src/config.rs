// src/config.rs

use clap::Parser;
use log::LevelFilter;
use serde::Deserialize;
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::ConvertError;

pub const CONFIG_ENV_VAR: &str = "ASSET2TEXT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "asset2text.json";

// -------------- Config structures --------------

#[derive(Deserialize, Default)]
struct RawConfig {
    output_dir: Option<PathBuf>,
    max_input_size_kb: Option<usize>,
    clear_screen: Option<bool>,

    log_enabled: Option<bool>,
    log_level: Option<String>,
    log_file: Option<String>,
    log_append: Option<bool>,
}

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the input file; prompted for when omitted
    input: Option<PathBuf>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the output file is written to (default: current directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    #[arg(long)] max_input_size_kb: Option<usize>,
    #[arg(long)] clear_screen: Option<bool>,

    #[arg(long)] log_enabled: Option<bool>,
    #[arg(long)] log_level: Option<String>,
    #[arg(long)] log_file: Option<String>,
    #[arg(long)] log_append: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    pub input: Option<PathBuf>,
    /// Empty means the current working directory.
    pub output_dir: PathBuf,
    /// In bytes; `None` is unlimited.
    pub max_input_size: Option<usize>,
    pub clear_screen: bool,

    pub log_enabled: bool,
    pub log_level: LevelFilter,
    pub log_file: String,
    pub log_append: bool,
}

impl Config {
    pub fn from(cli: Cli) -> Result<Self, ConvertError> {
        // 1) Determine config file path
        let path = if let Some(cfg) = cli.config {
            Some(cfg)
        } else if let Ok(env) = std::env::var(CONFIG_ENV_VAR) {
            Some(PathBuf::from(env))
        } else if PathBuf::from(DEFAULT_CONFIG_FILE).exists() {
            Some(PathBuf::from(DEFAULT_CONFIG_FILE))
        } else {
            None
        };

        // 2) Load JSON
        let raw = match path {
            Some(p) => load_raw(&p)?,
            None => RawConfig::default(),
        };

        // 3) Override with CLI
        let max_input_size = match cli.max_input_size_kb.or(raw.max_input_size_kb) {
            Some(kb) => Some(kb.checked_mul(1024).ok_or_else(|| {
                ConvertError::InvalidConfiguration("max_input_size_kb too large".into())
            })?),
            None => None,
        };

        let level = cli
            .log_level
            .or(raw.log_level)
            .unwrap_or_else(|| "info".into());
        let log_level = LevelFilter::from_str(&level).map_err(|_| {
            ConvertError::InvalidConfiguration(format!("unknown log_level {:?}", level))
        })?;

        Ok(Config {
            input: cli.input,
            output_dir: cli.output_dir.or(raw.output_dir).unwrap_or_default(),
            max_input_size,
            clear_screen: cli.clear_screen.or(raw.clear_screen).unwrap_or(true),
            log_enabled: cli.log_enabled.or(raw.log_enabled).unwrap_or(false),
            log_level,
            log_file: cli
                .log_file
                .or(raw.log_file)
                .unwrap_or_else(|| "asset2text.log".into()),
            log_append: cli.log_append.or(raw.log_append).unwrap_or(true),
        })
    }
}

fn load_raw(path: &Path) -> Result<RawConfig, ConvertError> {
    // An absent file just means defaults
    let f = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Ok(RawConfig::default()),
    };
    let mut s = String::new();
    io::BufReader::new(f)
        .read_to_string(&mut s)
        .map_err(|e| ConvertError::Io(e.to_string()))?;
    serde_json::from_str(&s).map_err(|e| {
        ConvertError::InvalidConfiguration(format!("{}: {}", path.display(), e))
    })
}
