
use std::num::NonZeroUsize;
use std::thread::available_parallelism;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const USAGE: &str = "Usage: balance-transfer-engine [accounts].csv [transfers].csv [log_level:optional] [workers:optional] > [output].csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("Invalid worker count '{0}', expected a positive integer")]
    InvalidWorkers(String)
}

/// Runtime settings, taken from positional command line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub accounts_path: String,
    pub transfers_path: String,
    pub log_level: LevelFilter,
    pub workers: usize
}

impl Config {
    /// Parses the full argument list, program name included.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let accounts_path = args.get(1).ok_or(ConfigError::MissingArgument("accounts"))?.clone();
        let transfers_path = args.get(2).ok_or(ConfigError::MissingArgument("transfers"))?.clone();

        let log_level = args.get(3)
            .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

        let workers = match args.get(4) {
            Some(value) => value.parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidWorkers(value.clone()))?
                .get(),
            None => default_workers()
        };

        Ok(Self {
            accounts_path,
            transfers_path,
            log_level,
            workers
        })
    }
}

pub fn default_workers() -> usize {
    available_parallelism().map(NonZeroUsize::get).unwrap_or(4)
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
