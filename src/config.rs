use std::{fmt, path::PathBuf, time::Duration};

pub const DEFAULT_SOURCE_DIR: &str = "Images";
pub const DEFAULT_BUCKET: &str = "cpd-viracare-s3-bucket-s1935085";
pub const DEFAULT_DELAY: Duration = Duration::from_secs(30);

pub const DELAY_SECS_VAR: &str = "IMGPUSH_DELAY_SECS";

#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory whose entries are uploaded, read relative to the working directory.
    pub source_dir: PathBuf,
    pub bucket: String,
    /// Pause after every successful upload.
    pub delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            bucket: DEFAULT_BUCKET.to_string(),
            delay: DEFAULT_DELAY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from the defaults. Only the pacing delay can be overridden.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secs) = lookup(DELAY_SECS_VAR) {
            let secs = secs.trim().parse::<u64>().map_err(|err| ConfigError {
                message: format!("failed to parse {}: {}, {}", DELAY_SECS_VAR, secs, err),
            })?;
            config.delay = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
