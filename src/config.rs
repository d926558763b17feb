//! Configuration handling
use std::{fs::read_to_string, io::ErrorKind, path::PathBuf};

use home::home_dir;
use log::debug;
use serde::Deserialize;

use crate::{
    cli::Gh2bbCli,
    errors::{Gh2bbError, Gh2bbErrorKind},
    url::DEFAULT_SOURCE_HOST,
};

/// Configuration data
#[derive(Default, Clone, Debug)]
pub struct Gh2bbConfig {
    /// path to the configuration file
    pub config_path: PathBuf,

    /// actual configuration data
    pub config_data: ConfigData,

    /// CLI arguments
    pub cli_args: Gh2bbCli,
}

/// Content of the configuration file
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ConfigData {
    /// Namespace the repositories are mirrored from
    pub prefix: Option<String>,

    /// Host the repositories are mirrored from
    pub source_host: Option<String>,
}

/// Everything a migration needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationConfig {
    /// SSH URL of the destination repository
    pub dest_url: String,

    /// Host of the source repository
    pub source_host: String,

    /// Namespace of the source repository
    pub prefix: String,

    /// Only log the commands
    pub dry_run: bool,
}

impl Gh2bbConfig {
    /// Create a new Config object, reading the config file if there is one
    /// # Errors
    /// Error if an explicitly given config file can't be read or parsed
    pub fn try_new(cli_args: Gh2bbCli) -> Result<Self, Gh2bbError> {
        match cli_args.config.clone() {
            Some(config_path) => {
                let contents = read_to_string(&config_path).map_err(|e| {
                    Gh2bbError::new(Gh2bbErrorKind::Config)
                        .with_text(&format!("Unable to open {}", config_path.display()))
                        .with_source(e)
                })?;
                Ok(Gh2bbConfig {
                    config_data: toml::from_str(&contents)?,
                    config_path,
                    cli_args,
                })
            }
            None => Self::from_default_path(cli_args, Self::get_config_path()),
        }
    }

    /// Read the default config file, a missing file or home dir means no file values
    fn from_default_path(
        cli_args: Gh2bbCli,
        default_path: Result<PathBuf, Gh2bbError>,
    ) -> Result<Self, Gh2bbError> {
        let config_path = match default_path {
            Ok(path) => path,
            Err(e) => {
                debug!("{e}, ignoring the config file");
                return Ok(Gh2bbConfig {
                    cli_args,
                    ..Default::default()
                });
            }
        };
        let config_data = match read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file at {}", config_path.display());
                ConfigData::default()
            }
            Err(e) => {
                return Err(Gh2bbError::new(Gh2bbErrorKind::Config)
                    .with_text(&format!("Unable to open {}", config_path.display()))
                    .with_source(e))
            }
        };
        Ok(Gh2bbConfig {
            config_path,
            config_data,
            cli_args,
        })
    }

    /// Get the path to the config file
    /// # Errors
    /// Error if the home directory can't be found
    pub fn get_config_path() -> Result<PathBuf, Gh2bbError> {
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                return Err(Gh2bbError::new(Gh2bbErrorKind::Config)
                    .with_text("Unable to get your home dir! home::home_dir() isn't working"))
            }
        };
        Ok(home_dir.join(".config").join("gh2bb").join("config.toml"))
    }

    /// Resolve the values of one migration
    /// # Errors
    /// `Config` error if no prefix is set anywhere
    pub fn migration_config(&self) -> Result<MigrationConfig, Gh2bbError> {
        let prefix = non_empty(self.cli_args.prefix.as_deref())
            .or_else(|| non_empty(self.config_data.prefix.as_deref()))
            .ok_or_else(|| {
                Gh2bbError::new(Gh2bbErrorKind::Config)
                    .with_text("GH_PREFIX must be set in .env or environment")
            })?;
        let source_host =
            non_empty(self.config_data.source_host.as_deref()).unwrap_or(DEFAULT_SOURCE_HOST);
        Ok(MigrationConfig {
            dest_url: self.cli_args.dest_url.clone(),
            source_host: source_host.to_string(),
            prefix: prefix.to_string(),
            dry_run: self.cli_args.dry_run,
        })
    }
}

/// `None` for missing or blank values
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
