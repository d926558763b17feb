//! Command line options for the gh2bb tool
use crate::{config::Gh2bbConfig, errors::Gh2bbError, migrate::migrate, runner::ProcessRunner};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// gh2bb - Migrate a GitHub repo to Bitbucket by mirror-push over SSH
#[derive(Parser, Default, Clone, Debug)]
pub struct Gh2bbCli {
    /// SSH URL of the repo to migrate to (e.g. git@bitbucket.org:workspace/name-of-the-repo.git)
    #[arg(short, long = "dest-url")]
    pub dest_url: String,

    /// Print commands without executing
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// GitHub namespace the repo is mirrored from
    #[arg(short, long, env = "GH_PREFIX")]
    pub prefix: Option<String>,

    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Gh2bbCli {
    /// Log level matching the verbosity
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Run the gh2bb tool with already parsed command line options
/// # Errors
/// Error if the configuration is incomplete or the migration fails
pub async fn gh2bb_main(args: Gh2bbCli) -> Result<(), Gh2bbError> {
    let config = Gh2bbConfig::try_new(args)?;
    if config.cli_args.show_config_path {
        let config_path = if config.config_path.as_os_str().is_empty() {
            Gh2bbConfig::get_config_path()?
        } else {
            config.config_path
        };
        println!("{}", config_path.display());
        return Ok(());
    }
    let migration = config.migration_config()?;
    let runner = ProcessRunner::new(migration.dry_run);
    migrate(&migration, &runner).await?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_flags() {
        let args = Gh2bbCli::try_parse_from([
            "gh2bb",
            "--dest-url",
            "git@bitbucket.org:myteam/widgets.git",
            "--dry-run",
            "--prefix",
            "myorg",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.dest_url, "git@bitbucket.org:myteam/widgets.git");
        assert!(args.dry_run);
        assert_eq!(args.prefix.as_deref(), Some("myorg"));
        assert_eq!(args.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn dest_url_is_required() {
        let err = Gh2bbCli::try_parse_from(["gh2bb", "--dry-run"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn defaults() {
        let args = Gh2bbCli::try_parse_from(["gh2bb", "-d", "ssh://host/team/repo"]).unwrap();
        assert!(!args.dry_run);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[tokio::test]
    async fn dry_run_end_to_end() {
        let folder = tempfile::tempdir().unwrap();
        let path = folder.path().join("config.toml");
        std::fs::write(&path, "prefix = \"myorg\"\n").unwrap();
        let args = Gh2bbCli {
            dest_url: "git@bitbucket.org:myteam/widgets.git".to_string(),
            dry_run: true,
            config: Some(path),
            ..Default::default()
        };
        gh2bb_main(args).await.unwrap();
    }
}
