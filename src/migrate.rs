//! Mirror a repository from its source to its destination
use std::{ffi::OsStr, path::Path};

use log::info;

use crate::{
    config::MigrationConfig,
    errors::{Gh2bbError, Gh2bbErrorKind, Stage},
    runner::CommandRunner,
    url::derive_source_url,
    utils::TempFolder,
};

/// Git executable, looked up in `PATH`
const GIT: &str = "git";

/// Prefix of the temporary folder holding the mirror
const TEMP_PREFIX: &str = "gh2bb-";

/// Name of the bare clone inside the temporary folder
const CLONE_DIR: &str = "repo.git";

/// Wrap a runner error with the stage that produced it
fn stage_error(stage: Stage, e: Gh2bbError) -> Gh2bbError {
    Gh2bbError::new(Gh2bbErrorKind::Command)
        .with_stage(stage)
        .with_source(e)
}

/// Migrate one repository: clone --mirror, set the push URL, push --mirror
///
/// The temporary folder is removed on every exit path.
/// # Errors
/// The first failing step, nothing is retried
pub async fn migrate(
    config: &MigrationConfig,
    runner: &dyn CommandRunner,
) -> Result<String, Gh2bbError> {
    migrate_in(config, runner, &std::env::temp_dir()).await
}

/// Same as [`migrate`], with the temporary folder created under `temp_root`
async fn migrate_in(
    config: &MigrationConfig,
    runner: &dyn CommandRunner,
    temp_root: &Path,
) -> Result<String, Gh2bbError> {
    let dest_url = config.dest_url.as_str();
    let source_url = derive_source_url(dest_url, &config.source_host, &config.prefix)?;
    info!("Derived source-url: {source_url}");

    let temp_folder = TempFolder::new_in(temp_root, TEMP_PREFIX)?;
    let clone_dir = temp_folder.path().join(CLONE_DIR);

    runner
        .run(
            GIT,
            &[
                OsStr::new("clone"),
                OsStr::new("--mirror"),
                OsStr::new(&source_url),
                clone_dir.as_os_str(),
            ],
            None,
        )
        .await
        .map_err(|e| stage_error(Stage::Clone, e))?;

    runner
        .run(
            GIT,
            &[
                OsStr::new("remote"),
                OsStr::new("set-url"),
                OsStr::new("--push"),
                OsStr::new("origin"),
                OsStr::new(dest_url),
            ],
            Some(&clone_dir),
        )
        .await
        .map_err(|e| stage_error(Stage::SetUrl, e))?;

    runner
        .run(
            GIT,
            &[
                OsStr::new("push"),
                OsStr::new("--mirror"),
                OsStr::new("origin"),
            ],
            Some(&clone_dir),
        )
        .await
        .map_err(|e| stage_error(Stage::Push, e))?;

    info!("✅ Migration completed: {source_url} → {dest_url}");
    Ok(source_url)
}
