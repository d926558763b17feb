//! Destination URL parsing and source URL derivation
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Gh2bbError, Gh2bbErrorKind};

/// Default host the repositories are mirrored from
pub const DEFAULT_SOURCE_HOST: &str = "github.com";

/// Last `workspace/repo` pair of an SSH URL, `.git` suffix excluded
#[allow(clippy::expect_used)]
static REPO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[:/][^/]+/(?P<repo>[^/]+?)(?:\.git)?$").expect("valid repository pattern")
});

/// Check that the URL uses an SSH form (`git@...` or `ssh://...`)
/// # Errors
/// `InvalidInput` if the URL is not an SSH URL
pub fn ensure_ssh(dest_url: &str) -> Result<(), Gh2bbError> {
    if dest_url.starts_with("git@") || dest_url.starts_with("ssh://") {
        Ok(())
    } else {
        Err(Gh2bbError::new(Gh2bbErrorKind::InvalidInput).with_text(
            "dest-url must be SSH (e.g. git@bitbucket.org:workspace/name-of-the-repo.git)",
        ))
    }
}

/// Extract the repository name from an SSH destination URL
///
/// The host and workspace segments are ignored; the name is returned as-is.
/// # Errors
/// `InvalidInput` for non-SSH URLs, `Parse` if no repository name is found
pub fn repo_name(dest_url: &str) -> Result<&str, Gh2bbError> {
    ensure_ssh(dest_url)?;
    REPO_RE
        .captures(dest_url)
        .and_then(|caps| caps.name("repo"))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            Gh2bbError::new(Gh2bbErrorKind::Parse)
                .with_text("could not parse repository name from dest-url")
        })
}

/// Build the source URL for the repository targeted by `dest_url`
/// # Errors
/// Same as [`repo_name`]
pub fn derive_source_url(
    dest_url: &str,
    source_host: &str,
    prefix: &str,
) -> Result<String, Gh2bbError> {
    let name = repo_name(dest_url)?;
    Ok(format!("git@{source_host}:{prefix}/{name}.git"))
}
