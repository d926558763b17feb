//! # gh2bb
//!
//! Migrate a GitHub repository to another host (Bitbucket, ...) by mirror-push over SSH
//!
//! ## Usage
//!
//! ```txt
//! Usage: gh2bb [OPTIONS] --dest-url <DEST_URL>
//!
//! Options:
//!   -d, --dest-url <DEST_URL>  SSH URL of the repo to migrate to (e.g. git@bitbucket.org:workspace/name-of-the-repo.git)
//!   -n, --dry-run              Print commands without executing
//!   -p, --prefix <PREFIX>      GitHub namespace the repo is mirrored from [env: GH_PREFIX=]
//!   -c, --config <CONFIG>      Custom configuration file path
//!       --show-config-path     Show the current config path
//!   -v, --verbose...           Verbose mode (-v, -vv)
//!   -h, --help                 Print help
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod migrate;
pub(crate) mod runner;
pub(crate) mod url;
pub(crate) mod utils;

pub use cli::{gh2bb_main, Gh2bbCli};
pub use config::{ConfigData, Gh2bbConfig, MigrationConfig};
pub use errors::{Gh2bbError, Gh2bbErrorKind, Stage};
pub use migrate::migrate;
pub use runner::{command_line, CommandRunner, ProcessRunner, RunFuture};
pub use url::{derive_source_url, ensure_ssh, repo_name, DEFAULT_SOURCE_HOST};
pub use utils::TempFolder;
