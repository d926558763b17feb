//! External command execution
use std::{ffi::OsStr, future::Future, path::Path, pin::Pin, process::Stdio};

use log::{debug, info};
use tokio::process::Command;

use crate::errors::{Gh2bbError, Gh2bbErrorKind};

/// Boxed future returned by a [`CommandRunner`]
pub type RunFuture<'a> = Pin<Box<dyn Future<Output = Result<(), Gh2bbError>> + Send + 'a>>;

/// Something able to run an external program
pub trait CommandRunner: Sync + Send {
    /// Run `bin` with `args`, inside `dir` when given
    fn run<'a>(
        &'a self,
        bin: &'a str,
        args: &'a [&'a OsStr],
        dir: Option<&'a Path>,
    ) -> RunFuture<'a>;
}

/// Render a command line the way it is logged
pub fn command_line(bin: &str, args: &[&OsStr]) -> String {
    let mut line = bin.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Runs commands as child processes, forwarding their output
#[derive(Debug, Default, Clone)]
pub struct ProcessRunner {
    /// Only log the commands
    dry_run: bool,
}

impl ProcessRunner {
    /// Create a new ProcessRunner
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl CommandRunner for ProcessRunner {
    fn run<'a>(
        &'a self,
        bin: &'a str,
        args: &'a [&'a OsStr],
        dir: Option<&'a Path>,
    ) -> RunFuture<'a> {
        Box::pin(async move {
            info!("→ {}", command_line(bin, args));
            if self.dry_run {
                return Ok(());
            }
            let mut cmd = Command::new(bin);
            cmd.args(args)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
            if let Some(dir) = dir {
                debug!("Running in {}", dir.display());
                cmd.current_dir(dir);
            }
            let status = cmd.status().await.map_err(|e| {
                Gh2bbError::new(Gh2bbErrorKind::Command)
                    .with_text(&format!("unable to spawn {bin}"))
                    .with_source(e)
            })?;
            if status.success() {
                Ok(())
            } else {
                Err(Gh2bbError::new(Gh2bbErrorKind::Command)
                    .with_text(&format!("{bin} exited with {status}")))
            }
        })
    }
}
