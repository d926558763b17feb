//! Error handling for the gh2bb crate.
use std::{error::Error as StdError, fmt};

/// Error type for the gh2bb crate.
#[derive(Debug)]
pub struct Gh2bbError {
    /// Inner error.
    inner: Box<Inner>,
}

impl Gh2bbError {
    /// Create a new error.
    pub(crate) fn new(kind: Gh2bbErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                message: None,
                stage: None,
                source: None,
            }),
        }
    }

    /// Create a new error with a message.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.message = Some(text.to_string());
        self
    }

    /// Attach the git stage that failed.
    pub(crate) fn with_stage(mut self, stage: Stage) -> Self {
        self.inner.stage = Some(stage);
        self
    }

    /// Attach the underlying cause.
    pub(crate) fn with_source<E: Into<BoxError>>(mut self, source: E) -> Self {
        self.inner.source = Some(source.into());
        self
    }

    /// Kind of the error
    pub fn kind(&self) -> &Gh2bbErrorKind {
        &self.inner.kind
    }

    /// Git stage that failed, if the error comes from a git invocation
    pub fn stage(&self) -> Option<Stage> {
        self.inner.stage
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the gh2bb crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: Gh2bbErrorKind,

    /// Human readable message.
    message: Option<String>,

    /// Failing git stage.
    stage: Option<Stage>,

    /// Source error.
    source: Option<BoxError>,
}

/// Kind of error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gh2bbErrorKind {
    /// Missing or unreadable configuration.
    Config,

    /// The destination URL is not an SSH URL.
    InvalidInput,

    /// The repository name could not be extracted.
    Parse,

    /// The temporary directory could not be created.
    TempDir,

    /// A git invocation failed to spawn or exited non-zero.
    Command,
}

/// Git step of a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `git clone --mirror`
    Clone,

    /// `git remote set-url --push`
    SetUrl,

    /// `git push --mirror`
    Push,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Clone => write!(f, "git clone"),
            Stage::SetUrl => write!(f, "git remote set-url"),
            Stage::Push => write!(f, "git push"),
        }
    }
}

impl fmt::Display for Gh2bbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.inner.stage, &self.inner.message) {
            (Some(stage), _) => write!(f, "{stage} failed")?,
            (None, Some(message)) => write!(f, "{message}")?,
            (None, None) => write!(f, "{:?}", self.inner.kind)?,
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for Gh2bbError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<toml::de::Error> for Gh2bbError {
    fn from(e: toml::de::Error) -> Self {
        Self::new(Gh2bbErrorKind::Config)
            .with_text("Invalid config file")
            .with_source(e)
    }
}
