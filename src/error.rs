use thiserror::Error;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Invalid version pattern: {0}")]
    Pattern(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not a strict semantic version: {0}")]
    Strict(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        SemverError::Parse(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        SemverError::Pattern(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        SemverError::Branch(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverError::Config(msg.into())
    }

    /// Create a strict-validation error with context
    pub fn strict(msg: impl Into<String>) -> Self {
        SemverError::Strict(msg.into())
    }
}

impl From<regex::Error> for SemverError {
    fn from(err: regex::Error) -> Self {
        SemverError::pattern(err.to_string())
    }
}

impl From<toml::de::Error> for SemverError {
    fn from(err: toml::de::Error) -> Self {
        SemverError::config(err.to_string())
    }
}
