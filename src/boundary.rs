use std::fmt;

/// Reasons a repository tag is left out when resolving the latest version.
/// These are expected and never fatal: most repositories carry some tags that
/// are not versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// Tag does not contain a `major.minor.patch` triple
    UnparsableTag { tag: String, reason: String },
    /// Tag is a version, but its suffix is not the current branch
    BranchMismatch {
        tag: String,
        suffix: String,
        branch: String,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::BranchMismatch {
                tag,
                suffix,
                branch,
            } => {
                write!(
                    f,
                    "Tag '{}' has suffix '{}', not branch '{}'",
                    tag, suffix, branch
                )
            }
        }
    }
}
