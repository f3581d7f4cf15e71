//! Git operations abstraction layer
//!
//! The resolver only needs two things from a repository: the names of its
//! tags and the name of the current branch. [TagSource] captures exactly
//! that, so resolution can run against a real repository or an in-memory one.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use git_semver::git::{MockRepository, TagSource};
//! # fn example() -> git_semver::Result<()> {
//! let repo = MockRepository::new()
//!     .with_tags(["v1.0.0", "v1.1.0"])
//!     .with_branch("main");
//! assert_eq!(repo.list_tags()?.len(), 2);
//! assert_eq!(repo.current_branch()?, "main");
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Supplier of raw tag names and the current branch name
///
/// ## Error Handling
///
/// Implementations map their underlying errors (like `git2::Error`) to
/// [crate::error::SemverError] variants.
pub trait TagSource {
    /// Names of all tags, in no particular order
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Short name of the checked out branch (e.g. "main")
    ///
    /// # Returns
    /// * `Ok(String)` - The branch name, or `HEAD` when detached
    /// * `Err` - If HEAD cannot be resolved, e.g. in an empty repository
    fn current_branch(&self) -> Result<String>;
}
