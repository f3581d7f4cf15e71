use crate::error::{Result, SemverError};
use crate::git::TagSource;
use git2::Repository as Git2Repo;
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl TagSource for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn current_branch(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .map_err(|e| SemverError::branch(format!("Cannot resolve HEAD: {}", e)))?;

        head.shorthand()
            .map(|name| name.to_string())
            .ok_or_else(|| SemverError::branch("HEAD name is not valid UTF-8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{RepositoryInitOptions, Signature};
    use tempfile::TempDir;

    fn init_repo(dir: &TempDir) -> Git2Repo {
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        Git2Repo::init_opts(dir.path(), &opts).unwrap()
    }

    fn commit(repo: &Git2Repo) -> git2::Oid {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap()
    }

    #[test]
    fn test_list_tags() {
        let dir = TempDir::new().unwrap();
        let repo = init_repo(&dir);
        let oid = commit(&repo);
        {
            let object = repo.find_object(oid, None).unwrap();
            repo.tag_lightweight("v1.0.0", &object, false).unwrap();
            repo.tag_lightweight("not-a-version", &object, false).unwrap();
        }

        let wrapped = Git2Repository::from_git2(repo);
        let mut tags = wrapped.list_tags().unwrap();
        tags.sort();
        assert_eq!(tags, vec!["not-a-version".to_string(), "v1.0.0".to_string()]);
    }

    #[test]
    fn test_current_branch() {
        let dir = TempDir::new().unwrap();
        let repo = init_repo(&dir);
        commit(&repo);

        let wrapped = Git2Repository::open(dir.path()).unwrap();
        assert_eq!(wrapped.current_branch().unwrap(), "main");
    }

    #[test]
    fn test_current_branch_unborn_is_error() {
        let dir = TempDir::new().unwrap();
        let repo = init_repo(&dir);

        let wrapped = Git2Repository::from_git2(repo);
        assert!(matches!(
            wrapped.current_branch().unwrap_err(),
            SemverError::Branch(_)
        ));
    }

    #[test]
    fn test_current_branch_detached_head() {
        let dir = TempDir::new().unwrap();
        let repo = init_repo(&dir);
        let oid = commit(&repo);
        repo.set_head_detached(oid).unwrap();

        let wrapped = Git2Repository::from_git2(repo);
        assert_eq!(wrapped.current_branch().unwrap(), "HEAD");
    }

    #[test]
    fn test_open_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = Git2Repository::open(&missing).err().unwrap();
        assert!(matches!(err, SemverError::Git(_)));
    }
}
