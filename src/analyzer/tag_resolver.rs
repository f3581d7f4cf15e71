use crate::boundary::BoundaryWarning;
use crate::domain::{Version, VersionParser};
use crate::error::Result;
use crate::git::TagSource;
use tracing::{debug, info};

/// Finds the latest version among a repository's tags
pub struct TagResolver<'p> {
    parser: &'p VersionParser,
    suffix_separator: String,
}

impl<'p> TagResolver<'p> {
    /// Create a resolver parsing tags with `suffix_separator` and no prefix separator
    pub fn new(parser: &'p VersionParser, suffix_separator: impl Into<String>) -> Self {
        TagResolver {
            parser,
            suffix_separator: suffix_separator.into(),
        }
    }

    /// Turn one tag into a candidate version, or say why it is skipped.
    ///
    /// With `branch` set, only versions whose suffix is exactly the branch name
    /// qualify.
    pub fn candidate(
        &self,
        tag: &str,
        branch: Option<&str>,
    ) -> std::result::Result<Version, BoundaryWarning> {
        let version = self
            .parser
            .parse_separated(tag, "", &self.suffix_separator)
            .map_err(|e| BoundaryWarning::UnparsableTag {
                tag: tag.to_string(),
                reason: e.to_string(),
            })?;

        match branch {
            Some(branch) if version.suffix() != branch => Err(BoundaryWarning::BranchMismatch {
                tag: tag.to_string(),
                suffix: version.suffix().to_string(),
                branch: branch.to_string(),
            }),
            _ => Ok(version),
        }
    }

    /// Pick the latest version among `tags`.
    ///
    /// Tags that are skipped are logged and otherwise ignored. With `branch`
    /// set, the result always carries the branch as its suffix, even when no
    /// tag qualified and the result is the zero version.
    pub fn resolve<S: AsRef<str>>(&self, tags: &[S], branch: Option<&str>) -> Version {
        let candidates: Vec<Version> = tags
            .iter()
            .filter_map(|tag| match self.candidate(tag.as_ref(), branch) {
                Ok(version) => Some(version),
                Err(warning) => {
                    debug!(%warning, "skipping tag");
                    None
                }
            })
            .collect();

        let latest = Version::max_of_set(&candidates);
        debug!(
            candidates = candidates.len(),
            tags = tags.len(),
            "resolved version tags"
        );

        match branch {
            Some(branch) => latest
                .with_suffix_separator(self.suffix_separator.as_str())
                .with_suffix(branch),
            None => latest,
        }
    }

    /// Resolve the latest version from a tag source.
    ///
    /// The current branch is only read when `restrict_to_branch` is set.
    pub fn resolve_from<T: TagSource>(&self, source: &T, restrict_to_branch: bool) -> Result<Version> {
        let tags = source.list_tags()?;
        let branch = if restrict_to_branch {
            Some(source.current_branch()?)
        } else {
            None
        };

        let latest = self.resolve(&tags, branch.as_deref());
        info!(version = %latest, branch = ?branch, "latest version from tags");
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    fn parser() -> VersionParser {
        VersionParser::new().unwrap()
    }

    #[test]
    fn test_candidate_unparsable() {
        let p = parser();
        let resolver = TagResolver::new(&p, "-");
        let warning = resolver.candidate("nightly", None).unwrap_err();
        assert!(matches!(warning, BoundaryWarning::UnparsableTag { .. }));
    }

    #[test]
    fn test_candidate_branch_mismatch() {
        let p = parser();
        let resolver = TagResolver::new(&p, "-");
        let warning = resolver.candidate("1.2.0-dev", Some("main")).unwrap_err();
        assert_eq!(
            warning,
            BoundaryWarning::BranchMismatch {
                tag: "1.2.0-dev".to_string(),
                suffix: "dev".to_string(),
                branch: "main".to_string(),
            }
        );
    }

    #[test]
    fn test_candidate_branch_match() {
        let p = parser();
        let resolver = TagResolver::new(&p, "-");
        let version = resolver.candidate("v1.2.0-main", Some("main")).unwrap();
        assert_eq!(version.to_string(), "v1.2.0-main");
    }

    #[test]
    fn test_resolve_skips_noise() {
        let p = parser();
        let resolver = TagResolver::new(&p, "-");
        let tags = ["latest", "v1.2.0", "v1.10.0", "release-candidate", "v1.9.0"];
        assert_eq!(resolver.resolve(&tags, None).to_string(), "v1.10.0");
    }

    #[test]
    fn test_resolve_alphabetical_tags_pick_higher_major() {
        let p = parser();
        let resolver = TagResolver::new(&p, "-");
        let tags = ["0.9.0", "1.0.5"];
        assert_eq!(resolver.resolve(&tags, None).to_string(), "1.0.5");
    }

    #[test]
    fn test_resolve_empty_is_zero() {
        let p = parser();
        let resolver = TagResolver::new(&p, "-");
        let tags: [&str; 0] = [];
        assert_eq!(resolver.resolve(&tags, None), Version::default());
    }

    #[test]
    fn test_resolve_branch_without_matches() {
        let p = parser();
        let resolver = TagResolver::new(&p, "-");
        let tags = ["v1.0.0", "v2.0.0-dev"];
        let latest = resolver.resolve(&tags, Some("feature"));
        assert_eq!(latest.core(), "0.0.0");
        assert_eq!(latest.suffix(), "feature");
        assert_eq!(latest.to_string(), "0.0.0-feature");
    }

    #[test]
    fn test_resolve_branch_filters() {
        let p = parser();
        let resolver = TagResolver::new(&p, "-");
        let tags = ["v3.0.0", "v1.4.0-dev", "v1.5.0-dev", "v2.0.0-staging"];
        assert_eq!(
            resolver.resolve(&tags, Some("dev")).to_string(),
            "v1.5.0-dev"
        );
    }

    #[test]
    fn test_resolve_from_source() {
        let p = parser();
        let resolver = TagResolver::new(&p, "_");
        let repo = MockRepository::new()
            .with_tags(["0.1.0_main", "0.2.0_main", "0.3.0_other"])
            .with_branch("main");

        let latest = resolver.resolve_from(&repo, true).unwrap();
        assert_eq!(latest.to_string(), "0.2.0_main");
    }

    #[test]
    fn test_resolve_from_does_not_need_branch_when_unrestricted() {
        let p = parser();
        let resolver = TagResolver::new(&p, "-");
        let repo = MockRepository::new().with_tags(["1.0.0", "1.0.1"]);

        assert_eq!(resolver.resolve_from(&repo, false).unwrap().to_string(), "1.0.1");
        assert!(resolver.resolve_from(&repo, true).is_err());
    }
}
