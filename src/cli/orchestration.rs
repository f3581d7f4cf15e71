//! Main workflow orchestration logic
//!
//! Decides where the working version comes from (an explicit string or the
//! repository tags), applies increments and labels, and returns the result.
//! It does not depend on clap, so it can be driven programmatically.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::analyzer::TagResolver;
use crate::config::Config;
use crate::domain::{Version, VersionBump, VersionParser};
use crate::error::Result;
use crate::git::TagSource;

/// Arguments for the bump workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BumpArgs {
    /// Explicit version string to start from
    pub version: Option<String>,

    /// Start from the latest version tag instead of `version`
    pub use_tags: bool,

    /// Only consider tags suffixed with the current branch, and use the
    /// branch as suffix
    pub restrict_to_branch: bool,

    /// Repository to read tags from
    pub git_dir: Option<PathBuf>,

    pub major: bool,
    pub minor: bool,
    pub patch: bool,

    /// Replacement prefix
    pub prefix: Option<String>,

    /// Replacement suffix
    pub suffix: Option<String>,

    pub prefix_separator: Option<String>,
    pub suffix_separator: Option<String>,

    /// Require the result to be a valid SemVer 2.0 version
    pub strict: bool,
}

impl BumpArgs {
    /// Effective (prefix, suffix) separators: arguments override configuration
    pub fn separators(&self, config: &Config) -> (String, String) {
        let prefix = self
            .prefix_separator
            .clone()
            .unwrap_or_else(|| config.separators.prefix.clone());
        let suffix = self
            .suffix_separator
            .clone()
            .unwrap_or_else(|| config.separators.suffix.clone());
        (prefix, suffix)
    }

    /// Repository directory: argument, then configuration, then current directory
    pub fn repository_dir(&self, config: &Config) -> PathBuf {
        self.git_dir
            .clone()
            .or_else(|| config.repository.path.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Increments to apply, in order
    pub fn bumps(&self) -> Vec<VersionBump> {
        let mut bumps = Vec::new();
        if self.major {
            bumps.push(VersionBump::Major);
        }
        if self.minor {
            bumps.push(VersionBump::Minor);
        }
        if self.patch || (!self.major && !self.minor) {
            bumps.push(VersionBump::Patch);
        }
        bumps
    }
}

/// Main bump workflow
///
/// 1. Start from the zero version carrying the effective separators
/// 2. Replace it with the latest tag (`use_tags`) or the parsed `version`
/// 3. Apply increments, then the suffix and prefix overrides
///
/// `open_source` is only called when tags are needed.
///
/// # Returns
/// * `Ok(Version)` - The final version
/// * `Err` - If the explicit version does not parse, the repository cannot be
///   read, or strict validation fails
pub fn run_bump<T, F>(
    args: &BumpArgs,
    config: &Config,
    parser: &VersionParser,
    open_source: F,
) -> Result<Version>
where
    T: TagSource,
    F: FnOnce(&Path) -> Result<T>,
{
    let (prefix_separator, suffix_separator) = args.separators(config);

    let mut version = Version::default()
        .with_prefix_separator(prefix_separator.as_str())
        .with_suffix_separator(suffix_separator.as_str());

    if args.restrict_to_branch && !args.use_tags {
        warn!("--branch only has an effect together with --tags");
    }

    if args.use_tags {
        let dir = args.repository_dir(config);
        let source = open_source(&dir)?;
        let resolver = TagResolver::new(parser, suffix_separator.as_str());
        version = resolver.resolve_from(&source, args.restrict_to_branch)?;
    } else if let Some(raw) = args.version.as_deref().filter(|raw| !raw.is_empty()) {
        version = parser.parse_separated(raw, &prefix_separator, &suffix_separator)?;
    }
    debug!(%version, "starting version");

    for bump in args.bumps() {
        version = version.bump(bump);
    }

    if let Some(suffix) = &args.suffix {
        version = version.with_suffix(suffix.as_str());
    }
    if let Some(prefix) = &args.prefix {
        version = version.with_prefix(prefix.as_str());
    }

    if args.strict {
        version.to_semver()?;
    }

    Ok(version)
}
