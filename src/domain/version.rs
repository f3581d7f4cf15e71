use crate::domain::label::max_label;
use crate::error::{Result, SemverError};
use std::fmt;

/// Semantic version with optional prefix and suffix text.
///
/// Renders as `prefix + prefix_separator + major.minor.patch +
/// suffix_separator + suffix`, where each separator is only written when the
/// text next to it is non-empty. Values are never mutated in place: every
/// transformation returns a new `Version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prefix: String,
    prefix_separator: String,
    suffix: String,
    suffix_separator: String,
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Create a new version without prefix or suffix
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            ..Version::default()
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn prefix_separator(&self) -> &str {
        &self.prefix_separator
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn suffix_separator(&self) -> &str {
        &self.suffix_separator
    }

    /// The bare `major.minor.patch` triple
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    pub fn increment_major(&self) -> Self {
        Version {
            major: self.major.saturating_add(1),
            minor: 0,
            patch: 0,
            ..self.clone()
        }
    }

    pub fn increment_minor(&self) -> Self {
        Version {
            minor: self.minor.saturating_add(1),
            patch: 0,
            ..self.clone()
        }
    }

    pub fn increment_patch(&self) -> Self {
        Version {
            patch: self.patch.saturating_add(1),
            ..self.clone()
        }
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => self.increment_major(),
            VersionBump::Minor => self.increment_minor(),
            VersionBump::Patch => self.increment_patch(),
        }
    }

    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Version {
            prefix: prefix.into(),
            ..self
        }
    }

    pub fn with_prefix_separator(self, separator: impl Into<String>) -> Self {
        Version {
            prefix_separator: separator.into(),
            ..self
        }
    }

    pub fn with_suffix(self, suffix: impl Into<String>) -> Self {
        Version {
            suffix: suffix.into(),
            ..self
        }
    }

    pub fn with_suffix_separator(self, separator: impl Into<String>) -> Self {
        Version {
            suffix_separator: separator.into(),
            ..self
        }
    }

    /// Pick the version with the higher precedence.
    ///
    /// `a` wins as soon as any of its numeric fields is greater than the
    /// matching field of `b`; otherwise `b` wins as soon as any of its fields is
    /// greater. Only when all three are equal do the suffix labels decide, and
    /// a full tie goes to `b`.
    pub fn max_precedence<'a>(a: &'a Version, b: &'a Version) -> &'a Version {
        if a.major > b.major || a.minor > b.minor || a.patch > b.patch {
            return a;
        }
        if a.major < b.major || a.minor < b.minor || a.patch < b.patch {
            return b;
        }
        if a.suffix != b.suffix && max_label(&a.suffix, &b.suffix) == a.suffix {
            return a;
        }
        b
    }

    /// Highest-precedence version of a set, or the zero version when empty.
    ///
    /// The set is ordered by insertion sort, with `x` placed before `y` when
    /// `max_precedence(x, y)` picks `x`, and the first element is returned.
    /// The comparison is not transitive, so the result can depend on the
    /// input order.
    pub fn max_of_set(versions: &[Version]) -> Version {
        let mut ordered: Vec<&Version> = versions.iter().collect();
        for i in 1..ordered.len() {
            let mut j = i;
            while j > 0 && Version::precedes(ordered[j], ordered[j - 1]) {
                ordered.swap(j, j - 1);
                j -= 1;
            }
        }
        ordered.first().map(|v| (*v).clone()).unwrap_or_default()
    }

    fn precedes(x: &Version, y: &Version) -> bool {
        std::ptr::eq(Version::max_precedence(x, y), x)
    }

    /// Convert to a `semver::Version`.
    ///
    /// The prefix is dropped and the rest of the rendering must parse as
    /// SemVer 2.0, so the suffix separator decides whether the suffix is read
    /// as prerelease (`-`), build metadata (`+`) or rejected.
    pub fn to_semver(&self) -> Result<semver::Version> {
        let mut rendered = self.core();
        if !self.suffix.is_empty() {
            rendered.push_str(&self.suffix_separator);
            rendered.push_str(&self.suffix);
        }
        semver::Version::parse(&rendered)
            .map_err(|e| SemverError::strict(format!("'{}': {}", rendered, e)))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.prefix.is_empty() {
            write!(f, "{}{}", self.prefix, self.prefix_separator)?;
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.suffix.is_empty() {
            write!(f, "{}{}", self.suffix_separator, self.suffix)?;
        }
        Ok(())
    }
}
