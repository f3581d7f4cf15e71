use crate::domain::version::Version;
use crate::error::{Result, SemverError};
use regex::Regex;
use tracing::trace;

/// Pattern locating the first `major.minor.patch` triple in a string
pub const VERSION_PATTERN: &str = r"(\d+)\.(\d+)\.(\d+)";

/// Extracts versions from arbitrary text.
///
/// The pattern is compiled once and reused for every parse. It is not
/// anchored, so text around the numeric triple becomes the prefix and suffix.
#[derive(Debug, Clone)]
pub struct VersionParser {
    pattern: Regex,
}

impl VersionParser {
    /// Create a parser using [`VERSION_PATTERN`]
    pub fn new() -> Result<Self> {
        Self::with_pattern(VERSION_PATTERN)
    }

    /// Create a parser from a custom pattern with exactly three capture groups
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Self::from_regex(Regex::new(pattern)?)
    }

    /// Create a parser from an already compiled pattern
    pub fn from_regex(pattern: Regex) -> Result<Self> {
        // group 0 is the whole match
        if pattern.captures_len() != 4 {
            return Err(SemverError::pattern(format!(
                "'{}' must have exactly three capture groups",
                pattern.as_str()
            )));
        }
        Ok(VersionParser { pattern })
    }

    /// Parse a version, keeping the raw text before and after the triple.
    ///
    /// # Example
    /// ```
    /// use git_semver::domain::VersionParser;
    ///
    /// let parser = VersionParser::new().unwrap();
    /// let version = parser.parse("v1.2.3-dev").unwrap();
    /// assert_eq!(version.prefix(), "v");
    /// assert_eq!(version.suffix(), "-dev");
    /// ```
    pub fn parse(&self, input: &str) -> Result<Version> {
        let captures = self
            .pattern
            .captures(input)
            .ok_or_else(|| SemverError::parse(format!("no version found in '{}'", input)))?;

        // captures_len is checked on construction, so groups 0..=3 exist
        let whole = captures
            .get(0)
            .ok_or_else(|| SemverError::parse(format!("no version found in '{}'", input)))?;

        let mut numbers = [0u64; 3];
        for (slot, index) in numbers.iter_mut().zip(1..=3) {
            let group = captures
                .get(index)
                .map(|m| m.as_str())
                .ok_or_else(|| SemverError::parse(format!("missing component in '{}'", input)))?;
            *slot = group.parse::<u64>().map_err(|e| {
                SemverError::parse(format!("invalid component '{}' in '{}': {}", group, input, e))
            })?;
        }

        let [major, minor, patch] = numbers;
        let version = Version::new(major, minor, patch)
            .with_prefix(&input[..whole.start()])
            .with_suffix(&input[whole.end()..]);

        trace!(input, %version, "parsed version");
        Ok(version)
    }

    /// Parse a version and strip the given separators from the captured text.
    ///
    /// The prefix loses a trailing `prefix_separator` and the suffix loses a
    /// leading `suffix_separator`. Text that does not carry the separator is
    /// kept as it is. The separators are stored on the returned version.
    pub fn parse_separated(
        &self,
        input: &str,
        prefix_separator: &str,
        suffix_separator: &str,
    ) -> Result<Version> {
        let raw = self.parse(input)?;

        let prefix = raw
            .prefix()
            .strip_suffix(prefix_separator)
            .unwrap_or(raw.prefix())
            .to_string();
        let suffix = raw
            .suffix()
            .strip_prefix(suffix_separator)
            .unwrap_or(raw.suffix())
            .to_string();

        Ok(raw
            .with_prefix(prefix)
            .with_prefix_separator(prefix_separator)
            .with_suffix(suffix)
            .with_suffix_separator(suffix_separator))
    }
}
