//! Precedence between suffix labels.
//!
//! A label is a dot-separated list of identifiers (`rc.1`, `beta.2.a`).
//! Identifiers that parse as integers compare numerically, everything else
//! compares lexicographically, and a non-numeric identifier always outranks a
//! numeric one at the same position.

use std::borrow::Cow;

/// A single dot-separated component of a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a>(&'a str);

impl<'a> Identifier<'a> {
    pub fn new(raw: &'a str) -> Self {
        Identifier(raw)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Integer value of the identifier, if it is numeric
    pub fn numeric(&self) -> Option<i64> {
        self.0.parse::<i64>().ok()
    }

    /// The higher-precedence identifier of the two.
    ///
    /// When both are numeric the larger value is rendered back in canonical
    /// decimal form, so `01` against `1` yields `1` and `02` against `1`
    /// yields `2`, which is neither input.
    pub fn max_with(&self, other: &Identifier<'a>) -> Cow<'a, str> {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => Cow::Owned(a.max(b).to_string()),
            (Some(_), None) => Cow::Borrowed(other.0),
            (None, Some(_)) => Cow::Borrowed(self.0),
            (None, None) => Cow::Borrowed(self.0.max(other.0)),
        }
    }
}

/// Split a label into its identifiers. The empty label has none.
pub fn identifiers(label: &str) -> Vec<Identifier<'_>> {
    if label.is_empty() {
        return Vec::new();
    }
    label.split('.').map(Identifier::new).collect()
}

/// Pick the identifier list with the higher precedence.
///
/// An empty list wins outright: the result is then empty too. At each
/// differing position, the list holding the winning identifier verbatim wins;
/// a position where neither does is skipped. When no position decides, the
/// longer list wins, and `b` wins when both have the same length.
pub fn max_identifiers<'a>(a: &[Identifier<'a>], b: &[Identifier<'a>]) -> Vec<Identifier<'a>> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    for (x, y) in a.iter().zip(b.iter()) {
        if x == y {
            continue;
        }
        let winner = x.max_with(y);
        if winner == x.as_str() {
            return a.to_vec();
        }
        if winner == y.as_str() {
            return b.to_vec();
        }
    }

    if a.len() > b.len() {
        a.to_vec()
    } else {
        b.to_vec()
    }
}

/// Return the label with the higher precedence, or `""` when either is empty.
///
/// ```
/// use git_semver::domain::label::max_label;
///
/// assert_eq!(max_label("1", "2"), "2");
/// assert_eq!(max_label("a", "1"), "a");
/// assert_eq!(max_label("", "blah"), "");
/// ```
pub fn max_label<'a>(a: &'a str, b: &'a str) -> &'a str {
    let ids_a = identifiers(a);
    let ids_b = identifiers(b);
    let winner = max_identifiers(&ids_a, &ids_b);

    if winner.is_empty() {
        ""
    } else if winner == ids_a {
        a
    } else {
        b
    }
}
