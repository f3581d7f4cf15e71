//! Domain logic - version values, parsing and precedence, independent of git

pub mod label;
pub mod parser;
pub mod version;

pub use label::{max_label, Identifier};
pub use parser::{VersionParser, VERSION_PATTERN};
pub use version::{Version, VersionBump};
