//! Analysis engine for finding the latest version among repository tags

pub mod tag_resolver;

pub use tag_resolver::TagResolver;
