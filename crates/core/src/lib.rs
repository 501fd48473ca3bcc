#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Front matter maintenance for markdown blogs.
//!
//! The [`frontmatter`] module is a pure text transformer; [`blog`] and
//! [`mapping`] handle files on disk, and [`maintenance`] ties them together
//! into per-post flows.

pub mod blog;
pub mod cleanup;
pub mod config;
pub mod frontmatter;
pub mod maintenance;
pub mod mapping;
pub mod tagging;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
