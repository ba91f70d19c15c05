//! Utility library shared by the JSON:API codec crates.

pub mod collections;
pub mod strings;
