//! CLI library for testing purposes

pub mod doc;
pub mod keys;
pub mod prompt;
pub mod strings;
pub mod validation;
