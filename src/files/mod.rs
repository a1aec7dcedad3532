//! Filesystem helpers.

pub mod filename;

pub use filename::sanitize_component;
