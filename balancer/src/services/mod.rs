//! Service implementations
//!
//! This module contains real implementations of the service traits.

pub mod file_source;

pub use file_source::FileScenarioSource;
