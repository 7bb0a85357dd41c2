//! Configuration and path management for duit

pub mod paths;

pub use paths::DuitPaths;
