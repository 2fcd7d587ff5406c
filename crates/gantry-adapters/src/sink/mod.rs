//! Manifest sinks implementing the core `ManifestSink` port.

pub mod json;

pub use json::JsonManifestSink;
