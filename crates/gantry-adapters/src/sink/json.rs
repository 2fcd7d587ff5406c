//! JSON manifest sink.
//!
//! The hand-off format at the downstream boundary: the descriptor is
//! serialized as pretty-printed JSON, either to a file or to stdout. Maps
//! inside the descriptor are ordered, so serialization is byte-stable for
//! identical inputs.

use std::io::Write as _;
use std::path::PathBuf;

use gantry_core::application::{ports::ManifestSink, ApplicationError};
use gantry_core::domain::ProjectDescriptor;
use gantry_core::error::GantryResult;
use tracing::debug;

enum Destination {
    File(PathBuf),
    Stdout,
}

/// Writes the descriptor as JSON to a file or stdout.
pub struct JsonManifestSink {
    destination: Destination,
}

impl JsonManifestSink {
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            destination: Destination::File(path.into()),
        }
    }

    pub fn to_stdout() -> Self {
        Self {
            destination: Destination::Stdout,
        }
    }
}

impl ManifestSink for JsonManifestSink {
    fn emit(&self, descriptor: &ProjectDescriptor) -> GantryResult<()> {
        let json = serde_json::to_string_pretty(descriptor).map_err(|e| {
            ApplicationError::SinkFailed {
                reason: format!("serialization failed: {e}"),
            }
        })?;

        match &self.destination {
            Destination::File(path) => {
                std::fs::write(path, &json).map_err(|e| ApplicationError::SinkFailed {
                    reason: format!("writing {} failed: {e}", path.display()),
                })?;
                debug!(path = %path.display(), targets = descriptor.target_count(), "manifest written");
            }
            Destination::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(json.as_bytes())
                    .and_then(|()| stdout.write_all(b"\n"))
                    .map_err(|e| ApplicationError::SinkFailed {
                        reason: format!("writing stdout failed: {e}"),
                    })?;
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::domain::{GeneratorConfig, TargetName};
    use gantry_core::prelude::ManifestAssembler;

    fn descriptor() -> ProjectDescriptor {
        let config = GeneratorConfig::builder()
            .app_name(TargetName::new("App").unwrap())
            .development_team("T")
            .build()
            .unwrap();
        ManifestAssembler::assemble(&config, Vec::new()).unwrap()
    }

    #[test]
    fn file_sink_writes_parseable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        let sink = JsonManifestSink::to_file(&path);

        sink.emit(&descriptor()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "App");
        assert_eq!(value["organization"], "tuist.io");
    }

    #[test]
    fn emission_is_byte_stable() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");

        JsonManifestSink::to_file(&a).emit(&descriptor()).unwrap();
        JsonManifestSink::to_file(&b).emit(&descriptor()).unwrap();

        assert_eq!(
            std::fs::read(&a).unwrap(),
            std::fs::read(&b).unwrap()
        );
    }

    #[test]
    fn unwritable_destination_is_a_sink_error() {
        let sink = JsonManifestSink::to_file("/definitely/missing/dir/m.json");
        let err = sink.emit(&descriptor()).unwrap_err();
        assert!(err.to_string().contains("manifest emission failed"));
    }
}
