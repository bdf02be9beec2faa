//! OCI Runtime Specification mount types.
//!
//! Based on the OCI Runtime Specification v1.2.0:
//! <https://github.com/opencontainers/runtime-spec/blob/main/config.md#mounts>

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filesystem type and source label used for tmpfs mounts.
pub const TMPFS: &str = "tmpfs";

/// Mount configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    /// Mount destination path (inside container).
    pub destination: PathBuf,
    /// Mount type (e.g., "bind", "tmpfs", "proc").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mount_type: Option<String>,
    /// Mount source path (outside container).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Mount options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Mount {
    /// Create a tmpfs mount at `destination`.
    ///
    /// tmpfs has no backing device, so the source is the fixed label `"tmpfs"`.
    #[must_use]
    pub fn tmpfs(destination: impl Into<PathBuf>, options: Vec<String>) -> Self {
        Self {
            destination: destination.into(),
            mount_type: Some(TMPFS.to_string()),
            source: Some(PathBuf::from(TMPFS)),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmpfs_mount_fields() {
        let mount = Mount::tmpfs("/data", vec!["nosuid".to_string()]);
        assert_eq!(mount.destination, PathBuf::from("/data"));
        assert_eq!(mount.mount_type.as_deref(), Some("tmpfs"));
        assert_eq!(mount.source, Some(PathBuf::from("tmpfs")));
        assert_eq!(mount.options, vec!["nosuid"]);
    }

    #[test]
    fn serializes_to_config_json_shape() {
        let mount = Mount::tmpfs("/run", vec!["noexec".to_string(), "size=64m".to_string()]);
        let json = serde_json::to_value(&mount).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "destination": "/run",
                "type": "tmpfs",
                "source": "tmpfs",
                "options": ["noexec", "size=64m"],
            })
        );
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let mount: Mount = serde_json::from_str(r#"{"destination": "/proc"}"#).unwrap();
        assert_eq!(mount.destination, PathBuf::from("/proc"));
        assert!(mount.mount_type.is_none());
        assert!(mount.source.is_none());
        assert!(mount.options.is_empty());
    }
}
