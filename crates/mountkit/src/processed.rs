//! Processed mount results.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use mountkit_common::MountError;
use mountkit_oci::Mount;
use serde::{Deserialize, Serialize};

/// The kind of mount request a [`ProcessedMount`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountKind {
    /// Host path bind mount.
    Bind,
    /// Named or anonymous volume.
    Volume,
    /// In-memory tmpfs.
    Tmpfs,
    /// Windows named pipe.
    Npipe,
}

impl MountKind {
    /// The lowercase name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bind => "bind",
            Self::Volume => "volume",
            Self::Tmpfs => "tmpfs",
            Self::Npipe => "npipe",
        }
    }
}

impl fmt::Display for MountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MountKind {
    type Err = MountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bind" => Ok(Self::Bind),
            "volume" => Ok(Self::Volume),
            "tmpfs" => Ok(Self::Tmpfs),
            "npipe" => Ok(Self::Npipe),
            _ => Err(MountError::UnknownMountKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// A normalized mount ready to be embedded in a container spec.
///
/// `mode` is always the mount options joined with `,`; it is derived on
/// construction and cannot be set separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedMount {
    mount: Mount,
    #[serde(rename = "type")]
    kind: MountKind,
    mode: String,
}

impl ProcessedMount {
    /// Wrap a mount descriptor produced for `kind`.
    #[must_use]
    pub fn new(mount: Mount, kind: MountKind) -> Self {
        let mode = mount.options.join(",");
        Self { mount, kind, mode }
    }

    /// The OCI mount descriptor.
    #[must_use]
    pub const fn mount(&self) -> &Mount {
        &self.mount
    }

    /// The kind of request this mount came from.
    #[must_use]
    pub const fn kind(&self) -> MountKind {
        self.kind
    }

    /// Comma-joined mount options.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Mount options, in order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.mount.options
    }

    /// Mount destination inside the container.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.mount.destination
    }

    /// Consume this value, returning the OCI mount descriptor.
    #[must_use]
    pub fn into_mount(self) -> Mount {
        self.mount
    }
}
