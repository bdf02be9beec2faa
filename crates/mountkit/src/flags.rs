//! Discovery of kernel-locked mount flags.
//!
//! When a mount is copied into a user namespace the kernel locks some of its
//! attributes (`CL_UNPRIVILEGED` in `fs/namespace.c`). A later bind mount
//! "with options" of a path on that filesystem is rejected unless it
//! re-requests every locked attribute, so callers first ask which ones are set.

use std::path::Path;

use mountkit_common::{MountError, MountResult};
use rustix::fs::StatVfsMountFlags;

/// Locked mount attributes and the option names that re-request them.
///
/// Keys follow the `MNT_LOCK_*` set in `fs/namespace.c` (Linux v4.13).
pub const LOCKED_FLAGS: [(StatVfsMountFlags, &str); 7] = [
    (StatVfsMountFlags::RDONLY, "ro"),
    (StatVfsMountFlags::NODEV, "nodev"),
    (StatVfsMountFlags::NOEXEC, "noexec"),
    (StatVfsMountFlags::NOSUID, "nosuid"),
    (StatVfsMountFlags::NOATIME, "noatime"),
    (StatVfsMountFlags::RELATIME, "relatime"),
    (StatVfsMountFlags::NODIRATIME, "nodiratime"),
];

/// Map a filesystem flag mask to the names of the locked flags it carries.
///
/// A name is reported only when every bit of its flag is present in `mask`.
/// Names come back in [`LOCKED_FLAGS`] order.
#[must_use]
pub fn locked_flags(mask: StatVfsMountFlags) -> Vec<&'static str> {
    LOCKED_FLAGS
        .iter()
        .filter(|(flag, _)| mask.contains(*flag))
        .map(|(_, name)| *name)
        .collect()
}

/// Get the locked mount flags set on the filesystem containing `path`.
///
/// `path` does not have to be a mount point.
///
/// # Errors
///
/// Returns [`MountError::PathQuery`] with operation `"stat"` if the
/// filesystem status of `path` cannot be read.
pub fn unprivileged_mount_flags(path: impl AsRef<Path>) -> MountResult<Vec<&'static str>> {
    let path = path.as_ref();

    let stat = rustix::fs::statvfs(path).map_err(|e| MountError::stat(path, e))?;
    let flags = locked_flags(stat.f_flag);

    tracing::debug!(path = %path.display(), ?flags, "Resolved locked mount flags");
    Ok(flags)
}
