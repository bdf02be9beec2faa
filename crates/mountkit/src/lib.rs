//! # mountkit
//!
//! Mount spec helpers for container runtimes.
//!
//! ## Features
//!
//! - **Locked flags**: discover which mount flags the kernel locks on the
//!   filesystem under a path, so bind mounts in a user namespace can keep them
//! - **Tmpfs specs**: turn `DEST[:OPTIONS]` into a hardened, deduplicated OCI
//!   tmpfs mount
//!
//! Nothing here performs a mount; the results are handed to a runtime.
//!
//! ## Usage
//!
//! ```no_run
//! # fn example() -> mountkit::MountResult<()> {
//! let processed = mountkit::process_flag_tmpfs("/data:size=64m,exec")?;
//! assert_eq!(processed.mode(), "nosuid,nodev,size=64m,exec");
//!
//! let locked = mountkit::unprivileged_mount_flags("/var/lib/data")?;
//! println!("bind mount must keep: {}", locked.join(","));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod flags;
pub mod merge;
pub mod processed;
pub mod tmpfs;

pub use flags::{locked_flags, unprivileged_mount_flags};
pub use merge::{DefaultTmpfsMerger, TmpfsOptionMerger, merge_tmpfs_options};
pub use mountkit_common::{MergeError, MountError, MountResult};
pub use processed::{MountKind, ProcessedMount};
pub use tmpfs::{TmpfsSpecBuilder, process_flag_tmpfs};
