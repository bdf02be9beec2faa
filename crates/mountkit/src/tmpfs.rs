//! Tmpfs mount spec building.
//!
//! Parses the value of a `--tmpfs` style flag, `DEST[:OPT1,OPT2,...]`, into a
//! [`ProcessedMount`]. The destination ends at the first `:`; everything after
//! it is the option list, so destinations cannot contain a colon.

use mountkit_common::MountResult;
use mountkit_oci::Mount;

use crate::merge::{DefaultTmpfsMerger, TmpfsOptionMerger};
use crate::processed::{MountKind, ProcessedMount};

/// Options every tmpfs mount starts from. Later user options may override them.
pub const DEFAULT_TMPFS_OPTIONS: [&str; 3] = ["noexec", "nosuid", "nodev"];

/// Builds tmpfs mounts, resolving options with a [`TmpfsOptionMerger`].
#[derive(Debug, Clone, Default)]
pub struct TmpfsSpecBuilder<M = DefaultTmpfsMerger> {
    merger: M,
}

impl TmpfsSpecBuilder {
    /// Create a builder using the [`DefaultTmpfsMerger`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: TmpfsOptionMerger> TmpfsSpecBuilder<M> {
    /// Create a builder that resolves options with `merger`.
    pub const fn with_merger(merger: M) -> Self {
        Self { merger }
    }

    /// Build a tmpfs mount from `DEST` or `DEST:OPTIONS`.
    ///
    /// Without an option list the default options are used as-is and the
    /// merger is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::Merge`](mountkit_common::MountError::Merge) if
    /// the merger rejects the options.
    pub fn build(&self, raw: &str) -> MountResult<ProcessedMount> {
        let (destination, user_options) = match raw.split_once(':') {
            Some((destination, user_options)) => (destination, Some(user_options)),
            None => (raw, None),
        };

        let mut options: Vec<String> = DEFAULT_TMPFS_OPTIONS
            .iter()
            .map(ToString::to_string)
            .collect();
        if let Some(user_options) = user_options {
            options.extend(user_options.split(',').map(str::to_string));
            options = self.merger.merge(options)?;
        }

        tracing::debug!(destination, ?options, "Processed tmpfs mount");
        Ok(ProcessedMount::new(
            Mount::tmpfs(destination, options),
            MountKind::Tmpfs,
        ))
    }
}

/// Build a tmpfs mount from `DEST[:OPTIONS]` with the default merger.
///
/// # Errors
///
/// Returns [`MountError::Merge`](mountkit_common::MountError::Merge) if an
/// option is not valid for tmpfs.
pub fn process_flag_tmpfs(raw: &str) -> MountResult<ProcessedMount> {
    TmpfsSpecBuilder::new().build(raw)
}
