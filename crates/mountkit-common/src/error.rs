//! Common error types for mountkit.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using [`MountError`].
pub type MountResult<T> = Result<T, MountError>;

/// Errors returned while inspecting mounts or building mount specs.
#[derive(Error, Diagnostic, Debug)]
pub enum MountError {
    /// Querying the filesystem status of a path failed.
    #[error("{op} {}: {source}", .path.display())]
    #[diagnostic(
        code(mountkit::path_query),
        help("The path must exist and be reachable by the calling process")
    )]
    PathQuery {
        /// The failed operation (always "stat" for filesystem queries).
        op: &'static str,
        /// The path that was queried.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The option merger rejected the combined option list.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Merge(#[from] MergeError),

    /// A mount kind string did not name a known kind.
    #[error("Unknown mount kind: {kind}")]
    #[diagnostic(
        code(mountkit::mount_kind::unknown),
        help("Known kinds are 'bind', 'volume', 'tmpfs' and 'npipe'")
    )]
    UnknownMountKind {
        /// The unrecognized kind.
        kind: String,
    },
}

impl MountError {
    /// Build a [`MountError::PathQuery`] for a failed `stat` of `path`.
    pub fn stat(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        Self::PathQuery {
            op: "stat",
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Errors reported by a tmpfs option merger.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// An option is neither a known mount flag nor a valid `key=value` tmpfs option.
    #[error("invalid tmpfs option {}", quote_fields(.option))]
    #[diagnostic(
        code(mountkit::merge::invalid_option),
        help("Valid tmpfs data options are size, mode, uid, gid, nr_inodes, nr_blocks and mpol")
    )]
    InvalidOption {
        /// The offending option token.
        option: String,
    },
}

/// Render the `=`-separated fields of an option as a bracketed list of quoted strings.
fn quote_fields(option: &str) -> String {
    let fields: Vec<String> = option
        .splitn(2, '=')
        .map(|field| format!("{field:?}"))
        .collect();
    format!("[{}]", fields.join(" "))
}
