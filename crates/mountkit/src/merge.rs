//! Tmpfs option merging.
//!
//! A tmpfs option list is a mix of mount flags (`noexec`, `ro`, `shared`, ...)
//! and `key=value` data options (`size=64m`, `mode=1777`, ...). Merging
//! removes duplicates and resolves conflicting pairs so that the option given
//! last wins, while the survivors keep their relative order.

use std::collections::HashSet;

use mountkit_common::MergeError;

/// Resolves duplicate and conflicting tmpfs options.
///
/// Implemented for [`DefaultTmpfsMerger`] and for any
/// `Fn(Vec<String>) -> Result<Vec<String>, MergeError>`.
pub trait TmpfsOptionMerger {
    /// Merge `candidates` into a deduplicated, conflict-free option list.
    ///
    /// # Errors
    ///
    /// Returns a [`MergeError`] if an option is not valid for tmpfs.
    fn merge(&self, candidates: Vec<String>) -> Result<Vec<String>, MergeError>;
}

impl<F> TmpfsOptionMerger for F
where
    F: Fn(Vec<String>) -> Result<Vec<String>, MergeError>,
{
    fn merge(&self, candidates: Vec<String>) -> Result<Vec<String>, MergeError> {
        self(candidates)
    }
}

/// The stock merger, backed by [`merge_tmpfs_options`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTmpfsMerger;

impl TmpfsOptionMerger for DefaultTmpfsMerger {
    fn merge(&self, candidates: Vec<String>) -> Result<Vec<String>, MergeError> {
        merge_tmpfs_options(&candidates)
    }
}

/// Which mount flag an option sets or clears. Options sharing a class collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FlagClass {
    ReadOnly,
    NoSuid,
    NoDev,
    NoExec,
    Synchronous,
    DirSync,
    Remount,
    MandLock,
    NoAtime,
    NoDirAtime,
    RelAtime,
    StrictAtime,
    /// There is only one propagation mode per mount.
    Propagation,
}

const FLAG_OPTIONS: &[(&str, FlagClass)] = &[
    ("ro", FlagClass::ReadOnly),
    ("rw", FlagClass::ReadOnly),
    ("suid", FlagClass::NoSuid),
    ("nosuid", FlagClass::NoSuid),
    ("dev", FlagClass::NoDev),
    ("nodev", FlagClass::NoDev),
    ("exec", FlagClass::NoExec),
    ("noexec", FlagClass::NoExec),
    ("sync", FlagClass::Synchronous),
    ("async", FlagClass::Synchronous),
    ("dirsync", FlagClass::DirSync),
    ("remount", FlagClass::Remount),
    ("mand", FlagClass::MandLock),
    ("nomand", FlagClass::MandLock),
    ("atime", FlagClass::NoAtime),
    ("noatime", FlagClass::NoAtime),
    ("diratime", FlagClass::NoDirAtime),
    ("nodiratime", FlagClass::NoDirAtime),
    ("relatime", FlagClass::RelAtime),
    ("norelatime", FlagClass::RelAtime),
    ("strictatime", FlagClass::StrictAtime),
    ("nostrictatime", FlagClass::StrictAtime),
    ("bind", FlagClass::Propagation),
    ("rbind", FlagClass::Propagation),
    ("unbindable", FlagClass::Propagation),
    ("runbindable", FlagClass::Propagation),
    ("private", FlagClass::Propagation),
    ("rprivate", FlagClass::Propagation),
    ("shared", FlagClass::Propagation),
    ("rshared", FlagClass::Propagation),
    ("slave", FlagClass::Propagation),
    ("rslave", FlagClass::Propagation),
];

/// Keys accepted for `key=value` tmpfs data options.
const DATA_KEYS: &[&str] = &["", "size", "mode", "uid", "gid", "nr_inodes", "nr_blocks", "mpol"];

fn flag_class(option: &str) -> Option<FlagClass> {
    FLAG_OPTIONS
        .iter()
        .find(|(name, _)| *name == option)
        .map(|(_, class)| *class)
}

/// Merge tmpfs options, keeping the last occurrence of each flag class or data key.
///
/// `"defaults"` is dropped.
///
/// # Errors
///
/// Returns [`MergeError::InvalidOption`] for a token that is neither a known
/// flag nor `key=value` with a tmpfs data key.
pub fn merge_tmpfs_options<S: AsRef<str>>(options: &[S]) -> Result<Vec<String>, MergeError> {
    let mut flags_seen = HashSet::new();
    let mut keys_seen = HashSet::new();
    let mut merged = Vec::with_capacity(options.len());

    // Walk backwards so the last occurrence is the one kept.
    for option in options.iter().rev().map(AsRef::as_ref) {
        if option == "defaults" {
            continue;
        }

        if let Some(class) = flag_class(option) {
            if flags_seen.insert(class) {
                merged.push(option.to_string());
            }
            continue;
        }

        let key = match option.split_once('=') {
            Some((key, _)) if DATA_KEYS.contains(&key) => key,
            _ => {
                return Err(MergeError::InvalidOption {
                    option: option.to_string(),
                });
            }
        };
        if keys_seen.insert(key) {
            merged.push(option.to_string());
        }
    }

    merged.reverse();
    Ok(merged)
}
