//! Integration tests for locked mount flag discovery.
use std::error::Error;

use mountkit::flags::LOCKED_FLAGS;
use mountkit::{MountError, locked_flags, unprivileged_mount_flags};
use proptest::prelude::*;
use rustix::fs::StatVfsMountFlags;
use tempfile::TempDir;

#[test_log::test]
fn statable_path_reports_known_names() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;

    let flags = unprivileged_mount_flags(temp_dir.path())?;

    let known: Vec<&str> = LOCKED_FLAGS.iter().map(|(_, name)| *name).collect();
    assert!(flags.iter().all(|flag| known.contains(flag)));

    // Files report their filesystem's flags too.
    let file = temp_dir.path().join("file");
    std::fs::write(&file, b"data")?;
    assert_eq!(unprivileged_mount_flags(&file)?, flags);

    Ok(())
}

#[test_log::test]
fn missing_path_is_a_stat_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let err = unprivileged_mount_flags(&missing).unwrap_err();

    match &err {
        MountError::PathQuery { op, path, source } => {
            assert_eq!(*op, "stat");
            assert_eq!(path, &missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with(&format!("stat {}: ", missing.display())));
}

proptest! {
    #[test]
    fn reports_exactly_the_set_bits(selector in 0u8..128, unlocked in any::<bool>()) {
        let mut mask = StatVfsMountFlags::empty();
        let mut expected = Vec::new();
        for (i, (flag, name)) in LOCKED_FLAGS.iter().enumerate() {
            if selector & (1 << i) != 0 {
                mask |= *flag;
                expected.push(*name);
            }
        }
        if unlocked {
            mask |= StatVfsMountFlags::SYNCHRONOUS | StatVfsMountFlags::MANDLOCK;
        }

        prop_assert_eq!(locked_flags(mask), expected);
    }
}
