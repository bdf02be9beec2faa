//! # mountkit-common
//!
//! Shared types for the mountkit crates.
//!
//! This crate provides:
//! - The [`MountError`] taxonomy returned by every mountkit operation
//! - The [`MergeError`] reported by tmpfs option mergers

#![warn(missing_docs)]

pub mod error;

pub use error::{MergeError, MountError, MountResult};
