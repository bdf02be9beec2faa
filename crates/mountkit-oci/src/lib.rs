//! # mountkit-oci
//!
//! OCI (Open Container Initiative) runtime specification types for mountkit.
//!
//! Only the mount record is modelled here; it is the piece of `config.json`
//! that mountkit produces for a container runtime to embed.

#![warn(missing_docs)]

pub mod runtime;

pub use runtime::Mount;
