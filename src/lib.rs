#![deny(missing_docs)]
//! Package to manage a local mirror of the GHCN-Daily climate archive.
//!
//! The mirror consists of a handful of metadata files plus one large
//! compressed bundle of per-station daily files. This crate downloads and
//! verifies those files, tracks the archive version, and pulls individual
//! station files out of the bundle without expanding the whole thing.

//
// Public API
//
pub use crate::archive::{Archive, ExtractFailure, SetupFailure, VersionCheck};
pub use crate::config::{ArchiveConfig, ArchiveFile, VERSION_TOKEN_INDEX};
pub use crate::errors::GhcndDataErr;
pub use crate::transfer::{HttpTransfer, Transfer};

//
// Implementation only
//
mod archive;
mod config;
mod errors;
mod transfer;
