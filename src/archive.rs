//! A local mirror of the GHCN-Daily archive.

use std::{collections::BTreeSet, fmt, path::Path};

use crate::{config::ArchiveConfig, transfer::Transfer};

pub use self::extract::ExtractFailure;
pub use self::setup::{SetupFailure, VersionCheck};

/// The archive mirror.
///
/// State is probed from the filesystem at construction and then mutated only
/// by the operations on this type. A single instance assumes exclusive access
/// to the local root directory.
pub struct Archive {
    config: ArchiveConfig,
    transfer: Box<dyn Transfer>,
    initialized: bool,
    setup_complete: bool,
    version: Option<String>,
    extracted: BTreeSet<String>,
}

mod extract;
mod remove;
mod root;
mod setup;

impl Archive {
    /// True if the remote address answered the reachability probe at
    /// construction time.
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// True if every required file is present locally.
    pub fn setup_complete(&self) -> bool {
        self.setup_complete
    }

    /// The version read from the local version marker, if there is one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Ids of the stations whose daily files have been pulled out of the
    /// bundle.
    pub fn extracted_stations(&self) -> impl Iterator<Item = &str> {
        self.extracted.iter().map(|id| id.as_str())
    }

    /// Retrieve a path to the root of the mirror.
    pub fn root(&self) -> &Path {
        self.config.root()
    }

    /// The configuration this archive was built with.
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }
}

impl fmt::Debug for Archive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Archive")
            .field("initialized", &self.initialized)
            .field("setup_complete", &self.setup_complete)
            .field("version", &self.version)
            .field("extracted", &self.extracted)
            .finish()
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
