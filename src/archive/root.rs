//! Construction and filesystem probing.

use std::{collections::BTreeSet, path::Path};

use log::{debug, info, warn};
use strum::IntoEnumIterator;

use super::Archive;

use crate::{
    config::{ArchiveConfig, ArchiveFile, VERSION_TOKEN_INDEX},
    errors::GhcndDataErr,
    transfer::{HttpTransfer, Transfer},
};

impl Archive {
    /// Open the mirror rooted at the configured directory, creating the
    /// directory if it does not exist yet.
    ///
    /// If the root directory pre-existed, the state of the mirror is probed
    /// from whatever files are found inside it. The remote address is probed
    /// for reachability, but an unreachable remote only clears the
    /// `initialized` flag, it never fails construction. Filesystem errors do.
    pub fn connect(config: ArchiveConfig) -> Result<Self, GhcndDataErr> {
        Archive::connect_with(config, Box::new(HttpTransfer::new()))
    }

    /// Same as [`Archive::connect`], but with a caller supplied transfer.
    pub fn connect_with(
        config: ArchiveConfig,
        transfer: Box<dyn Transfer>,
    ) -> Result<Self, GhcndDataErr> {
        let root_existed = config.root().is_dir();
        if !root_existed {
            std::fs::create_dir_all(config.root())?;
        }

        let mut archive = Archive {
            config,
            transfer,
            initialized: false,
            setup_complete: false,
            version: None,
            extracted: BTreeSet::new(),
        };

        if root_existed {
            archive.check_setup();
            if archive.setup_complete {
                archive.set_version()?;
            }
            archive.scan_extracted()?;
        }

        match archive.transfer.probe(archive.config.base_url()) {
            Ok(()) => archive.initialized = true,
            Err(err) => {
                warn!(
                    "remote {} is not reachable: {}",
                    archive.config.base_url(),
                    err
                );
                archive.initialized = false;
            }
        }

        Ok(archive)
    }

    /// Probe for the presence of every required file and update the setup
    /// flag, stopping at the first file found missing.
    pub fn check_setup(&mut self) {
        for file in ArchiveFile::iter() {
            let path = self.config.local_path(file);
            debug!("checking {}", path.display());

            if !path.is_file() {
                info!("setup incomplete, missing {}", path.display());
                self.setup_complete = false;
                return;
            }
        }

        self.setup_complete = true;
    }

    /// Re-derive the archive version from the local version marker.
    ///
    /// An absent marker clears the version and is not an error. A marker too
    /// short to hold the version token is.
    pub fn set_version(&mut self) -> Result<(), GhcndDataErr> {
        let marker = self.config.local_path(ArchiveFile::Version);

        if marker.is_file() {
            let version = parse_version_file(&marker)?;
            info!("local archive version: {}", version);
            self.version = Some(version);
        } else {
            info!("no local version marker");
            self.version = None;
        }

        Ok(())
    }

    /// Iterate the file names stored in the mirror, including the daily files
    /// of every tracked extracted station. Purely observational.
    pub fn list_files(&self) -> Result<impl Iterator<Item = String> + '_, GhcndDataErr> {
        let root_entries = std::fs::read_dir(self.config.root())?
            .filter_map(|res| res.ok())
            .filter_map(|entry| entry.file_name().into_string().ok());

        let extracted = self
            .extracted
            .iter()
            .map(|id| ArchiveConfig::station_file_name(id));

        Ok(root_entries.chain(extracted))
    }

    // Record any station files already sitting in the extraction directory
    // from a previous run.
    fn scan_extracted(&mut self) -> Result<(), GhcndDataErr> {
        let extract_dir = self.config.extract_dir();
        if !extract_dir.is_dir() {
            return Ok(());
        }

        for entry in std::fs::read_dir(extract_dir)? {
            let entry = entry?;
            if let Some(station_id) = ArchiveConfig::station_id(&entry.path()) {
                self.extracted.insert(station_id);
            }
        }

        Ok(())
    }
}

/// Read a version marker file and pull out the version token.
///
/// The marker is split on whitespace across all lines into one flat token
/// sequence and the token at [`VERSION_TOKEN_INDEX`] is the version.
pub(crate) fn parse_version_file(path: &Path) -> Result<String, GhcndDataErr> {
    let contents = std::fs::read_to_string(path)?;
    let tokens: Vec<&str> = contents.split_whitespace().collect();

    tokens
        .get(VERSION_TOKEN_INDEX)
        .map(|token| (*token).to_owned())
        .ok_or(GhcndDataErr::MalformedVersionFile {
            found: tokens.len(),
        })
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
