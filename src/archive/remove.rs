//! Tearing the local mirror down.

use log::info;
use strum::IntoEnumIterator;

use super::Archive;

use crate::{
    config::{ArchiveConfig, ArchiveFile},
    errors::GhcndDataErr,
};

impl Archive {
    /// Delete every archive file and every tracked extracted station file,
    /// then reset the state flags.
    ///
    /// The root directory itself survives so the mirror can be rebuilt in
    /// place. Calling this on an already empty mirror is fine.
    pub fn remove_archive(&mut self) -> Result<(), GhcndDataErr> {
        for file in ArchiveFile::iter() {
            let path = self.config.local_path(file);
            if path.is_file() {
                info!("removing {}", path.display());
                std::fs::remove_file(&path)?;
            }
        }

        let extract_dir = self.config.extract_dir();
        for station_id in &self.extracted {
            let path = extract_dir.join(ArchiveConfig::station_file_name(station_id));
            if path.is_file() {
                std::fs::remove_file(&path)?;
            }
        }

        if extract_dir.is_dir() {
            std::fs::remove_dir(&extract_dir)?;
        }

        self.setup_complete = false;
        self.extracted.clear();
        self.version = None;

        Ok(())
    }
}
