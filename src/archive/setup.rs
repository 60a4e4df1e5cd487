//! Downloading the archive from the remote end.

use log::{info, warn};
use strum::{AsStaticRef, IntoEnumIterator};

use super::Archive;

use crate::{config::ArchiveFile, errors::GhcndDataErr};

/// A single failed download from a setup pass.
#[derive(Debug)]
pub struct SetupFailure {
    /// The file that failed to download.
    pub file: ArchiveFile,
    /// Why it failed.
    pub error: GhcndDataErr,
}

/// Comparison of the local version marker against the remote one.
#[derive(Debug, PartialEq, Eq)]
pub struct VersionCheck {
    /// Version parsed from the local marker.
    pub local: String,
    /// Version currently offered by the remote end.
    pub remote: String,
}

impl VersionCheck {
    /// True when the remote end offers a different version than the local
    /// mirror holds.
    pub fn newer_available(&self) -> bool {
        self.local != self.remote
    }
}

impl Archive {
    const TMP_VERSION_FILE: &'static str = "tmp_version.txt";

    /// Download every required file, overwriting local copies unconditionally.
    ///
    /// A failed download does not stop the remaining downloads. All failures
    /// are returned, and the setup flag ends up true only when the returned
    /// list is empty. The version is re-derived as soon as the version marker
    /// lands on disk.
    pub fn setup(&mut self) -> Vec<SetupFailure> {
        let mut failures = vec![];

        self.setup_complete = true;
        for file in ArchiveFile::iter() {
            let url = self.config.remote_url(file);
            let dest = self.config.local_path(file);

            info!("downloading {}", url);
            let mut result = self.transfer.retrieve(&url, &dest);

            if result.is_ok() && file == ArchiveFile::Version {
                result = self.set_version();
            }

            if let Err(error) = result {
                warn!("failed to download {} ({}): {}", url, file.as_static(), error);
                self.setup_complete = false;
                failures.push(SetupFailure { file, error });
            }
        }

        failures
    }

    /// Fetch the remote version marker and compare it to the local version.
    ///
    /// Returns `Ok(None)` when there is no local version to compare against.
    /// Purely informational, local state is never touched and the marker is
    /// downloaded to a temporary file that is removed on every path out of
    /// this function.
    pub fn check_for_newer_version(&self) -> Result<Option<VersionCheck>, GhcndDataErr> {
        let local = match self.version {
            Some(ref version) => version.clone(),
            None => {
                info!("no local version available");
                return Ok(None);
            }
        };

        let url = self.config.remote_url(ArchiveFile::Version);
        let tmp = self.config.root().join(Archive::TMP_VERSION_FILE);

        let result = self.transfer.retrieve(&url, &tmp).and_then(|()| {
            // Guard against a transfer that claimed success without
            // producing a file.
            if tmp.is_file() {
                super::root::parse_version_file(&tmp)
            } else {
                Err(GhcndDataErr::GeneralError(format!(
                    "no file produced at {}",
                    tmp.display()
                )))
            }
        });

        if tmp.exists() {
            if let Err(err) = std::fs::remove_file(&tmp) {
                warn!("could not remove {}: {}", tmp.display(), err);
            }
        }

        let remote = result?;
        info!("current version: {}; newest version: {}", local, remote);

        Ok(Some(VersionCheck { local, remote }))
    }
}
