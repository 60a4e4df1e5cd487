//! Selective extraction of station files from the compressed bundle.

use std::{collections::HashMap, fs::File};

use flate2::read::GzDecoder;
use log::{info, warn};

use super::Archive;

use crate::{
    config::{ArchiveConfig, ArchiveFile},
    errors::GhcndDataErr,
};

/// A station that could not be extracted during a batch.
#[derive(Debug)]
pub struct ExtractFailure {
    /// The station that was requested.
    pub station_id: String,
    /// Why extraction failed.
    pub error: GhcndDataErr,
}

impl Archive {
    /// Pull a single station's daily file out of the bundle into the local
    /// tree.
    ///
    /// Extracting a station that was already extracted is allowed and simply
    /// overwrites the file.
    pub fn extract_station(&mut self, station_id: &str) -> Result<(), GhcndDataErr> {
        let mut failures = self.extract_stations(&[station_id])?;

        match failures.pop() {
            Some(failure) => Err(failure.error),
            None => Ok(()),
        }
    }

    /// Pull many stations out of the bundle in a single pass.
    ///
    /// The bundle is opened exactly once for the whole batch, which is the
    /// only reason this exists instead of repeated single calls: opening the
    /// multi-gigabyte container dominates the cost. A station that cannot be
    /// extracted is reported in the returned list and does not stop the rest
    /// of the batch.
    pub fn extract_stations<S: AsRef<str>>(
        &mut self,
        station_ids: &[S],
    ) -> Result<Vec<ExtractFailure>, GhcndDataErr> {
        if !self.setup_complete {
            return Err(GhcndDataErr::ArchiveNotSetUp);
        }

        let bundle_path = self.config.local_path(ArchiveFile::Bundle);
        let file = File::open(&bundle_path)?;
        let mut bundle = tar::Archive::new(GzDecoder::new(file));

        // Entry paths still wanted, mapped back to the ids that asked for
        // them. Duplicate requests collapse here.
        let mut wanted: HashMap<String, &str> = station_ids
            .iter()
            .map(|id| (ArchiveConfig::bundle_entry(id.as_ref()), id.as_ref()))
            .collect();

        let mut failures = vec![];

        // The tar stream only supports one forward pass, so walk it once and
        // pick out entries as they come by.
        for entry in bundle.entries()? {
            if wanted.is_empty() {
                break;
            }

            let mut entry = entry?;
            let entry_path = entry.path()?.to_string_lossy().into_owned();

            if let Some(station_id) = wanted.remove(&entry_path) {
                match entry.unpack_in(self.config.root()) {
                    Ok(_) => {
                        info!("extracted {}", entry_path);
                        self.extracted.insert(station_id.to_owned());
                    }
                    Err(err) => {
                        warn!("failed to extract {}: {}", entry_path, err);
                        failures.push(ExtractFailure {
                            station_id: station_id.to_owned(),
                            error: err.into(),
                        });
                    }
                }
            }
        }

        // Anything left over never appeared in the stream.
        for (_, station_id) in wanted.drain() {
            warn!("station {} not found in the bundle", station_id);
            failures.push(ExtractFailure {
                station_id: station_id.to_owned(),
                error: GhcndDataErr::StationNotInBundle(station_id.to_owned()),
            });
        }

        Ok(failures)
    }
}
