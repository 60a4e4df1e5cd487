//! Names and locations of the files that make up the archive.

use std::path::{Path, PathBuf};
use strum_macros::{AsStaticStr, EnumIter};

/// Position of the version token within the whitespace-split contents of the
/// version marker file. This relies on the fixed layout of `ghcnd-version.txt`.
pub const VERSION_TOKEN_INDEX: usize = 7;

/// The files required for a complete mirror of the archive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, AsStaticStr, EnumIter)]
pub enum ArchiveFile {
    /// The compressed bundle holding every per-station daily file.
    Bundle,
    /// The version marker.
    Version,
    /// The master station list.
    Stations,
    /// The per-station inventory of elements and periods of record.
    Inventory,
    /// Country codes.
    Countries,
    /// U.S. state and province codes.
    States,
}

impl ArchiveFile {
    /// The file name on the remote end, also used for the local copy.
    pub fn remote_name(self) -> &'static str {
        match self {
            ArchiveFile::Bundle => "ghcnd_all.tar.gz",
            ArchiveFile::Version => "ghcnd-version.txt",
            ArchiveFile::Stations => "ghcnd-stations.txt",
            ArchiveFile::Inventory => "ghcnd-inventory.txt",
            ArchiveFile::Countries => "ghcnd-countries.txt",
            ArchiveFile::States => "ghcnd-states.txt",
        }
    }
}

/// Where the archive lives, locally and remotely.
///
/// Immutable once constructed. The defaults point at the NCEI public server
/// and a local `static/src` directory.
#[derive(Clone, Debug)]
pub struct ArchiveConfig {
    base_url: String,
    root: PathBuf,
}

impl ArchiveConfig {
    /// The public server the archive is mirrored from.
    pub const DEFAULT_URL: &'static str = "https://www.ncei.noaa.gov/pub/data/ghcn/daily/";
    /// The default local root directory.
    pub const DEFAULT_ROOT: &'static str = "static/src";

    // Extracted station files land in this subdirectory of the root, which is
    // also the leading path component of every entry inside the bundle.
    const EXTRACT_DIR: &'static str = "ghcnd_all";
    const STATION_FILE_EXT: &'static str = "dly";

    /// Create a configuration with an explicit remote address and local root.
    pub fn new<U: Into<String>, P: Into<PathBuf>>(base_url: U, root: P) -> Self {
        ArchiveConfig {
            base_url: base_url.into(),
            root: root.into(),
        }
    }

    /// The remote base address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The local root directory of the mirror.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The full remote URL for one of the required files.
    pub fn remote_url(&self, file: ArchiveFile) -> String {
        format!("{}{}", self.base_url, file.remote_name())
    }

    /// The local path for one of the required files.
    pub fn local_path(&self, file: ArchiveFile) -> PathBuf {
        self.root.join(file.remote_name())
    }

    /// The directory station files are extracted into.
    pub fn extract_dir(&self) -> PathBuf {
        self.root.join(ArchiveConfig::EXTRACT_DIR)
    }

    /// The file name of an extracted station file.
    pub fn station_file_name(station_id: &str) -> String {
        format!("{}.{}", station_id, ArchiveConfig::STATION_FILE_EXT)
    }

    /// The path of a station's entry inside the bundle.
    pub fn bundle_entry(station_id: &str) -> String {
        format!(
            "{}/{}.{}",
            ArchiveConfig::EXTRACT_DIR,
            station_id,
            ArchiveConfig::STATION_FILE_EXT
        )
    }

    /// Recover a station id from an extracted file name, if it is one.
    pub fn station_id(file_name: &Path) -> Option<String> {
        if file_name.extension()? == ArchiveConfig::STATION_FILE_EXT {
            file_name
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        } else {
            None
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        ArchiveConfig::new(ArchiveConfig::DEFAULT_URL, ArchiveConfig::DEFAULT_ROOT)
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_six_required_files() {
        assert_eq!(ArchiveFile::iter().count(), 6);
    }

    #[test]
    fn test_remote_url_is_simple_concatenation() {
        let config = ArchiveConfig::new("https://example.com/daily/", "archive_root");

        assert_eq!(
            config.remote_url(ArchiveFile::Version),
            "https://example.com/daily/ghcnd-version.txt"
        );
        assert_eq!(
            config.remote_url(ArchiveFile::Bundle),
            "https://example.com/daily/ghcnd_all.tar.gz"
        );
    }

    #[test]
    fn test_bundle_entry_convention() {
        assert_eq!(
            ArchiveConfig::bundle_entry("USW00094728"),
            "ghcnd_all/USW00094728.dly"
        );
    }

    #[test]
    fn test_station_id_round_trip() {
        let file_name = PathBuf::from(ArchiveConfig::station_file_name("USC00242347"));
        assert_eq!(
            ArchiveConfig::station_id(&file_name),
            Some("USC00242347".to_owned())
        );

        assert_eq!(ArchiveConfig::station_id(Path::new("readme.txt")), None);
        assert_eq!(ArchiveConfig::station_id(Path::new("ghcnd_all")), None);
    }
}
