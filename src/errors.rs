//! Module for errors.
use std::{error::Error, fmt::Display};

/// Error from the archive interface.
#[derive(Debug)]
pub enum GhcndDataErr {
    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),

    // Other forwarded errors
    /// Error forwarded from the http client
    Download(::reqwest::Error),
    /// General error with any cause information erased and replaced by a string
    GeneralError(String),

    // My own errors from this crate
    /// The remote end responded with a status other than success.
    RemoteStatus(String, ::reqwest::StatusCode),
    /// The remote end has no file at the given URL.
    RemoteFileMissing(String),
    /// The archive has not been set up, so there is no bundle to extract from.
    ArchiveNotSetUp,
    /// A requested station has no entry in the bundle.
    StationNotInBundle(String),
    /// The version marker file did not hold enough tokens to read a version from.
    MalformedVersionFile {
        /// How many whitespace separated tokens the file actually held.
        found: usize,
    },
}

impl Display for GhcndDataErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::GhcndDataErr::*;

        match self {
            IO(err) => write!(f, "std lib io error: {}", err),

            Download(err) => write!(f, "download error: {}", err),
            GeneralError(msg) => write!(f, "general error forwarded: {}", msg),

            RemoteStatus(url, code) => write!(f, "remote status {} for {}", code, url),
            RemoteFileMissing(url) => write!(f, "no remote file at {}", url),
            ArchiveNotSetUp => write!(f, "archive not set up, run setup first"),
            StationNotInBundle(station_id) => {
                write!(f, "station {} not found in the bundle", station_id)
            }
            MalformedVersionFile { found } => write!(
                f,
                "version marker file too short: {} tokens, need at least {}",
                found,
                crate::config::VERSION_TOKEN_INDEX + 1
            ),
        }
    }
}

impl Error for GhcndDataErr {}

impl From<::std::io::Error> for GhcndDataErr {
    fn from(err: ::std::io::Error) -> GhcndDataErr {
        GhcndDataErr::IO(err)
    }
}

impl From<::reqwest::Error> for GhcndDataErr {
    fn from(err: ::reqwest::Error) -> GhcndDataErr {
        GhcndDataErr::Download(err)
    }
}
