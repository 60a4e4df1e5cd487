//! Retrieval of files from the remote end of the archive.

use std::{fs::File, path::Path};

use reqwest::StatusCode;

use crate::errors::GhcndDataErr;

/// A connection to the remote side of the archive.
///
/// The archive only ever needs two things from the remote end: a reachability
/// check and plain single-file retrieval. Implementations other than
/// [`HttpTransfer`] exist for testing.
pub trait Transfer {
    /// Check that the remote end is reachable at all.
    fn probe(&self, base_url: &str) -> Result<(), GhcndDataErr>;

    /// Retrieve a single remote file and store it at `dest`, overwriting any
    /// file already there.
    fn retrieve(&self, url: &str, dest: &Path) -> Result<(), GhcndDataErr>;
}

/// File retrieval over HTTP(S) with default client behavior.
pub struct HttpTransfer {
    client: reqwest::blocking::Client,
}

impl HttpTransfer {
    /// Create a transfer with a default client.
    pub fn new() -> Self {
        HttpTransfer {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransfer {
    fn default() -> Self {
        HttpTransfer::new()
    }
}

impl Transfer for HttpTransfer {
    fn probe(&self, base_url: &str) -> Result<(), GhcndDataErr> {
        let response = self.client.head(base_url).send()?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(GhcndDataErr::RemoteStatus(
                base_url.to_owned(),
                response.status(),
            ))
        }
    }

    fn retrieve(&self, url: &str, dest: &Path) -> Result<(), GhcndDataErr> {
        let mut response = self.client.get(url).send()?;

        match response.status() {
            StatusCode::OK => {
                let mut file = File::create(dest)?;
                std::io::copy(&mut response, &mut file)?;
                Ok(())
            }
            StatusCode::NOT_FOUND => Err(GhcndDataErr::RemoteFileMissing(url.to_owned())),
            code => Err(GhcndDataErr::RemoteStatus(url.to_owned(), code)),
        }
    }
}
