//! Archive retrieval.
//!
//! [`Downloader`] is the seam the version manager fetches archives through;
//! [`HttpDownloader`] is the blocking HTTP implementation used by the CLI.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

/// Failure reported by a [`Downloader`].
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    NotFound { url: String, status: u16 },

    /// The request could not be sent or no response arrived.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Streaming the body to disk failed.
    #[error("transfer to {path} failed: {source}")]
    Transfer {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Retrieves a URL into a file.
pub trait Downloader {
    /// Download `url` into `destination`.
    ///
    /// On success `destination` holds the complete response body.
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadError>;
}

/// Downloads over HTTP(S) with a blocking client.
///
/// There is no overall timeout: large archives take as long as they take.
/// Only connection establishment is bounded.
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    /// Create a downloader with the given connect timeout.
    pub fn new(connect_timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("nodevm/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(connect_timeout)
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadError> {
        debug!("Downloading {} to {}", url, destination.display());

        let mut response =
            self.client
                .get(url)
                .send()
                .map_err(|source| DownloadError::Request {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::NotFound {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // The body lands in a sibling file first so a cut-off transfer never
        // occupies the destination path.
        let partial = partial_path(destination);
        let transfer_error = |source| DownloadError::Transfer {
            path: partial.clone(),
            source,
        };

        let mut file = File::create(&partial).map_err(transfer_error)?;
        let bytes = io::copy(&mut response, &mut file).map_err(transfer_error)?;
        file.sync_all().map_err(transfer_error)?;
        drop(file);

        fs::rename(&partial, destination).map_err(|source| DownloadError::Transfer {
            path: destination.to_path_buf(),
            source,
        })?;

        debug!("Downloaded {} bytes from {}", bytes, url);
        Ok(())
    }
}

/// Path the body is streamed into before it is moved over `destination`.
pub fn partial_path(destination: &Path) -> PathBuf {
    let mut name = OsString::from(destination.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}
