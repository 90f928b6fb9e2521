use crate::codec::png::decode_image;
use crate::foundation::{core::Canvas, error::PixelforgeResult};

/// Why a remote fetch produced no bytes.
///
/// Failures are returned as values, never raised: a download cannot surface
/// a [`crate::PixelforgeError`].
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum FetchFailure {
    /// The server answered with a non-success status code.
    #[error("http status {0}")]
    HttpStatus(u16),

    /// Connection, DNS, timeout, or body-read failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Synchronously GET `url` and return the response body bytes.
///
/// Every failure is logged at warn level and returned as a [`FetchFailure`]
/// value; callers decide whether to propagate it or treat the result as an
/// absent image. The call blocks until the response completes or the client's
/// default timeout fires.
pub fn download_image(url: &str) -> Result<Vec<u8>, FetchFailure> {
    download(url).inspect_err(|failure| {
        tracing::warn!(url, %failure, "image download failed");
    })
}

fn download(url: &str) -> Result<Vec<u8>, FetchFailure> {
    let response =
        reqwest::blocking::get(url).map_err(|e| FetchFailure::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::HttpStatus(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .map_err(|e| FetchFailure::Transport(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// Fetch a remote image and decode it.
///
/// A failed download yields `Ok(None)`; the failure has already been logged
/// by [`download_image`]. Bytes that fetch successfully but cannot be decoded
/// yield [`crate::PixelforgeError::Decode`].
pub fn fetch_image(url: &str) -> PixelforgeResult<Option<Canvas>> {
    match download_image(url) {
        Ok(bytes) => Ok(Some(decode_image(&bytes)?)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/net/fetch.rs"]
mod tests;
