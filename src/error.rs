use std::{fmt::Display, path::PathBuf};

/// A little helper trait for reporting results we can't recover from
pub(crate) trait UnwrapOrDie<T, E> {
    // print_msg should be a closure that eprints a message before termination
    fn unwrap_or_die(self, print_msg: impl FnOnce(E)) -> T;
}

impl<T, E: Display> UnwrapOrDie<T, E> for Result<T, E> {
    fn unwrap_or_die(self, print_msg: impl FnOnce(E)) -> T {
        match self {
            Ok(val) => val,
            Err(e) => {
                print_msg(e);
                std::process::exit(1)
            }
        }
    }
}

/// Ways fetching or installing a single font family can fail.
///
/// None of these are fatal to a run; they are reported per family.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The family does not exist under any license directory
    #[error("font family '{0}' not found in Google Fonts repo")]
    NotFound(String),
    /// A required request failed, or returned something we couldn't use
    #[error("GitHub API error for {url}: {source}")]
    Upstream {
        url: String,
        #[source]
        source: FetchError,
    },
    /// Creating the destination directory or writing a file failed
    #[error("failed to write '{}': {source}", .path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn upstream(url: impl Into<String>, source: impl Into<FetchError>) -> Self {
        Error::Upstream {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Failures of a single request made through a [`Fetcher`](crate::Fetcher).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("rate limit exceeded (set FIFI_GITHUB_TOKEN or GITHUB_TOKEN to raise it)")]
    RateLimited,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),
}

impl FetchError {
    /// `true` if the server told us the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status(404))
    }
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(429, _) => FetchError::RateLimited,
            ureq::Error::Status(403, resp)
                if resp.header("x-ratelimit-remaining") == Some("0") =>
            {
                FetchError::RateLimited
            }
            ureq::Error::Status(code, _) => FetchError::Status(code),
            ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
        }
    }
}
