//! Error types for resource resolution and run orchestration.

use std::io;
use std::path::{Path, PathBuf};

use crate::api::ResourceKind;

/// Failure while resolving a single resource.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A UID fetch was attempted without a Postman API key.
    #[error("a Postman API key is required to fetch the {kind} by UID")]
    MissingApiKey {
        /// Resource the fetch was attempted for.
        kind: ResourceKind,
    },

    /// A local file could not be read.
    #[error("could not read {}: {detail}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying OS error text, e.g. "no such file or directory".
        detail: String,
    },

    /// Resource content is not valid JSON, or not a JSON object.
    #[error("could not parse {what}: {detail}")]
    Parse {
        /// What was being parsed (a path, a URL, an inline definition).
        what: String,
        /// Parser error text.
        detail: String,
    },

    /// A remote fetch failed: transport error or non-2xx response.
    #[error("could not fetch {url}: {message}")]
    Fetch {
        /// Target URL of the single GET attempt.
        url: String,
        /// HTTP status, when a response was received at all.
        status: Option<u16>,
        /// Upstream status line and (truncated) body, or the transport error.
        message: String,
    },
}

impl ResolveError {
    /// Build a [`ResolveError::Read`] from an I/O error.
    ///
    /// The detail text is pinned for the common error kinds so callers can
    /// pattern-match on it regardless of platform strerror capitalization.
    pub(crate) fn read(path: &Path, err: &io::Error) -> Self {
        let detail = match err.kind() {
            io::ErrorKind::NotFound => "no such file or directory".to_string(),
            io::ErrorKind::PermissionDenied => "permission denied".to_string(),
            _ => err.to_string(),
        };

        ResolveError::Read {
            path: path.to_path_buf(),
            detail,
        }
    }
}

/// Failure of a whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A requested resource could not be resolved.
    #[error("could not resolve {kind}: {source}")]
    Resolve {
        /// Which resource failed.
        kind: ResourceKind,
        /// The underlying resolution failure.
        source: ResolveError,
    },

    /// The execution engine reported a failure.
    #[error("run failed: {0}")]
    Engine(anyhow::Error),

    /// Client construction or other setup failure.
    #[error(transparent)]
    Setup(#[from] anyhow::Error),
}

impl RunError {
    pub(crate) fn resolve(kind: ResourceKind, source: ResolveError) -> Self {
        RunError::Resolve { kind, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_surfaces_enoent_text() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        let resolve = ResolveError::read(Path::new("missing.json"), &err);

        assert!(
            resolve.to_string().contains("no such file or directory"),
            "ENOENT must surface literally: {resolve}"
        );
    }

    #[test]
    fn test_run_error_keeps_resolve_detail() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        let resolve = ResolveError::read(Path::new("missing.json"), &err);
        let run = RunError::resolve(ResourceKind::Collection, resolve);

        let message = run.to_string();
        assert!(message.contains("collection"), "{message}");
        assert!(message.contains("no such file or directory"), "{message}");
    }
}
