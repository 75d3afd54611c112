//! Resource Loader
//!
//! Orchestrates classification, local reads, and API fetches for a single
//! resource, producing its resolved JSON definition or a typed error.

use std::path::Path;

use serde_json::Value;

use super::source::{classify, Descriptor, Source};
use crate::api::{ApiClient, ResourceKind};
use crate::error::ResolveError;

/// Resolve a descriptor into its JSON definition.
///
/// Externally-sourced resources cost exactly one GET; local files and inline
/// definitions never touch the network. A UID descriptor with no API key
/// available cannot be dereferenced remotely and falls back to the
/// filesystem, so the caller sees the usual read error.
pub async fn load(
    descriptor: &Descriptor,
    kind: ResourceKind,
    api_key: Option<&str>,
    client: &ApiClient,
) -> Result<Value, ResolveError> {
    match classify(descriptor).await {
        Source::Inline(value) => inline_object(value, kind),
        Source::File(path) => read_file(&path, kind).await,
        Source::Url(url) => client.fetch_url(&url).await,
        Source::Uid(uid) => match api_key {
            Some(key) => client.fetch_by_uid(kind, &uid, key).await,
            None => read_file(Path::new(&uid), kind).await,
        },
    }
}

/// Accept an in-memory definition, parsing raw JSON text if needed.
fn inline_object(value: Value, kind: ResourceKind) -> Result<Value, ResolveError> {
    let value = match value {
        Value::String(raw) => {
            serde_json::from_str(&raw).map_err(|err| ResolveError::Parse {
                what: format!("inline {kind}"),
                detail: err.to_string(),
            })?
        }
        other => other,
    };

    if !value.is_object() {
        return Err(ResolveError::Parse {
            what: format!("inline {kind}"),
            detail: "expected a JSON object".to_string(),
        });
    }

    Ok(value)
}

/// Read a local file and parse it as JSON.
async fn read_file(path: &Path, kind: ResourceKind) -> Result<Value, ResolveError> {
    tracing::debug!("reading {} from {}", kind, path.display());

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ResolveError::read(path, &err))?;

    serde_json::from_str(&content).map_err(|err| ResolveError::Parse {
        what: path.display().to_string(),
        detail: err.to_string(),
    })
}
