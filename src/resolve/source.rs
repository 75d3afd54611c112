//! Source classification for resource descriptors.
//!
//! Decides, without any network I/O, where a descriptor should be loaded
//! from: an in-memory definition, a local file, an absolute URL, or a
//! hosted-API UID. The only I/O performed here is the filesystem existence
//! probe that gives local files precedence over every other interpretation.

use std::path::PathBuf;

use serde_json::Value;
use url::Url;
use uuid::Uuid;

/// A resource descriptor as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    /// Already-structured definition supplied in memory.
    Inline(Value),
    /// Raw string: a file path, an absolute URL, or a hosted-API UID.
    Text(String),
}

impl From<&str> for Descriptor {
    fn from(text: &str) -> Self {
        Descriptor::Text(text.to_string())
    }
}

impl From<String> for Descriptor {
    fn from(text: String) -> Self {
        Descriptor::Text(text)
    }
}

impl From<Value> for Descriptor {
    fn from(value: Value) -> Self {
        Descriptor::Inline(value)
    }
}

/// Classified source of a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Use the in-memory payload directly.
    Inline(Value),
    /// Read and parse a local file.
    File(PathBuf),
    /// GET an absolute URL.
    Url(String),
    /// Fetch from the hosted API by UID.
    Uid(String),
}

/// Classify a descriptor into the source it should be loaded from.
///
/// Rules, in order: inline objects pass through untouched; any string naming
/// an existing filesystem entry is a file, even when it also parses as a UID
/// or URL; otherwise absolute URLs, then UID tokens. Everything else falls
/// back to a file path so the read surfaces the usual OS error.
pub async fn classify(descriptor: &Descriptor) -> Source {
    match descriptor {
        Descriptor::Inline(value) => Source::Inline(value.clone()),
        Descriptor::Text(text) => classify_text(text).await,
    }
}

async fn classify_text(text: &str) -> Source {
    if tokio::fs::try_exists(text).await.unwrap_or(false) {
        return Source::File(PathBuf::from(text));
    }
    if is_absolute_url(text) {
        return Source::Url(text.to_string());
    }
    if is_uid(text) {
        return Source::Uid(text.to_string());
    }

    Source::File(PathBuf::from(text))
}

/// Absolute URL check: must carry both a scheme and a host.
fn is_absolute_url(text: &str) -> bool {
    Url::parse(text).map(|url| url.has_host()).unwrap_or(false)
}

/// UID token check: `<numeric-prefix>-<uuid>`.
pub(crate) fn is_uid(text: &str) -> bool {
    let Some((prefix, tail)) = text.split_once('-') else {
        return false;
    };

    !prefix.is_empty()
        && prefix.bytes().all(|b| b.is_ascii_digit())
        && Uuid::try_parse(tail).is_ok()
}
