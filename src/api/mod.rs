//! Postman API interaction module
//!
//! This module provides the client used to fetch hosted resources by UID,
//! plus the mapping from resource kinds to API endpoints.
//!
//! # Module Structure
//!
//! - [`client`] - HTTP client for the hosted Postman API

pub mod client;

pub use client::ApiClient;

use std::fmt;

/// Kind of resource being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// The collection definition driving the run.
    Collection,
    /// Environment variable set.
    Environment,
    /// Global variable set.
    Globals,
}

impl ResourceKind {
    /// API path segment for this resource kind.
    ///
    /// Globals are stored and fetched through the environments endpoint; the
    /// hosted API has no separate globals route.
    pub fn endpoint(self) -> &'static str {
        match self {
            ResourceKind::Collection => "collections",
            ResourceKind::Environment | ResourceKind::Globals => "environments",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Collection => "collection",
            ResourceKind::Environment => "environment",
            ResourceKind::Globals => "globals",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_globals_share_the_environments_endpoint() {
        assert_eq!(ResourceKind::Collection.endpoint(), "collections");
        assert_eq!(ResourceKind::Environment.endpoint(), "environments");
        assert_eq!(ResourceKind::Globals.endpoint(), "environments");
    }
}
