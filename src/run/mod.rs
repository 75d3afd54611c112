//! Run orchestration
//!
//! Resolves every requested resource concurrently, joins the results, and
//! hands them to the execution engine. The engine itself is a seam: anything
//! implementing [`Engine`] can consume the resolved definitions.

use std::future::Future;

use futures::future;
use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiClient, ResourceKind};
use crate::error::{ResolveError, RunError};
use crate::resolve::{load, Descriptor};

/// Options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Collection descriptor (mandatory).
    pub collection: Descriptor,
    /// Environment descriptor, if any.
    pub environment: Option<Descriptor>,
    /// Globals descriptor, if any.
    pub globals: Option<Descriptor>,
    /// API key used for UID fetches from the hosted API.
    pub postman_api_key: Option<String>,
    /// Override for the hosted API base URL (self-hosted gateways).
    pub api_base_url: Option<String>,
}

impl RunOptions {
    /// Options for running the given collection with nothing else applied.
    pub fn new(collection: impl Into<Descriptor>) -> Self {
        Self {
            collection: collection.into(),
            environment: None,
            globals: None,
            postman_api_key: None,
            api_base_url: None,
        }
    }

    /// Apply an environment.
    pub fn environment(mut self, descriptor: impl Into<Descriptor>) -> Self {
        self.environment = Some(descriptor.into());
        self
    }

    /// Apply a globals set.
    pub fn globals(mut self, descriptor: impl Into<Descriptor>) -> Self {
        self.globals = Some(descriptor.into());
        self
    }

    /// Supply the API key for UID fetches.
    pub fn postman_api_key(mut self, key: impl Into<String>) -> Self {
        self.postman_api_key = Some(key.into());
        self
    }

    /// Point UID fetches at a different API base URL.
    pub fn api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = Some(base_url.into());
        self
    }
}

/// Resolved definitions handed to the execution engine.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedResources {
    /// The collection definition.
    pub collection: Value,
    /// Environment variable set, when one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Value>,
    /// Global variable set, when one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<Value>,
}

/// Aggregated result of a run.
///
/// `environment` and `globals` are present iff their descriptors were supplied
/// and resolved; serialization omits the absent slots.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Resolved collection definition.
    pub collection: Value,
    /// Resolved environment, when one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Value>,
    /// Resolved globals, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<Value>,
    /// Opaque result produced by the execution engine.
    pub run: Value,
}

/// Seam to the collection-execution engine.
///
/// The engine receives the resolved definitions as opaque JSON and returns an
/// opaque run record that lands in [`RunSummary::run`].
pub trait Engine {
    /// Execute the resolved collection.
    fn execute(
        &self,
        resources: &ResolvedResources,
    ) -> impl Future<Output = anyhow::Result<Value>> + Send;
}

/// Engine that performs no execution; the `run` slot stays null.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEngine;

impl Engine for NullEngine {
    async fn execute(&self, _resources: &ResolvedResources) -> anyhow::Result<Value> {
        Ok(Value::Null)
    }
}

/// Resolve every requested resource and produce the run summary.
pub async fn run(options: RunOptions) -> Result<RunSummary, RunError> {
    run_with_engine(options, &NullEngine).await
}

/// Resolve every requested resource, then hand the definitions to `engine`.
///
/// The three resolutions are independent and run concurrently; all are joined
/// before any error is reported. Collection failures take precedence over
/// environment failures, which take precedence over globals failures, and any
/// failure aborts the run before the engine is invoked.
pub async fn run_with_engine<E: Engine>(
    options: RunOptions,
    engine: &E,
) -> Result<RunSummary, RunError> {
    let client = match options.api_base_url.as_deref() {
        Some(base_url) => ApiClient::with_base_url(base_url)?,
        None => ApiClient::new()?,
    };
    let api_key = options.postman_api_key.as_deref();

    let (collection, environment, globals) = future::join3(
        load(&options.collection, ResourceKind::Collection, api_key, &client),
        load_optional(
            options.environment.as_ref(),
            ResourceKind::Environment,
            api_key,
            &client,
        ),
        load_optional(
            options.globals.as_ref(),
            ResourceKind::Globals,
            api_key,
            &client,
        ),
    )
    .await;

    let collection =
        collection.map_err(|err| RunError::resolve(ResourceKind::Collection, err))?;
    let environment =
        environment.map_err(|err| RunError::resolve(ResourceKind::Environment, err))?;
    let globals = globals.map_err(|err| RunError::resolve(ResourceKind::Globals, err))?;

    let resources = ResolvedResources {
        collection,
        environment,
        globals,
    };

    tracing::info!("resolved all requested resources, starting run");
    let run = engine
        .execute(&resources)
        .await
        .map_err(RunError::Engine)?;

    Ok(RunSummary {
        collection: resources.collection,
        environment: resources.environment,
        globals: resources.globals,
        run,
    })
}

/// Resolve an optional resource; absence is not an error.
async fn load_optional(
    descriptor: Option<&Descriptor>,
    kind: ResourceKind,
    api_key: Option<&str>,
    client: &ApiClient,
) -> Result<Option<Value>, ResolveError> {
    match descriptor {
        Some(descriptor) => load(descriptor, kind, api_key, client).await.map(Some),
        None => Ok(None),
    }
}
