//! Artifact resolution for a single build.

use spg_config::PlaygroundConfig;
use spg_requests::ApiClient;
use tracing::{debug, info};

use crate::{
    artifact::{ArtifactKind, ArtifactSet},
    build_id::BuildId,
    prelude::*,
};

/// Fetches the artifacts of a build from the object store.
///
/// Holds no state besides the HTTP client; every call to
/// [`ArtifactResolver::resolve`] re-reads all artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactResolver {
    store: ApiClient,
}

/// Turns one artifact outcome into an optional value.
///
/// Failures never propagate: the artifact is simply absent.
fn settle<T>(
    build_id: &BuildId,
    kind: ArtifactKind,
    outcome: spg_requests::prelude::Result<T>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Artifact {} of build {} unavailable: {}", kind, build_id, e);
            None
        }
    }
}

impl ArtifactResolver {
    /// Create a resolver reading from the configured object-store endpoint.
    pub fn new(config: &PlaygroundConfig) -> Result<Self> {
        Ok(Self::with_client(ApiClient::new(config.storage_base())?))
    }

    /// Create a resolver on top of an existing object-store client.
    pub fn with_client(store: ApiClient) -> Self {
        Self { store }
    }

    /// Public locator of the compiled document, whether or not it exists.
    pub fn document_url(&self, build_id: &BuildId) -> String {
        self.store
            .segments_url(ArtifactKind::Document.segments(build_id))
            .into()
    }

    /// Resolve every artifact of `build_id`.
    ///
    /// The four requests run concurrently and are all awaited; each one
    /// settles independently, so any subset may be absent. The document is
    /// only probed with a HEAD request.
    pub async fn resolve(&self, build_id: &BuildId) -> ArtifactSet {
        let [source_path, stdout_path, stderr_path, document_path] =
            ArtifactKind::ALL.map(|kind| kind.segments(build_id));

        let (source, stdout, stderr, document) = tokio::join!(
            self.store.get_text(&source_path),
            self.store.get_text(&stdout_path),
            self.store.get_text(&stderr_path),
            self.store.exists(&document_path),
        );

        let artifacts = ArtifactSet {
            source: settle(build_id, ArtifactKind::Source, source),
            stdout: settle(build_id, ArtifactKind::Stdout, stdout),
            stderr: settle(build_id, ArtifactKind::Stderr, stderr),
            document_exists: settle(build_id, ArtifactKind::Document, document).is_some(),
            document_url: self.document_url(build_id),
        };

        info!(
            "Resolved build {}: {} of {} artifacts present",
            build_id,
            ArtifactKind::ALL
                .into_iter()
                .filter(|kind| artifacts.contains(*kind))
                .count(),
            ArtifactKind::ALL.len()
        );
        artifacts
    }
}
