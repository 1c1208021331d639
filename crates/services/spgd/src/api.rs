//! HTTP surface of the share-page service.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::Uri,
    routing::get,
};
use serde::{Deserialize, Serialize};
use spg_config::PlaygroundConfig;
use spg_sdk::{ArtifactResolver, ArtifactSet, BuildId};
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{error, info};

use crate::prelude::*;

/// Everything the share page needs to render one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePage {
    pub build_id: BuildId,
    pub artifacts: ArtifactSet,
    /// Compile endpoint the page submits edited sources to.
    pub api_base: String,
}

struct ShareContext {
    resolver: ArtifactResolver,
    api_base: String,
}

/// Shared router state.
///
/// `share` is `None` when the service started without a usable configuration;
/// every share page is then answered as not found.
#[derive(Clone)]
pub struct AppState {
    share: Option<Arc<ShareContext>>,
}

impl AppState {
    pub fn new(config: &PlaygroundConfig) -> Result<Self> {
        let resolver = ArtifactResolver::new(config)?;
        Ok(Self {
            share: Some(Arc::new(ShareContext {
                resolver,
                api_base: config.api_base().to_string(),
            })),
        })
    }

    /// State for a service whose configuration could not be loaded.
    pub fn unconfigured() -> Self {
        Self { share: None }
    }

    /// Build the state from a configuration attempt, logging a failure once.
    pub fn from_config(config: spg_config::prelude::Result<PlaygroundConfig>) -> Self {
        match config.map_err(Error::from).and_then(|config| Self::new(&config)) {
            Ok(state) => state,
            Err(e) => {
                error!("Share pages disabled, configuration unusable: {}", e);
                Self::unconfigured()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/share/{build_id}", get(share_page))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn setup_api(state: AppState, address: SocketAddr) -> Result<JoinHandle<Result<()>>> {
    let listener = TcpListener::bind(address).await?;
    info!("Share pages listening on {}", listener.local_addr()?);
    Ok(serve_api(state, listener))
}

pub fn serve_api(state: AppState, listener: TcpListener) -> JoinHandle<Result<()>> {
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await?;
        Ok(())
    })
}

async fn share_page(
    State(state): State<AppState>,
    Path(build_id): Path<String>,
) -> Result<Json<SharePage>> {
    let context = state.share.as_ref().ok_or(Error::ConfigUnavailable)?;
    let build_id = BuildId::new(build_id)?;

    let artifacts = context.resolver.resolve(&build_id).await;
    if artifacts.source.is_none() {
        return Err(Error::BuildNotFound(build_id.to_string()));
    }

    Ok(Json(SharePage {
        build_id,
        artifacts,
        api_base: context.api_base.clone(),
    }))
}

async fn not_found(uri: Uri) -> Error {
    Error::RouteNotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc};

    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use super::*;

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn start_store(objects: &[(&str, &str)]) -> String {
        let objects: Arc<HashMap<String, String>> = Arc::new(
            objects
                .iter()
                .map(|(key, body)| (key.to_string(), body.to_string()))
                .collect(),
        );
        let app = Router::new().route(
            "/{*key}",
            get(move |Path(key): Path<String>| {
                let objects = objects.clone();
                async move {
                    match objects.get(&key) {
                        Some(body) => (StatusCode::OK, body.clone()),
                        None => (StatusCode::NOT_FOUND, String::from("NoSuchKey")),
                    }
                }
            }),
        );
        serve(app).await
    }

    async fn start_service(state: AppState) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        serve_api(state, listener);
        format!("http://{addr}")
    }

    async fn configured_service(store: &str) -> String {
        let config = PlaygroundConfig::new(store, "https://api.example").unwrap();
        start_service(AppState::new(&config).unwrap()).await
    }

    #[tokio::test]
    async fn test_share_page_renders_build() {
        let store = start_store(&[
            ("abc123/input.saty", "@require: stdjabook"),
            ("abc123/stdout.txt", "evaluating texts ..."),
            ("abc123/document.pdf", "%PDF-1.5"),
        ])
        .await;
        let service = configured_service(&store).await;

        let response = reqwest::get(format!("{service}/share/abc123")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page: SharePage = response.json().await.unwrap();
        assert_eq!(page.build_id.as_str(), "abc123");
        assert_eq!(page.api_base, "https://api.example");
        assert_eq!(
            page.artifacts,
            ArtifactSet {
                source: Some("@require: stdjabook".to_string()),
                stdout: Some("evaluating texts ...".to_string()),
                stderr: None,
                document_exists: true,
                document_url: format!("{store}/abc123/document.pdf"),
            }
        );
    }

    #[tokio::test]
    async fn test_build_without_source_is_not_found() {
        let store = start_store(&[("abc123/document.pdf", "%PDF-1.5")]).await;
        let service = configured_service(&store).await;

        let response = reqwest::get(format!("{service}/share/abc123")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "error": { "message": "Not found", "status": 404 } })
        );
    }

    #[tokio::test]
    async fn test_encoded_build_id_does_not_reach_other_objects() {
        let store = start_store(&[("a", "other object"), ("a/input.saty", "other build")]).await;
        let service = configured_service(&store).await;

        for path in ["a%3Fb", "a%23b", "a%2Finput.saty%3F"] {
            let response = reqwest::get(format!("{service}/share/{path}")).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "share page {path}");
        }
    }

    #[tokio::test]
    async fn test_unconfigured_service_answers_not_found() {
        let state = AppState::from_config(PlaygroundConfig::from_lookup(|_| None));
        assert!(state.share.is_none());
        let service = start_service(state).await;

        let response = reqwest::get(format!("{service}/share/abc123")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_build_id_is_not_routed() {
        let service = configured_service("http://127.0.0.1:9").await;

        let response = reqwest::get(format!("{service}/share/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"]["status"], 404);
    }

    #[tokio::test]
    async fn test_unreachable_store_is_not_found() {
        let service = configured_service("http://127.0.0.1:9").await;

        let response = reqwest::get(format!("{service}/share/abc123")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
