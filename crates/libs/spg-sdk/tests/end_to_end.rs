use axum::http::StatusCode;
use serde_json::json;
use spg_config::PlaygroundConfig;
use spg_sdk::{ArtifactResolver, ArtifactSet, BuildId, SubmissionCoordinator};

mod common;
use common::{MockCompiler, MockStore, RecordingNavigator, text};

#[tokio::test]
async fn test_submit_then_resolve_shared_build() {
    let compiler = MockCompiler::start(
        StatusCode::OK,
        json!({ "status": 0, "s3_url": "https://store/abc123" }),
    )
    .await;
    let store = MockStore::start([
        ("abc123/document.pdf", text("%PDF-1.5")),
        ("abc123/stdout.txt", text("  evaluating texts ...\n")),
    ])
    .await;
    let config = PlaygroundConfig::new(&store.base_url, &compiler.base_url).unwrap();

    let coordinator = SubmissionCoordinator::new(&config, RecordingNavigator::default()).unwrap();
    let submission = coordinator.submit(Some("let x = 1")).await.unwrap().unwrap();
    assert_eq!(submission.build_id, BuildId::new("abc123").unwrap());
    assert_eq!(coordinator.navigator().locations(), vec!["/share/abc123"]);

    // The share page only receives the identifier from the navigated path.
    let location = coordinator.navigator().locations().remove(0);
    let build_id: BuildId = location.trim_start_matches("/share/").parse().unwrap();

    let resolver = ArtifactResolver::new(&config).unwrap();
    let artifacts = resolver.resolve(&build_id).await;

    assert_eq!(
        artifacts,
        ArtifactSet {
            source: None,
            stdout: Some("  evaluating texts ...\n".to_string()),
            stderr: None,
            document_exists: true,
            document_url: format!("{}/abc123/document.pdf", store.base_url),
        }
    );
}
