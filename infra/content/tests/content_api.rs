//! `ContentApiClient` against a throwaway HTTP server that answers like the content API.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use mdc_content::{ContentApiClient, ContentError, ContentRepository, Policy, Subject};
use mdc_domain::content::ContentId;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<(String, Option<String>, Option<String>)>>>;

fn record(seen: &Seen, path: String, headers: &HeaderMap) {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    seen.lock().unwrap().push((path, header("x-principal-id"), header("x-auth-token")));
}

async fn policy(
    State(seen): State<Seen>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    record(&seen, format!("policy/{id}"), &headers);
    match id.as_str() {
        "2.184" => Ok(Json(json!({
            "contentId": "2.184",
            "components": {"polopoly.Content": {"name": "Sections"}},
            "lists": {"entities": [
                {"name": "1", "contentId": "2.186"},
                {"name": "0", "contentId": "2.185"}
            ]}
        }))),
        "2.185" => Ok(Json(json!({
            "contentId": "2.185",
            "components": {"polopoly.Content": {"name": "Sports"}}
        }))),
        "2.500" => Err(StatusCode::INTERNAL_SERVER_ERROR),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn content(
    State(seen): State<Seen>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    record(&seen, format!("content/{id}"), &headers);
    match id.as_str() {
        "onecms:f1" | "onecms:f1:v7" => Ok(Json(json!({
            "id": "onecms:f1",
            "version": "onecms:f1:v7",
            "aspects": {
                "contentData": {"data": {"_type": "com.atex.onecms.app.dam.DamFolderAspectBean", "name": "Politics"}}
            }
        }))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn spawn_content_api() -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/onecms/policy/{id}", get(policy))
        .route("/onecms/content/contentid/{id}", get(content))
        .with_state(Arc::clone(&seen));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    (format!("http://{addr}/onecms"), seen)
}

fn id(raw: &str) -> ContentId {
    ContentId::parse(raw).unwrap()
}

#[tokio::test]
async fn resolves_policies_of_both_kinds() {
    let (url, seen) = spawn_content_api().await;
    let client = ContentApiClient::builder().api_url(url).auth_token("secret").build().unwrap();

    let listed = client.resolve_policy(&id("2.184")).await.unwrap();
    let names: Vec<&str> = listed
        .reference_list("entities")
        .unwrap()
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, ["1", "0"]);

    let generic = client.resolve_policy(&id("2.185")).await.unwrap();
    assert!(matches!(generic, Policy::Generic(_)));
    assert_eq!(generic.field("polopoly.Content", "name"), Some("Sports"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0], ("policy/2.184".to_owned(), None, Some("secret".to_owned())));
}

#[tokio::test]
async fn reads_aspects_of_the_resolved_version() {
    #[derive(Deserialize)]
    struct Folder {
        name: String,
    }

    let (url, seen) = spawn_content_api().await;
    let client = ContentApiClient::builder().api_url(format!("{url}/")).build().unwrap();
    let nobody = Subject::nobody();

    let version = client.resolve_version(&id("onecms:f1"), &nobody).await.unwrap();
    assert_eq!(version.as_str(), "onecms:f1:v7");

    let aspect = client.get_aspect(&version, "contentData", &nobody).await.unwrap();
    assert_eq!(aspect.decode::<Folder>().unwrap().name, "Politics");

    let err = client.get_aspect(&version, "atex.Metadata", &nobody).await.unwrap_err();
    assert!(matches!(err, ContentError::MissingField { .. }));

    let seen = seen.lock().unwrap();
    assert_eq!(seen[1].0, "content/onecms:f1:v7");
    assert_eq!(seen[1].1.as_deref(), Some(nobody.principal_id()));
    assert_eq!(seen[1].2, None);
}

#[tokio::test]
async fn statuses_map_to_errors() {
    let (url, _) = spawn_content_api().await;
    let client = ContentApiClient::builder().api_url(url).build().unwrap();

    let err = client.resolve_policy(&id("9.999")).await.unwrap_err();
    assert!(matches!(err, ContentError::NotFound { .. }));
    assert!(!err.is_unavailable());

    let err = client.resolve_policy(&id("2.500")).await.unwrap_err();
    assert!(matches!(err, ContentError::Status { .. }));
    assert!(err.is_unavailable());

    let err = client.resolve_version(&id("onecms:missing"), &Subject::nobody()).await.unwrap_err();
    assert!(matches!(err, ContentError::NotFound { .. }));
}
