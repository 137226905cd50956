//! `SolrIndex` against a throwaway HTTP server that answers like a Solr core.

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use mdc_search::{
    SearchClient, SearchError, SearchIndex, SearchQuery, SolrIndex, SortOrder, WithSecurityParent,
};
use mdc_domain::content::ContentId;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Requests = Arc<Mutex<Vec<String>>>;

const DOCS: [&str; 5] = ["2.201", "2.202", "2.203", "2.204", "2.205"];

async fn select(State(requests): State<Requests>, RawQuery(raw): RawQuery) -> Json<Value> {
    let raw = raw.unwrap_or_default();
    requests.lock().unwrap().push(raw.clone());

    let param = |key: &str| -> usize {
        raw.split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{key}=")))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };
    let (start, rows) = (param("start"), param("rows"));
    let docs: Vec<Value> =
        DOCS.iter().skip(start).take(rows).map(|id| json!({ "id": id })).collect();

    Json(json!({
        "responseHeader": { "status": 0 },
        "response": { "numFound": DOCS.len(), "start": start, "docs": docs }
    }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "core is loading")
}

async fn spawn_solr() -> (String, Requests) {
    let requests = Requests::default();
    let app = Router::new()
        .route("/solr/public/select", get(select))
        .route("/solr/broken/select", get(broken))
        .with_state(Arc::clone(&requests));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    (format!("http://{addr}/solr"), requests)
}

#[tokio::test]
async fn sends_every_query_clause() {
    let (url, requests) = spawn_solr().await;
    let index = SolrIndex::new(&url, "public", Duration::from_secs(5)).unwrap();

    let query = SearchQuery::new("*:*")
        .decorate(&WithSecurityParent::new(ContentId::parse("2.184").unwrap()))
        .field("id")
        .sort("name_atex_desk_ss", SortOrder::Asc)
        .param("variant", "list")
        .window(0, 2);
    let page = index.query(&query).await.unwrap();

    assert_eq!(page.num_found, 5);
    assert_eq!(page.hits().unwrap().len(), 2);

    let sent = requests.lock().unwrap()[0].clone();
    for expected in [
        "q=*%3A*",
        "fq=page%3A%222.184%22",
        "fl=id",
        "sort=name_atex_desk_ss+asc",
        "variant=list",
        "wt=json",
        "rows=2",
    ] {
        assert!(sent.contains(expected), "{expected} missing from {sent}");
    }
}

#[tokio::test]
async fn client_walks_every_page_in_order() {
    let (url, requests) = spawn_solr().await;
    let index = SolrIndex::new(&format!("{url}/"), "public", Duration::from_secs(5)).unwrap();
    let client = SearchClient::new(Arc::new(index));

    let hits = client.search(SearchQuery::new("*:*"), 2).collect_hits().await.unwrap();

    let ids: Vec<&str> = hits.iter().map(ContentId::as_str).collect();
    assert_eq!(ids, DOCS);
    // 2 + 2 + 1 documents; the last page reaches numFound.
    assert_eq!(requests.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn error_status_is_reported() {
    let (url, _) = spawn_solr().await;
    let index = SolrIndex::new(&url, "broken", Duration::from_secs(5)).unwrap();

    let err = index.query(&SearchQuery::new("*:*")).await.unwrap_err();
    assert!(matches!(err, SearchError::Status { .. }));
    assert!(err.is_unavailable());
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn unreachable_server_is_unavailable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let index = SolrIndex::new(&format!("http://{addr}/solr"), "public", Duration::from_secs(2)).unwrap();
    let err = index.query(&SearchQuery::new("*:*")).await.unwrap_err();
    assert!(matches!(err, SearchError::Http { .. }));
}
