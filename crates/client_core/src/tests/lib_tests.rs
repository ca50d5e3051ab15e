use super::*;
use axum::{http::StatusCode as HttpStatus, routing::get, Router};
use shared::domain::MemberId;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::net::TcpListener;

const MEMBERS_BODY: &str = r#"[
  {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
  {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"admin"}
]"#;

async fn spawn_member_server() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/members.json", get(|| async { MEMBERS_BODY }))
        .route("/broken.json", get(|| async { "{\"not\": \"a list\"}" }))
        .route(
            "/down.json",
            get(|| async { (HttpStatus::SERVICE_UNAVAILABLE, "maintenance") }),
        );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

fn temp_path(name: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    std::env::temp_dir().join(format!("member_admin_{name}_{suffix}.json"))
}

#[tokio::test]
async fn http_source_decodes_string_ids() {
    let base = spawn_member_server().await.expect("spawn server");
    let source = HttpMemberSource::new(&format!("{base}/members.json")).expect("source");

    let members = source.fetch_members().await.expect("fetch");

    assert_eq!(members.len(), 2);
    assert_eq!(members[1].id, MemberId(2));
    assert_eq!(members[1].role, "admin");
}

#[tokio::test]
async fn http_source_reports_error_status() {
    let base = spawn_member_server().await.expect("spawn server");
    let source = HttpMemberSource::new(&format!("{base}/down.json")).expect("source");

    let err = source.fetch_members().await.expect_err("must fail");
    assert!(
        matches!(err, FetchError::Status { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn http_source_reports_malformed_body() {
    let base = spawn_member_server().await.expect("spawn server");
    let source = HttpMemberSource::new(&format!("{base}/broken.json")).expect("source");

    let err = source.fetch_members().await.expect_err("must fail");
    assert!(matches!(err, FetchError::Decode { .. }), "unexpected error: {err}");
}

#[test]
fn rejects_non_http_urls() {
    assert!(matches!(
        HttpMemberSource::new("not a url"),
        Err(FetchError::InvalidUrl { .. })
    ));
    assert!(matches!(
        HttpMemberSource::new("ftp://example.com/members.json"),
        Err(FetchError::UnsupportedScheme(scheme)) if scheme == "ftp"
    ));
}

#[tokio::test]
async fn http_source_reports_unreachable_host() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let source = HttpMemberSource::new(&format!("http://{addr}/members.json")).expect("source");

    let err = source.fetch_members().await.expect_err("must fail");
    assert!(matches!(err, FetchError::Request { .. }), "unexpected error: {err}");
    assert_eq!(source.origin(), format!("http://{addr}/members.json"));
}

#[tokio::test]
async fn file_source_reads_exported_members() {
    let path = temp_path("file_source");
    tokio::fs::write(&path, MEMBERS_BODY).await.expect("write");

    let source = FileMemberSource::new(&path);
    let members = source.fetch_members().await.expect("fetch");
    assert_eq!(members.len(), 2);

    tokio::fs::remove_file(&path).await.expect("cleanup");
}

#[tokio::test]
async fn file_source_reports_missing_file() {
    let source = FileMemberSource::new(temp_path("missing"));
    let err = source.fetch_members().await.expect_err("must fail");
    assert!(matches!(err, FetchError::Io { .. }), "unexpected error: {err}");
}
