use std::{fs, path::Path};

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use axum_test::TestServer;
use picks_config::{
    AssetsConfig, Config, ConfigMetadata, ServerConfig,
};
use picks_server::{AppState, create_app};
use tempfile::TempDir;
use tower::ServiceExt;

const PREVIEW: &str = "<!doctype html><title>Your Personalized Picks</title>";

fn site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("preview.html"), PREVIEW).unwrap();
    fs::create_dir(dir.path().join("styles")).unwrap();
    fs::write(dir.path().join("styles/picks.css"), ".picks { gap: 1rem; }")
        .unwrap();
    fs::write(dir.path().join("products.json"), r#"[{"id":"1"}]"#).unwrap();
    dir
}

fn config(root: &Path, dev_mode: bool) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        assets: AssetsConfig {
            root: root.to_path_buf(),
            entry_document: "preview.html".into(),
        },
        dev_mode,
        metadata: ConfigMetadata::default(),
    }
}

fn server(root: &Path, dev_mode: bool) -> Result<TestServer> {
    let app = create_app(AppState::new(config(root, dev_mode)));
    Ok(TestServer::new(app)?)
}

#[tokio::test]
async fn root_serves_the_entry_document() -> Result<()> {
    let site = site();
    let server = server(site.path(), false)?;

    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_text(PREVIEW);
    assert!(
        response
            .header(header::CONTENT_TYPE)
            .to_str()?
            .starts_with("text/html")
    );
    Ok(())
}

#[tokio::test]
async fn existing_assets_are_served_verbatim() -> Result<()> {
    let site = site();
    let server = server(site.path(), false)?;

    let css = server.get("/styles/picks.css").await;
    css.assert_status_ok();
    css.assert_text(".picks { gap: 1rem; }");
    assert!(css.header(header::CONTENT_TYPE).to_str()?.starts_with("text/css"));

    let json = server.get("/products.json").await;
    json.assert_status_ok();
    json.assert_text(r#"[{"id":"1"}]"#);
    Ok(())
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_entry_document() -> Result<()> {
    let site = site();
    let server = server(site.path(), false)?;

    for path in ["/picks/coffee-makers", "/missing.js", "/styles/missing.css"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        response.assert_text(PREVIEW);
    }
    Ok(())
}

#[tokio::test]
async fn missing_entry_document_is_not_found() -> Result<()> {
    let empty = tempfile::tempdir()?;
    let server = server(empty.path(), false)?;

    server.get("/").await.assert_status(StatusCode::NOT_FOUND);
    server
        .get("/anything")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn dev_mode_allows_any_origin() -> Result<()> {
    let site = site();
    let app = create_app(AppState::new(config(site.path(), true)));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    Ok(())
}

#[tokio::test]
async fn cors_headers_are_absent_outside_dev_mode() -> Result<()> {
    let site = site();
    let server = server(site.path(), false)?;

    let response = server
        .get("/")
        .add_header("Origin", "http://localhost:5173")
        .await;

    response.assert_status_ok();
    assert!(
        !response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
    Ok(())
}
