use std::fs;

use anyhow::Result;
use test_utils::seed_fixture;

use super::Seeds;
use crate::domain::models::SeedRecord;

#[test]
fn it_detects_remote_locations() {
    assert!(Seeds::is_remote("http://localhost:8000/filtered_data.json"));
    assert!(Seeds::is_remote("https://example.com/seed.json"));
    assert!(!Seeds::is_remote("./filtered_data.json"));
    assert!(!Seeds::is_remote("/tmp/http.json"));
}

#[test]
fn it_parses_records() -> Result<()> {
    let records = Seeds::parse(seed_fixture())?;

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[1],
        SeedRecord {
            agent: "agent_2".to_string(),
            message: "Sorry about that! Could you share the order number?".to_string(),
        }
    );

    return Ok(());
}

#[test]
fn it_fails_to_parse_wrong_shape() {
    assert!(Seeds::parse(r#"{"agent": "agent_1"}"#).is_err());
    assert!(Seeds::parse(r#"[{"sender": "Agent 1", "text": "hi"}]"#).is_err());
}

#[tokio::test]
async fn it_loads_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("filtered_data.json");
    fs::write(&path, seed_fixture())?;

    let records = Seeds::load(path.to_str().unwrap()).await?;
    assert_eq!(records.len(), 3);

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_missing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing.json");

    assert!(Seeds::load(path.to_str().unwrap()).await.is_err());
    return Ok(());
}

#[tokio::test]
async fn it_fails_without_location() {
    assert!(Seeds::load("").await.is_err());
}

#[tokio::test]
async fn it_loads_from_url() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/filtered_data.json")
        .with_status(200)
        .with_body(seed_fixture())
        .create_async()
        .await;

    let records = Seeds::load(&format!("{}/filtered_data.json", server.url())).await?;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].agent, "agent_1");
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_url_error_status() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/filtered_data.json")
        .with_status(404)
        .create_async()
        .await;

    let res = Seeds::load(&format!("{}/filtered_data.json", server.url())).await;

    assert!(res.is_err());
    mock.assert_async().await;

    return Ok(());
}
