//! HTTP-level tests of the Zephyr adapter against a mock server.

use mockito::Matcher;

use zephyr_insight::domain::errors::EngineError;
use zephyr_insight::{Config, EntityFetcher, ZephyrClient};

fn client_for(server: &mockito::ServerGuard) -> ZephyrClient {
    let config = Config {
        base_url: server.url(),
        username: "tester".to_string(),
        password: "secret".to_string(),
        ..Default::default()
    };
    ZephyrClient::new(&config)
}

#[tokio::test]
async fn test_list_projects_from_array_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/zapi/latest/util/project")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                { "id": 10200, "key": "WEB", "name": "Web App", "description": "storefront" },
                { "id": "10201", "key": "API", "name": "Public API" }
            ]"#,
        )
        .create_async()
        .await;

    let projects = client_for(&server).list_projects().await.unwrap();

    mock.assert_async().await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "10200");
    assert_eq!(projects[1].key, "API");
    assert!(projects[1].description.is_empty());
}

#[tokio::test]
async fn test_list_cycles_from_object_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/zapi/latest/cycle")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("projectId".into(), "10200".into()),
            Matcher::UrlEncoded("versionId".into(), "10301".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "101": { "name": "Regression Pass 1", "description": "full sweep" },
                "102": { "name": "Smoke" },
                "recordsCount": 2
            }"#,
        )
        .create_async()
        .await;

    let mut cycles = client_for(&server)
        .list_cycles("10200", "10301")
        .await
        .unwrap();

    mock.assert_async().await;
    cycles.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(cycles.len(), 2);
    assert_eq!(cycles[0].id, "101");
    assert_eq!(cycles[0].name, "Regression Pass 1");
    assert_eq!(cycles[1].id, "102");
}

#[tokio::test]
async fn test_list_versions_accepts_value_keyed_records() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/zapi/latest/util/versionBoard-versions/10200")
        .with_status(200)
        .with_body(
            r#"[
                { "id": "10301", "name": "2.4.0" },
                { "value": "10302", "label": "2.5.0-rc1" }
            ]"#,
        )
        .create_async()
        .await;

    let versions = client_for(&server).list_versions("10200").await.unwrap();

    mock.assert_async().await;
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].id, "10301");
    assert_eq!(versions[1].id, "10302");
    assert_eq!(versions[1].name, "2.5.0-rc1");
}

#[tokio::test]
async fn test_list_executions_unwraps_wrapper_and_passes_cycle_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/zapi/latest/execution")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("projectId".into(), "10200".into()),
            Matcher::UrlEncoded("versionId".into(), "10301".into()),
            Matcher::UrlEncoded("cycleId".into(), "101".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "executions": [
                    { "id": 1, "testCaseName": "Regression login", "executionStatus": "PASS" },
                    { "id": 2, "testCaseName": "Invalid token", "executionStatus": null }
                ],
                "totalCount": 2
            }"#,
        )
        .create_async()
        .await;

    let executions = client_for(&server)
        .list_executions("10200", "10301", Some("101"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(executions.len(), 2);
    assert_eq!(executions[0].status.as_deref(), Some("PASS"));
    assert!(executions[1].status.is_none());
}

#[tokio::test]
async fn test_defect_summary_passes_through_unchanged() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/zapi/latest/dashboard/gadget/defect-summary-gadget")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("projectId".into(), "10200".into()),
            Matcher::UrlEncoded("versionId".into(), "10301".into()),
        ]))
        .with_status(200)
        .with_body(r#"{ "open": 4, "inProgress": 2, "resolved": 9 }"#)
        .create_async()
        .await;

    let summary = client_for(&server)
        .defect_summary("10200", Some("10301"))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        serde_json::json!({ "open": 4, "inProgress": 2, "resolved": 9 })
    );
}

#[tokio::test]
async fn test_server_error_maps_to_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/zapi/latest/util/project")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let err = client_for(&server).list_projects().await.unwrap_err();
    match err {
        EngineError::Fetch(message) => {
            assert!(message.contains("502"));
            assert!(message.contains("bad gateway"));
        }
        other => panic!("Expected Fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_access_key_sends_bearer_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/zapi/latest/util/project")
        .match_header("authorization", "Bearer sekrit-token")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let config = Config {
        base_url: server.url(),
        access_key: "sekrit-token".to_string(),
        ..Default::default()
    };
    let projects = ZephyrClient::new(&config).list_projects().await.unwrap();

    mock.assert_async().await;
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_record_without_id_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/zapi/latest/util/project")
        .with_status(200)
        .with_body(r#"[ { "name": "orphan record" } ]"#)
        .create_async()
        .await;

    let err = client_for(&server).list_projects().await.unwrap_err();
    assert!(matches!(err, EngineError::MalformedEntity(_)));
}
