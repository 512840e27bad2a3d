use crate::common::{create_logged_in_client, test_ctx};
use dockerhub_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

const REPOSITORY_BODY: &str = r#"{
    "user": "ns",
    "name": "app",
    "namespace": "ns",
    "repository_type": "image",
    "status": 1,
    "description": "short",
    "is_private": true,
    "is_automated": false,
    "can_edit": true,
    "star_count": 2,
    "pull_count": 1500,
    "last_updated": "2024-05-06T07:08:09.123456Z",
    "is_migrated": false,
    "has_starred": false,
    "full_description": null,
    "affiliation": "owner",
    "permissions": {"read": true, "write": true, "admin": true}
}"#;

#[tokio::test]
async fn test_create_repository() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/repositories/")
        .match_header("authorization", "JWT bogus")
        .match_body(Matcher::Json(json!({
            "namespace": "ns",
            "registry": "docker",
            "image": "ns/app",
            "name": "app",
            "description": "short",
            "privacy": "private",
            "build_settings": [],
            "is_private": true
        })))
        .with_status(201)
        .with_body(REPOSITORY_BODY)
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let repo = client
        .repositories()
        .create_repository(&test_ctx(), "ns", "app", "short", true)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(repo.full_name(), "ns/app");
    assert!(repo.is_private);
    assert_eq!(repo.pull_count, 1500);
    assert_eq!(repo.affiliation.as_deref(), Some("owner"));
    assert!(repo.full_description.is_none());
    assert!(repo.permissions.admin);
}

#[tokio::test]
async fn test_create_public_repository_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/repositories/")
        .match_body(Matcher::PartialJson(json!({
            "privacy": "public",
            "is_private": false
        })))
        .with_status(201)
        .with_body(r#"{"namespace":"ns","name":"open"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let repo = client
        .repositories()
        .create_repository(&test_ctx(), "ns", "open", "", false)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!repo.is_private);
}

#[tokio::test]
async fn test_get_repository() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/ns/app/")
        .with_status(200)
        .with_body(REPOSITORY_BODY)
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let repo = client
        .repositories()
        .get_repository(&test_ctx(), "ns", "app")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(repo.namespace, "ns");
    assert_eq!(repo.repository_type.as_deref(), Some("image"));
    assert!(repo.last_updated.is_some());
}

#[tokio::test]
async fn test_get_repository_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/ns/missing/")
        .with_status(404)
        .with_body(r#"{"message":"object not found"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let err = client
        .repositories()
        .get_repository(&test_ctx(), "ns", "missing")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RequestFailed(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn test_edit_repository_omits_empty_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/v2/repositories/ns/app/")
        .match_body(Matcher::Exact(r#"{"description":"updated"}"#.to_string()))
        .with_status(200)
        .with_body(r#"{"namespace":"ns","name":"app","description":"updated"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let patch = RepositoryPatch::new().with_description("updated");
    let repo = client
        .repositories()
        .edit_repository(&test_ctx(), "ns", "app", &patch)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(repo.description, "updated");
}

#[tokio::test]
async fn test_edit_repository_both_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/v2/repositories/ns/app/")
        .match_body(Matcher::Json(json!({
            "full_description": "long text",
            "description": "short"
        })))
        .with_status(200)
        .with_body(r#"{"full_description":"long text","description":"short"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let patch = RepositoryPatch::new()
        .with_full_description("long text")
        .with_description("short");
    let repo = client
        .repositories()
        .edit_repository(&test_ctx(), "ns", "app", &patch)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(repo.full_description.as_deref(), Some("long text"));
}

#[tokio::test]
async fn test_set_repository_privacy() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/repositories/ns/app/privacy/")
        .match_body(Matcher::Exact(r#"{"is_private":true}"#.to_string()))
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    client
        .repositories()
        .set_repository_privacy(&test_ctx(), "ns", "app", true)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_repository_privacy_ignores_response_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/repositories/ns/app/privacy/")
        .match_body(Matcher::Exact(r#"{"is_private":false}"#.to_string()))
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    client
        .repositories()
        .set_repository_privacy(&test_ctx(), "ns", "app", false)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_repository_privacy_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v2/repositories/ns/app/privacy/")
        .with_status(400)
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let err = client
        .repositories()
        .set_repository_privacy(&test_ctx(), "ns", "app", true)
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
}

#[tokio::test]
async fn test_get_repositories() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/ns/")
        .with_status(200)
        .with_body(
            r#"{"count":2,"next":null,"previous":null,
                "results":[{"namespace":"ns","name":"b"},{"namespace":"ns","name":"a"}]}"#,
        )
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let repos = client
        .repositories()
        .get_repositories(&test_ctx(), "ns")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(repos.count, 2);
    assert!(!repos.has_next());
    let names: Vec<String> = repos.into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[tokio::test]
async fn test_get_repositories_escapes_namespace() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/odd%20ns/")
        .with_status(200)
        .with_body(r#"{"count":0,"results":[]}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let repos = client
        .repositories()
        .get_repositories(&test_ctx(), "odd ns")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(repos.is_empty());
}
