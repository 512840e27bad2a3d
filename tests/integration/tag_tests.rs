use crate::common::{create_logged_in_client, test_ctx};
use dockerhub_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_get_tags_sends_page_size_and_ordering() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/library/ubuntu/tags/")
        .match_header("authorization", "JWT bogus")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page_size".into(), "25".into()),
            Matcher::UrlEncoded("ordering".into(), "last_updated".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "count": 120,
                "next": "https://hub.docker.com/v2/repositories/library/ubuntu/tags/?page=2",
                "previous": null,
                "results": [
                    {
                        "creator": 7,
                        "id": 1001,
                        "images": [
                            {"architecture": "amd64", "os": "linux", "size": 29000000,
                             "digest": "sha256:abc", "status": "active"},
                            {"architecture": "arm64", "variant": "v8", "os": "linux",
                             "size": 27000000, "status": "active"}
                        ],
                        "last_updated": "2024-04-01T00:00:00Z",
                        "last_updater_username": "doijanky",
                        "name": "latest",
                        "repository": 130,
                        "full_size": 29000000,
                        "v2": true,
                        "tag_status": "active"
                    },
                    {"id": 1002, "name": "22.04"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let tags = client
        .tags()
        .get_tags(&test_ctx(), "library", "ubuntu", 25)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(tags.count, 120);
    assert!(tags.has_next());
    assert_eq!(tags.len(), 2);

    let latest = &tags.results[0];
    assert_eq!(latest.name, "latest");
    assert!(latest.v2);
    assert_eq!(latest.images.len(), 2);
    assert_eq!(latest.images[0].digest.as_deref(), Some("sha256:abc"));
    assert_eq!(latest.images[1].variant.as_deref(), Some("v8"));
    assert_eq!(tags.results[1].name, "22.04");
}

#[tokio::test]
async fn test_get_tags_malformed_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/library/ubuntu/tags/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"count": "many", "results": ["#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server.url(), "bogus");
    let err = client
        .tags()
        .get_tags(&test_ctx(), "library", "ubuntu", 10)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Deserialization(_)));
}
