use dockerhub_client::application::client::Client;
use dockerhub_client::application::config::Config;
use dockerhub_client::application::context::RequestContext;
use dockerhub_client::application::services::{AuthService, UserService};
use dockerhub_client::error::AppError;
use std::sync::Arc;
use tokio_test::block_on;

#[test]
fn client_starts_unauthenticated() {
    let client = Client::new(Config::default()).unwrap();
    assert!(!client.auth().is_logged_in());
    assert_eq!(client.http_client().auth_token(), None);
}

#[test]
fn services_share_one_session() {
    let client = Client::new(Config::default()).unwrap();
    client.set_auth_token("shared");

    assert!(client.auth().is_logged_in());
    assert!(Arc::ptr_eq(client.auth().client(), client.http_client()));
    assert_eq!(client.http_client().auth_token().as_deref(), Some("shared"));

    client.auth().logout();
    assert!(!client.auth().is_logged_in());
}

#[test]
fn client_with_injected_transport() {
    let transport = reqwest::Client::builder().build().unwrap();
    let config = Config::default().with_base_url("http://127.0.0.1:9");
    let client = Client::with_http_client(config, transport).unwrap();
    assert_eq!(client.http_client().base_url().as_str(), "http://127.0.0.1:9/");
}

#[test]
fn client_rejects_malformed_base_url() {
    let config = Config::default().with_base_url("::not-a-url::");
    assert!(matches!(Client::new(config), Err(AppError::MalformedUrl(_))));
}

#[tokio::test]
async fn login_with_config_without_credentials_fails() {
    let client = Client::new(Config::default()).unwrap();
    let err = client
        .login_with_config(&RequestContext::background())
        .await
        .unwrap_err();
    match err {
        AppError::InvalidInput(msg) => assert!(msg.contains("no credentials")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn cancelled_context_short_circuits_calls() {
    let client = Client::new(Config::default().with_base_url("http://127.0.0.1:9")).unwrap();
    client.set_auth_token("unused");
    let ctx = RequestContext::background();
    ctx.cancel();

    let err = block_on(client.users().get_logged_in_user(&ctx)).unwrap_err();
    assert!(matches!(err, AppError::Cancelled));
    assert!(err.is_cancellation());
}
