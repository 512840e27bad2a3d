use dockerhub_client::application::config::{Config, Credentials, RestApiConfig};
use dockerhub_client::constants::{
    DEFAULT_API_BASE_ENDPOINT, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS, USER_AGENT,
};
use std::env;
use std::sync::Mutex;

// Config::new reads process wide variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

const DOCKERHUB_VARS: [&str; 6] = [
    "DOCKERHUB_BASE_URL",
    "DOCKERHUB_API_PREFIX",
    "DOCKERHUB_TIMEOUT",
    "DOCKERHUB_USER_AGENT",
    "DOCKERHUB_USERNAME",
    "DOCKERHUB_PASSWORD",
];

fn clear_dockerhub_vars() {
    unsafe {
        for var in DOCKERHUB_VARS {
            env::remove_var(var);
        }
    }
}

#[test]
fn test_default_config_uses_constants() {
    let config = Config::default();
    assert_eq!(config.rest_api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.rest_api.api_prefix, DEFAULT_API_BASE_ENDPOINT);
    assert_eq!(config.rest_api.timeout, 30);
    assert_eq!(config.user_agent, USER_AGENT);
    assert!(config.credentials.is_none());
}

#[test]
fn test_config_builders() {
    let config = Config::default()
        .with_base_url("http://localhost:1234")
        .with_credentials("user", "pass");

    assert_eq!(config.rest_api.base_url, "http://localhost:1234");
    assert_eq!(
        config.credentials,
        Some(Credentials {
            username: "user".to_string(),
            password: "pass".to_string(),
        })
    );
}

#[test]
fn test_rest_api_config_clone() {
    let config = RestApiConfig {
        base_url: "https://api.example.com".to_string(),
        api_prefix: "/v2".to_string(),
        timeout: 10,
    };

    let cloned = config.clone();
    assert_eq!(config, cloned);
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config::default().with_credentials("user", "pass");
    let json = serde_json::to_string(&config).unwrap();
    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(config, deserialized);
}

#[test]
fn test_config_new_without_env_matches_default() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_dockerhub_vars();

    assert_eq!(Config::new(), Config::default());
}

#[test]
fn test_config_new_reads_every_override() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_dockerhub_vars();
    unsafe {
        env::set_var("DOCKERHUB_BASE_URL", "http://localhost:8080");
        env::set_var("DOCKERHUB_API_PREFIX", "/v3");
        env::set_var("DOCKERHUB_TIMEOUT", "5");
        env::set_var("DOCKERHUB_USER_AGENT", "custom-agent/1.0");
        env::set_var("DOCKERHUB_USERNAME", "someone");
        env::set_var("DOCKERHUB_PASSWORD", "secret");
    }

    let config = Config::new();
    clear_dockerhub_vars();

    assert_eq!(config.rest_api.base_url, "http://localhost:8080");
    assert_eq!(config.rest_api.api_prefix, "/v3");
    assert_eq!(config.rest_api.timeout, 5);
    assert_eq!(config.user_agent, "custom-agent/1.0");
    assert_eq!(
        config.credentials,
        Some(Credentials {
            username: "someone".to_string(),
            password: "secret".to_string(),
        })
    );
}

#[test]
fn test_config_new_username_without_password_has_no_credentials() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_dockerhub_vars();
    unsafe {
        env::set_var("DOCKERHUB_USERNAME", "someone");
    }

    let config = Config::new();
    clear_dockerhub_vars();

    assert!(config.credentials.is_none());
}

#[test]
fn test_config_new_password_without_username_has_no_credentials() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_dockerhub_vars();
    unsafe {
        env::set_var("DOCKERHUB_PASSWORD", "secret");
    }

    let config = Config::new();
    clear_dockerhub_vars();

    assert!(config.credentials.is_none());
}

#[test]
fn test_config_new_unparsable_timeout_falls_back() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_dockerhub_vars();
    unsafe {
        env::set_var("DOCKERHUB_TIMEOUT", "soon");
    }

    let config = Config::new();
    clear_dockerhub_vars();

    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECONDS);
    assert_eq!(config.rest_api.timeout, 30);
}
