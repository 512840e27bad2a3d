/// Base URL of the Docker Hub web API
pub const DEFAULT_API_BASE_URL: &str = "https://hub.docker.com";
/// Versioned path prefix prepended to every relative request path
pub const DEFAULT_API_BASE_ENDPOINT: &str = "/v2";
/// User agent string used in HTTP requests to identify this client to Docker Hub
pub const USER_AGENT: &str = "dockerhub-client/0.1.0";
/// Default timeout in seconds for a single REST exchange
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Default page size for list requests
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Scheme used in the `Authorization` header value
pub const AUTH_SCHEME: &str = "JWT";
/// Registry value sent when creating a repository
pub const DEFAULT_REPOSITORY_REGISTRY: &str = "docker";
/// Registry host every webhook pipeline is bound to
pub const DEFAULT_WEBHOOK_REGISTRY: &str = "registry-1.docker.io";
