use dockerhub_client::application::client::Client;
use dockerhub_client::application::config::Config;
use dockerhub_client::application::context::RequestContext;
use dockerhub_client::application::interfaces::repository::RepositoryService;
use dockerhub_client::application::interfaces::user::UserService;
use dockerhub_client::utils::setup_logger;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    // DOCKERHUB_USERNAME and DOCKERHUB_PASSWORD come from the environment or .env
    let client = Client::new(Config::new())?;
    let ctx = RequestContext::with_timeout(Duration::from_secs(30));

    // Login gets a tighter budget within the overall deadline
    let login_ctx = ctx.child_with_timeout(Duration::from_secs(10));
    client.login_with_config(&login_ctx).await?;
    info!("✓ Logged in");

    let me = client.users().get_logged_in_user(&ctx).await?;
    info!("Logged in as {}", me.username);

    let repositories = client
        .repositories()
        .get_repositories(&ctx, &me.username)
        .await?;
    info!("{} repositories in {}", repositories.count, me.username);
    for repository in repositories.iter() {
        info!(
            "{} private={} pulls={} stars={}",
            repository.full_name(),
            repository.is_private,
            repository.pull_count,
            repository.star_count
        );
    }

    Ok(())
}
