use dockerhub_client::constants::DEFAULT_PAGE_SIZE;
use dockerhub_client::prelude::*;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = std::env::args().skip(1);
    let namespace = args.next().unwrap_or_else(|| "library".to_string());
    let repo = args.next().unwrap_or_else(|| "ubuntu".to_string());

    // Public repositories can be read without logging in
    let client = Client::new(Config::new())?;
    let ctx = RequestContext::with_timeout(Duration::from_secs(30));

    if client.config().credentials.is_some() {
        client.login_with_config(&ctx).await?;
    } else {
        warn!("No credentials configured, listing tags anonymously");
    }

    let tags = client.tags().get_tags(&ctx, &namespace, &repo, DEFAULT_PAGE_SIZE).await?;
    info!("{}/{} has {} tags", namespace, repo, tags.count);
    for tag in tags.iter() {
        let platforms: Vec<String> = tag
            .images
            .iter()
            .map(|image| format!("{}/{}", image.os, image.architecture))
            .collect();
        info!("{} [{}]", tag.name, platforms.join(", "));
    }
    if tags.has_next() {
        info!("More tags available");
    }

    Ok(())
}
