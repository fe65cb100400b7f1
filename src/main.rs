use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::AppConfig;
use activity_signup::database::ActivityCatalog;
use activity_signup::web::app::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("activity_signup=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env();
    info!(build_id = env!("SIGNUP_BUILD_ID"), "starting activity-signup");

    let catalog = ActivityCatalog::seeded();
    info!(activities = catalog.len(), "activity catalog seeded");

    let app = build_router(catalog, &config.static_dir);

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_bind_addr()
                .with_context(|| format!("cannot bind {addr}: {e}"))?;
            warn!(addr = %addr, fallback = %fallback, error = %e, "bind failed, trying fallback");
            TcpListener::bind(&fallback)
                .await
                .with_context(|| format!("cannot bind fallback {fallback}"))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(addr = %bound_addr, "listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
