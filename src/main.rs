use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glmirror::{cli, pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glmirror=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli::run()?;

    pipeline::call(config).await
}
