mod telemetry;

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; variables may come from the real environment.
    let dotenv = dotenvy::dotenv();

    telemetry::init().context("failed to install tracing subscriber")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => info!("no .env file found, using process environment"),
        Err(e) => return Err(e).context("failed to read .env file"),
    }

    api::start().await?;

    Ok(())
}
