use anyhow::Context;
use recipebox_server::config::Config;
use recipebox_server::{api, build_router, db, telemetry};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi()
            .to_pretty_json()
            .context("Failed to serialize OpenAPI document")?;
        println!("{}", spec);
        return Ok(());
    }

    telemetry::init_telemetry();

    let config = Config::from_env()?;

    let pool = db::create_pool(&config.database_url, config.pool_size)
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    if !config.media_dir.is_dir() {
        tracing::warn!(
            "Media directory {} does not exist; recipe images will 404",
            config.media_dir.display()
        );
    }

    let app = build_router(pool, &config.media_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);
    tracing::info!("OpenAPI spec available at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
