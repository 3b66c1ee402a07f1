use anyhow::Context;
use conformity_doc_server::{init_logging, run, AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    init_logging();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let state = AppState::new(config)
        .await
        .context("failed to load the declaration template")?;

    run(state).await.context("server stopped with an error")?;
    Ok(())
}
