use playhouse::{config::Config, db, seed, store::Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = Config::from_env()?;
    let db = db::connect_and_migrate(config.database_url.as_str()).await?;
    seed::run(&Store::new(db)).await?;
    Ok(())
}
