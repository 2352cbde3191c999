use tinylink::{config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    server::init_tracing(&config);
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("Server failed to start: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
