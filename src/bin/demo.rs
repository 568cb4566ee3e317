// Entry point for the scripted Numeno API walkthrough

use artrec::core::config::AppConfig;
use artrec::demo;
use artrec::numeno::AdminClient;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    artrec::setup_cli_logging();

    let config = AppConfig::from_env();
    config.require_demo()?;

    let admin = AdminClient::new(&config.numeno_admin_url, &config.numeno_admin_key);
    let report = demo::run(&admin, &config.numeno_art_rec_url).await;

    info!(?report, "Walkthrough finished");
    Ok(())
}
