use anyhow::Result;
use meridian::config::WidgetConfig;
use meridian::logging::init_tracing;

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // Desktop dev reads .env; anything unset falls back to assets/config.env
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(error = %err, "no .env file loaded");
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

fn main() -> Result<()> {
    init_tracing(tracing::Level::INFO)?;
    load_dotenv();

    let config = WidgetConfig::load()?;
    tracing::info!(endpoint = %config.endpoint, "starting Meridian landing page");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(meridian::ui::App);
    Ok(())
}
