//! Tracing subscriber set-up for the app binary.

use anyhow::Result;
use tracing::Level;

/// Install the global subscriber. Native builds log to stderr through
/// `tracing-subscriber`; web builds forward events to the browser console
/// through the Dioxus logger.
///
/// Fails if a global subscriber is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

#[cfg(all(target_arch = "wasm32", feature = "dioxus"))]
pub fn init_tracing(level: Level) -> Result<()> {
    dioxus::logger::init(level)?;
    Ok(())
}
