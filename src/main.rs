//! PasteFile daemon: wires the OS adapters to the smart-paste use case
//! and blocks on the global hotkey listener.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pf_app::SmartPaste;
use pf_infra::{AtomicFileSink, FilePreferencesRepository, SystemClock};
use pf_platform::{
    hotkey, DialogAlerts, FinderFolderResolver, StandardUserDirs, SystemPasteboard,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let prefs_path = FilePreferencesRepository::default_path()
        .context("could not determine a config directory")?;
    info!(path = %prefs_path.display(), "using preferences file");

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;

    let pasteboard = SystemPasteboard::new().context("failed to open the system pasteboard")?;

    let usecase = Arc::new(SmartPaste::new(
        Arc::new(pasteboard),
        Arc::new(FinderFolderResolver),
        Arc::new(StandardUserDirs),
        Arc::new(FilePreferencesRepository::new(prefs_path)),
        Arc::new(AtomicFileSink),
        Arc::new(DialogAlerts),
        Arc::new(SystemClock),
    ));

    let handle = runtime.handle().clone();

    // Blocks for the lifetime of the process; each trigger already runs
    // on its own thread courtesy of the listener.
    hotkey::listen(move || {
        let usecase = usecase.clone();
        let outcome = handle.block_on(async move { usecase.execute().await });
        info!(?outcome, "smart paste finished");
    });

    Ok(())
}
