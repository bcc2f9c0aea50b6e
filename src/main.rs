//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use blink::adapters::analysis::{HttpAnalysisGateway, MockAnalysisGateway};
use blink::adapters::media::FsMediaPicker;
use blink::adapters::ui::Tui;
use blink::domain::AppStore;
use blink::ports::{AnalysisPort, InputPort, MediaPickerPort};
use blink::shared::catalog;
use blink::shared::config::AppConfig;
use blink::usecases::UploadService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv::dotenv();
    // Default to warn so log lines do not interleave with the prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_default();

    blink::adapters::ui::init_ui();

    let domains = catalog::load_catalog(cfg.catalog_path.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    info!(count = domains.len(), "domain catalog ready");

    let store = Arc::new(AppStore::new(domains, cfg.credits_or_default()));

    let gateway: Arc<dyn AnalysisPort> = if cfg.is_offline() {
        warn!("BLINK_OFFLINE set, using mock analysis gateway");
        Arc::new(MockAnalysisGateway::new())
    } else {
        let timeout = cfg.upload_timeout_secs.map(Duration::from_secs);
        Arc::new(HttpAnalysisGateway::new(timeout).map_err(|e| anyhow::anyhow!("{}", e))?)
    };
    let picker: Arc<dyn MediaPickerPort> = Arc::new(FsMediaPicker::new());

    let service = Arc::new(UploadService::new(gateway, picker, Arc::clone(&store)));

    let input_port: Arc<dyn InputPort> = Arc::new(Tui::new(store, service));
    input_port.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
