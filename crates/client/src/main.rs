//! userdesk - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use userdesk_client::application::api::Api;
use userdesk_client::infrastructure::{ApiAdapter, ClientConfig};
use userdesk_client::ports::outbound::RawApiPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userdesk_client=debug,userdesk=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting userdesk");

    if let Err(e) = run() {
        tracing::error!(error = %e, "Startup failed");
        #[cfg(not(target_arch = "wasm32"))]
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, "Using user API");

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(config.api_url));
    let api = Api::new(raw_api);

    // Launch Dioxus
    dioxus::LaunchBuilder::new()
        .with_context(userdesk_client::presentation::Services::new(api))
        .launch(userdesk_client::app);

    Ok(())
}
