//! Headless adaptation session.
//!
//! Drives one refresh against the configured backend and prints the
//! layout the dashboard would render. Useful for checking what a
//! specialty/plan combination resolves to without the UI.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use careboard::{builtin_catalog, AdaptationController, ApiClient, SettingsStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings_path = std::env::var("CAREBOARD_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("careboard-settings.json"));
    let store = SettingsStore::new(settings_path)?;
    let settings = store.adaptation();

    info!(
        "careboard headless session against {} (specialty: {})",
        settings.base_url,
        settings.specialty.as_deref().unwrap_or("none")
    );

    let api = ApiClient::new(&settings.base_url)?;
    let mut controller = AdaptationController::new(api, builtin_catalog(), settings.specialty)
        .with_refresh_interval(Duration::from_secs(settings.refresh_interval_secs));

    controller.start().await?;
    if let Err(err) = controller.refresh_now().await {
        warn!("plan fetch failed, rendering defaults: {err:#}");
    }

    let layout = controller.current_layout().await;
    let snapshot = controller.snapshot().await;

    println!(
        "session {} (plan held: {})",
        snapshot.session_id, snapshot.plan_held
    );
    if let Some(explanation) = &snapshot.explanation {
        println!("planner explanation: {explanation}");
    }
    println!("visible:");
    for (index, section) in layout.visible.iter().enumerate() {
        let size = layout
            .sizes
            .get(&section.id)
            .map(|size| format!("{size:?}"))
            .unwrap_or_else(|| "default".to_string());
        println!("  {:>2}. {} [{}] ({})", index + 1, section.label, section.id, size);
    }
    println!("hidden:");
    for section in &layout.hidden {
        println!("      {} [{}]", section.label, section.id);
    }

    controller.stop().await?;
    Ok(())
}
