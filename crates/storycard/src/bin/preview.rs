//! Pipes a JSON sizing request through the engine:
//! `cat request.json | preview`

use std::io::Read;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storycard::{compute_smart_sizing, default_metadata, SizingRequest};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut payload = String::new();
    std::io::stdin()
        .read_to_string(&mut payload)
        .context("failed to read request from stdin")?;

    let request = SizingRequest::from_json(&payload)?;
    let metadata = default_metadata();
    let result = compute_smart_sizing(
        &request.current_styles,
        &request.preferences,
        &request.visible_elements,
        &request.schedule,
        request.metrics.as_ref(),
        &metadata,
    );

    info!(
        items = request.schedule.len(),
        density = result.density,
        scale_factor = result.scale_factor,
        "sizing computed"
    );
    println!("{}", result.to_json()?);
    Ok(())
}
