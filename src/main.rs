mod colors;
mod fixture;
mod image;
mod png;

use anyhow::Context;
use fixture::{write_fixture, FixtureConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = FixtureConfig::default();
    write_fixture(&config)
        .with_context(|| format!("failed to create {}", config.output_path.display()))?;

    println!(
        "Created {}x{} PNG",
        config.resolution.width, config.resolution.height
    );

    Ok(())
}
