use clap::Parser;
use tracing_subscriber::EnvFilter;
use types::IconSet;

/// Writes the placeholder app icons into src-tauri/icons
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    // RUST_LOG only tunes diagnostics on stderr; stdout carries the progress lines.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    icon_gen::run(&IconSet::default())?;
    Ok(())
}
