use clap::Parser;
use tracing_subscriber::EnvFilter;

use fractal_generator::{CliArgs, RenderController, presenter_for_path};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = CliArgs::parse();
    let request = args.to_request();

    let mut controller = RenderController::new(presenter_for_path(&args.output));
    controller.generate(&request)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    controller.write(&args.output)?;

    Ok(())
}
