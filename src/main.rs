#[macro_use]
extern crate log;

mod config;

use anyhow::Context;
use config::Config;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};
use std::process::ExitCode;

fn setup_logger(verbosity: LevelFilter) -> Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let (color, label) = if record.target() == branding::HEADER {
                (Color::Blue, "HEADER")
            } else {
                let label = match record.level() {
                    Level::Warn => "WARNING",
                    level => level.as_str(),
                };
                (colors.get_color(&record.level()), label)
            };
            out.finish(format_args!(
                "\x1B[{}m[{label}]\x1B[0m {message}",
                color.to_fg_str()
            ));
        })
        .level(LevelFilter::Warn)
        .level_for("branding", verbosity)
        .level_for("customize", verbosity)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}

async fn run(config: &Config) -> anyhow::Result<()> {
    if let Some(path) = config.load_env_file()? {
        debug!("Loaded environment from {}", path.display());
    }
    let options = branding::config::Config::from_env(
        config.output_dir.clone(),
        config.download_timeout,
    );

    let summary = branding::customize(&options, config.plan).await?;

    info!(target: branding::HEADER, "Customization Summary");
    print!("{summary}");
    println!();
    info!("Customization completed successfully!");
    info!("You can now build the Docker image with these customizations.");

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::from_cli() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = setup_logger(config.verbosity).context("Cannot set up logging") {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
