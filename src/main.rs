// SPDX-License-Identifier: GPL-3.0-only

use camera_tabs::app::AppModel;
use camera_tabs::i18n;
use clap::Parser;

#[derive(Parser)]
#[command(name = "camera-tabs")]
#[command(about = "Tabbed camera shell for the COSMIC desktop")]
#[command(version = camera_tabs::constants::app_info::version())]
struct Cli {
    /// Log filter directive (e.g. "debug" or "camera_tabs=info")
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    // Examples: --log debug, RUST_LOG=camera_tabs=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&cli.log)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    run_gui()
}

fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(480.0),
    );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
