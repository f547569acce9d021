use std::time::Duration;

mod controller;
mod ui;

use anyhow::{ensure, Context};
use clap::{error::ErrorKind, CommandFactory, Parser};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use controller::notices::MAX_NOTICE_LIFETIME;
use ui::{theme::PersistedUiSettings, CourseManagerApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Maintain a list of courses through an add/edit form")]
struct Args {
    /// Start with an empty list instead of the sample courses.
    #[arg(long)]
    no_seed: bool,
    #[arg(long, default_value_t = 4.0)]
    notice_seconds: f32,
    #[arg(long, default_value = "info")]
    log_filter: String,
    #[arg(long, default_value = "Courses")]
    window_title: String,
}

impl Args {
    fn into_startup(self) -> anyhow::Result<StartupConfig> {
        ensure!(
            self.notice_seconds > 0.0,
            "--notice-seconds must be a positive number, got {}",
            self.notice_seconds
        );
        let notice_lifetime = Duration::try_from_secs_f32(self.notice_seconds)
            .with_context(|| format!("--notice-seconds {} is not a duration", self.notice_seconds))?;
        ensure!(
            notice_lifetime <= MAX_NOTICE_LIFETIME,
            "--notice-seconds must be at most {}, got {}",
            MAX_NOTICE_LIFETIME.as_secs(),
            self.notice_seconds
        );
        Ok(StartupConfig {
            seed_on_start: !self.no_seed,
            notice_lifetime,
            window_title: self.window_title,
        })
    }
}

/// Rejected flags abort the launch rather than falling back to defaults.
fn resolve_startup(args: Args) -> Result<StartupConfig, clap::Error> {
    args.into_startup()
        .map_err(|err| Args::command().error(ErrorKind::ValueValidation, format!("{err:#}")))
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter '{default_filter}'"))?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    if let Err(err) = init_tracing(&args.log_filter) {
        eprintln!("{err:#}");
        tracing_subscriber::fmt().with_env_filter("info").init();
    }

    let startup = resolve_startup(args).unwrap_or_else(|err| {
        tracing::error!("{err}");
        err.exit()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(startup.window_title.clone())
            .with_inner_size([480.0, 760.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    let app_name = startup.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            let persisted = PersistedUiSettings::load(cc.storage);
            Ok(Box::new(CourseManagerApp::bootstrap(startup, persisted)))
        }),
    )
}
