//! Entry point for the Pemda dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use pemda_dash::config::{self, DashboardConfig};
use pemda_dash::dashboard::DashboardSession;
use pemda_dash::data::load_dataset;
use pemda_dash::egui_app::{DashboardApp, MIN_VIEWPORT_SIZE};
use pemda_dash::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_or_default();
    let level = config
        .as_ref()
        .ok()
        .and_then(|config| config.logging.level.clone());
    if let Err(err) = logging::init(level.as_deref()) {
        eprintln!("Logging disabled: {err}");
    }

    let startup = config
        .map_err(|err| format!("Failed to load config: {err}"))
        .and_then(|config| load_session(&config));
    if let Err(message) = &startup {
        tracing::error!("{message}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Dashboard Pemda")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1280.0, 820.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Dashboard Pemda",
        native_options,
        Box::new(move |_cc| match startup {
            Ok(session) => Ok(Box::new(DashboardApp::new(session))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

/// Open the configured source and load every table once.
fn load_session(config: &DashboardConfig) -> Result<DashboardSession, String> {
    let aliases = config
        .column_aliases()
        .map_err(|err| format!("Failed to load config: {err}"))?;
    let mut source = config::open_source(&config.source)
        .map_err(|err| format!("Failed to open data source: {err}"))?;
    let dataset = load_dataset(source.as_mut(), &aliases)
        .map_err(|err| format!("Failed to load data: {err}"))?;
    Ok(DashboardSession::new(dataset, config.chart.label_mode()))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Dashboard gagal dimuat");
                ui.label(&self.message);
            });
        });
    }
}
