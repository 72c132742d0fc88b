//! igore-calc: a four-function desktop calculator
//!
//! Digits, + − × ÷ evaluated left to right, ± √ x² on the entry.

mod app;

use app::CalcApp;
use clap::Parser;
use eframe::NativeOptions;
use igore_calc::{CalcSettings, Locale};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "igore-calc", version, about = "A four-function desktop calculator")]
struct Args {
    /// Language for the error word and status line
    #[arg(long, value_enum)]
    locale: Option<Locale>,

    /// Settings file to use instead of the per-user default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Hide the status line
    #[arg(long)]
    no_status: bool,
}

fn main() -> eframe::Result<()> {
    igore_core::logging::init("warn");
    let args = Args::parse();

    let settings_path = args.config.unwrap_or_else(CalcSettings::default_path);
    let mut settings = CalcSettings::load(&settings_path);
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }
    if args.no_status {
        settings.show_status = false;
    }
    tracing::debug!(path = %settings_path.display(), ?settings, "starting calculator");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app::WINDOW_WIDTH, app::window_height(settings.show_status)])
            .with_resizable(false)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "igore-calc",
        options,
        Box::new(move |cc| {
            igore_core::IgoreTheme::default().apply(&cc.egui_ctx);
            Box::new(CalcApp::new(cc, settings, settings_path))
        }),
    )
}
