use anyhow::Context;
use clap::Parser;
use eframe::egui;

mod app;
mod cli;
mod config;
mod error;
mod manifest;
mod ui;
mod utils;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let config = config::load_config();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .format_timestamp_millis()
    .init();

    let script_path = match cli::resolve_script_path(args.script_path.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };
    if let Some(dir) = script_path.parent() {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change directory to {}", dir.display()))?;
    }

    let outputs = manifest::load_manifest(&script_path, config.scene_mark_color)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;

    let title = match script_path.file_name() {
        Some(name) => format!("VSPreview - {}", name.to_string_lossy()),
        None => "VSPreview".to_string(),
    };
    eframe::run_native(
        "VSPreview",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title)
                .with_inner_size([1280.0, 720.0]),
            ..Default::default()
        },
        Box::new(move |cc| {
            let mut app = app::PreviewApp::new(cc, config, script_path, outputs);
            app.select_startup(args.output, args.frame);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the preview window: {}", e))
}
