#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod player_clock;
mod theme;

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("🎬 ClipDeck")
            .with_inner_size([1380.0, 900.0])
            .with_min_inner_size([960.0, 620.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "ClipDeck",
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app::ClipDeckApp::new(cc)))
        }),
    )
}
