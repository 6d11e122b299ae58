// crates/clipdeck-ui/src/modules/export_module.rs
//
// Inspector tab: export launcher and job progress.
//
// State machine (driven by EditorState export fields, set by AppContext):
//
//   Idle       → user clicks "Export"
//                → app.rs resolves the effective style and queues the
//                  render request → ExportStarted sets state.export_job
//
//   Running    → the job poller PATCHes progress into export_progress
//                every 750 ms → UI shows the bar
//
//   Complete   → export_job moves to last_export_job, notice banner fires
//
//   Failed     → export_job cleared, error notice fires

use super::EditorModule;
use clipdeck_core::commands::EditorCommand;
use clipdeck_core::state::EditorState;
use clipdeck_core::style::{preset_by_id, Aspect};
use crate::context::AppContext;
use crate::theme::{ACCENT, DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM};
use egui::{Color32, RichText, Stroke, Ui};

/// Background fill for the progress bar track.
const TRACK_BG: Color32 = Color32::from_rgb(35, 35, 40);
/// Filled portion of the progress bar.
const TRACK_FG: Color32 = Color32::from_rgb(90, 160, 255);

/// Output height for the short side, by aspect. Cosmetic — the render
/// backend owns the real encode profile.
fn output_label(aspect: Aspect) -> &'static str {
    match aspect {
        Aspect::Vertical => "1080 × 1920",
        Aspect::Wide     => "1920 × 1080",
        Aspect::Square   => "1080 × 1080",
    }
}

pub struct ExportModule;

impl EditorModule for ExportModule {
    fn name(&self) -> &str { "Export" }

    fn ui(&mut self, ui: &mut Ui, state: &EditorState, _ctx: &AppContext, cmd: &mut Vec<EditorCommand>) {
        ui.vertical(|ui| {
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
                .show(ui, |ui| {
                    ui.label(RichText::new("🚀 Export").size(12.0).strong());
                });

            ui.separator();

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.add_space(4.0);

                // ── Aspect ───────────────────────────────────────────────────
                ui.label(RichText::new("Aspect").size(11.0).color(DARK_TEXT_DIM));
                ui.horizontal(|ui| {
                    for a in [Aspect::Vertical, Aspect::Wide, Aspect::Square] {
                        let selected = state.aspect == a;
                        let btn = egui::Button::new(
                            RichText::new(a.label())
                                .size(11.0)
                                .color(if selected { ACCENT } else { DARK_TEXT_DIM }),
                        )
                        .stroke(Stroke::new(1.0, if selected { ACCENT } else { DARK_BORDER }))
                        .fill(if selected { DARK_BG_3 } else { DARK_BG_2 });
                        if ui.add(btn).clicked() {
                            cmd.push(EditorCommand::SetAspect(a));
                        }
                    }
                });

                ui.add_space(10.0);

                // ── Summary ──────────────────────────────────────────────────
                egui::Frame::new()
                    .fill(DARK_BG_3)
                    .stroke(Stroke::new(1.0, DARK_BORDER))
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        let clip = if state.has_clip() {
                            state.active_clip_title.as_str()
                        } else {
                            "— open a clip —"
                        };
                        let trim = state
                            .trim
                            .map(|t| format!("{:.2}s – {:.2}s", t.in_s, t.out_s))
                            .unwrap_or_else(|| "—".into());
                        ui.label(RichText::new(format!("Clip:    {clip}")).size(10.0).monospace());
                        ui.label(RichText::new(format!("Trim:    {trim}")).size(10.0).monospace());
                        ui.label(
                            RichText::new(format!("Style:   {}", preset_by_id(state.preset_id).label))
                                .size(10.0)
                                .monospace(),
                        );
                        ui.label(
                            RichText::new(format!(
                                "Brand:   {}",
                                if state.brand.is_some() { "applied" } else { "none" }
                            ))
                            .size(10.0)
                            .monospace(),
                        );
                        ui.label(
                            RichText::new(format!("Output:  {}", output_label(state.aspect)))
                                .size(10.0)
                                .monospace(),
                        );
                    });

                ui.add_space(12.0);

                // ── Launch / progress ────────────────────────────────────────
                if let Some(fraction) = state.export_progress.filter(|_| state.export_job.is_some()) {
                    let pct = (fraction * 100.0) as u32;
                    ui.label(RichText::new(format!("Rendering… {pct}%")).size(11.0).color(TRACK_FG));
                    ui.add_space(4.0);

                    let (bar_rect, _) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width() - 8.0, 8.0),
                        egui::Sense::hover(),
                    );
                    let p = ui.painter();
                    p.rect_filled(bar_rect, 4.0, TRACK_BG);
                    if fraction > 0.0 {
                        let mut fill = bar_rect;
                        fill.max.x = bar_rect.min.x + bar_rect.width() * fraction.clamp(0.0, 1.0);
                        p.rect_filled(fill, 4.0, TRACK_FG);
                    }
                    ui.add_space(4.0);
                    if let Some(job) = &state.export_job {
                        ui.label(RichText::new(format!("job {job}")).size(9.0).color(DARK_TEXT_DIM).monospace());
                    }
                } else {
                    let ready = state.has_clip() && state.trim.is_some();
                    let export_btn = egui::Button::new(
                        RichText::new("⚡ Export clip")
                            .size(13.0)
                            .strong()
                            .color(if ready { Color32::BLACK } else { Color32::DARK_GRAY }),
                    )
                    .fill(if ready { ACCENT } else { DARK_BG_3 })
                    .stroke(Stroke::NONE)
                    .min_size(egui::vec2(ui.available_width() - 8.0, 34.0));

                    let resp = ui.add_enabled(ready, export_btn);
                    if resp.clicked() {
                        cmd.push(EditorCommand::StartExport);
                    }
                    if !ready {
                        resp.on_hover_text("Open a clip first");
                    }

                    if let Some(job) = &state.last_export_job {
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new(format!("Last export: job {job}"))
                                .size(9.0)
                                .color(DARK_TEXT_DIM)
                                .monospace(),
                        );
                    }
                }
                ui.add_space(8.0);
            });
        });
    }
}
