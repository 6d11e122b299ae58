// crates/clipdeck-ui/src/modules/subtitle_module.rs
//
// Inspector tab: subtitle preset picker. Selection is a single enum in
// state — the heavy lifting (preset catalog, brand merge) lives in
// clipdeck_core::style and is only *displayed* here.

use super::EditorModule;
use clipdeck_core::commands::EditorCommand;
use clipdeck_core::state::EditorState;
use clipdeck_core::style::{effective_style, preset_by_id, preset_catalog};
use crate::context::AppContext;
use crate::helpers::format::parse_css_color;
use crate::theme::{ACCENT, DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM};
use egui::{Align2, Color32, FontId, RichText, Sense, Stroke, Ui, Vec2};

pub struct SubtitleModule;

impl EditorModule for SubtitleModule {
    fn name(&self) -> &str { "Subtitles" }

    fn ui(&mut self, ui: &mut Ui, state: &EditorState, _ctx: &AppContext, cmd: &mut Vec<EditorCommand>) {
        ui.vertical(|ui| {
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
                .show(ui, |ui| {
                    ui.label(RichText::new("💬 Subtitle Style").size(12.0).strong());
                });

            ui.separator();

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.add_space(4.0);

                // ── Preset chips ─────────────────────────────────────────────
                for preset in preset_catalog() {
                    let selected = state.preset_id == preset.id;
                    let resp = ui.add_sized(
                        [ui.available_width() - 8.0, 26.0],
                        egui::SelectableLabel::new(selected, preset.label),
                    );
                    if resp.clicked() && !selected {
                        cmd.push(EditorCommand::SelectPreset(preset.id));
                    }
                    if selected {
                        ui.label(
                            RichText::new(preset.description).size(10.0).color(DARK_TEXT_DIM),
                        );
                    }
                    ui.add_space(2.0);
                }

                ui.add_space(8.0);

                // ── Effective style readout ──────────────────────────────────
                // This is the preset *after* the brand override merge — the
                // exact payload an export would carry.
                let style = effective_style(preset_by_id(state.preset_id), state.brand.as_ref());

                egui::Frame::new()
                    .fill(DARK_BG_3)
                    .stroke(Stroke::new(1.0, DARK_BORDER))
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        let branded = state.brand.is_some();
                        ui.label(
                            RichText::new(if branded { "Effective (brand applied)" } else { "Effective" })
                                .size(10.0)
                                .color(if branded { ACCENT } else { DARK_TEXT_DIM }),
                        );
                        ui.add_space(2.0);
                        ui.label(RichText::new(format!("Font:     {}", style.font_family)).size(10.0).monospace());
                        ui.label(RichText::new(format!("Size:     {}", style.font_size)).size(10.0).monospace());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("Text:     {}", style.primary_color)).size(10.0).monospace());
                            swatch(ui, parse_css_color(&style.primary_color));
                        });
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("Outline:  {}", style.outline_color)).size(10.0).monospace());
                            swatch(ui, parse_css_color(&style.outline_color));
                        });
                        ui.label(RichText::new(format!("Width:    {:.1}", style.outline)).size(10.0).monospace());
                    });

                ui.add_space(6.0);

                // ── Sample box ───────────────────────────────────────────────
                let (rect, _) = ui.allocate_exact_size(
                    Vec2::new(ui.available_width() - 8.0, 54.0),
                    Sense::hover(),
                );
                let p = ui.painter();
                p.rect_filled(rect, 4.0, Color32::from_rgb(10, 10, 14));
                let primary = parse_css_color(&style.primary_color);
                let outline = parse_css_color(&style.outline_color);
                let font = FontId::proportional(15.0);
                let center = rect.center();
                if style.outline > 0.0 {
                    for off in [Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0)] {
                        p.text(center + off, Align2::CENTER_CENTER, "Sample caption", font.clone(), outline);
                    }
                }
                p.text(center, Align2::CENTER_CENTER, "Sample caption", font, primary);

                ui.add_space(8.0);
            });
        });
    }
}

fn swatch(ui: &mut Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.painter().rect_stroke(rect, 2.0, Stroke::new(1.0, DARK_BORDER), egui::StrokeKind::Outside);
}
