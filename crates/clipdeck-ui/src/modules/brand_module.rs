// crates/clipdeck-ui/src/modules/brand_module.rs
//
// Inspector tab: brand template editor. Edits a local clone of the draft
// and emits UpdateBrandDraft when anything changes — app.rs persists the
// draft on every edit, so a crash never loses template work.

use super::EditorModule;
use clipdeck_core::commands::EditorCommand;
use clipdeck_core::state::EditorState;
use clipdeck_core::style::{Aspect, SUBTITLE_FONTS};
use crate::context::AppContext;
use crate::helpers::format::{color_to_hex, parse_css_color};
use crate::theme::{ACCENT, DARK_BG_2, DARK_TEXT_DIM, GREEN_DIM};
use egui::{Color32, RichText, Stroke, Ui};
use rfd::FileDialog;

pub struct BrandModule;

impl EditorModule for BrandModule {
    fn name(&self) -> &str { "Brand" }

    fn ui(&mut self, ui: &mut Ui, state: &EditorState, _ctx: &AppContext, cmd: &mut Vec<EditorCommand>) {
        let mut draft = state.brand_draft.clone();
        let mut changed = false;

        ui.vertical(|ui| {
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("🏷 Brand Template").size(12.0).strong());
                        if state.brand.is_some() {
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(RichText::new("● active").size(10.0).color(GREEN_DIM));
                            });
                        }
                    });
                });

            ui.separator();

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.add_space(4.0);

                // ── Layout ───────────────────────────────────────────────────
                ui.label(RichText::new("Default layout").size(11.0).color(DARK_TEXT_DIM));
                egui::ComboBox::from_id_salt("brand_layout")
                    .selected_text(draft.layout.map(|a| a.label()).unwrap_or("Follow project"))
                    .width(ui.available_width() - 8.0)
                    .show_ui(ui, |ui| {
                        if ui.selectable_label(draft.layout.is_none(), "Follow project").clicked() {
                            draft.layout = None;
                            changed = true;
                        }
                        for a in [Aspect::Vertical, Aspect::Wide, Aspect::Square] {
                            if ui.selectable_label(draft.layout == Some(a), a.label()).clicked() {
                                draft.layout = Some(a);
                                changed = true;
                            }
                        }
                    });

                ui.add_space(8.0);

                // ── Brand colors ─────────────────────────────────────────────
                ui.label(RichText::new("Brand colors").size(11.0).color(DARK_TEXT_DIM));
                ui.horizontal(|ui| {
                    let mut c = parse_css_color(&draft.brand_primary_color);
                    if ui.color_edit_button_srgba(&mut c).changed() {
                        draft.brand_primary_color = color_to_hex(c);
                        changed = true;
                    }
                    ui.label(RichText::new("primary").size(10.0).color(DARK_TEXT_DIM));
                    let mut c2 = parse_css_color(&draft.brand_secondary_color);
                    if ui.color_edit_button_srgba(&mut c2).changed() {
                        draft.brand_secondary_color = color_to_hex(c2);
                        changed = true;
                    }
                    ui.label(RichText::new("secondary").size(10.0).color(DARK_TEXT_DIM));
                });

                ui.add_space(8.0);

                // ── Logo ─────────────────────────────────────────────────────
                ui.label(RichText::new("Logo").size(11.0).color(DARK_TEXT_DIM));
                ui.horizontal(|ui| {
                    if ui.button(RichText::new("🖼 Pick…").size(11.0)).clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Image", &["png", "jpg", "jpeg"])
                            .pick_file()
                        {
                            draft.brand_logo_path = Some(path);
                            changed = true;
                        }
                    }
                    if draft.brand_logo_path.is_some() && ui.button(RichText::new("✕").size(11.0)).clicked() {
                        draft.brand_logo_path = None;
                        changed = true;
                    }
                });
                if let Some(path) = &draft.brand_logo_path {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    ui.label(RichText::new(name).size(9.0).color(DARK_TEXT_DIM));
                }

                ui.add_space(8.0);

                // ── Subtitle overrides ───────────────────────────────────────
                // Each is optional: unset means the preset value wins.
                ui.label(RichText::new("Subtitle overrides").size(11.0).color(DARK_TEXT_DIM));

                egui::ComboBox::from_id_salt("brand_font")
                    .selected_text(
                        draft
                            .subtitle_font_id
                            .as_deref()
                            .and_then(clipdeck_core::style::find_font)
                            .map(|f| f.label)
                            .unwrap_or("Preset font"),
                    )
                    .width(ui.available_width() - 8.0)
                    .show_ui(ui, |ui| {
                        if ui.selectable_label(draft.subtitle_font_id.is_none(), "Preset font").clicked() {
                            draft.subtitle_font_id = None;
                            changed = true;
                        }
                        for f in SUBTITLE_FONTS {
                            let selected = draft.subtitle_font_id.as_deref() == Some(f.id);
                            if ui.selectable_label(selected, f.label).clicked() {
                                draft.subtitle_font_id = Some(f.id.to_owned());
                                changed = true;
                            }
                        }
                    });

                ui.add_space(4.0);
                changed |= optional_color(ui, "Text color", &mut draft.subtitle_primary_color);
                changed |= optional_color(ui, "Outline color", &mut draft.subtitle_outline_color);

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let mut on = draft.subtitle_outline_width.is_some();
                    if ui.checkbox(&mut on, RichText::new("Outline width").size(10.0)).changed() {
                        draft.subtitle_outline_width = if on { Some(2.0) } else { None };
                        changed = true;
                    }
                    if let Some(w) = &mut draft.subtitle_outline_width {
                        if ui.add(egui::Slider::new(w, 0.0_f32..=8.0).show_value(true)).changed() {
                            changed = true;
                        }
                    }
                });

                ui.add_space(12.0);

                // ── Apply ────────────────────────────────────────────────────
                let apply_btn = egui::Button::new(
                    RichText::new("✓ Apply to project").size(12.0).strong().color(Color32::BLACK),
                )
                .fill(ACCENT)
                .stroke(Stroke::NONE)
                .min_size(egui::vec2(ui.available_width() - 8.0, 30.0));

                if ui.add(apply_btn)
                    .on_hover_text("Use this template for style resolution and exports")
                    .clicked()
                {
                    cmd.push(EditorCommand::ApplyBrandToProject);
                }
                ui.add_space(8.0);
            });
        });

        if changed {
            cmd.push(EditorCommand::UpdateBrandDraft(draft));
        }
    }
}

/// Checkbox-gated color override. Returns true when the value changed.
fn optional_color(ui: &mut Ui, label: &str, value: &mut Option<String>) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        let mut on = value.is_some();
        if ui.checkbox(&mut on, RichText::new(label).size(10.0)).changed() {
            *value = if on { Some("#FFFFFF".to_owned()) } else { None };
            changed = true;
        }
        if let Some(raw) = value {
            let mut c = parse_css_color(raw);
            if ui.color_edit_button_srgba(&mut c).changed() {
                *raw = color_to_hex(c);
                changed = true;
            }
        }
    });
    changed
}
