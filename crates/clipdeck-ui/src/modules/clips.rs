// crates/clipdeck-ui/src/modules/clips.rs
use super::EditorModule;
use clipdeck_api::types::{ClipResponse, ClipStatus};
use clipdeck_core::commands::EditorCommand;
use clipdeck_core::helpers::time::format_duration;
use clipdeck_core::state::EditorState;
use crate::context::AppContext;
use crate::helpers::format::fit_label;
use crate::theme::{ACCENT, AMBER_DIM, DARK_BG_2, DARK_BG_3, DARK_BG_4, DARK_BORDER, DARK_TEXT_DIM, GREEN_DIM, RED_DIM};
use egui::{Align, Color32, Layout, RichText, Sense, Stroke, Ui};

pub struct ClipsModule;

fn status_badge(status: ClipStatus) -> (&'static str, Color32) {
    match status {
        ClipStatus::Suggested => ("SUGGESTED", DARK_TEXT_DIM),
        ClipStatus::NeedsEdit => ("NEEDS EDIT", AMBER_DIM),
        ClipStatus::Approved  => ("APPROVED", GREEN_DIM),
        ClipStatus::Rejected  => ("REJECTED", RED_DIM),
        ClipStatus::Rendering => ("RENDERING", ACCENT),
        ClipStatus::Ready     => ("READY", GREEN_DIM),
    }
}

impl EditorModule for ClipsModule {
    fn name(&self) -> &str { "Clips" }

    fn ui(&mut self, ui: &mut Ui, state: &EditorState, ctx: &AppContext, cmd: &mut Vec<EditorCommand>) {
        ui.vertical(|ui| {
            // ── Header ──────────────────────────────────────────────────────
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("🎞 Clips").size(12.0).strong());
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui
                                .add_enabled(!ctx.loading_clips, egui::Button::new(RichText::new("⟳ Refresh").size(11.0)))
                                .clicked()
                            {
                                cmd.push(EditorCommand::LoadClips { page: 0 });
                            }
                        });
                    });
                });

            ui.separator();

            if !ctx.clips.is_empty() {
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("{} clips", ctx.clips.len()))
                            .size(10.0)
                            .color(DARK_TEXT_DIM),
                    );
                });
            }

            // ── Clip list ───────────────────────────────────────────────────
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(4.0);

                if ctx.clips.is_empty() && !ctx.loading_clips {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("🎬").size(32.0));
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new("No clips yet\nHit Refresh once the\nbackend has suggestions")
                                .size(11.0)
                                .color(DARK_TEXT_DIM),
                        );
                    });
                }

                for clip in &ctx.clips {
                    self.clip_card(ui, state, clip, cmd);
                }

                if ctx.loading_clips {
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                    });
                } else if ctx.clips_page + 1 < ctx.total_pages {
                    ui.add_space(6.0);
                    if ui
                        .add_sized(
                            [ui.available_width() - 12.0, 24.0],
                            egui::Button::new(RichText::new("Load more").size(11.0)),
                        )
                        .clicked()
                    {
                        cmd.push(EditorCommand::LoadClips { page: ctx.clips_page + 1 });
                    }
                }
                ui.add_space(8.0);
            });
        });
    }
}

impl ClipsModule {
    fn clip_card(&self, ui: &mut Ui, state: &EditorState, clip: &ClipResponse, cmd: &mut Vec<EditorCommand>) {
        let is_active = state.active_clip == Some(clip.id);
        let border = if is_active { ACCENT } else { DARK_BORDER };
        let fill = if is_active { DARK_BG_4 } else { DARK_BG_3 };

        let card = egui::Frame::new()
            .fill(fill)
            .stroke(Stroke::new(if is_active { 1.5 } else { 1.0 }, border))
            .corner_radius(egui::CornerRadius::same(5))
            .inner_margin(egui::Margin::same(6))
            .show(ui, |ui| {
                ui.set_width(ui.available_width() - 8.0);
                let title = fit_label(&clip.title, ui.available_width() - 10.0);
                ui.label(RichText::new(title).size(11.0));
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format_duration(clip.duration_secs()))
                            .size(9.0)
                            .color(ACCENT)
                            .monospace(),
                    );
                    let (label, color) = status_badge(clip.status);
                    ui.label(RichText::new(label).size(8.0).color(color));
                    if let Some(score) = clip.score {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("{:.0}%", score * 100.0))
                                    .size(9.0)
                                    .color(DARK_TEXT_DIM)
                                    .monospace(),
                            );
                        });
                    }
                });
            })
            .response;

        let interact = ui.interact(card.rect, egui::Id::new("clip_card").with(clip.id), Sense::click());
        if interact.clicked() && !is_active {
            cmd.push(EditorCommand::OpenClip(clip.id));
        }
        if interact.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        ui.add_space(2.0);
    }
}
