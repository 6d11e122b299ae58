// crates/clipdeck-ui/src/modules/trim_module.rs
//
// Bottom panel: the trim rail plus the keyboard surface for the NLE-style
// shortcuts. Raw egui key events are translated here into router KeyEvents;
// everything after that (step sizes, clamping, undo chords) is pure logic
// in clipdeck_core::keys — this module never decides what a key means.

use super::EditorModule;
use clipdeck_core::commands::EditorCommand;
use clipdeck_core::helpers::time::format_clock;
use clipdeck_core::keys::{route, KeyEvent, RouterKey, STEP_DEFAULT};
use clipdeck_core::state::EditorState;
use clipdeck_core::trim::{TrimRange, MIN_TRIM_GAP};
use crate::context::AppContext;
use crate::theme::{ACCENT, ACCENT_DIM, DARK_BG_0, DARK_BG_2, DARK_BORDER, DARK_TEXT_DIM};
use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2};

const RAIL_H:     f32 = 56.0;
const MARKER_W:   f32 = 2.0;
const NEEDLE_COL: Color32 = Color32::from_rgb(235, 235, 245);

/// egui key → router key, for the chords the router owns.
const KEYMAP: &[(egui::Key, RouterKey)] = &[
    (egui::Key::ArrowLeft,  RouterKey::ArrowLeft),
    (egui::Key::ArrowRight, RouterKey::ArrowRight),
    (egui::Key::J,          RouterKey::J),
    (egui::Key::K,          RouterKey::K),
    (egui::Key::L,          RouterKey::L),
    (egui::Key::I,          RouterKey::I),
    (egui::Key::O,          RouterKey::O),
    (egui::Key::Z,          RouterKey::Z),
    (egui::Key::Y,          RouterKey::Y),
    (egui::Key::Space,      RouterKey::Space),
];

pub struct TrimModule;

impl EditorModule for TrimModule {
    fn name(&self) -> &str { "Trim" }

    fn ui(&mut self, ui: &mut Ui, state: &EditorState, _ctx: &AppContext, cmd: &mut Vec<EditorCommand>) {
        // ── Keyboard ─────────────────────────────────────────────────────────
        // Only while a clip is open and no text field owns the keyboard —
        // otherwise typing a brand color would scrub the playhead.
        if state.has_clip() && !ui.ctx().wants_keyboard_input() {
            let events: Vec<KeyEvent> = ui.input(|i| {
                KEYMAP
                    .iter()
                    .filter(|(ek, _)| i.key_pressed(*ek))
                    .map(|(_, rk)| KeyEvent {
                        key:     *rk,
                        shift:   i.modifiers.shift,
                        alt:     i.modifiers.alt,
                        command: i.modifiers.command,
                    })
                    .collect()
            });
            for ev in events {
                if let Some(c) = route(ev, state.current_time) {
                    cmd.push(c);
                }
            }
        }

        ui.vertical(|ui| {
            // ── Toolbar ──────────────────────────────────────────────────────
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin::same(6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let enabled = state.has_clip();

                        ui.group(|ui| {
                            if ui
                                .add_enabled(enabled && state.undo_len > 0, tool_btn("↶ Undo"))
                                .on_hover_text("Ctrl+Z")
                                .clicked()
                            {
                                cmd.push(EditorCommand::Undo);
                            }
                            if ui
                                .add_enabled(enabled && state.redo_len > 0, tool_btn("↷ Redo"))
                                .on_hover_text("Ctrl+Shift+Z / Ctrl+Y")
                                .clicked()
                            {
                                cmd.push(EditorCommand::Redo);
                            }
                        });

                        ui.group(|ui| {
                            if ui
                                .add_enabled(enabled, tool_btn("⇤ Set In"))
                                .on_hover_text("I — mark in at the playhead")
                                .clicked()
                            {
                                cmd.push(EditorCommand::MarkIn);
                            }
                            if ui
                                .add_enabled(enabled, tool_btn("Set Out ⇥"))
                                .on_hover_text("O — mark out at the playhead")
                                .clicked()
                            {
                                cmd.push(EditorCommand::MarkOut);
                            }
                        });

                        // ── Nudge buttons — one default step each way ─────────
                        if let Some(trim) = state.trim {
                            ui.group(|ui| {
                                if ui.add_enabled(enabled, tool_btn("−0.2s")).clicked() {
                                    let in_s = (trim.in_s - STEP_DEFAULT).max(0.0);
                                    if in_s < trim.out_s {
                                        cmd.push(EditorCommand::PushTrim(TrimRange { in_s, out_s: trim.out_s }));
                                    }
                                }
                                ui.label(RichText::new("in").size(10.0).color(DARK_TEXT_DIM));
                                if ui.add_enabled(enabled, tool_btn("+0.2s")).clicked() {
                                    let in_s = trim.in_s + STEP_DEFAULT;
                                    if in_s < trim.out_s {
                                        cmd.push(EditorCommand::PushTrim(TrimRange { in_s, out_s: trim.out_s }));
                                    }
                                }
                            });
                            ui.group(|ui| {
                                if ui.add_enabled(enabled, tool_btn("−0.2s")).clicked() {
                                    let out_s = (trim.out_s - STEP_DEFAULT).max(trim.in_s + MIN_TRIM_GAP);
                                    cmd.push(EditorCommand::PushTrim(TrimRange { in_s: trim.in_s, out_s }));
                                }
                                ui.label(RichText::new("out").size(10.0).color(DARK_TEXT_DIM));
                                if ui.add_enabled(enabled, tool_btn("+0.2s")).clicked() {
                                    let out_s = trim.out_s + STEP_DEFAULT;
                                    cmd.push(EditorCommand::PushTrim(TrimRange { in_s: trim.in_s, out_s }));
                                }
                            });
                        }

                        if ui
                            .add_enabled(enabled && state.trim.is_some() && !state.saving, save_btn())
                            .on_hover_text("PATCH the trim range to the backend")
                            .clicked()
                        {
                            cmd.push(EditorCommand::SaveTrim);
                        }
                        if state.saving {
                            ui.spinner();
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new("←/→ scrub (Shift coarse, Alt fine) · J/L ∓5s · K play · I/O mark")
                                    .size(9.0)
                                    .color(DARK_TEXT_DIM),
                            );
                        });
                    });
                });

            ui.add_space(4.0);

            // ── Rail ─────────────────────────────────────────────────────────
            if state.has_clip() {
                self.rail(ui, state, cmd);
            } else {
                let (rect, _) = ui.allocate_exact_size(
                    Vec2::new(ui.available_width(), RAIL_H),
                    Sense::hover(),
                );
                ui.painter().rect_filled(rect, 4.0, DARK_BG_0);
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "Open a clip to trim",
                    FontId::proportional(12.0),
                    Color32::from_gray(70),
                );
            }
        });
    }
}

impl TrimModule {
    fn rail(&self, ui: &mut Ui, state: &EditorState, cmd: &mut Vec<EditorCommand>) {
        let Some(trim) = state.trim else { return };
        // The rail spans the whole clip; fall back to the out-point when the
        // duration is still unknown so the selection is always on screen.
        let span = if state.clip_duration > 0.0 {
            state.clip_duration.max(trim.out_s)
        } else {
            trim.out_s.max(1.0)
        };

        let width = ui.available_width();
        let (rect, resp) = ui.allocate_exact_size(Vec2::new(width, RAIL_H), Sense::click_and_drag());
        let painter = ui.painter();

        let to_x = |t: f64| rect.min.x + (t / span).clamp(0.0, 1.0) as f32 * rect.width();

        painter.rect_filled(rect, 4.0, DARK_BG_0);
        painter.rect_stroke(rect, 4.0, Stroke::new(1.0, DARK_BORDER), egui::StrokeKind::Outside);

        // Selected range.
        let sel = Rect::from_min_max(
            Pos2::new(to_x(trim.in_s), rect.min.y + 6.0),
            Pos2::new(to_x(trim.out_s), rect.max.y - 6.0),
        );
        painter.rect_filled(sel, 2.0, ACCENT_DIM.gamma_multiply(0.45));
        painter.rect_stroke(sel, 2.0, Stroke::new(1.0, ACCENT_DIM), egui::StrokeKind::Outside);

        // In / out markers with clock labels.
        for (t, label, align) in [
            (trim.in_s, format_clock(trim.in_s), Align2::LEFT_TOP),
            (trim.out_s, format_clock(trim.out_s), Align2::RIGHT_TOP),
        ] {
            let x = to_x(t);
            painter.rect_filled(
                Rect::from_min_max(Pos2::new(x - MARKER_W / 2.0, rect.min.y), Pos2::new(x + MARKER_W / 2.0, rect.max.y)),
                0.0,
                ACCENT,
            );
            let pad = if align == Align2::LEFT_TOP { 4.0 } else { -4.0 };
            painter.text(
                Pos2::new(x + pad, rect.min.y + 2.0),
                align,
                label,
                FontId::monospace(9.0),
                ACCENT,
            );
        }

        // Playhead needle + time bubble.
        let px = to_x(state.current_time);
        painter.line_segment(
            [Pos2::new(px, rect.min.y), Pos2::new(px, rect.max.y)],
            Stroke::new(1.5, NEEDLE_COL),
        );
        painter.text(
            Pos2::new(px, rect.max.y - 2.0),
            Align2::CENTER_BOTTOM,
            format_clock(state.current_time),
            FontId::monospace(9.0),
            NEEDLE_COL,
        );

        // Click or drag anywhere on the rail to seek.
        if resp.clicked() || resp.dragged() {
            if let Some(pos) = resp.interact_pointer_pos() {
                let frac = ((pos.x - rect.min.x) / rect.width()).clamp(0.0, 1.0) as f64;
                cmd.push(EditorCommand::Seek(frac * span));
            }
        }
    }
}

fn tool_btn(label: impl Into<egui::WidgetText>) -> egui::Button<'static> {
    egui::Button::new(label).min_size(egui::vec2(0.0, 26.0))
}

/// Accented primary action — the one button on this bar that talks to the
/// backend.
fn save_btn() -> egui::Button<'static> {
    egui::Button::new(RichText::new("💾 Save trim").size(11.0).color(Color32::BLACK))
        .fill(ACCENT)
        .stroke(Stroke::NONE)
        .min_size(egui::vec2(0.0, 26.0))
}
