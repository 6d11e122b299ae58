// crates/clipdeck-ui/src/modules/preview_module.rs
//
// Central panel: aspect-correct preview canvas with the styled subtitle
// sample and the brand logo overlay, plus the transport bar. There is no
// decode path — the canvas is a layout-faithful mock of the rendered
// output so the style/brand layers can be judged at a glance.

use super::EditorModule;
use clipdeck_core::commands::EditorCommand;
use clipdeck_core::helpers::time::format_clock;
use clipdeck_core::state::EditorState;
use clipdeck_core::style::{effective_style, preset_by_id, Aspect};
use crate::context::AppContext;
use crate::helpers::format::parse_css_color;
use crate::theme::{ACCENT, DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM};
use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2};

// ── Transport bar layout constants ───────────────────────────────────────────
const BAR_H:    f32 = 44.0;
const BTN_SIZE: f32 = 28.0;
const BTN_R:    f32 = 4.0;
const ICON_SZ:  f32 = 8.0;
const GAP:      f32 = 4.0;
const SEP:      f32 = 16.0;
const RATE_W:   f32 = 72.0;
// CONTENT_W = play(28)+gap(4)+stop(28) = 60
//           + sep(16) + timecode(110) + sep(16) = 142
//           + rate(72)                          = 72
//           ─────────────────────────────────── 274
const CONTENT_W: f32 = 274.0;

const RATES: &[f64] = &[0.5, 1.0, 1.25, 1.5, 2.0];

pub struct PreviewModule;

impl EditorModule for PreviewModule {
    fn name(&self) -> &str { "Preview" }

    fn ui(&mut self, ui: &mut Ui, state: &EditorState, _ctx: &AppContext, cmd: &mut Vec<EditorCommand>) {
        ui.vertical(|ui| {
            // ── Header ───────────────────────────────────────────────────────
            egui::Frame::new()
                .fill(DARK_BG_2)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 5, bottom: 5 })
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let title = if state.has_clip() {
                            format!("📺 {}", state.active_clip_title)
                        } else {
                            "📺 Monitor".to_owned()
                        };
                        ui.label(RichText::new(title).size(12.0).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let mut aspect = state.aspect;
                            egui::ComboBox::from_id_salt("preview_aspect")
                                .selected_text(aspect.label())
                                .show_ui(ui, |ui| {
                                    ui.selectable_value(&mut aspect, Aspect::Vertical, "9:16 — Shorts / Reels");
                                    ui.selectable_value(&mut aspect, Aspect::Wide,     "16:9 — YouTube / HD");
                                    ui.selectable_value(&mut aspect, Aspect::Square,   "1:1 — Square");
                                });
                            if aspect != state.aspect {
                                cmd.push(EditorCommand::SetAspect(aspect));
                            }
                        });
                    });
                });

            ui.add_space(4.0);

            // ── Canvas ───────────────────────────────────────────────────────
            let ratio   = state.aspect.ratio();
            let panel_w = ui.available_width();
            let panel_h = (ui.available_height() - BAR_H - 12.0).max(80.0);

            let (canvas_w, canvas_h) = {
                let h = panel_w / ratio;
                if h <= panel_h { (panel_w, h) } else { (panel_h * ratio, panel_h) }
            };

            let (outer_rect, _) = ui.allocate_exact_size(Vec2::new(panel_w, canvas_h), Sense::hover());
            let canvas = Rect::from_center_size(outer_rect.center(), Vec2::new(canvas_w, canvas_h));
            let painter = ui.painter();

            if state.is_playing {
                painter.rect_stroke(canvas.expand(2.0), 4.0,
                    Stroke::new(1.5, ACCENT.gamma_multiply(0.55)),
                    egui::StrokeKind::Outside);
            } else {
                painter.rect_stroke(canvas.expand(1.0), 4.0,
                    Stroke::new(1.0, DARK_BORDER),
                    egui::StrokeKind::Outside);
            }
            painter.rect_filled(canvas, 3.0, Color32::BLACK);

            if state.has_clip() {
                // Faint scanline wash so the canvas reads as "video".
                let mut y = canvas.min.y;
                while y < canvas.max.y {
                    painter.line_segment(
                        [Pos2::new(canvas.min.x, y), Pos2::new(canvas.max.x, y)],
                        Stroke::new(0.5, Color32::from_rgba_unmultiplied(255, 255, 255, 2)));
                    y += 4.0;
                }

                self.subtitle_sample(painter, canvas, state);

                // Brand logo overlay, top-right like the rendered output.
                if let Some(logo) = state.brand.as_ref().and_then(|b| b.brand_logo_path.as_ref()) {
                    let side = (canvas.width() * 0.14).clamp(28.0, 72.0);
                    let logo_rect = Rect::from_min_size(
                        Pos2::new(canvas.max.x - side - 10.0, canvas.min.y + 10.0),
                        Vec2::splat(side),
                    );
                    egui::Image::new(format!("file://{}", logo.display()))
                        .corner_radius(egui::CornerRadius::same(3))
                        .paint_at(ui, logo_rect);
                }
            } else {
                painter.text(canvas.center(), Align2::CENTER_CENTER,
                    "NO CLIP", FontId::monospace(14.0), Color32::from_gray(40));
            }

            ui.add_space(6.0);

            // ── Transport bar ────────────────────────────────────────────────
            // Full-width bar, controls positioned with coordinate math from
            // the center so the buttons never drift between frames.
            let bar_w = ui.available_width();
            let (bar_rect, _) = ui.allocate_exact_size(Vec2::new(bar_w, BAR_H), Sense::hover());

            let painter = ui.painter();
            painter.rect_filled(bar_rect, BTN_R, DARK_BG_3);
            painter.rect_stroke(bar_rect, BTN_R, Stroke::new(1.0, DARK_BORDER), egui::StrokeKind::Outside);

            let cy = bar_rect.center().y;
            let mut x = bar_rect.center().x - CONTENT_W / 2.0;
            let enabled = state.has_clip();

            macro_rules! tbtn {
                ($id:expr, $active:expr, $draw_icon:expr) => {{
                    let r = Rect::from_min_size(
                        Pos2::new(x, cy - BTN_SIZE / 2.0),
                        Vec2::splat(BTN_SIZE));
                    let resp = ui.interact(r, ui.id().with($id), Sense::click());
                    let (bg, icol) = if !enabled {
                        (DARK_BG_3, Color32::from_gray(70))
                    } else if resp.is_pointer_button_down_on() {
                        (DARK_BG_2.gamma_multiply(0.6), Color32::WHITE)
                    } else if resp.hovered() {
                        (DARK_BG_2, ACCENT.linear_multiply(1.2))
                    } else if $active {
                        (DARK_BG_3, ACCENT)
                    } else {
                        (DARK_BG_3, Color32::from_gray(175))
                    };
                    painter.rect_filled(r, BTN_R, bg);
                    if enabled && (resp.hovered() || $active) {
                        painter.rect_stroke(r, BTN_R,
                            Stroke::new(1.0, ACCENT.gamma_multiply(0.35)),
                            egui::StrokeKind::Outside);
                    }
                    let c = r.center();
                    $draw_icon(c, icol);
                    x += BTN_SIZE;
                    enabled && resp.clicked()
                }};
            }

            // ── Play / Pause ─────────────────────────────────────────────
            let playing = state.is_playing;
            if tbtn!("play_pause", playing, |c: Pos2, col: Color32| {
                if playing {
                    for ox in [-ICON_SZ * 0.45, ICON_SZ * 0.45] {
                        painter.rect_filled(
                            Rect::from_center_size(
                                Pos2::new(c.x + ox, c.y),
                                Vec2::new(3.0, ICON_SZ * 1.8)),
                            1.0, col);
                    }
                } else {
                    painter.add(egui::Shape::convex_polygon(vec![
                        Pos2::new(c.x - ICON_SZ * 0.5, c.y - ICON_SZ),
                        Pos2::new(c.x - ICON_SZ * 0.5, c.y + ICON_SZ),
                        Pos2::new(c.x + ICON_SZ,        c.y),
                    ], col, Stroke::NONE));
                }
            }) {
                cmd.push(EditorCommand::TogglePlay);
            }
            x += GAP;

            // ── Stop (seek 0 + pause) ────────────────────────────────────
            if tbtn!("stop", false, |c: Pos2, col: Color32| {
                painter.rect_filled(
                    Rect::from_center_size(c, Vec2::splat(ICON_SZ * 1.5)),
                    1.5, col);
            }) {
                cmd.push(EditorCommand::Pause);
                cmd.push(EditorCommand::Seek(0.0));
            }
            x += SEP;

            // ── Timecode ─────────────────────────────────────────────────
            painter.text(
                Pos2::new(x, cy),
                Align2::LEFT_CENTER,
                format!("{} / {}", format_clock(state.current_time), format_clock(state.clip_duration)),
                FontId::monospace(12.0),
                if enabled { ACCENT } else { Color32::from_gray(70) });
            x += 110.0 + SEP;

            // ── Playback rate ────────────────────────────────────────────
            let rate_rect = Rect::from_min_size(
                Pos2::new(x, cy - BTN_SIZE / 2.0),
                Vec2::new(RATE_W, BTN_SIZE));
            let mut child = ui.new_child(egui::UiBuilder::new().max_rect(rate_rect));
            child.add_enabled_ui(enabled, |ui| {
                egui::ComboBox::from_id_salt("playback_rate")
                    .selected_text(format!("{}×", state.playback_rate))
                    .width(RATE_W)
                    .show_ui(ui, |ui| {
                        for &r in RATES {
                            if ui
                                .selectable_label(state.playback_rate == r, format!("{r}×"))
                                .clicked()
                            {
                                cmd.push(EditorCommand::SetPlaybackRate(r));
                            }
                        }
                    });
            });
        });
    }
}

impl PreviewModule {
    /// Paint the "two lines of sample captions" block the way the renderer
    /// would place it: horizontally per alignment, vertically by margin_v
    /// scaled to the canvas. Outline is faked with four offset copies.
    fn subtitle_sample(&self, painter: &egui::Painter, canvas: Rect, state: &EditorState) {
        let style = effective_style(preset_by_id(state.preset_id), state.brand.as_ref());
        let primary = parse_css_color(&style.primary_color);
        let outline = parse_css_color(&style.outline_color);

        // Scale the ASS pixel values (1080-wide reference) to the canvas.
        let scale = canvas.width() / 1080.0;
        let font = FontId::proportional((style.font_size as f32 * scale * 1.6).clamp(9.0, 42.0));
        let margin_v = style.margin_v as f32 * scale * 1.6;

        let anchor_y = canvas.max.y - margin_v.max(12.0);
        let (anchor_x, align) = match style.alignment {
            clipdeck_core::style::Alignment::Left => {
                (canvas.min.x + style.margin_l as f32 * scale, Align2::LEFT_BOTTOM)
            }
            clipdeck_core::style::Alignment::Center => (canvas.center().x, Align2::CENTER_BOTTOM),
            clipdeck_core::style::Alignment::Right => {
                (canvas.max.x - style.margin_r as f32 * scale, Align2::RIGHT_BOTTOM)
            }
        };

        let lines = ["your captions will", "look like this"];
        let line_h = font.size * 1.15;
        for (i, line) in lines.iter().enumerate() {
            let pos = Pos2::new(anchor_x, anchor_y - (lines.len() - 1 - i) as f32 * line_h);
            if style.outline > 0.0 {
                let o = (style.outline * scale * 1.2).clamp(0.5, 3.0);
                for off in [
                    Vec2::new(-o, 0.0),
                    Vec2::new(o, 0.0),
                    Vec2::new(0.0, -o),
                    Vec2::new(0.0, o),
                ] {
                    painter.text(pos + off, align, line, font.clone(), outline);
                }
            }
            painter.text(pos, align, line, font.clone(), primary);
        }

        // Font caption under the block so the brand font choice is visible
        // even though the preview can't load arbitrary families.
        painter.text(
            Pos2::new(canvas.center().x, canvas.max.y - 4.0),
            Align2::CENTER_BOTTOM,
            style.font_family,
            FontId::proportional(8.0),
            DARK_TEXT_DIM,
        );
    }
}
