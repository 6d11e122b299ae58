// src/app.rs (clipdeck-ui)
use clipdeck_api::{ApiConfig, ApiRequest, ApiWorker};
use clipdeck_core::commands::EditorCommand;
use clipdeck_core::player::PlayerAdapter;
use clipdeck_core::state::{EditorState, Notice, NoticeKind};
use clipdeck_core::store::JsonFileStore;
use clipdeck_core::style::{
    apply_brand_to_project, effective_style, load_active_brand, load_brand_draft, preset_by_id,
    save_brand_draft,
};
use clipdeck_core::trim::TrimStore;
use crate::clipdeck_log;
use crate::context::{AppContext, CLIPS_PAGE_SIZE};
use crate::modules::{
    brand_module::BrandModule,
    clips::ClipsModule,
    export_module::ExportModule,
    preview_module::PreviewModule,
    subtitle_module::SubtitleModule,
    trim_module::TrimModule,
    EditorModule,
};
use crate::theme::{configure_style, ACCENT, GREEN_DIM, RED_DIM};
use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct AppStorage {
    editor: EditorState,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum InspectorTab {
    Subtitles,
    Brand,
    Export,
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct ClipDeckApp {
    state:   EditorState,
    context: AppContext,
    // Panel modules as concrete types — a typo'd panel is a compile error,
    // not a silently blank region.
    clips:     ClipsModule,
    preview:   PreviewModule,
    trim:      TrimModule,
    subtitles: SubtitleModule,
    brand:     BrandModule,
    export:    ExportModule,
    inspector_tab: InspectorTab,
    /// Commands emitted by modules each frame, processed after the UI pass.
    pending_cmds: Vec<EditorCommand>,
}

impl ClipDeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);
        // Pin to dark mode — prevents egui overwriting our theme on OS
        // light/dark changes.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        let mut state = cc
            .storage
            .and_then(|s| eframe::get_value::<AppStorage>(s, eframe::APP_KEY))
            .map(|d| d.editor)
            .unwrap_or_default();

        let kv = Box::new(JsonFileStore::open_default());
        // Draft and applied template survive restarts through the kv store,
        // not eframe storage — they're shared with the persistence the
        // backend-facing flows use.
        if let Some(draft) = load_brand_draft(kv.as_ref()) {
            state.brand_draft = draft;
        }
        state.brand = load_active_brand(kv.as_ref())
            .filter(|a| a.project_id == state.project_id)
            .map(|a| a.tpl);

        let api = ApiWorker::new(ApiConfig::from_env());
        state.owner = api.owner().to_owned();

        let mut context = AppContext::new(api, kv);
        context.loading_clips = true;
        context.api.request(ApiRequest::Project(state.project_id.clone()));
        context.api.request(ApiRequest::ProjectClips {
            project_id: state.project_id.clone(),
            page:       0,
            size:       CLIPS_PAGE_SIZE,
        });

        Self {
            state,
            context,
            clips:         ClipsModule,
            preview:       PreviewModule,
            trim:          TrimModule,
            subtitles:     SubtitleModule,
            brand:         BrandModule,
            export:        ExportModule,
            inspector_tab: InspectorTab::Subtitles,
            pending_cmds:  Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: EditorCommand) {
        match cmd {
            // ── Playback ─────────────────────────────────────────────────────
            EditorCommand::Seek(t) => {
                self.context.player.seek(t);
                self.state.current_time = self.context.player.current_time();
            }
            EditorCommand::Play => self.context.player.play(),
            EditorCommand::Pause => self.context.player.pause(),
            EditorCommand::TogglePlay => {
                if self.context.player.is_playing() {
                    self.context.player.pause();
                } else {
                    self.context.player.play();
                }
            }
            EditorCommand::SetPlaybackRate(rate) => {
                self.context.player.set_playback_rate(rate);
            }

            // ── Trim ─────────────────────────────────────────────────────────
            EditorCommand::PushTrim(range) => {
                if let Some(ts) = self.context.trim_store.as_mut() {
                    ts.push(self.context.kv.as_ref(), range);
                }
            }
            EditorCommand::MarkIn => {
                if let Some(ts) = self.context.trim_store.as_mut() {
                    if !ts.mark_in(self.context.kv.as_ref(), self.state.current_time) {
                        clipdeck_log!("[trim] mark-in past the out-point — ignored");
                    }
                }
            }
            EditorCommand::MarkOut => {
                if let Some(ts) = self.context.trim_store.as_mut() {
                    if !ts.mark_out(self.context.kv.as_ref(), self.state.current_time) {
                        clipdeck_log!("[trim] mark-out before the in-point — ignored");
                    }
                }
            }
            EditorCommand::Undo => {
                if let Some(ts) = self.context.trim_store.as_mut() {
                    ts.undo(self.context.kv.as_ref());
                }
            }
            EditorCommand::Redo => {
                if let Some(ts) = self.context.trim_store.as_mut() {
                    ts.redo(self.context.kv.as_ref());
                }
            }
            EditorCommand::SaveTrim => {
                if let (Some(ts), Some(clip_id)) =
                    (self.context.trim_store.as_ref(), self.state.active_clip)
                {
                    let (start_ms, end_ms) = ts.current().to_millis();
                    self.state.saving = true;
                    self.context.api.request(ApiRequest::SaveTrim { clip_id, start_ms, end_ms });
                }
            }

            // ── Clips ────────────────────────────────────────────────────────
            EditorCommand::LoadClips { page } => {
                self.context.loading_clips = true;
                self.context.api.request(ApiRequest::ProjectClips {
                    project_id: self.state.project_id.clone(),
                    page,
                    size: CLIPS_PAGE_SIZE,
                });
            }
            EditorCommand::OpenClip(id) => {
                let Some(clip) = self.context.clips.iter().find(|c| c.id == id).cloned() else {
                    return;
                };
                let duration = clip.duration_secs();
                self.state.active_clip = Some(clip.id);
                self.state.active_clip_title = clip.title.clone();
                self.state.clip_duration = duration;

                let ts = TrimStore::load(self.context.kv.as_ref(), &clip.id.to_string(), duration);
                self.context.player.load(duration);
                self.context.player.seek(ts.current().in_s);
                self.state.current_time = self.context.player.current_time();
                self.context.trim_store = Some(ts);

                // Media record carries the authoritative source duration.
                self.context.api.request(ApiRequest::Media(clip.media_id));
                self.context.active_clip = Some(clip);
            }
            EditorCommand::CloseClip => {
                self.context.active_clip = None;
                self.context.trim_store = None;
                self.context.player.unload();
                self.state.active_clip = None;
                self.state.active_clip_title.clear();
                self.state.clip_duration = 0.0;
                self.state.current_time = 0.0;
            }

            // ── Style / brand ────────────────────────────────────────────────
            EditorCommand::SelectPreset(id) => {
                self.state.preset_id = id;
            }
            EditorCommand::SetAspect(a) => {
                self.state.aspect = a;
            }
            EditorCommand::UpdateBrandDraft(draft) => {
                save_brand_draft(self.context.kv.as_ref(), &draft);
                self.state.brand_draft = draft;
            }
            EditorCommand::ApplyBrandToProject => {
                apply_brand_to_project(
                    self.context.kv.as_ref(),
                    &self.state.project_id,
                    &self.state.brand_draft,
                );
                self.state.brand = Some(self.state.brand_draft.clone());
                // The template can carry a default layout for the project.
                if let Some(layout) = self.state.brand_draft.layout {
                    self.state.aspect = layout;
                }
                self.state.notice = Some(Notice::info("Brand template applied"));
            }

            // ── Export ───────────────────────────────────────────────────────
            EditorCommand::StartExport => {
                if let Some(clip_id) = self.state.active_clip {
                    let style = effective_style(
                        preset_by_id(self.state.preset_id),
                        self.state.brand.as_ref(),
                    );
                    self.context.api.request(ApiRequest::StartExport { clip_id, style });
                }
            }
            EditorCommand::DismissNotice => {
                self.state.notice = None;
            }
        }
    }

    /// Mirror the stores into read-only state fields so modules can render
    /// without touching runtime handles. Runs after the command pass.
    fn sync_trim_view(&mut self) {
        self.state.trim = self.context.trim_store.as_ref().map(|t| t.current());
        self.state.undo_len = self.context.trim_store.as_ref().map_or(0, |t| t.undo_len());
        self.state.redo_len = self.context.trim_store.as_ref().map_or(0, |t| t.redo_len());
        self.state.is_playing = self.context.player.is_playing();
        self.state.playback_rate = self.context.player.rate();
    }

    fn poll_api(&mut self, ctx: &egui::Context) {
        self.context.ingest_api_results(&mut self.state, ctx);
        self.context.poll_export_job(&self.state, ctx);
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new("🎬 ClipDeck").strong().size(15.0).color(ACCENT),
                    );
                    ui.separator();
                    let project = if self.state.project_title.is_empty() {
                        format!("project {}", self.state.project_id)
                    } else {
                        self.state.project_title.clone()
                    };
                    ui.label(
                        egui::RichText::new(format!("{project} · {}", self.state.owner))
                            .size(11.0)
                            .weak(),
                    );

                    if let Some(notice) = self.state.notice.clone() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(egui::RichText::new("✕").size(10.0)).clicked() {
                                self.pending_cmds.push(EditorCommand::DismissNotice);
                            }
                            let color = match notice.kind {
                                NoticeKind::Info => GREEN_DIM,
                                NoticeKind::Error => RED_DIM,
                            };
                            ui.label(egui::RichText::new(&notice.text).size(11.0).color(color));
                        });
                    }
                });
            });
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for ClipDeckApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &AppStorage { editor: self.state.clone() });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.api.shutdown();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Advance the playhead and drain its update stream ──────────────────
        let dt = ctx.input(|i| i.stable_dt as f64);
        self.context.player.tick(dt);
        while let Ok(t) = self.context.time_rx.try_recv() {
            self.state.current_time = t;
        }
        if self.context.player.is_playing() {
            ctx.request_repaint();
        }

        self.poll_api(ctx);
        self.top_bar(ctx);

        egui::TopBottomPanel::bottom("trim_panel")
            .exact_height(110.0)
            .show(ctx, |ui| {
                self.trim.ui(ui, &self.state, &self.context, &mut self.pending_cmds);
            });

        egui::SidePanel::left("clips_panel")
            .resizable(true)
            .default_width(230.0)
            .min_width(170.0)
            .show(ctx, |ui| {
                self.clips.ui(ui, &self.state, &self.context, &mut self.pending_cmds);
            });

        egui::SidePanel::right("inspector_panel")
            .resizable(true)
            .default_width(250.0)
            .min_width(190.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for (tab, label) in [
                        (InspectorTab::Subtitles, "Subtitles"),
                        (InspectorTab::Brand, "Brand"),
                        (InspectorTab::Export, "Export"),
                    ] {
                        if ui
                            .selectable_label(self.inspector_tab == tab, egui::RichText::new(label).size(11.0))
                            .clicked()
                        {
                            self.inspector_tab = tab;
                        }
                    }
                });
                ui.separator();
                match self.inspector_tab {
                    InspectorTab::Subtitles => {
                        self.subtitles.ui(ui, &self.state, &self.context, &mut self.pending_cmds)
                    }
                    InspectorTab::Brand => {
                        self.brand.ui(ui, &self.state, &self.context, &mut self.pending_cmds)
                    }
                    InspectorTab::Export => {
                        self.export.ui(ui, &self.state, &self.context, &mut self.pending_cmds)
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.preview.ui(ui, &self.state, &self.context, &mut self.pending_cmds);
        });

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<EditorCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }

        self.sync_trim_view();
    }
}
