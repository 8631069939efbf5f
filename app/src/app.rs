use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use eframe::egui::{self, Key};
use egui_timeline::theme::to_color32;
use egui_timeline::{TimelineState, TimelineTheme, TimelineWidget};
use library::timeline::{OutputHost, TimelineMarks};
use library::{Frame, MainViewModel, Output};
use log::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::manifest;
use crate::ui::preview::show_preview;
use crate::ui::toolbar::{show_toolbar, ToolbarAction};
use crate::utils;

/// View-model notifications, queued by the property observers and applied to
/// the timeline between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewEvent {
    OutputChanged(Option<usize>),
    FrameChanged(Frame),
}

pub struct PreviewApp {
    config: AppConfig,
    script_path: PathBuf,
    view_model: MainViewModel,
    events: Receiver<ViewEvent>,
    timeline: TimelineState,
    theme: TimelineTheme,
    bookmark_label: String,
    status: Option<String>,
}

impl PreviewApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        script_path: PathBuf,
        outputs: Vec<Output>,
    ) -> Self {
        utils::setup_fonts(&cc.egui_ctx);
        let mut app = Self::with_outputs(config, script_path, outputs);
        app.theme = themed(
            &app.config,
            TimelineTheme::from_visuals(&cc.egui_ctx.style().visuals),
        );
        app
    }

    /// Builds the app without a window.
    pub fn with_outputs(config: AppConfig, script_path: PathBuf, outputs: Vec<Output>) -> Self {
        let (tx, events) = mpsc::channel();
        let mut view_model = MainViewModel::new();

        let sender = tx.clone();
        view_model.current_output.subscribe(move |index| {
            let _ = sender.send(ViewEvent::OutputChanged(*index));
        });
        view_model.current_frame.subscribe(move |frame| {
            let _ = tx.send(ViewEvent::FrameChanged(*frame));
        });

        let mut app = Self {
            theme: themed(&config, TimelineTheme::default()),
            timeline: TimelineState::new(config.timeline_scale()),
            config,
            script_path,
            view_model,
            events,
            bookmark_label: String::new(),
            status: None,
        };
        app.view_model.load_outputs(outputs);
        app.apply_view_events();
        app
    }

    pub fn view_model(&self) -> &MainViewModel {
        &self.view_model
    }

    pub fn timeline(&self) -> &TimelineState {
        &self.timeline
    }

    /// Applies `--output` and `--frame`.
    pub fn select_startup(&mut self, output: Option<usize>, frame: Option<u64>) {
        if let Some(index) = output {
            if let Err(e) = self.view_model.switch_output(index) {
                warn!("Ignoring --output: {}", e);
            }
        }
        if let Some(frame) = frame {
            self.view_model.switch_frame(Frame(frame));
        }
        self.apply_view_events();
    }

    fn apply_view_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!("View event: {:?}", event);
            match event {
                ViewEvent::OutputChanged(_) => self.sync_timeline_output(),
                ViewEvent::FrameChanged(frame) => {
                    if let Some(output) = self.view_model.current() {
                        let host = OutputHost::new(output, self.config.timeline_scale());
                        self.timeline.timeline_mut().set_position(frame, &host);
                    }
                }
            }
        }
    }

    fn sync_timeline_output(&mut self) {
        let timeline = self.timeline.timeline_mut();
        match self.view_model.current() {
            Some(output) => {
                timeline.set_duration(Frame(output.total_frames), output.total_time());
                timeline.set_marks(output.marks.clone());
            }
            None => {
                timeline.set_duration(Frame::ZERO, Duration::ZERO);
                timeline.set_marks(TimelineMarks::new());
            }
        }
    }

    pub fn apply_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::SwitchOutput(index) => {
                if let Err(e) = self.view_model.switch_output(index) {
                    error!("{}", e);
                }
            }
            ToolbarAction::SwitchFrame(frame) => self.view_model.switch_frame(frame),
            ToolbarAction::StepFrames(delta) => {
                let current = self.view_model.current_frame.get().0;
                let target = if delta < 0 {
                    current.saturating_sub(delta.unsigned_abs())
                } else {
                    current.saturating_add(delta.unsigned_abs())
                };
                self.view_model.switch_frame(Frame(target));
            }
            ToolbarAction::ToggleBookmark => {
                match self.view_model.toggle_bookmark(self.bookmark_label.trim()) {
                    Ok(added) => {
                        debug!("Bookmark {}", if added { "added" } else { "removed" });
                        self.timeline.timeline_mut().bookmarks_changed();
                    }
                    Err(e) => error!("Failed to toggle bookmark: {}", e),
                }
            }
            ToolbarAction::LoadScript => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Script manifest", &["toml"])
                    .pick_file()
                {
                    self.load_script(&path);
                }
            }
            ToolbarAction::Reload => {
                let path = self.script_path.clone();
                self.load_script(&path);
            }
        }
        self.apply_view_events();
    }

    /// Replaces the outputs with those of `path`. On failure the current
    /// outputs are kept and the error is shown in the preview panel.
    pub fn load_script(&mut self, path: &Path) {
        match manifest::load_manifest(path, self.config.scene_mark_color) {
            Ok(outputs) => {
                info!("Script loaded from {}", path.display());
                self.script_path = path.to_path_buf();
                self.status = None;
                self.view_model.load_outputs(outputs);
            }
            Err(e) => {
                error!("Failed to load script {}: {}", path.display(), e);
                self.status = Some(format!("Failed to load {}: {}", path.display(), e));
            }
        }
        self.apply_view_events();
    }

    fn keyboard_actions(ctx: &egui::Context) -> Vec<ToolbarAction> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }
        ctx.input(|i| {
            let mut actions = Vec::new();
            if i.key_pressed(Key::ArrowLeft) {
                actions.push(ToolbarAction::StepFrames(-1));
            }
            if i.key_pressed(Key::ArrowRight) {
                actions.push(ToolbarAction::StepFrames(1));
            }
            if i.key_pressed(Key::B) {
                actions.push(ToolbarAction::ToggleBookmark);
            }
            actions
        })
    }
}

fn themed(config: &AppConfig, base: TimelineTheme) -> TimelineTheme {
    TimelineTheme {
        bookmark: to_color32(config.bookmark_color),
        cursor: to_color32(config.cursor_color),
        ..base
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_view_events();

        let mut actions = Self::keyboard_actions(ctx);

        egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| {
            actions.extend(show_toolbar(ui, &self.view_model, &mut self.bookmark_label));
        });

        egui::TopBottomPanel::bottom("timeline")
            .resizable(false)
            .show(ctx, |ui| match self.view_model.current() {
                Some(output) => {
                    let host = OutputHost::new(output, self.config.timeline_scale());
                    let response = TimelineWidget::new(&mut self.timeline, &self.theme).show(ui, &host);
                    if let Some(click) = response.clicked {
                        actions.push(ToolbarAction::SwitchFrame(click.frame));
                    }
                }
                None => {
                    ui.weak("No outputs");
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let frame = *self.view_model.current_frame.get();
            if let Some(target) = show_preview(
                ui,
                self.view_model.current(),
                frame,
                self.status.as_deref(),
            ) {
                actions.push(ToolbarAction::SwitchFrame(target));
            }
        });

        for action in actions {
            self.apply_action(action);
        }
        if self.timeline.timeline_mut().take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
