use crate::config::AppConfig;
use crate::snapshot::RgbFrame;
use eframe::egui;
use eegsim_core::{ControlState, CueSink, Simulation, SignalGenerator, Tick};
use eegsim_ui::visualizer::FigureRects;
use eegsim_ui::{theme, visualizer, widgets};
use std::sync::Arc;
use std::time::Instant;

/// Runs the simulator window until it is closed or Escape is pressed.
pub fn run_gui(
    config: AppConfig,
    generator: SignalGenerator,
    sink: Box<dyn CueSink>,
) -> eframe::Result<()> {
    let dark_mode = config.dark_mode;

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("EEG Signal")
        .with_inner_size([640.0, 470.0])
        .with_resizable(false);

    if let (Some(x), Some(y)) = (config.window_x, config.window_y) {
        viewport = viewport.with_position([x, y]);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "EEG Signal",
        options,
        Box::new(move |cc| {
            theme::setup_custom_style(&cc.egui_ctx, dark_mode);
            Ok(Box::new(EegSimApp::new(config, generator, sink)))
        }),
    )
}

/// Keyboard shortcuts seen this frame.
#[derive(Debug, Default, PartialEq)]
pub(super) struct KeyActions {
    pub save: bool,
    pub close: bool,
}

impl KeyActions {
    /// `S` is ignored while a widget (e.g. a slider's value box) takes text input.
    pub(super) fn from_input(input: &egui::InputState, text_editing: bool) -> Self {
        Self {
            save: !text_editing && input.key_pressed(egui::Key::S),
            close: input.key_pressed(egui::Key::Escape),
        }
    }
}

pub(super) struct EegSimApp {
    pub(super) config: AppConfig,
    pub(super) config_dirty: bool,
    pub(super) last_config_save: Instant,
    pub(super) controls: ControlState,
    pub(super) simulation: Simulation,
    pub(super) sink: Box<dyn CueSink>,
    pub(super) started: Instant,
    pub(super) last_tick_at: Option<Instant>,
    pub(super) last_tick: Option<Tick>,
    /// Samples produced since start
    pub(super) ticks: u64,
    pub(super) figure_rects: Option<FigureRects>,
    pub(super) status_msg: String,
}

impl EegSimApp {
    pub(super) fn new(config: AppConfig, generator: SignalGenerator, sink: Box<dyn CueSink>) -> Self {
        let controls = ControlState::new(config.frequency, config.noise_level);
        Self {
            config,
            config_dirty: false,
            last_config_save: Instant::now(),
            controls,
            simulation: Simulation::new(generator),
            sink,
            started: Instant::now(),
            last_tick_at: None,
            last_tick: None,
            ticks: 0,
            figure_rects: None,
            status_msg: "Press S to save a snapshot, Esc to quit".to_string(),
        }
    }

    pub(super) fn mark_config_dirty(&mut self) {
        self.config_dirty = true;
    }

    pub(super) fn save_config(&mut self) {
        if self.config_dirty {
            self.save_config_now();
            self.config_dirty = false;
        }
    }

    pub(super) fn save_config_now(&mut self) {
        self.config.frequency = self.controls.frequency();
        self.config.noise_level = self.controls.noise_level();
        self.config.save();
    }

    /// Writes the captured frame (cropped to the figure) to the snapshot path.
    fn save_snapshot(&mut self, screenshot: &egui::ColorImage, pixels_per_point: f32) {
        let Some(rects) = self.figure_rects else {
            self.status_msg = "Nothing rendered yet".to_string();
            return;
        };
        let path = self.config.snapshot_path.clone();
        let result = RgbFrame::from_screenshot(screenshot, rects.figure, pixels_per_point)
            .and_then(|frame| frame.save_png(&path));
        self.status_msg = match result {
            Ok(()) => format!("Image saved as {}", path.display()),
            Err(e) => {
                log::warn!("Snapshot failed: {:#}", e);
                format!("Snapshot failed: {}", e)
            }
        };
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let screenshot: Option<Arc<egui::ColorImage>> = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(image) = screenshot {
            self.save_snapshot(&image, ctx.pixels_per_point());
        }

        let text_editing = ctx.wants_keyboard_input();
        let actions = ctx.input(|i| KeyActions::from_input(i, text_editing));
        if actions.save {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
        if actions.close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn render_figure(&mut self, ui: &mut egui::Ui) {
        let samples = self.simulation.window().to_vec();
        let rects = visualizer::render_signal_plot(ui, &samples);
        let command_detected = self.last_tick.is_some_and(|tick| tick.cue.triggered);
        widgets::render_overlay(
            ui,
            rects.plot,
            command_detected,
            self.controls.frequency(),
            self.controls.noise_level(),
            self.config.dark_mode,
        );
        self.figure_rects = Some(rects);
    }
}

impl eframe::App for EegSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            if let Some(pos) = ctx.input(|i| i.viewport().outer_rect).map(|r| r.min) {
                self.config.window_x = Some(pos.x);
                self.config.window_y = Some(pos.y);
            }
            self.save_config_now();
            return;
        }

        // Auto-save dirty config
        if self.config_dirty && self.last_config_save.elapsed().as_secs() >= 5 {
            self.save_config();
            self.last_config_save = Instant::now();
        }

        self.tick_if_due();
        ctx.request_repaint_after(self.tick_interval());

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_controls(ui);
            ui.add_space(6.0);
            self.render_figure(ui);
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&self.status_msg).size(11.0).weak());
        });
    }
}
