use egui::{Rect, RichText};
use egui_plot::{Line, Plot, PlotPoints};

use crate::theme::PLOT_BLUE;

pub const FIGURE_TITLE: &str = "Simulated EEG Signal";
pub const PLOT_WIDTH: f32 = 600.0;
pub const PLOT_HEIGHT: f32 = 300.0;

/// Screen areas occupied by the last drawn figure.
#[derive(Debug, Clone, Copy)]
pub struct FigureRects {
    /// Title plus plot; this is what a snapshot captures
    pub figure: Rect,
    pub plot: Rect,
}

/// Draws the sample window as a line plot (amplitude vs. index).
pub fn render_signal_plot(ui: &mut egui::Ui, samples: &[f32]) -> FigureRects {
    let inner = ui.vertical(|ui| {
        ui.set_width(PLOT_WIDTH);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(FIGURE_TITLE).strong().size(14.0));
        });

        let line = Line::new(PlotPoints::from_ys_f32(samples))
            .color(PLOT_BLUE)
            .width(1.5);

        Plot::new("eeg_signal")
            .width(PLOT_WIDTH)
            .height(PLOT_HEIGHT)
            .x_axis_label("Time")
            .y_axis_label("Amplitude")
            .include_x(0.0)
            .include_x(samples.len().saturating_sub(1) as f64)
            .include_y(-1.5)
            .include_y(1.5)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            })
            .response
            .rect
    });

    FigureRects {
        figure: inner.response.rect,
        plot: inner.inner,
    }
}
