use egui::{Align2, FontId, Pos2, Rect};

use crate::theme::{readout_color, BANNER_RED};

pub const COMMAND_BANNER: &str = "Command Detected: Action Triggered!";

pub fn frequency_readout(frequency: f32) -> String {
    format!("Freq: {:.1} Hz", frequency)
}

pub fn noise_readout(noise_level: f32) -> String {
    format!("Noise: {:.2}", noise_level)
}

/// Paints the status text over the plot area.
///
/// Offsets are measured from the plot's top-left corner to each line's baseline.
pub fn render_overlay(
    ui: &egui::Ui,
    plot_rect: Rect,
    command_detected: bool,
    frequency: f32,
    noise_level: f32,
    dark_mode: bool,
) {
    let painter = ui.painter_at(plot_rect);
    let origin = plot_rect.min;
    let text_color = readout_color(dark_mode);

    if command_detected {
        painter.text(
            Pos2::new(origin.x + 10.0, origin.y + 30.0),
            Align2::LEFT_BOTTOM,
            COMMAND_BANNER,
            FontId::proportional(18.0),
            BANNER_RED,
        );
    }

    painter.text(
        Pos2::new(origin.x + 10.0, origin.y + 50.0),
        Align2::LEFT_BOTTOM,
        frequency_readout(frequency),
        FontId::proportional(15.0),
        text_color,
    );
    painter.text(
        Pos2::new(origin.x + 10.0, origin.y + 80.0),
        Align2::LEFT_BOTTOM,
        noise_readout(noise_level),
        FontId::proportional(15.0),
        text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_formatting() {
        assert_eq!(frequency_readout(10.0), "Freq: 10.0 Hz");
        assert_eq!(frequency_readout(12.34), "Freq: 12.3 Hz");
        assert_eq!(noise_readout(0.5), "Noise: 0.50");
        assert_eq!(noise_readout(0.0), "Noise: 0.00");
    }
}
