use eegsim_core::constants::{FREQUENCY_STEP, MAX_FREQUENCY, MAX_NOISE_LEVEL, NOISE_STEP};
use eframe::egui;

use super::app::EegSimApp;

impl EegSimApp {
    /// Renders the frequency and noise sliders.
    pub(super) fn render_controls(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("control_grid").num_columns(2).show(ui, |ui| {
            ui.label("Frequency (Hz):");
            let mut frequency = self.controls.frequency();
            let slider = egui::Slider::new(&mut frequency, 0.0..=MAX_FREQUENCY)
                .step_by(FREQUENCY_STEP as f64)
                .fixed_decimals(1);
            if ui.add(slider).changed() {
                self.controls.set_frequency(frequency);
                self.mark_config_dirty();
            }
            ui.end_row();

            ui.label("Noise level:");
            let mut noise_level = self.controls.noise_level();
            let slider = egui::Slider::new(&mut noise_level, 0.0..=MAX_NOISE_LEVEL)
                .step_by(NOISE_STEP as f64)
                .fixed_decimals(2);
            if ui.add(slider).changed() {
                self.controls.set_noise_level(noise_level);
                self.mark_config_dirty();
            }
            ui.end_row();
        });
    }
}
