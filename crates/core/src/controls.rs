use crate::constants::{
    DEFAULT_FREQUENCY, DEFAULT_NOISE_LEVEL, FREQUENCY_STEP, MAX_FREQUENCY, MAX_NOISE_LEVEL,
    NOISE_STEP,
};

/// User-adjustable parameters read once per tick.
///
/// Values are clamped to the slider range and snapped to the slider step, so a
/// `ControlState` always corresponds to a reachable slider position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    frequency: f32,
    noise_level: f32,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY, DEFAULT_NOISE_LEVEL)
    }
}

impl ControlState {
    pub fn new(frequency: f32, noise_level: f32) -> Self {
        Self {
            frequency: snap(frequency, MAX_FREQUENCY, FREQUENCY_STEP),
            noise_level: snap(noise_level, MAX_NOISE_LEVEL, NOISE_STEP),
        }
    }

    /// Builds the state from integer slider positions (x0.1 Hz, x0.01).
    pub fn from_positions(frequency_pos: u32, noise_pos: u32) -> Self {
        Self::new(
            frequency_pos as f32 * FREQUENCY_STEP,
            noise_pos as f32 * NOISE_STEP,
        )
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn noise_level(&self) -> f32 {
        self.noise_level
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = snap(frequency, MAX_FREQUENCY, FREQUENCY_STEP);
    }

    pub fn set_noise_level(&mut self, noise_level: f32) {
        self.noise_level = snap(noise_level, MAX_NOISE_LEVEL, NOISE_STEP);
    }
}

fn snap(value: f32, max: f32, step: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    ((value.clamp(0.0, max) / step).round() * step).min(max)
}
