//! Shared constants for the EEG cue simulator.

/// Number of samples kept in the plotting window
pub const WINDOW_SIZE: usize = 100;

/// Simulated sampling rate in Hz (one tick every 20ms)
pub const SAMPLING_RATE: u32 = 50;

/// Amplitude above which a sample counts as a detected command
pub const TRIGGER_AMPLITUDE: f32 = 0.8;

/// Frequency bands (Hz) used to pick a sound category
pub const LOW_BAND_LIMIT: f32 = 7.0;
pub const MID_BAND_LIMIT: f32 = 15.0;

/// Slider ranges
pub const MAX_FREQUENCY: f32 = 50.0;
pub const FREQUENCY_STEP: f32 = 0.1;
pub const MAX_NOISE_LEVEL: f32 = 1.0;
pub const NOISE_STEP: f32 = 0.01;

pub const DEFAULT_FREQUENCY: f32 = 10.0;
pub const DEFAULT_NOISE_LEVEL: f32 = 0.5;

/// Poll cadence of the interactive and headless loops
pub const TICK_INTERVAL_MS: u64 = 1000 / SAMPLING_RATE as u64;
