use crate::controls::ControlState;
use crate::cue::{classify, Cue, CueSink, CueState, SoundCategory};
use crate::generator::SignalGenerator;
use crate::window::SignalWindow;

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub sample: f32,
    pub cue: Cue,
    /// Playback was restarted with a new category this tick
    pub cue_changed: bool,
}

/// One tick pipeline: generate, buffer, classify, drive audio.
pub struct Simulation {
    generator: SignalGenerator,
    window: SignalWindow,
    cue_state: CueState,
}

impl Simulation {
    pub fn new(generator: SignalGenerator) -> Self {
        Self {
            generator,
            window: SignalWindow::default(),
            cue_state: CueState::new(),
        }
    }

    pub fn tick<S: CueSink + ?Sized>(
        &mut self,
        elapsed_secs: f64,
        controls: &ControlState,
        sink: &mut S,
    ) -> Tick {
        let sample = self
            .generator
            .sample(elapsed_secs, controls.frequency(), controls.noise_level());
        self.window.push(sample);

        let cue = classify(sample, controls.frequency());
        let cue_changed = self.cue_state.apply(&cue, sink);

        Tick {
            sample,
            cue,
            cue_changed,
        }
    }

    pub fn window(&self) -> &SignalWindow {
        &self.window
    }

    pub fn active_category(&self) -> Option<SoundCategory> {
        self.cue_state.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAMPLING_RATE;
    use crate::cue::tests::RecordingSink;

    #[test]
    fn test_tick_feeds_window() {
        let mut sim = Simulation::new(SignalGenerator::with_seed(5));
        let mut sink = RecordingSink::default();
        let controls = ControlState::new(10.0, 0.5);
        let tick = sim.tick(0.123, &controls, &mut sink);
        assert_eq!(sim.window().len(), 100);
        assert_eq!(sim.window().latest(), tick.sample);
    }

    #[test]
    fn test_noise_free_run_triggers_once_per_band() {
        let mut sim = Simulation::new(SignalGenerator::with_seed(5));
        let mut sink = RecordingSink::default();
        let controls = ControlState::new(1.0, 0.0);

        // Two seconds of a 1 Hz sine peaks twice above the threshold
        for i in 0..(2 * SAMPLING_RATE) {
            sim.tick(i as f64 / SAMPLING_RATE as f64, &controls, &mut sink);
        }
        assert_eq!(sink.plays(), 1);
        assert_eq!(sim.active_category(), Some(SoundCategory::Low));
    }

    #[test]
    fn test_band_change_restarts_sound() {
        let mut sim = Simulation::new(SignalGenerator::with_seed(5));
        let mut sink = RecordingSink::default();
        // t = 0.25 puts a 1 Hz sine at its peak; 9 Hz and 21 Hz land there too
        let t = 0.25;
        let low = sim.tick(t, &ControlState::new(1.0, 0.0), &mut sink);
        let mid = sim.tick(t, &ControlState::new(9.0, 0.0), &mut sink);
        let high = sim.tick(t, &ControlState::new(21.0, 0.0), &mut sink);
        assert!(low.cue_changed && mid.cue_changed && high.cue_changed);
        assert_eq!(sink.plays(), 3);
        assert_eq!(sim.active_category(), Some(SoundCategory::High));
    }
}
