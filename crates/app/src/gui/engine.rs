use eegsim_core::constants::TICK_INTERVAL_MS;
use std::time::{Duration, Instant};

use super::app::EegSimApp;

impl EegSimApp {
    pub(super) fn tick_interval(&self) -> Duration {
        Duration::from_millis(TICK_INTERVAL_MS)
    }

    /// Advances the simulation by one sample if the poll interval has passed.
    ///
    /// Input events can trigger extra repaints; those redraw without ticking.
    pub(super) fn tick_if_due(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_tick_at {
            if now.duration_since(last) < self.tick_interval() {
                return;
            }
        }
        self.last_tick_at = Some(now);

        let elapsed = now.duration_since(self.started).as_secs_f64();
        let tick = self
            .simulation
            .tick(elapsed, &self.controls, self.sink.as_mut());

        if tick.cue_changed {
            if let Some(category) = tick.cue.category {
                log::info!(
                    "Command detected at {:.1} Hz, switching to {} cue",
                    self.controls.frequency(),
                    category.label()
                );
            }
        }
        self.last_tick = Some(tick);
        self.ticks += 1;
    }
}
