//! Threshold-driven cue classification and the change-only playback policy.

use crate::constants::{LOW_BAND_LIMIT, MID_BAND_LIMIT, TRIGGER_AMPLITUDE};
use log::debug;

/// Sound played for a detected command, chosen by frequency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCategory {
    /// Below 7 Hz
    Low,
    /// 7 Hz up to (not including) 15 Hz
    Mid,
    /// 15 Hz and above
    High,
}

impl SoundCategory {
    pub const ALL: [SoundCategory; 3] = [Self::Low, Self::Mid, Self::High];

    pub fn for_frequency(frequency: f32) -> Self {
        if frequency < LOW_BAND_LIMIT {
            Self::Low
        } else if frequency < MID_BAND_LIMIT {
            Self::Mid
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }

    /// File name of the clip loaded for this category.
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Low => "low_beep.wav",
            Self::Mid => "mid_beep.wav",
            Self::High => "high_beep.wav",
        }
    }

    /// Pitch of the synthesized fallback beep.
    pub fn tone_hz(&self) -> f32 {
        match self {
            Self::Low => 440.0,
            Self::Mid => 660.0,
            Self::High => 880.0,
        }
    }
}

/// Result of classifying one sample. Recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cue {
    pub triggered: bool,
    pub category: Option<SoundCategory>,
}

impl Cue {
    pub const NONE: Cue = Cue {
        triggered: false,
        category: None,
    };
}

pub fn classify(sample: f32, frequency: f32) -> Cue {
    if sample > TRIGGER_AMPLITUDE {
        Cue {
            triggered: true,
            category: Some(SoundCategory::for_frequency(frequency)),
        }
    } else {
        Cue::NONE
    }
}

/// Audio side of the cue state machine.
pub trait CueSink {
    /// Silences whatever is currently playing.
    fn stop_all(&mut self);
    fn play(&mut self, category: SoundCategory);
}

/// Tracks the active sound category. States are none/low/mid/high; a
/// transition happens only when a triggered cue selects a different category.
#[derive(Debug, Default)]
pub struct CueState {
    active: Option<SoundCategory>,
}

impl CueState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<SoundCategory> {
        self.active
    }

    /// Applies a cue, restarting playback only on a category change.
    /// Returns true when playback was (re)started.
    pub fn apply<S: CueSink + ?Sized>(&mut self, cue: &Cue, sink: &mut S) -> bool {
        let Some(category) = cue.category else {
            return false;
        };
        if self.active == Some(category) {
            return false;
        }

        debug!("cue category {:?} -> {:?}", self.active, category);
        sink.stop_all();
        sink.play(category);
        self.active = Some(category);
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    pub(crate) enum SinkCall {
        Stop,
        Play(SoundCategory),
    }

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub calls: Vec<SinkCall>,
    }

    impl RecordingSink {
        pub fn plays(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, SinkCall::Play(_)))
                .count()
        }
    }

    impl CueSink for RecordingSink {
        fn stop_all(&mut self) {
            self.calls.push(SinkCall::Stop);
        }

        fn play(&mut self, category: SoundCategory) {
            self.calls.push(SinkCall::Play(category));
        }
    }

    #[test]
    fn test_classify_bands() {
        assert_eq!(
            classify(0.9, 5.0),
            Cue {
                triggered: true,
                category: Some(SoundCategory::Low)
            }
        );
        assert_eq!(classify(0.9, 10.0).category, Some(SoundCategory::Mid));
        assert_eq!(classify(0.9, 20.0).category, Some(SoundCategory::High));
    }

    #[test]
    fn test_classify_band_edges() {
        assert_eq!(SoundCategory::for_frequency(6.9), SoundCategory::Low);
        assert_eq!(SoundCategory::for_frequency(7.0), SoundCategory::Mid);
        assert_eq!(SoundCategory::for_frequency(14.9), SoundCategory::Mid);
        assert_eq!(SoundCategory::for_frequency(15.0), SoundCategory::High);
    }

    #[test]
    fn test_below_threshold_is_no_op() {
        for freq in [0.0, 5.0, 10.0, 20.0, 50.0] {
            assert_eq!(classify(0.5, freq), Cue::NONE);
        }
        // Threshold is strict
        assert!(!classify(0.8, 10.0).triggered);
    }

    #[test]
    fn test_first_trigger_starts_playback() {
        let mut state = CueState::new();
        let mut sink = RecordingSink::default();
        assert!(state.apply(&classify(0.9, 5.0), &mut sink));
        assert_eq!(
            sink.calls,
            vec![SinkCall::Stop, SinkCall::Play(SoundCategory::Low)]
        );
        assert_eq!(state.active(), Some(SoundCategory::Low));
    }

    #[test]
    fn test_repeated_trigger_plays_once() {
        let mut state = CueState::new();
        let mut sink = RecordingSink::default();
        for _ in 0..25 {
            state.apply(&classify(0.95, 10.0), &mut sink);
        }
        assert_eq!(sink.plays(), 1);

        // Moving within the band changes nothing
        state.apply(&classify(0.95, 14.0), &mut sink);
        assert_eq!(sink.plays(), 1);

        // Crossing into the next band restarts playback
        assert!(state.apply(&classify(0.95, 15.0), &mut sink));
        assert_eq!(sink.plays(), 2);
        assert_eq!(sink.calls.last(), Some(&SinkCall::Play(SoundCategory::High)));
    }

    #[test]
    fn test_untriggered_tick_keeps_active_category() {
        let mut state = CueState::new();
        let mut sink = RecordingSink::default();
        state.apply(&classify(0.9, 20.0), &mut sink);
        assert!(!state.apply(&classify(0.1, 3.0), &mut sink));
        assert_eq!(state.active(), Some(SoundCategory::High));
        assert_eq!(sink.calls.len(), 2);
    }
}
