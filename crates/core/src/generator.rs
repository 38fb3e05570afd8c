use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f64::consts::PI;

/// Produces one noisy sample per tick: a sine at the requested frequency plus
/// scaled Gaussian noise.
pub struct SignalGenerator {
    rng: StdRng,
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SignalGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded generator; identical seeds give identical sample sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `sin(2*pi*freq*t) + noise_level * N(0, 1)`
    ///
    /// The noise source is left untouched when `noise_level` is zero.
    pub fn sample(&mut self, t: f64, frequency: f32, noise_level: f32) -> f32 {
        let clean = clean_sample(t, frequency);
        if noise_level == 0.0 {
            return clean;
        }
        let z: f32 = self.rng.sample(StandardNormal);
        clean + noise_level * z
    }
}

/// Noise-free component of the simulated signal.
pub fn clean_sample(t: f64, frequency: f32) -> f32 {
    (2.0 * PI * frequency as f64 * t).sin() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_noise_is_pure_sine() {
        let mut gen = SignalGenerator::with_seed(7);
        for i in 0..50 {
            let t = i as f64 * 0.02;
            let expected = (2.0 * PI * 10.0 * t).sin() as f32;
            assert_eq!(gen.sample(t, 10.0, 0.0), expected);
        }
    }

    #[test]
    fn test_same_seed_reproduces_sequence() {
        let mut a = SignalGenerator::with_seed(42);
        let mut b = SignalGenerator::with_seed(42);
        for i in 0..100 {
            let t = i as f64 / 50.0;
            assert_eq!(a.sample(t, 3.5, 0.7), b.sample(t, 3.5, 0.7));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SignalGenerator::with_seed(1);
        let mut b = SignalGenerator::with_seed(2);
        let diverged = (0..20).any(|i| {
            let t = i as f64 / 50.0;
            a.sample(t, 10.0, 0.5) != b.sample(t, 10.0, 0.5)
        });
        assert!(diverged);
    }

    #[test]
    fn test_zero_noise_does_not_consume_randomness() {
        let mut a = SignalGenerator::with_seed(9);
        let mut b = SignalGenerator::with_seed(9);
        a.sample(0.1, 10.0, 0.0);
        a.sample(0.2, 10.0, 0.0);
        assert_eq!(a.sample(0.3, 10.0, 0.4), b.sample(0.3, 10.0, 0.4));
    }

    #[test]
    fn test_noise_stays_plausible() {
        let mut gen = SignalGenerator::with_seed(3);
        let n = 2000;
        let mean: f32 = (0..n)
            .map(|_| gen.sample(0.0, 10.0, 1.0))
            .sum::<f32>()
            / n as f32;
        // sin(0) == 0, so the mean is the noise mean
        assert!(mean.abs() < 0.1, "noise mean drifted: {}", mean);
    }
}
