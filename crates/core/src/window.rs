use crate::constants::WINDOW_SIZE;
use ringbuf::traits::{Consumer, Observer, RingBuffer};
use ringbuf::HeapRb;

/// Fixed-capacity history of the most recent samples, oldest first.
///
/// Starts zero-filled so its length always equals its capacity.
pub struct SignalWindow {
    buf: HeapRb<f32>,
}

impl Default for SignalWindow {
    fn default() -> Self {
        Self::new(WINDOW_SIZE)
    }
}

impl SignalWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut buf = HeapRb::<f32>::new(capacity);
        for _ in 0..capacity {
            buf.push_overwrite(0.0);
        }
        Self { buf }
    }

    /// Appends a sample, evicting the oldest one.
    pub fn push(&mut self, sample: f32) {
        self.buf.push_overwrite(sample);
    }

    pub fn len(&self) -> usize {
        self.buf.occupied_len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity().get()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> + '_ {
        self.buf.iter()
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.buf.iter().copied().collect()
    }

    pub fn latest(&self) -> f32 {
        self.buf.iter().last().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zero_filled() {
        let window = SignalWindow::default();
        assert_eq!(window.len(), 100);
        assert!(window.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_length_is_fixed_after_overflow() {
        let mut window = SignalWindow::default();
        for i in 0..150 {
            window.push(i as f32);
        }
        assert_eq!(window.len(), 100);
        let samples = window.to_vec();
        // The first 50 pushes were evicted
        assert_eq!(samples[0], 50.0);
        assert_eq!(samples[99], 149.0);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut window = SignalWindow::new(4);
        window.push(1.0);
        window.push(2.0);
        window.push(3.0);
        assert_eq!(window.to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(window.latest(), 3.0);
    }

    #[test]
    fn test_zero_capacity_is_bumped() {
        let mut window = SignalWindow::new(0);
        window.push(0.5);
        assert_eq!(window.capacity(), 1);
        assert_eq!(window.to_vec(), vec![0.5]);
    }
}
