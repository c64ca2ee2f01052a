//! Random number generation port
//!
//! Dice are rolled through this port so tests can pin the die face.

/// Random number generation abstraction
///
/// # Implementations
///
/// - `ThreadRngAdapter` in infrastructure (production, uses `rand::thread_rng()`)
/// - `FixedRandomPort` for deterministic tests
pub trait RandomPort: Send + Sync {
    /// Generate a random integer in range [min, max] (inclusive on both ends)
    fn random_range(&self, min: i64, max: i64) -> i64;
}

/// Fixed random port for deterministic testing.
///
/// Returns values from a provided sequence, cycling if needed.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedRandomPort {
    values: Vec<i64>,
    index: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl FixedRandomPort {
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Always return the same value
    pub fn constant(value: i64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomPort for FixedRandomPort {
    fn random_range(&self, _min: i64, _max: i64) -> i64 {
        let idx = self
            .index
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.values[idx % self.values.len()]
    }
}
