//! Random number generation adapter

use rand::Rng;

use crate::application::ports::outbound::RandomPort;

/// Production random number generator backed by `rand::thread_rng()`
#[derive(Debug, Clone, Default)]
pub struct ThreadRngAdapter;

impl ThreadRngAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRngAdapter {
    fn random_range(&self, min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        let rng = ThreadRngAdapter::new();
        let mut seen = [false; 20];
        for _ in 0..2000 {
            let face = rng.random_range(1, 20);
            assert!((1..=20).contains(&face));
            seen[(face - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every face should come up in 2000 rolls");
    }
}
