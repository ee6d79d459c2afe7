//! Injected entropy for confidence jitter
//!
//! The jitter is cosmetic — it spreads confidence values across similar
//! reports so dashboards do not show suspicious rows of identical numbers.
//! It never feeds an admission, type, or urgency decision, and tests swap
//! in a fixed source to assert exact bounds without flakiness.

use rand::Rng;

/// Source of the uniform confidence jitter
pub trait EntropySource: Send + Sync {
    /// A sample in `[-span, +span]`.
    fn jitter(&self, span: f64) -> f64;
}

/// Production source backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngEntropy;

impl EntropySource for ThreadRngEntropy {
    fn jitter(&self, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(-span..=span)
    }
}

/// Deterministic source for tests — always returns its value clamped to the
/// requested span.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub f64);

impl EntropySource for FixedEntropy {
    fn jitter(&self, span: f64) -> f64 {
        self.0.clamp(-span, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_stays_in_span() {
        let source = ThreadRngEntropy;
        for _ in 0..200 {
            let j = source.jitter(2.65);
            assert!((-2.65..=2.65).contains(&j));
        }
    }

    #[test]
    fn test_zero_span() {
        assert_eq!(ThreadRngEntropy.jitter(0.0), 0.0);
    }

    #[test]
    fn test_fixed_clamps() {
        assert_eq!(FixedEntropy(10.0).jitter(2.65), 2.65);
        assert_eq!(FixedEntropy(-10.0).jitter(2.65), -2.65);
        assert_eq!(FixedEntropy(1.5).jitter(2.65), 1.5);
    }
}
