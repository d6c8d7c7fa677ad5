use crate::fuzzy::DEFAULT_THRESHOLD;
use anyhow::{bail, Result};

/// How many index keywords a single query keyword may be credited with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Only the first similar keyword in ascending key order.
    #[default]
    FirstMatch,
    /// Every similar keyword.
    AllMatches,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub threshold: f64,
    pub policy: MatchPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, policy: MatchPolicy::FirstMatch }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.threshold) {
            bail!("similarity threshold must be in [0, 1), got {}", self.threshold);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = SearchConfig::default();
        assert_eq!(c.threshold, 0.70);
        assert_eq!(c.policy, MatchPolicy::FirstMatch);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        for t in [1.0, 1.5, -0.1, f64::NAN] {
            let c = SearchConfig { threshold: t, ..SearchConfig::default() };
            assert!(c.validate().is_err(), "{t} accepted");
        }
    }
}
