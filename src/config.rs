use std::{ops::RangeInclusive, time::Duration};

use rand::Rng;

use crate::error::ConfigError;

/// Each dwell is a whole number of `dwell_unit`s drawn from `dwell`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightConfig {
  pub dwell: RangeInclusive<u32>,
  pub dwell_unit: Duration,
  pub idle: Duration,
}

impl LightConfig {
  pub fn set_dwell(mut self, dwell: RangeInclusive<u32>) -> Self {
    self.dwell = dwell;
    self
  }

  pub fn set_dwell_unit(mut self, dwell_unit: Duration) -> Self {
    self.dwell_unit = dwell_unit;
    self
  }

  pub fn set_idle(mut self, idle: Duration) -> Self {
    self.idle = idle;
    self
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.dwell.is_empty() {
      return Err(ConfigError::EmptyDwellRange {
        min: *self.dwell.start(),
        max: *self.dwell.end(),
      });
    }
    if self.dwell_unit.is_zero() {
      return Err(ConfigError::ZeroDwellUnit);
    }
    Ok(())
  }

  pub fn min_dwell(&self) -> Duration {
    self.dwell_unit.saturating_mul(*self.dwell.start())
  }

  pub fn max_dwell(&self) -> Duration {
    self.dwell_unit.saturating_mul(*self.dwell.end())
  }

  pub(crate) fn sample_dwell(&self, rng: &mut impl Rng) -> Duration {
    let units = rng.gen_range(self.dwell.clone());
    self.dwell_unit.saturating_mul(units)
  }
}

impl Default for LightConfig {
  fn default() -> Self {
    Self {
      dwell: 4..=5,
      dwell_unit: Duration::from_secs(1),
      idle: Duration::from_millis(1),
    }
  }
}

#[cfg(test)]
mod test {
  use std::{collections::HashSet, time::Duration};

  use rand::{rngs::StdRng, SeedableRng};

  use super::LightConfig;
  use crate::error::ConfigError;

  #[test]
  fn default_timing() {
    let config = LightConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.min_dwell(), Duration::from_secs(4));
    assert_eq!(config.max_dwell(), Duration::from_secs(5));
    assert_eq!(config.idle, Duration::from_millis(1));
  }

  #[test]
  fn samples_two_outcomes() {
    let config = LightConfig::default();
    let mut rng = StdRng::seed_from_u64(7);

    let seen = (0..1000)
      .map(|_| config.sample_dwell(&mut rng))
      .collect::<HashSet<_>>();

    assert_eq!(
      seen,
      HashSet::from([Duration::from_secs(4), Duration::from_secs(5)])
    );
  }

  #[test]
  fn scaled_unit() {
    let config = LightConfig::default()
      .set_dwell(2..=2)
      .set_dwell_unit(Duration::from_millis(10));
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(config.sample_dwell(&mut rng), Duration::from_millis(20));
  }

  #[test]
  #[allow(clippy::reversed_empty_ranges)]
  fn empty_range() {
    let config = LightConfig::default().set_dwell(5..=4);

    assert_eq!(
      config.validate(),
      Err(ConfigError::EmptyDwellRange { min: 5, max: 4 })
    );
  }

  #[test]
  fn zero_unit() {
    let config = LightConfig::default().set_dwell_unit(Duration::ZERO);

    assert_eq!(config.validate(), Err(ConfigError::ZeroDwellUnit));
  }
}
