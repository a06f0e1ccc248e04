use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Dwell range {min}..={max} is empty")]
  EmptyDwellRange { min: u32, max: u32 },
  #[error("Dwell unit must be non-zero")]
  ZeroDwellUnit,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightError {
  #[error("Traffic light was never started")]
  NotStarted,
  #[error("Traffic light is already stopped")]
  AlreadyStopped,
  #[error("Toggle thread panicked")]
  ThreadPanicked,
}
