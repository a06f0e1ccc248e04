use std::{
  sync::{
    atomic::{AtomicBool, AtomicU8, Ordering},
    Arc, Mutex, PoisonError,
  },
  thread::{self, JoinHandle},
  time::{Duration, Instant},
};

use crossing_utils::thread::{HandoffQueue, RecvError, Signal};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::{
  config::LightConfig,
  error::{ConfigError, LightError},
};

mod phase;

pub use phase::Phase;

struct Shared {
  phase: AtomicU8,
  transitions: HandoffQueue<Phase>,
  config: LightConfig,
  stop: Signal,
}

impl Shared {
  #[inline]
  fn phase(&self) -> Phase {
    Phase::from_u8(self.phase.load(Ordering::Acquire))
  }
}

/// Dropping the light does not stop the toggle loop, only `stop` does.
pub struct TrafficLight {
  shared: Arc<Shared>,
  started: AtomicBool,
  handle: Mutex<Option<JoinHandle<()>>>,
}

impl TrafficLight {
  pub fn new() -> Self {
    Self::from_valid_config(LightConfig::default())
  }

  pub fn with_config(config: LightConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self::from_valid_config(config))
  }

  fn from_valid_config(config: LightConfig) -> Self {
    TrafficLight {
      shared: Arc::new(Shared {
        phase: AtomicU8::new(Phase::Red as u8),
        transitions: HandoffQueue::new(),
        config,
        stop: Signal::new(),
      }),
      started: AtomicBool::new(false),
      handle: Mutex::new(None),
    }
  }

  pub fn start(&self) -> bool {
    let mut handle = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
    if self.started.swap(true, Ordering::AcqRel) {
      warn!("Traffic light already started");
      return false;
    }

    let shared = Arc::clone(&self.shared);
    let spawned = thread::Builder::new()
      .name("traffic-light".into())
      .spawn(move || cycle_through_phases(shared));

    match spawned {
      Ok(spawned) => {
        info!("Starting traffic light");
        *handle = Some(spawned);
        true
      }
      Err(err) => {
        error!("Failed to spawn toggle thread: {}", err);
        self.started.store(false, Ordering::Release);
        false
      }
    }
  }

  #[inline]
  pub fn is_started(&self) -> bool {
    self.started.load(Ordering::Acquire)
  }

  #[inline]
  pub fn current_phase(&self) -> Phase {
    self.shared.phase()
  }

  #[inline]
  pub fn config(&self) -> &LightConfig {
    &self.shared.config
  }

  /// Only fails once the light is stopped.
  pub fn wait_until_green(&self) -> Result<(), RecvError> {
    self.receive_green().map(|_| ())
  }

  pub fn wait_until_green_timeout(&self, timeout: Duration) -> Result<(), RecvError> {
    let Some(deadline) = Instant::now().checked_add(timeout) else {
      return self.wait_until_green();
    };

    loop {
      let remaining = deadline.saturating_duration_since(Instant::now());
      if self.shared.transitions.receive_timeout(remaining)? == Phase::Green {
        return Ok(());
      }
      thread::sleep(self.shared.config.idle);
    }
  }

  /// Returns the transition the caller was released on.
  pub(crate) fn receive_green(&self) -> Result<Phase, RecvError> {
    loop {
      let phase = self.shared.transitions.receive()?;
      if phase == Phase::Green {
        return Ok(phase);
      }
      thread::sleep(self.shared.config.idle);
    }
  }

  pub fn next_transition(&self) -> Result<Phase, RecvError> {
    self.shared.transitions.receive()
  }

  /// Blocked waiters are released with `RecvError::Closed`.
  pub fn stop(&self) -> Result<(), LightError> {
    if !self.is_started() {
      return Err(LightError::NotStarted);
    }

    let handle = self
      .handle
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .take()
      .ok_or(LightError::AlreadyStopped)?;

    debug!("Stopping traffic light");
    self.shared.stop.signal();
    self.shared.transitions.close();

    handle.join().map_err(|_| LightError::ThreadPanicked)?;
    info!("Traffic light stopped");
    Ok(())
  }
}

impl Default for TrafficLight {
  fn default() -> Self {
    Self::new()
  }
}

fn cycle_through_phases(shared: Arc<Shared>) {
  let mut rng = rand::thread_rng();

  while !shared.stop.is_signaled() {
    let dwell = shared.config.sample_dwell(&mut rng);

    #[cfg(feature = "debug")]
    trace!("Holding {} for {:?}", shared.phase(), dwell);

    if shared.stop.wait_timeout(dwell).is_some() {
      break;
    }

    let next = shared.phase().flipped();
    shared.phase.store(next as u8, Ordering::Release);
    debug!("Switched to {}", next);

    shared.transitions.send(next);

    thread::sleep(shared.config.idle);
  }

  debug!("Toggle loop exited");
}
