use std::{
  sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
  time::Duration,
};

/// Latching one-shot signal.
#[derive(Debug)]
pub struct Signal<T = ()> {
  value: Arc<(Mutex<Option<T>>, Condvar)>,
}

impl Signal {
  pub fn signal(&self) {
    self.send(());
  }
}

impl<T: Clone> Signal<T> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Latches `data` unless a value was already sent.
  pub fn send(&self, data: T) {
    let (_, cvar) = &*self.value;
    {
      let mut value = self.lock();
      if value.is_some() {
        return;
      }
      *value = Some(data);
    }
    cvar.notify_all();
  }

  /// Returns `None` if nothing was sent within `timeout`.
  pub fn wait_timeout(&self, timeout: Duration) -> Option<T> {
    let (_, cvar) = &*self.value;
    let value = self.lock();
    let (value, _) = cvar
      .wait_timeout_while(value, timeout, |value| value.is_none())
      .unwrap_or_else(PoisonError::into_inner);

    value.clone()
  }

  pub fn is_signaled(&self) -> bool {
    self.lock().is_some()
  }

  fn lock(&self) -> MutexGuard<'_, Option<T>> {
    let (lock, _) = &*self.value;
    lock.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T> Clone for Signal<T> {
  fn clone(&self) -> Self {
    Self {
      value: Arc::clone(&self.value),
    }
  }
}

impl<T> Default for Signal<T> {
  fn default() -> Self {
    Self {
      value: Arc::new((Mutex::new(None), Condvar::new())),
    }
  }
}
