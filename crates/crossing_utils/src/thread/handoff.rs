use std::{
  collections::VecDeque,
  sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
  time::Duration,
};

use log::debug;
#[cfg(feature = "debug")]
use log::trace;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecvError {
  #[error("Queue is closed and drained")]
  Closed,
  #[error("Timed out waiting for a value")]
  Timeout,
}

#[derive(Debug)]
struct State<T> {
  pending: VecDeque<T>,
  closed: bool,
}

/// FIFO handoff between threads, each value reaches exactly one receiver.
#[derive(Debug)]
pub struct HandoffQueue<T> {
  inner: Arc<(Mutex<State<T>>, Condvar)>,
}

impl<T> HandoffQueue<T> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn send(&self, value: T) {
    let (_, cvar) = &*self.inner;
    {
      let mut state = self.lock();
      if state.closed {
        debug!("Dropping value sent to closed queue");
        return;
      }
      state.pending.push_back(value);

      #[cfg(feature = "debug")]
      trace!("Queued value, {} pending", state.pending.len());
    }
    cvar.notify_one();
  }

  /// Only fails once the queue is closed and drained.
  pub fn receive(&self) -> Result<T, RecvError> {
    let (_, cvar) = &*self.inner;
    let state = self.lock();
    let mut state = cvar
      .wait_while(state, |state| state.pending.is_empty() && !state.closed)
      .unwrap_or_else(PoisonError::into_inner);

    state.pending.pop_front().ok_or(RecvError::Closed)
  }

  pub fn receive_timeout(&self, timeout: Duration) -> Result<T, RecvError> {
    let (_, cvar) = &*self.inner;
    let state = self.lock();
    let (mut state, _) = cvar
      .wait_timeout_while(state, timeout, |state| {
        state.pending.is_empty() && !state.closed
      })
      .unwrap_or_else(PoisonError::into_inner);

    match state.pending.pop_front() {
      Some(value) => Ok(value),
      None if state.closed => Err(RecvError::Closed),
      None => Err(RecvError::Timeout),
    }
  }

  pub fn try_receive(&self) -> Option<T> {
    self.lock().pending.pop_front()
  }

  /// Later sends are dropped.
  pub fn close(&self) {
    let (_, cvar) = &*self.inner;
    {
      let mut state = self.lock();
      if state.closed {
        return;
      }
      state.closed = true;
      debug!("Closing handoff queue with {} pending", state.pending.len());
    }
    cvar.notify_all();
  }

  pub fn is_closed(&self) -> bool {
    self.lock().closed
  }

  pub fn len(&self) -> usize {
    self.lock().pending.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().pending.is_empty()
  }

  fn lock(&self) -> MutexGuard<'_, State<T>> {
    let (lock, _) = &*self.inner;
    lock.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T> Clone for HandoffQueue<T> {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<T> Default for HandoffQueue<T> {
  fn default() -> Self {
    Self {
      inner: Arc::new((
        Mutex::new(State {
          pending: VecDeque::new(),
          closed: false,
        }),
        Condvar::new(),
      )),
    }
  }
}
