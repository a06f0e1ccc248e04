mod handoff;
mod signal;

pub use handoff::{HandoffQueue, RecvError};
pub use signal::Signal;
