pub mod config;
pub mod error;
pub mod light;

pub use light::{Phase, TrafficLight};

pub use log;

pub use crossing_utils as utils;
