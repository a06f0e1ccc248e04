use anyhow::Context;
use crossing::{log::info, TrafficLight};

fn main() -> anyhow::Result<()> {
  #[cfg(feature = "debug")]
  env_logger::init();

  let cycles = match std::env::args().nth(1) {
    Some(arg) => arg
      .parse::<usize>()
      .with_context(|| format!("Invalid cycle count {:?}", arg))?,
    None => 3,
  };

  let light = TrafficLight::new();
  light.start();

  for cycle in 1..=cycles {
    light.wait_until_green()?;
    info!("Green {}/{}, current phase {}", cycle, cycles, light.current_phase());
  }

  light.stop()?;
  Ok(())
}
