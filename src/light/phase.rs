use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
  Red = 0,
  Green = 1,
}

impl Phase {
  #[inline]
  pub fn flipped(self) -> Self {
    match self {
      Phase::Red => Phase::Green,
      Phase::Green => Phase::Red,
    }
  }

  #[inline]
  pub(crate) fn from_u8(value: u8) -> Self {
    if value == Phase::Green as u8 {
      Phase::Green
    } else {
      Phase::Red
    }
  }
}

impl fmt::Display for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Phase::Red => f.write_str("red"),
      Phase::Green => f.write_str("green"),
    }
  }
}

#[cfg(test)]
mod test {
  use super::Phase;

  #[test]
  fn flip() {
    assert_eq!(Phase::Red.flipped(), Phase::Green);
    assert_eq!(Phase::Green.flipped(), Phase::Red);
    assert_eq!(Phase::Red.flipped().flipped(), Phase::Red);
  }

  #[test]
  fn u8_repr() {
    for phase in [Phase::Red, Phase::Green] {
      assert_eq!(Phase::from_u8(phase as u8), phase);
    }
  }

  #[test]
  fn display() {
    assert_eq!(Phase::Red.to_string(), "red");
    assert_eq!(Phase::Green.to_string(), "green");
  }
}
