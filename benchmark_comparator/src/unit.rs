//!
//! The measurement time unit.
//!

use std::str::FromStr;

///
/// The measurement time unit, as printed by the benchmark programs.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Seconds.
    Seconds,
    /// Milliseconds.
    Milliseconds,
    /// Microseconds, spelled `µs`, `μs`, or `us`.
    Microseconds,
    /// Nanoseconds.
    Nanoseconds,
}

impl Unit {
    ///
    /// Converts `value` expressed in this unit into milliseconds.
    ///
    pub fn to_milliseconds(self, value: f64) -> f64 {
        match self {
            Self::Seconds => value * 1000.0,
            Self::Milliseconds => value,
            Self::Microseconds => value / 1000.0,
            Self::Nanoseconds => value / 1_000_000.0,
        }
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "s" => Ok(Self::Seconds),
            "ms" => Ok(Self::Milliseconds),
            "µs" | "μs" | "us" => Ok(Self::Microseconds),
            "ns" => Ok(Self::Nanoseconds),
            string => anyhow::bail!(
                "Unknown time unit `{string}`. Supported units: {}",
                vec![
                    Self::Seconds,
                    Self::Milliseconds,
                    Self::Microseconds,
                    Self::Nanoseconds
                ]
                .into_iter()
                .map(|element| element.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seconds => write!(f, "s"),
            Self::Milliseconds => write!(f, "ms"),
            Self::Microseconds => write!(f, "µs"),
            Self::Nanoseconds => write!(f, "ns"),
        }
    }
}
