use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 전력(소비 전력) 단위. 내부 기준은 와트이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    MilliWatt,
    Watt,
    KiloWatt,
}

impl ScaledUnit for PowerUnit {
    const ALL: &'static [Self] = &[PowerUnit::MilliWatt, PowerUnit::Watt, PowerUnit::KiloWatt];

    fn symbol(self) -> &'static str {
        match self {
            PowerUnit::MilliWatt => "mW",
            PowerUnit::Watt => "W",
            PowerUnit::KiloWatt => "kW",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            PowerUnit::MilliWatt => 1e-3,
            PowerUnit::Watt => 1.0,
            PowerUnit::KiloWatt => 1e3,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            PowerUnit::MilliWatt => &["milliwatt", "m"],
            PowerUnit::Watt => &["watt"],
            PowerUnit::KiloWatt => &["kilowatt", "k"],
        }
    }
}
