use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 전압 단위. 내부 기준은 볼트이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoltageUnit {
    MilliVolt,
    Volt,
    KiloVolt,
}

impl ScaledUnit for VoltageUnit {
    const ALL: &'static [Self] = &[VoltageUnit::MilliVolt, VoltageUnit::Volt, VoltageUnit::KiloVolt];

    fn symbol(self) -> &'static str {
        match self {
            VoltageUnit::MilliVolt => "mV",
            VoltageUnit::Volt => "V",
            VoltageUnit::KiloVolt => "kV",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            VoltageUnit::MilliVolt => 1e-3,
            VoltageUnit::Volt => 1.0,
            VoltageUnit::KiloVolt => 1e3,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            VoltageUnit::MilliVolt => &["millivolt", "m"],
            VoltageUnit::Volt => &["volt"],
            VoltageUnit::KiloVolt => &["kilovolt", "k"],
        }
    }
}
