use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 열저항 단위. 내부 기준은 °C/W (= K/W) 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalResistanceUnit {
    CelsiusPerKiloWatt,
    CelsiusPerWatt,
    CelsiusPerMilliWatt,
}

impl ScaledUnit for ThermalResistanceUnit {
    const ALL: &'static [Self] = &[
        ThermalResistanceUnit::CelsiusPerKiloWatt,
        ThermalResistanceUnit::CelsiusPerWatt,
        ThermalResistanceUnit::CelsiusPerMilliWatt,
    ];

    fn symbol(self) -> &'static str {
        match self {
            ThermalResistanceUnit::CelsiusPerKiloWatt => "°C/kW",
            ThermalResistanceUnit::CelsiusPerWatt => "°C/W",
            ThermalResistanceUnit::CelsiusPerMilliWatt => "°C/mW",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            ThermalResistanceUnit::CelsiusPerKiloWatt => 1e-3,
            ThermalResistanceUnit::CelsiusPerWatt => 1.0,
            ThermalResistanceUnit::CelsiusPerMilliWatt => 1e3,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ThermalResistanceUnit::CelsiusPerKiloWatt => &["c/kw", "k/kw"],
            ThermalResistanceUnit::CelsiusPerWatt => &["c/w", "k/w"],
            ThermalResistanceUnit::CelsiusPerMilliWatt => &["c/mw", "k/mw"],
        }
    }
}
