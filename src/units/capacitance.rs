use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 정전용량 단위. 내부 기준은 패럿이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacitanceUnit {
    PicoFarad,
    NanoFarad,
    MicroFarad,
    MilliFarad,
}

impl ScaledUnit for CapacitanceUnit {
    const ALL: &'static [Self] = &[
        CapacitanceUnit::PicoFarad,
        CapacitanceUnit::NanoFarad,
        CapacitanceUnit::MicroFarad,
        CapacitanceUnit::MilliFarad,
    ];

    fn symbol(self) -> &'static str {
        match self {
            CapacitanceUnit::PicoFarad => "pF",
            CapacitanceUnit::NanoFarad => "nF",
            CapacitanceUnit::MicroFarad => "µF",
            CapacitanceUnit::MilliFarad => "mF",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            CapacitanceUnit::PicoFarad => 1e-12,
            CapacitanceUnit::NanoFarad => 1e-9,
            CapacitanceUnit::MicroFarad => 1e-6,
            CapacitanceUnit::MilliFarad => 1e-3,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            CapacitanceUnit::PicoFarad => &["p"],
            CapacitanceUnit::NanoFarad => &["n"],
            CapacitanceUnit::MicroFarad => &["uf", "u"],
            CapacitanceUnit::MilliFarad => &["m"],
        }
    }
}
