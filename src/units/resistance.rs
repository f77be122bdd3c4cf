use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 저항 단위. 내부 기준은 옴이다.
/// `Ω`이 입력하기 어려우므로 `ohm`, `R` 표기도 함께 받는다 (4k7 같은 RKM 코드는 지원하지 않음).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResistanceUnit {
    MilliOhm,
    Ohm,
    KiloOhm,
    MegaOhm,
}

impl ScaledUnit for ResistanceUnit {
    const ALL: &'static [Self] = &[
        ResistanceUnit::MilliOhm,
        ResistanceUnit::Ohm,
        ResistanceUnit::KiloOhm,
        ResistanceUnit::MegaOhm,
    ];

    fn symbol(self) -> &'static str {
        match self {
            ResistanceUnit::MilliOhm => "mΩ",
            ResistanceUnit::Ohm => "Ω",
            ResistanceUnit::KiloOhm => "kΩ",
            ResistanceUnit::MegaOhm => "MΩ",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            ResistanceUnit::MilliOhm => 1e-3,
            ResistanceUnit::Ohm => 1.0,
            ResistanceUnit::KiloOhm => 1e3,
            ResistanceUnit::MegaOhm => 1e6,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ResistanceUnit::MilliOhm => &["mohm", "mr", "m"],
            ResistanceUnit::Ohm => &["ohm", "ohms", "r"],
            ResistanceUnit::KiloOhm => &["kohm", "kr", "k"],
            ResistanceUnit::MegaOhm => &["M", "Mohm", "MR", "megohm", "meg"],
        }
    }
}
