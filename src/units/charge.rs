use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 전하량 단위. 내부 기준은 쿨롱이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeUnit {
    PicoCoulomb,
    NanoCoulomb,
    MicroCoulomb,
    MilliCoulomb,
}

impl ScaledUnit for ChargeUnit {
    const ALL: &'static [Self] = &[
        ChargeUnit::PicoCoulomb,
        ChargeUnit::NanoCoulomb,
        ChargeUnit::MicroCoulomb,
        ChargeUnit::MilliCoulomb,
    ];

    fn symbol(self) -> &'static str {
        match self {
            ChargeUnit::PicoCoulomb => "pC",
            ChargeUnit::NanoCoulomb => "nC",
            ChargeUnit::MicroCoulomb => "µC",
            ChargeUnit::MilliCoulomb => "mC",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            ChargeUnit::PicoCoulomb => 1e-12,
            ChargeUnit::NanoCoulomb => 1e-9,
            ChargeUnit::MicroCoulomb => 1e-6,
            ChargeUnit::MilliCoulomb => 1e-3,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ChargeUnit::PicoCoulomb => &["p"],
            ChargeUnit::NanoCoulomb => &["n"],
            ChargeUnit::MicroCoulomb => &["uc", "u"],
            ChargeUnit::MilliCoulomb => &["m"],
        }
    }
}
