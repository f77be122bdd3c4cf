use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 무차원 비율 단위. 내부 기준은 1.0 = 100% 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioUnit {
    Percent,
    PartsPerMillion,
}

impl ScaledUnit for RatioUnit {
    const ALL: &'static [Self] = &[RatioUnit::Percent, RatioUnit::PartsPerMillion];

    fn symbol(self) -> &'static str {
        match self {
            RatioUnit::Percent => "%",
            RatioUnit::PartsPerMillion => "ppm",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            RatioUnit::Percent => 0.01,
            RatioUnit::PartsPerMillion => 1e-6,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            RatioUnit::Percent => &["pct", "percent"],
            RatioUnit::PartsPerMillion => &[],
        }
    }
}
