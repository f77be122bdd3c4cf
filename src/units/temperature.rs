use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 온도차(온도 상승) 단위. 절대 기준점 없이 배율만 고려하며 내부 기준은 켈빈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl ScaledUnit for TemperatureDiffUnit {
    const ALL: &'static [Self] = &[
        TemperatureDiffUnit::Celsius,
        TemperatureDiffUnit::Kelvin,
        TemperatureDiffUnit::Fahrenheit,
    ];

    fn symbol(self) -> &'static str {
        match self {
            TemperatureDiffUnit::Celsius => "°C",
            TemperatureDiffUnit::Kelvin => "K",
            TemperatureDiffUnit::Fahrenheit => "°F",
        }
    }

    fn multiplier(self) -> f64 {
        // 섭씨/켈빈은 1:1, 화씨는 5/9 배율
        match self {
            TemperatureDiffUnit::Celsius | TemperatureDiffUnit::Kelvin => 1.0,
            TemperatureDiffUnit::Fahrenheit => 5.0 / 9.0,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TemperatureDiffUnit::Celsius => &["c", "celsius", "degc"],
            TemperatureDiffUnit::Kelvin => &["kelvin"],
            TemperatureDiffUnit::Fahrenheit => &["f", "fahrenheit", "degf"],
        }
    }
}
