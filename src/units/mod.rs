//! 단위 정의 및 변환 모듈 모음.
//!
//! 모든 단위는 "표시값 × 배율 = 기준 단위 값" 관계로 표현된다. 기준 단위는
//! V, A, Ω, W, K(온도차), K/W, C, F, 비율(1.0 = 100%)이다.

pub mod capacitance;
pub mod charge;
pub mod current;
pub mod power;
pub mod ratio;
pub mod resistance;
pub mod temperature;
pub mod thermal_resistance;
pub mod voltage;

pub use capacitance::CapacitanceUnit;
pub use charge::ChargeUnit;
pub use current::CurrentUnit;
pub use power::PowerUnit;
pub use ratio::RatioUnit;
pub use resistance::ResistanceUnit;
pub use temperature::TemperatureDiffUnit;
pub use thermal_resistance::ThermalResistanceUnit;
pub use voltage::VoltageUnit;

/// 이름과 기준 단위 배율로 구성된 단위 하나.
///
/// 예: `kΩ` → 1000.0, `mV` → 0.001
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub name: String,
    pub multiplier: f64,
}

impl Unit {
    pub fn new(name: impl Into<String>, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            multiplier,
        }
    }

    /// 표시값을 기준 단위 값으로 환산한다.
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.multiplier
    }

    /// 기준 단위 값을 이 단위의 표시값으로 환산한다.
    pub fn from_base(&self, value_base: f64) -> f64 {
        value_base / self.multiplier
    }
}

/// 배율 하나로 기준 단위와 연결되는 단위 enum 이 구현하는 트레이트.
pub trait ScaledUnit: Copy + PartialEq + 'static {
    /// 선택 가능한 순서대로 나열한 전체 단위.
    const ALL: &'static [Self];

    fn symbol(self) -> &'static str;

    fn multiplier(self) -> f64;

    /// 입력 문자열에서 허용하는 별칭. 기호 자체는 항상 허용된다.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    fn unit(self) -> Unit {
        Unit::new(self.symbol(), self.multiplier())
    }

    /// 전체 단위 목록을 [`Unit`] 벡터로 만든다.
    fn unit_set() -> Vec<Unit> {
        Self::ALL.iter().map(|u| u.unit()).collect()
    }

    /// `ALL` 안에서의 위치. 변수의 선택 단위 인덱스로 사용된다.
    fn index(self) -> usize {
        Self::ALL.iter().position(|u| *u == self).unwrap_or(0)
    }
}
