//! 개별 계산기 모음. 각 계산기는 자신의 [`CalculatorGroup`]을 소유하며 명시적으로 생성한다.

pub mod capacitor_charge;
pub mod heat_flow;
pub mod ohms_law;
pub mod standard_resistance;

pub use capacitor_charge::CapacitorCharge;
pub use heat_flow::HeatFlow;
pub use ohms_law::OhmsLaw;
pub use standard_resistance::StandardResistanceFinder;

use crate::config::Config;
use crate::group::CalculatorGroup;
use crate::quantity::QuantityKind;
use crate::variable::CalcError;

/// 계산기 공통 인터페이스. 입력 편집/단위 선택/풀이 대상 전환은 그룹을 통해 한다.
pub trait Calculator {
    fn kind(&self) -> CalculatorKind;

    fn group(&self) -> &CalculatorGroup;

    fn group_mut(&mut self) -> &mut CalculatorGroup;
}

/// 제공하는 계산기 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorKind {
    OhmsLaw,
    HeatFlow,
    CapacitorCharge,
    StandardResistance,
}

impl CalculatorKind {
    pub const ALL: &'static [CalculatorKind] = &[
        CalculatorKind::OhmsLaw,
        CalculatorKind::HeatFlow,
        CalculatorKind::CapacitorCharge,
        CalculatorKind::StandardResistance,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CalculatorKind::OhmsLaw => "ohms-law",
            CalculatorKind::HeatFlow => "heat-flow",
            CalculatorKind::CapacitorCharge => "capacitor-charge",
            CalculatorKind::StandardResistance => "standard-resistance",
        }
    }

    /// 변수 이름과 물리량. 값 문자열의 단위 해석에 사용한다.
    pub fn fields(self) -> &'static [(&'static str, QuantityKind)] {
        match self {
            CalculatorKind::OhmsLaw => ohms_law::FIELDS,
            CalculatorKind::HeatFlow => heat_flow::FIELDS,
            CalculatorKind::CapacitorCharge => capacitor_charge::FIELDS,
            CalculatorKind::StandardResistance => standard_resistance::FIELDS,
        }
    }

    /// 설정의 기본 단위/표시 자릿수를 적용해 계산기를 만든다.
    pub fn build(self, cfg: &Config) -> Result<Box<dyn Calculator>, CalcError> {
        let calc: Box<dyn Calculator> = match self {
            CalculatorKind::OhmsLaw => Box::new(OhmsLaw::from_config(cfg)?),
            CalculatorKind::HeatFlow => Box::new(HeatFlow::from_config(cfg)?),
            CalculatorKind::CapacitorCharge => Box::new(CapacitorCharge::from_config(cfg)?),
            CalculatorKind::StandardResistance => {
                Box::new(StandardResistanceFinder::from_config(cfg)?)
            }
        };
        Ok(calc)
    }
}
