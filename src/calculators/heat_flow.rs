//! 열 흐름 계산기: P = ΔT / Rθ
//!
//! P 는 소비 전력, ΔT 는 온도 상승, Rθ 는 열저항이다.

use crate::config::Config;
use crate::group::CalculatorGroup;
use crate::quantity::QuantityKind;
use crate::units::{PowerUnit, ScaledUnit, TemperatureDiffUnit, ThermalResistanceUnit};
use crate::variable::{CalcError, Variable};

use super::{Calculator, CalculatorKind};

pub const POWER: &str = "power";
pub const TEMPERATURE_RISE: &str = "temperature_rise";
pub const THERMAL_RESISTANCE: &str = "thermal_resistance";

pub const FIELDS: &[(&str, QuantityKind)] = &[
    (POWER, QuantityKind::Power),
    (TEMPERATURE_RISE, QuantityKind::TemperatureDifference),
    (THERMAL_RESISTANCE, QuantityKind::ThermalResistance),
];

/// 소비 전력/온도 상승/열저항 중 하나를 계산한다. 기본 풀이 대상은 열저항이다.
#[derive(Debug, Clone)]
pub struct HeatFlow {
    group: CalculatorGroup,
}

impl HeatFlow {
    pub fn new() -> Result<Self, CalcError> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(cfg: &Config) -> Result<Self, CalcError> {
        let units = &cfg.default_units;
        let digits = cfg.display_digits;
        let group = CalculatorGroup::builder(CalculatorKind::HeatFlow.id())
            .variable(
                Variable::solvable(POWER, PowerUnit::unit_set(), units.power.index(), |r| {
                    r.div(r.value(TEMPERATURE_RISE)?, r.value(THERMAL_RESISTANCE)?)
                })
                .with_round_to(digits),
            )
            .variable(
                Variable::solvable(
                    TEMPERATURE_RISE,
                    TemperatureDiffUnit::unit_set(),
                    units.temperature_diff.index(),
                    |r| Ok(r.value(POWER)? * r.value(THERMAL_RESISTANCE)?),
                )
                .with_round_to(digits),
            )
            .variable(
                Variable::solvable(
                    THERMAL_RESISTANCE,
                    ThermalResistanceUnit::unit_set(),
                    units.thermal_resistance.index(),
                    |r| r.div(r.value(TEMPERATURE_RISE)?, r.value(POWER)?),
                )
                .with_round_to(digits),
            )
            .solve_for(THERMAL_RESISTANCE)
            .build()?;
        Ok(Self { group })
    }

    pub fn power(&self) -> Result<f64, CalcError> {
        self.group.value(POWER)
    }

    pub fn temperature_rise(&self) -> Result<f64, CalcError> {
        self.group.value(TEMPERATURE_RISE)
    }

    pub fn thermal_resistance(&self) -> Result<f64, CalcError> {
        self.group.value(THERMAL_RESISTANCE)
    }
}

impl Calculator for HeatFlow {
    fn kind(&self) -> CalculatorKind {
        CalculatorKind::HeatFlow
    }

    fn group(&self) -> &CalculatorGroup {
        &self.group
    }

    fn group_mut(&mut self) -> &mut CalculatorGroup {
        &mut self.group
    }
}
