//! 옴의 법칙 계산기: V = I·R

use crate::config::Config;
use crate::group::CalculatorGroup;
use crate::quantity::QuantityKind;
use crate::units::{CurrentUnit, ResistanceUnit, ScaledUnit, VoltageUnit};
use crate::variable::{CalcError, Variable};

use super::{Calculator, CalculatorKind};

pub const VOLTAGE: &str = "voltage";
pub const CURRENT: &str = "current";
pub const RESISTANCE: &str = "resistance";

pub const FIELDS: &[(&str, QuantityKind)] = &[
    (VOLTAGE, QuantityKind::Voltage),
    (CURRENT, QuantityKind::Current),
    (RESISTANCE, QuantityKind::Resistance),
];

/// 전압/전류/저항 중 하나를 나머지 둘로부터 계산한다. 기본 풀이 대상은 저항이다.
#[derive(Debug, Clone)]
pub struct OhmsLaw {
    group: CalculatorGroup,
}

impl OhmsLaw {
    pub fn new() -> Result<Self, CalcError> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(cfg: &Config) -> Result<Self, CalcError> {
        let units = &cfg.default_units;
        let digits = cfg.display_digits;
        let group = CalculatorGroup::builder(CalculatorKind::OhmsLaw.id())
            .variable(
                Variable::solvable(
                    VOLTAGE,
                    VoltageUnit::unit_set(),
                    units.voltage.index(),
                    |r| Ok(r.value(CURRENT)? * r.value(RESISTANCE)?),
                )
                .with_round_to(digits),
            )
            .variable(
                Variable::solvable(
                    CURRENT,
                    CurrentUnit::unit_set(),
                    units.current.index(),
                    |r| r.div(r.value(VOLTAGE)?, r.value(RESISTANCE)?),
                )
                .with_round_to(digits),
            )
            .variable(
                Variable::solvable(
                    RESISTANCE,
                    ResistanceUnit::unit_set(),
                    units.resistance.index(),
                    |r| r.div(r.value(VOLTAGE)?, r.value(CURRENT)?),
                )
                .with_round_to(digits),
            )
            .solve_for(RESISTANCE)
            .build()?;
        Ok(Self { group })
    }

    pub fn voltage(&self) -> Result<f64, CalcError> {
        self.group.value(VOLTAGE)
    }

    pub fn current(&self) -> Result<f64, CalcError> {
        self.group.value(CURRENT)
    }

    pub fn resistance(&self) -> Result<f64, CalcError> {
        self.group.value(RESISTANCE)
    }
}

impl Calculator for OhmsLaw {
    fn kind(&self) -> CalculatorKind {
        CalculatorKind::OhmsLaw
    }

    fn group(&self) -> &CalculatorGroup {
        &self.group
    }

    fn group_mut(&mut self) -> &mut CalculatorGroup {
        &mut self.group
    }
}
