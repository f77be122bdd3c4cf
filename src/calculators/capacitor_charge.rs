//! 커패시터 전하량 계산기: Q = C·V

use crate::config::Config;
use crate::group::CalculatorGroup;
use crate::quantity::QuantityKind;
use crate::units::{CapacitanceUnit, ChargeUnit, ScaledUnit, VoltageUnit};
use crate::variable::{CalcError, Variable};

use super::{Calculator, CalculatorKind};

pub const CHARGE: &str = "charge";
pub const CAPACITANCE: &str = "capacitance";
pub const VOLTAGE: &str = "voltage";

pub const FIELDS: &[(&str, QuantityKind)] = &[
    (CHARGE, QuantityKind::Charge),
    (CAPACITANCE, QuantityKind::Capacitance),
    (VOLTAGE, QuantityKind::Voltage),
];

/// 전하량/정전용량/전압 중 하나를 계산한다. 기본 풀이 대상은 전압이다.
#[derive(Debug, Clone)]
pub struct CapacitorCharge {
    group: CalculatorGroup,
}

impl CapacitorCharge {
    pub fn new() -> Result<Self, CalcError> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(cfg: &Config) -> Result<Self, CalcError> {
        let units = &cfg.default_units;
        let digits = cfg.display_digits;
        let group = CalculatorGroup::builder(CalculatorKind::CapacitorCharge.id())
            .variable(
                Variable::solvable(CHARGE, ChargeUnit::unit_set(), units.charge.index(), |r| {
                    Ok(r.value(CAPACITANCE)? * r.value(VOLTAGE)?)
                })
                .with_round_to(digits),
            )
            .variable(
                Variable::solvable(
                    CAPACITANCE,
                    CapacitanceUnit::unit_set(),
                    units.capacitance.index(),
                    |r| r.div(r.value(CHARGE)?, r.value(VOLTAGE)?),
                )
                .with_round_to(digits),
            )
            .variable(
                Variable::solvable(VOLTAGE, VoltageUnit::unit_set(), units.voltage.index(), |r| {
                    r.div(r.value(CHARGE)?, r.value(CAPACITANCE)?)
                })
                .with_round_to(digits),
            )
            .solve_for(VOLTAGE)
            .build()?;
        Ok(Self { group })
    }

    pub fn charge(&self) -> Result<f64, CalcError> {
        self.group.value(CHARGE)
    }

    pub fn capacitance(&self) -> Result<f64, CalcError> {
        self.group.value(CAPACITANCE)
    }

    pub fn voltage(&self) -> Result<f64, CalcError> {
        self.group.value(VOLTAGE)
    }
}

impl Calculator for CapacitorCharge {
    fn kind(&self) -> CalculatorKind {
        CalculatorKind::CapacitorCharge
    }

    fn group(&self) -> &CalculatorGroup {
        &self.group
    }

    fn group_mut(&mut self) -> &mut CalculatorGroup {
        &mut self.group
    }
}
