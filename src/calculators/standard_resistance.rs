//! 표준 저항값 찾기: 원하는 저항에 가장 가까운 E-series 값과 편차를 계산한다.

use crate::config::Config;
use crate::group::{CalculatorGroup, RecomputeReport, Resolver};
use crate::quantity::QuantityKind;
use crate::series::{find_closest, ClosestMatch, SeriesKind};
use crate::units::{RatioUnit, ResistanceUnit, ScaledUnit};
use crate::variable::{CalcError, Severity, Validator, Variable};

use super::{Calculator, CalculatorKind};

pub const DESIRED: &str = "desired";
pub const ACTUAL: &str = "actual";
pub const PERCENT_DIFF: &str = "percent_diff";

pub const FIELDS: &[(&str, QuantityKind)] = &[
    (DESIRED, QuantityKind::Resistance),
    (ACTUAL, QuantityKind::Resistance),
    (PERCENT_DIFF, QuantityKind::Ratio),
];

/// 원하는 저항(입력)과 표준값(출력), 편차(출력)로 구성된다.
///
/// 편차 변수는 `(표준값 - 원하는 값) / 표준값` 이다.
/// 원하는 값과 표준값은 같은 단위를 공유한다.
#[derive(Debug, Clone)]
pub struct StandardResistanceFinder {
    group: CalculatorGroup,
    series: SeriesKind,
}

// 계열은 계산식이 값으로 가진다. 복제본끼리 계열을 공유하지 않는다.
fn closest_in(kind: SeriesKind) -> impl Fn(&Resolver<'_>) -> Result<f64, CalcError> {
    move |r| {
        let desired = r.value(DESIRED)?;
        Ok(find_closest(desired, &kind.values())?.value)
    }
}

impl StandardResistanceFinder {
    pub fn new() -> Result<Self, CalcError> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(cfg: &Config) -> Result<Self, CalcError> {
        let series = cfg.default_series;
        let unit = cfg.default_units.resistance.index();
        let digits = cfg.display_digits;

        let group = CalculatorGroup::builder(CalculatorKind::StandardResistance.id())
            .variable(
                Variable::input(DESIRED, ResistanceUnit::unit_set(), unit)
                    .with_round_to(digits)
                    .with_validator(Validator::IsNumber(Severity::Error))
                    .with_validator(Validator::custom(
                        "저항은 0보다 커야 합니다.",
                        Severity::Warning,
                        |v| v > 0.0,
                    )),
            )
            .variable(
                Variable::output(ACTUAL, ResistanceUnit::unit_set(), unit, closest_in(series))
                    .with_round_to(digits),
            )
            .variable(
                Variable::output(
                    PERCENT_DIFF,
                    RatioUnit::unit_set(),
                    RatioUnit::Percent.index(),
                    |r| {
                        let actual = r.value(ACTUAL)?;
                        let desired = r.value(DESIRED)?;
                        r.div(actual - desired, actual)
                    },
                )
                .with_round_to(digits + 1),
            )
            .link_units(&[DESIRED, ACTUAL])
            .build()?;
        Ok(Self { group, series })
    }

    pub fn series(&self) -> SeriesKind {
        self.series
    }

    /// 계열을 바꾸고 재계산한다.
    pub fn set_series(&mut self, kind: SeriesKind) -> Result<RecomputeReport, CalcError> {
        let report = self.group.set_equation(ACTUAL, closest_in(kind))?;
        self.series = kind;
        Ok(report)
    }

    /// 원하는 값에 대한 탐색 결과 전체 (계열 기준 백분율 차이 포함).
    pub fn closest_match(&self) -> Result<ClosestMatch, CalcError> {
        let desired = self.group.value(DESIRED)?;
        Ok(find_closest(desired, &self.series.values())?)
    }

    pub fn actual(&self) -> Result<f64, CalcError> {
        self.group.value(ACTUAL)
    }

    pub fn percent_diff(&self) -> Result<f64, CalcError> {
        self.group.value(PERCENT_DIFF)
    }
}

impl Calculator for StandardResistanceFinder {
    fn kind(&self) -> CalculatorKind {
        CalculatorKind::StandardResistance
    }

    fn group(&self) -> &CalculatorGroup {
        &self.group
    }

    fn group_mut(&mut self) -> &mut CalculatorGroup {
        &mut self.group
    }
}
