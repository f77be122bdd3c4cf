//! 단위 배율이 적용되는 계산기 변수.
//!
//! 변수는 입력(사용자가 편집) 또는 출력(다른 변수의 기준 단위 값으로 계산) 역할을 가진다.
//! 출력 변수의 계산식은 항상 기준 단위 값만 읽는다.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::group::Resolver;
use crate::series::SeriesError;
pub use crate::units::Unit;

/// 변수 계산/조작 중 발생 가능한 오류.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// 숫자로 해석할 수 없는 입력
    #[error("'{variable}' 입력값이 숫자가 아닙니다: '{raw}'")]
    InvalidNumber { variable: String, raw: String },
    /// 아직 입력되지 않은 값
    #[error("'{0}' 값이 입력되지 않았습니다.")]
    MissingInput(String),
    /// 0 으로 나누기 (결과가 무한대/NaN)
    #[error("'{0}' 계산 중 0으로 나누었습니다.")]
    DivisionByZero(String),
    /// 표준값 탐색 범위 오류
    #[error("범위 오류: {0}")]
    OutOfRange(#[from] SeriesError),
    /// 존재하지 않는 변수 이름
    #[error("알 수 없는 변수: {0}")]
    UnknownVariable(String),
    /// 범위를 벗어난 단위 선택
    #[error("'{variable}' 에 없는 단위: {unit}")]
    UnknownUnit { variable: String, unit: String },
    /// 풀이 대상으로 선택할 수 없는 변수
    #[error("'{0}' 은(는) 풀이 대상으로 선택할 수 없습니다.")]
    NotSolvable(String),
    /// 출력 변수에 값을 쓰려는 시도
    #[error("'{0}' 은(는) 계산 결과이므로 편집할 수 없습니다.")]
    ReadOnly(String),
    /// 오류 심각도의 검증 실패
    #[error("'{variable}' 검증 실패: {message}")]
    Validation { variable: String, message: String },
    /// 계산식이 서로를 참조함
    #[error("'{0}' 계산식이 순환 참조를 포함합니다.")]
    CircularDependency(String),
    /// 단위를 공유하도록 묶은 변수들의 단위 목록이 서로 다름
    #[error("'{variable}' 의 단위 목록이 '{first}' 와 달라 단위를 연결할 수 없습니다.")]
    LinkMismatch { variable: String, first: String },
    /// 계산식이 없는 입력 전용 변수
    #[error("'{0}' 은(는) 계산식이 없는 입력 변수입니다.")]
    NoEquation(String),
}

/// 출력 변수의 계산식. 형제 변수의 기준 단위 값을 읽어 이 변수의 기준 단위 값을 돌려준다.
pub type Equation = Rc<dyn Fn(&Resolver<'_>) -> Result<f64, CalcError>>;

/// 현재 역할. 출력이면 사용할 계산식을 함께 가진다.
#[derive(Clone)]
pub enum Role {
    Input,
    Output(Equation),
}

impl Role {
    pub fn is_output(&self) -> bool {
        matches!(self, Role::Output(_))
    }
}

impl fmt::Debug for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Input => f.write_str("Input"),
            Role::Output(_) => f.write_str("Output(..)"),
        }
    }
}

/// 역할이 어떻게 정해지는지를 나타낸다.
#[derive(Clone)]
pub enum RoleMode {
    /// 항상 입력
    FixedInput,
    /// 항상 출력
    FixedOutput(Equation),
    /// 그룹 안에서 하나만 출력이 되는 배타적 선택에 참여
    Solvable(Equation),
}

impl fmt::Debug for RoleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleMode::FixedInput => f.write_str("FixedInput"),
            RoleMode::FixedOutput(_) => f.write_str("FixedOutput(..)"),
            RoleMode::Solvable(_) => f.write_str("Solvable(..)"),
        }
    }
}

/// 검증 결과의 심각도. `Error` 는 계산을 막고 `Warning` 은 알리기만 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// 입력 변수에 붙는 검증기.
#[derive(Clone)]
pub enum Validator {
    /// 입력이 숫자인지 확인
    IsNumber(Severity),
    /// 기준 단위 값에 대한 사용자 정의 조건. 조건이 false 면 `message` 를 보고한다.
    Custom {
        message: String,
        check: Rc<dyn Fn(f64) -> bool>,
        severity: Severity,
    },
}

impl Validator {
    pub fn custom(
        message: impl Into<String>,
        severity: Severity,
        check: impl Fn(f64) -> bool + 'static,
    ) -> Self {
        Validator::Custom {
            message: message.into(),
            check: Rc::new(check),
            severity,
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::IsNumber(s) => write!(f, "IsNumber({s:?})"),
            Validator::Custom {
                message, severity, ..
            } => write!(f, "Custom({message:?}, {severity:?})"),
        }
    }
}

/// 검증기가 보고한 문제 하나.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub variable: String,
    pub severity: Severity,
    pub message: String,
}

/// 계산기 변수 하나.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    units: Vec<Unit>,
    selected_unit: usize,
    raw: String,
    role: Role,
    mode: RoleMode,
    round_to: usize,
    validators: Vec<Validator>,
}

impl Variable {
    /// 새 변수를 만든다. 선택 단위 인덱스가 범위를 벗어나면 0 으로 맞추고,
    /// 단위 목록이 비어 있으면 무차원 단위 하나를 넣는다.
    pub fn new(
        name: impl Into<String>,
        mut units: Vec<Unit>,
        selected_unit: usize,
        mode: RoleMode,
    ) -> Self {
        let role = match &mode {
            RoleMode::FixedOutput(eq) => Role::Output(eq.clone()),
            RoleMode::FixedInput | RoleMode::Solvable(_) => Role::Input,
        };
        if units.is_empty() {
            units.push(Unit::new("", 1.0));
        }
        let selected_unit = if selected_unit < units.len() {
            selected_unit
        } else {
            0
        };
        Self {
            name: name.into(),
            units,
            selected_unit,
            raw: String::new(),
            role,
            mode,
            round_to: 2,
            validators: Vec::new(),
        }
    }

    /// 항상 입력인 변수.
    pub fn input(name: impl Into<String>, units: Vec<Unit>, selected_unit: usize) -> Self {
        Self::new(name, units, selected_unit, RoleMode::FixedInput)
    }

    /// 항상 계산되는 출력 변수.
    pub fn output<F>(
        name: impl Into<String>,
        units: Vec<Unit>,
        selected_unit: usize,
        eq: F,
    ) -> Self
    where
        F: Fn(&Resolver<'_>) -> Result<f64, CalcError> + 'static,
    {
        Self::new(name, units, selected_unit, RoleMode::FixedOutput(Rc::new(eq)))
    }

    /// 풀이 대상으로 선택될 수 있는 변수. 선택되기 전까지는 입력이다.
    pub fn solvable<F>(
        name: impl Into<String>,
        units: Vec<Unit>,
        selected_unit: usize,
        eq: F,
    ) -> Self
    where
        F: Fn(&Resolver<'_>) -> Result<f64, CalcError> + 'static,
    {
        Self::new(name, units, selected_unit, RoleMode::Solvable(Rc::new(eq)))
    }

    pub fn with_round_to(mut self, round_to: usize) -> Self {
        self.round_to = round_to;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn selected_unit_index(&self) -> usize {
        self.selected_unit
    }

    pub fn selected_unit(&self) -> &Unit {
        &self.units[self.selected_unit]
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn is_output(&self) -> bool {
        self.role.is_output()
    }

    pub fn is_solvable(&self) -> bool {
        matches!(self.mode, RoleMode::Solvable(_))
    }

    pub fn round_to(&self) -> usize {
        self.round_to
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub(crate) fn set_raw_unchecked(&mut self, raw: String) {
        self.raw = raw;
    }

    pub(crate) fn set_unit_index(&mut self, index: usize) -> Result<(), CalcError> {
        if index >= self.units.len() {
            return Err(CalcError::UnknownUnit {
                variable: self.name.clone(),
                unit: index.to_string(),
            });
        }
        self.selected_unit = index;
        Ok(())
    }

    /// 풀이 대상 여부에 따라 역할을 바꾼다. 고정 역할 변수는 바뀌지 않는다.
    pub(crate) fn set_solving(&mut self, solving: bool) {
        if let RoleMode::Solvable(eq) = &self.mode {
            self.role = if solving {
                Role::Output(eq.clone())
            } else {
                Role::Input
            };
        }
    }

    /// 계산식을 교체한다. 현재 출력 역할이면 바로 새 계산식을 쓴다.
    pub(crate) fn set_equation(&mut self, eq: Equation) -> Result<(), CalcError> {
        match &mut self.mode {
            RoleMode::FixedInput => return Err(CalcError::NoEquation(self.name.clone())),
            RoleMode::FixedOutput(current) | RoleMode::Solvable(current) => {
                *current = eq.clone();
            }
        }
        if self.role.is_output() {
            self.role = Role::Output(eq);
        }
        Ok(())
    }

    /// 입력 텍스트를 숫자로 해석한다. 빈 칸은 `MissingInput`.
    pub fn parse_raw(&self) -> Result<f64, CalcError> {
        let text = self.raw.trim();
        if text.is_empty() {
            return Err(CalcError::MissingInput(self.name.clone()));
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(CalcError::InvalidNumber {
                variable: self.name.clone(),
                raw: self.raw.clone(),
            }),
        }
    }

    /// 입력 역할일 때의 기준 단위 값 (`raw × multiplier`).
    pub fn input_value(&self) -> Result<f64, CalcError> {
        Ok(self.selected_unit().to_base(self.parse_raw()?))
    }

    /// 검증기를 실행해 문제 목록을 돌려준다. 출력 변수는 검사하지 않는다.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        if self.is_output() {
            return Vec::new();
        }
        let mut issues = Vec::new();
        let parsed = self.input_value();
        for validator in &self.validators {
            match validator {
                Validator::IsNumber(severity) => {
                    if let Err(CalcError::InvalidNumber { .. }) = parsed {
                        issues.push(ValidationIssue {
                            variable: self.name.clone(),
                            severity: *severity,
                            message: format!("'{}' 은(는) 숫자가 아닙니다.", self.raw.trim()),
                        });
                    }
                }
                Validator::Custom {
                    message,
                    check,
                    severity,
                } => {
                    if let Ok(v) = parsed {
                        if !check(v) {
                            issues.push(ValidationIssue {
                                variable: self.name.clone(),
                                severity: *severity,
                                message: message.clone(),
                            });
                        }
                    }
                }
            }
        }
        issues
    }

    /// 기준 단위 값을 선택 단위 표시값으로 되돌려 텍스트로 저장한다.
    pub(crate) fn store_output(&mut self, value_base: f64) {
        let display = self.selected_unit().from_base(value_base);
        self.raw = format!("{display}");
    }

    /// 계산 실패 시 이전 결과를 지운다.
    pub(crate) fn clear_output(&mut self) {
        self.raw.clear();
    }

    /// 화면 표시용 문자열. 출력 변수는 `round_to` 자리로 반올림한다.
    pub fn display(&self) -> String {
        if self.is_output() {
            match self.raw.trim().parse::<f64>() {
                Ok(v) => format!("{:.*}", self.round_to, v),
                Err(_) => self.raw.clone(),
            }
        } else {
            self.raw.clone()
        }
    }
}
