//! 변수 묶음(계산기 하나)과 동기식 재계산.
//!
//! 재계산은 캐시 없이 당겨오는(pull) 방식이다. 출력 변수의 값이 필요하면 그 계산식을 즉시
//! 실행하고, 계산식이 다른 출력 변수를 읽으면 그 변수도 재귀적으로 계산한다.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};

use crate::variable::{CalcError, Role, Severity, ValidationIssue, Variable};

/// 출력 계산식이 형제 변수의 기준 단위 값을 읽을 때 사용하는 조회기.
///
/// 계산 중인 변수의 스택을 유지해 순환 참조를 감지한다.
pub struct Resolver<'a> {
    group: &'a CalculatorGroup,
    stack: RefCell<Vec<usize>>,
}

impl<'a> Resolver<'a> {
    fn new(group: &'a CalculatorGroup) -> Self {
        Self {
            group,
            stack: RefCell::new(Vec::new()),
        }
    }

    /// 이름으로 변수의 기준 단위 값을 가져온다.
    pub fn value(&self, name: &str) -> Result<f64, CalcError> {
        let idx = self.group.index_of(name)?;
        self.value_at(idx)
    }

    /// `numerator / denominator`. 분모가 0 이면 계산 중인 변수 이름으로 `DivisionByZero`.
    pub fn div(&self, numerator: f64, denominator: f64) -> Result<f64, CalcError> {
        if denominator == 0.0 {
            return Err(CalcError::DivisionByZero(self.current_name()));
        }
        Ok(numerator / denominator)
    }

    fn current_name(&self) -> String {
        self.stack
            .borrow()
            .last()
            .map(|idx| self.group.variables[*idx].name().to_string())
            .unwrap_or_default()
    }

    fn value_at(&self, idx: usize) -> Result<f64, CalcError> {
        let var = &self.group.variables[idx];
        match var.role() {
            Role::Input => {
                let value = var.input_value()?;
                let blocking = var
                    .validate()
                    .into_iter()
                    .find(|issue| issue.severity == Severity::Error);
                match blocking {
                    Some(issue) => Err(CalcError::Validation {
                        variable: issue.variable,
                        message: issue.message,
                    }),
                    None => Ok(value),
                }
            }
            Role::Output(eq) => {
                if self.stack.borrow().contains(&idx) {
                    return Err(CalcError::CircularDependency(var.name().to_string()));
                }
                self.stack.borrow_mut().push(idx);
                let result = eq(self);
                self.stack.borrow_mut().pop();
                let value = result?;
                trace!("{} = {value}", var.name());
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(CalcError::DivisionByZero(var.name().to_string()))
                }
            }
        }
    }
}

/// 한 번의 재계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct RecomputeReport {
    /// 출력 변수별 기준 단위 값 또는 오류
    pub outputs: Vec<(String, Result<f64, CalcError>)>,
    /// 입력 검증기가 보고한 문제
    pub issues: Vec<ValidationIssue>,
}

impl RecomputeReport {
    pub fn output(&self, name: &str) -> Option<&Result<f64, CalcError>> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, result)| result)
    }

    pub fn has_errors(&self) -> bool {
        self.outputs.iter().any(|(_, r)| r.is_err())
            || self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}

/// 변수 묶음. 계산기 하나가 하나의 그룹을 소유한다.
#[derive(Debug, Clone)]
pub struct CalculatorGroup {
    name: String,
    variables: Vec<Variable>,
    links: Vec<Vec<usize>>,
}

impl CalculatorGroup {
    pub fn builder(name: impl Into<String>) -> GroupBuilder {
        GroupBuilder {
            name: name.into(),
            variables: Vec::new(),
            solve: None,
            links: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name() == name)
    }

    fn index_of(&self, name: &str) -> Result<usize, CalcError> {
        self.variables
            .iter()
            .position(|v| v.name() == name)
            .ok_or_else(|| CalcError::UnknownVariable(name.to_string()))
    }

    /// 현재 풀이 대상(출력 역할의 선택 가능 변수) 이름.
    pub fn solving(&self) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.is_solvable() && v.is_output())
            .map(|v| v.name())
    }

    /// 변수의 기준 단위 값. 출력 변수는 계산식을 실행한다.
    pub fn value(&self, name: &str) -> Result<f64, CalcError> {
        Resolver::new(self).value(name)
    }

    /// 표시용 문자열 (출력은 반올림 적용).
    pub fn display(&self, name: &str) -> Result<String, CalcError> {
        let idx = self.index_of(name)?;
        Ok(self.variables[idx].display())
    }

    /// 입력 변수의 텍스트를 바꾸고 재계산한다.
    pub fn set_raw(
        &mut self,
        name: &str,
        raw: impl Into<String>,
    ) -> Result<RecomputeReport, CalcError> {
        let idx = self.index_of(name)?;
        if self.variables[idx].is_output() {
            return Err(CalcError::ReadOnly(name.to_string()));
        }
        self.variables[idx].set_raw_unchecked(raw.into());
        Ok(self.recompute())
    }

    /// 단위 인덱스를 바꾸고 재계산한다. 연결된 변수도 같은 인덱스로 바뀐다.
    /// 하나라도 범위를 벗어나면 아무것도 바꾸지 않는다.
    pub fn select_unit(&mut self, name: &str, index: usize) -> Result<RecomputeReport, CalcError> {
        let idx = self.index_of(name)?;
        let mut members = vec![idx];
        for set in self.links.iter().filter(|set| set.contains(&idx)) {
            for other in set {
                if !members.contains(other) {
                    members.push(*other);
                }
            }
        }
        if let Some(bad) = members
            .iter()
            .find(|m| index >= self.variables[**m].units().len())
        {
            return Err(CalcError::UnknownUnit {
                variable: self.variables[*bad].name().to_string(),
                unit: index.to_string(),
            });
        }
        for member in members {
            self.variables[member].set_unit_index(index)?;
        }
        Ok(self.recompute())
    }

    /// 단위 기호로 선택한다.
    pub fn select_unit_by_symbol(
        &mut self,
        name: &str,
        symbol: &str,
    ) -> Result<RecomputeReport, CalcError> {
        let idx = self.index_of(name)?;
        let unit_idx = self.variables[idx]
            .units()
            .iter()
            .position(|u| u.name == symbol)
            .ok_or_else(|| CalcError::UnknownUnit {
                variable: name.to_string(),
                unit: symbol.to_string(),
            })?;
        self.select_unit(name, unit_idx)
    }

    /// 출력 변수의 계산식을 바꾸고 재계산한다.
    pub fn set_equation<F>(&mut self, name: &str, eq: F) -> Result<RecomputeReport, CalcError>
    where
        F: Fn(&Resolver<'_>) -> Result<f64, CalcError> + 'static,
    {
        let idx = self.index_of(name)?;
        self.variables[idx].set_equation(Rc::new(eq))?;
        debug!("{}: equation of {name} replaced", self.name);
        Ok(self.recompute())
    }

    /// 풀이 대상을 바꾼다. 지정한 변수만 출력이 되고 나머지 선택 가능 변수는 입력이 된다.
    /// 이전 출력 변수는 마지막 계산값을 입력 텍스트로 유지한다.
    pub fn solve_for(&mut self, name: &str) -> Result<RecomputeReport, CalcError> {
        let idx = self.index_of(name)?;
        if !self.variables[idx].is_solvable() {
            return Err(CalcError::NotSolvable(name.to_string()));
        }
        debug!("{}: solving for {name}", self.name);
        for (i, var) in self.variables.iter_mut().enumerate() {
            var.set_solving(i == idx);
        }
        Ok(self.recompute())
    }

    /// 모든 입력 텍스트를 비우고 재계산한다.
    pub fn clear(&mut self) -> RecomputeReport {
        for var in self.variables.iter_mut().filter(|v| !v.is_output()) {
            var.set_raw_unchecked(String::new());
        }
        self.recompute()
    }

    /// 모든 출력 변수를 다시 계산해 표시값을 갱신한다.
    pub fn recompute(&mut self) -> RecomputeReport {
        let issues: Vec<ValidationIssue> =
            self.variables.iter().flat_map(|v| v.validate()).collect();

        let results: Vec<(usize, Result<f64, CalcError>)> = {
            let resolver = Resolver::new(self);
            self.variables
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_output())
                .map(|(i, _)| (i, resolver.value_at(i)))
                .collect()
        };

        let mut outputs = Vec::with_capacity(results.len());
        for (i, result) in results {
            let var = &mut self.variables[i];
            match &result {
                Ok(value) => var.store_output(*value),
                Err(err) => {
                    debug!("{}: {} not computed: {err}", self.name, var.name());
                    var.clear_output();
                }
            }
            outputs.push((var.name().to_string(), result));
        }
        debug!(
            "{}: recomputed {} output(s), {} issue(s)",
            self.name,
            outputs.len(),
            issues.len()
        );
        RecomputeReport { outputs, issues }
    }
}

/// [`CalculatorGroup`] 생성기.
pub struct GroupBuilder {
    name: String,
    variables: Vec<Variable>,
    solve: Option<String>,
    links: Vec<Vec<String>>,
}

impl GroupBuilder {
    pub fn variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    /// 처음 풀이 대상. 지정하지 않으면 첫 번째 선택 가능 변수가 된다.
    pub fn solve_for(mut self, name: impl Into<String>) -> Self {
        self.solve = Some(name.into());
        self
    }

    /// 이 변수들은 항상 같은 단위 인덱스를 공유한다. 첫 번째 변수의 선택을 따른다.
    pub fn link_units(mut self, names: &[&str]) -> Self {
        self.links.push(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn build(self) -> Result<CalculatorGroup, CalcError> {
        let mut group = CalculatorGroup {
            name: self.name,
            variables: self.variables,
            links: Vec::new(),
        };

        for names in &self.links {
            let set = names
                .iter()
                .map(|n| group.index_of(n))
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = set.first() {
                let first_var = &group.variables[*first];
                if let Some(other) = set
                    .iter()
                    .map(|idx| &group.variables[*idx])
                    .find(|v| v.units() != first_var.units())
                {
                    return Err(CalcError::LinkMismatch {
                        variable: other.name().to_string(),
                        first: first_var.name().to_string(),
                    });
                }
                let unit = first_var.selected_unit_index();
                for idx in &set {
                    group.variables[*idx].set_unit_index(unit)?;
                }
            }
            group.links.push(set);
        }

        let target = match self.solve {
            Some(name) => Some(name),
            None => group
                .variables
                .iter()
                .find(|v| v.is_solvable())
                .map(|v| v.name().to_string()),
        };
        match target {
            Some(name) => {
                group.solve_for(&name)?;
            }
            None => {
                group.recompute();
            }
        }
        Ok(group)
    }
}
