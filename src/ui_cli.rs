use std::io::{self, Write};

use log::{debug, warn};

use crate::app::AppError;
use crate::calculators::standard_resistance::{self, StandardResistanceFinder};
use crate::calculators::{Calculator, CalculatorKind};
use crate::config::{self, Config};
use crate::conversion::{self, ConversionError};
use crate::group::{CalculatorGroup, RecomputeReport};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::series::SeriesKind;
use crate::variable::Severity;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    OhmsLaw,
    HeatFlow,
    CapacitorCharge,
    StandardResistance,
    SeriesTable,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_OHMS_LAW,
        keys::MAIN_MENU_HEAT_FLOW,
        keys::MAIN_MENU_CAPACITOR,
        keys::MAIN_MENU_RESISTOR,
        keys::MAIN_MENU_SERIES,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::OhmsLaw),
            "2" => return Ok(MenuChoice::HeatFlow),
            "3" => return Ok(MenuChoice::CapacitorCharge),
            "4" => return Ok(MenuChoice::StandardResistance),
            "5" => return Ok(MenuChoice::SeriesTable),
            "6" => return Ok(MenuChoice::UnitConversion),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 값 문자열(`4.7k`, `10 mV`)을 변수에 적용한다. 단위가 붙어 있으면 단위 선택도 바꾼다.
pub fn apply_value(
    group: &mut CalculatorGroup,
    kind: QuantityKind,
    name: &str,
    text: &str,
) -> Result<RecomputeReport, AppError> {
    let (value, unit) = conversion::parse_value_with_unit(kind, text)?;
    if let Some(idx) = unit {
        group.select_unit(name, idx)?;
    }
    Ok(group.set_raw(name, value.to_string())?)
}

/// 주어진 값으로 한 번 계산한다.
///
/// 풀이 대상은 `solve` 가 우선이고, 없으면 값이 빠진 유일한 선택 가능 변수, 그것도 아니면
/// 계산기의 기본 대상이다. 풀이 대상에 주어진 값은 무시한다.
pub fn solve_once(
    calc: &mut dyn Calculator,
    values: &[(&str, Option<&str>)],
    solve: Option<&str>,
) -> Result<RecomputeReport, AppError> {
    let fields = calc.kind().fields();
    let group = calc.group_mut();

    let missing: Vec<&str> = values
        .iter()
        .filter(|(name, text)| {
            text.is_none() && group.variable(name).is_some_and(|v| v.is_solvable())
        })
        .map(|(name, _)| *name)
        .collect();
    let target = match solve {
        Some(name) => Some(name),
        None if missing.len() == 1 => Some(missing[0]),
        None => None,
    };
    if let Some(name) = target {
        group.solve_for(name)?;
    }
    let target = group.solving().map(str::to_string);

    for (name, text) in values {
        let Some(text) = text else { continue };
        if target.as_deref() == Some(*name) {
            warn!("ignoring value for solve target {name}");
            continue;
        }
        let kind = fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| ConversionError::UnknownQuantity(name.to_string()))?;
        apply_value(group, kind, name, text)?;
    }
    Ok(group.recompute())
}

/// 출력 변수의 첫 번째 계산 오류를 돌려준다.
pub fn ensure_computed(report: &RecomputeReport) -> Result<(), AppError> {
    match report.outputs.iter().find_map(|(_, r)| r.as_ref().err()) {
        Some(err) => Err(AppError::Calc(err.clone())),
        None => Ok(()),
    }
}

/// 변수 목록과 계산 결과, 검증 문제를 출력한다.
pub fn print_group(tr: &Translator, group: &CalculatorGroup, report: &RecomputeReport) {
    println!("{}", tr.t(keys::SOLVER_RESULT_HEADING));
    for var in group.variables() {
        let label = tr.label(var.name());
        let unit = &var.selected_unit().name;
        if var.is_output() {
            match report.output(var.name()) {
                Some(Err(err)) => {
                    println!("  {label}: {} {err}", tr.t(keys::SOLVER_NOT_COMPUTED))
                }
                _ => println!(
                    "  {label} = {} {unit} {}",
                    var.display(),
                    tr.t(keys::SOLVER_OUTPUT_MARK)
                ),
            }
        } else {
            println!("  {label} = {} {unit}", var.display());
        }
    }
    print_issues(tr, report);
}

fn print_issues(tr: &Translator, report: &RecomputeReport) {
    for issue in &report.issues {
        let prefix = match issue.severity {
            Severity::Warning => tr.t(keys::WARNING_PREFIX),
            Severity::Error => tr.t(keys::ERROR_PREFIX),
        };
        println!("  {prefix}: {} ({})", issue.message, tr.label(&issue.variable));
    }
}

/// 세 변수 계산기(옴의 법칙/열 흐름/커패시터) 메뉴를 처리한다.
pub fn handle_calculator(
    tr: &Translator,
    cfg: &Config,
    kind: CalculatorKind,
) -> Result<(), AppError> {
    let mut calc = kind.build(cfg)?;
    let group = calc.group_mut();

    let solvable: Vec<String> = group
        .variables()
        .iter()
        .filter(|v| v.is_solvable())
        .map(|v| v.name().to_string())
        .collect();
    println!();
    for (i, name) in solvable.iter().enumerate() {
        let mark = if group.solving() == Some(name.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{}){mark} {}", i + 1, tr.label(name));
    }
    let sel = read_line(&tr.t(keys::SOLVER_PROMPT_SOLVE))?;
    if let Ok(n) = sel.trim().parse::<usize>() {
        match solvable.get(n.wrapping_sub(1)) {
            Some(name) => {
                group.solve_for(name)?;
            }
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }

    println!("{}", tr.t(keys::SOLVER_KEEP_HINT));
    for (name, quantity) in kind.fields() {
        let Some(var) = group.variable(name) else {
            continue;
        };
        if var.is_output() {
            continue;
        }
        let prompt = format!(
            "{} {} [{}]: ",
            tr.t(keys::SOLVER_PROMPT_VALUE),
            tr.label(name),
            var.selected_unit().name
        );
        let text = read_line(&prompt)?;
        if text.trim().is_empty() {
            continue;
        }
        apply_value(group, *quantity, name, text.trim())?;
    }

    let report = group.recompute();
    print_group(tr, group, &report);
    Ok(())
}

/// 원하는 저항 문자열과 계열로 표준값 찾기 계산기를 만든다.
pub fn find_resistor(
    cfg: &Config,
    desired: &str,
    series: Option<SeriesKind>,
) -> Result<(StandardResistanceFinder, RecomputeReport), AppError> {
    let mut finder = StandardResistanceFinder::from_config(cfg)?;
    if let Some(kind) = series {
        finder.set_series(kind)?;
    }
    let report = apply_value(
        finder.group_mut(),
        QuantityKind::Resistance,
        standard_resistance::DESIRED,
        desired,
    )?;
    debug!("standard resistance lookup in {}", finder.series());
    Ok((finder, report))
}

/// 표준값 찾기 결과를 출력한다.
pub fn print_resistor(
    tr: &Translator,
    finder: &StandardResistanceFinder,
    report: &RecomputeReport,
) {
    let group = finder.group();
    println!("{}", finder.series());
    for (name, key) in [
        (standard_resistance::ACTUAL, keys::RESULT_CLOSEST),
        (standard_resistance::PERCENT_DIFF, keys::RESULT_DEVIATION),
    ] {
        let Some(var) = group.variable(name) else {
            continue;
        };
        match report.output(name) {
            Some(Err(err)) => println!("{} {err}", tr.t(keys::SOLVER_NOT_COMPUTED)),
            _ => println!(
                "{} {} {}",
                tr.t(key),
                var.display(),
                var.selected_unit().name
            ),
        }
    }
    print_issues(tr, report);
}

/// 표준 저항값 찾기 메뉴를 처리한다.
pub fn handle_standard_resistance(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RESISTOR_HEADING));
    let desired = read_line(&tr.t(keys::PROMPT_DESIRED_RESISTANCE))?;
    let series = read_line(&tr.t(keys::PROMPT_SERIES))?;
    let series = match series.trim() {
        "" => None,
        s => Some(s.parse::<SeriesKind>()?),
    };
    let (finder, report) = find_resistor(cfg, desired.trim(), series)?;
    print_resistor(tr, &finder, &report);
    Ok(())
}

/// 정규화된 계열 표를 한 줄에 12개씩 출력한다. 10.0 경계값은 제외한다.
pub fn print_series(kind: SeriesKind) {
    let values = kind.values();
    let entries = &values[..values.len().saturating_sub(1)];
    println!("{kind} ({})", entries.len());
    for row in entries.chunks(12) {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>5.2}")).collect();
        println!("{}", line.join(" "));
    }
}

/// E-series 표 메뉴를 처리한다.
pub fn handle_series_table(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SERIES_HEADING));
    let sel = read_line(&tr.t(keys::PROMPT_SERIES))?;
    let kind = match sel.trim() {
        "" => cfg.default_series,
        s => s.parse::<SeriesKind>()?,
    };
    print_series(kind);
    Ok(())
}

/// 물리량 이름, 값, 단위 문자열로 단위를 변환한다.
pub fn convert_text(quantity: &str, value: &str, from: &str, to: &str) -> Result<f64, AppError> {
    let kind = QuantityKind::from_id(quantity)
        .ok_or_else(|| ConversionError::UnknownQuantity(quantity.to_string()))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidValue(value.to_string()))?;
    Ok(conversion::convert(kind, value, from.trim(), to.trim())?)
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    for (i, kind) in QuantityKind::ALL.iter().enumerate() {
        let units: Vec<String> = kind.units().into_iter().map(|u| u.name).collect();
        println!("{}) {} [{}]", i + 1, kind.id(), units.join(", "));
    }
    let kind = loop {
        let sel = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        let picked = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| QuantityKind::ALL.get(n.wrapping_sub(1)));
        match picked {
            Some(kind) => break *kind,
            None => println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED)),
        }
    };
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// 설정 메뉴를 처리한다. 저장은 호출자가 한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_SERIES), cfg.default_series);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_DIGITS), cfg.display_digits);

    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_SERIES))?;
    if !sel.trim().is_empty() {
        match sel.parse::<SeriesKind>() {
            Ok(kind) => cfg.default_series = kind,
            Err(_) => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_DIGITS))?;
    if !sel.trim().is_empty() {
        match sel.trim().parse::<usize>() {
            Ok(n) if n <= config::MAX_DISPLAY_DIGITS => cfg.display_digits = n,
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
