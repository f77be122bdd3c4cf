use thiserror::Error;

use crate::quantity::{QuantityKind, QuantityValue};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnknownQuantity(String),
    /// 숫자로 해석할 수 없는 값
    #[error("숫자가 아닌 값: {0}")]
    InvalidValue(String),
}

/// 단위 문자열을 enum 으로 변환한다.
///
/// 기호(`kΩ`)와 별칭(`kohm`)을 먼저 대소문자 그대로 비교하고, 없으면 소문자로 다시 비교한다.
/// `M`(메가)과 `m`(밀리)을 구분하기 위한 순서이다.
pub fn parse_scaled<U: ScaledUnit>(s: &str) -> Result<U, ConversionError> {
    let s = s.trim();
    let exact = U::ALL
        .iter()
        .copied()
        .find(|u| u.symbol() == s || u.aliases().contains(&s));
    if let Some(u) = exact {
        return Ok(u);
    }
    let lower = normalize_symbol(s);
    U::ALL
        .iter()
        .copied()
        .find(|u| {
            normalize_symbol(u.symbol()) == lower
                || u.aliases().iter().any(|a| a.to_lowercase() == lower)
        })
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

// µ/u, Ω/ohm, ° 표기 차이를 흡수한다.
fn normalize_symbol(s: &str) -> String {
    s.to_lowercase()
        .replace('µ', "u")
        .replace('μ', "u")
        .replace('ω', "ohm")
        .replace('°', "")
}

/// 물리량의 단위 목록에서 단위 문자열의 인덱스를 찾는다.
pub fn unit_index(kind: QuantityKind, unit_str: &str) -> Result<usize, ConversionError> {
    let idx = match kind {
        QuantityKind::Voltage => parse_scaled::<VoltageUnit>(unit_str)?.index(),
        QuantityKind::Current => parse_scaled::<CurrentUnit>(unit_str)?.index(),
        QuantityKind::Resistance => parse_scaled::<ResistanceUnit>(unit_str)?.index(),
        QuantityKind::Power => parse_scaled::<PowerUnit>(unit_str)?.index(),
        QuantityKind::TemperatureDifference => {
            parse_scaled::<TemperatureDiffUnit>(unit_str)?.index()
        }
        QuantityKind::ThermalResistance => {
            parse_scaled::<ThermalResistanceUnit>(unit_str)?.index()
        }
        QuantityKind::Charge => parse_scaled::<ChargeUnit>(unit_str)?.index(),
        QuantityKind::Capacitance => parse_scaled::<CapacitanceUnit>(unit_str)?.index(),
        QuantityKind::Ratio => parse_scaled::<RatioUnit>(unit_str)?.index(),
    };
    Ok(idx)
}

fn unit_of(kind: QuantityKind, unit_str: &str) -> Result<Unit, ConversionError> {
    let idx = unit_index(kind, unit_str)?;
    kind.units()
        .into_iter()
        .nth(idx)
        .ok_or_else(|| ConversionError::UnknownUnit(unit_str.to_string()))
}

/// 표시값을 기준 단위 값으로 환산한다.
pub fn to_base(
    kind: QuantityKind,
    value: f64,
    unit_str: &str,
) -> Result<QuantityValue, ConversionError> {
    let unit = unit_of(kind, unit_str)?;
    Ok(QuantityValue {
        kind,
        value_base: unit.to_base(value),
    })
}

/// 기준 단위 값을 요청한 단위의 표시값으로 환산한다.
pub fn from_base(quantity: QuantityValue, unit_str: &str) -> Result<f64, ConversionError> {
    let unit = unit_of(quantity.kind, unit_str)?;
    Ok(unit.from_base(quantity.value_base))
}

/// 문자열로 전달된 단위명을 해석한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `mV`, `kohm`, `uF`, `°C/W`, `%` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let base = to_base(kind, value, from_unit_str)?;
    from_base(base, to_unit_str)
}

/// `"4.7k"`, `"4.7 kΩ"`, `"10"` 형태의 문자열을 숫자 부분과 단위 부분으로 나눈다.
///
/// 숫자로 해석되는 가장 긴 앞부분을 값으로 취한다. 단위가 없으면 빈 문자열을 돌려준다.
pub fn split_value_unit(text: &str) -> Result<(f64, &str), ConversionError> {
    let text = text.trim();
    let boundaries = text
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain(std::iter::once(text.len()));
    let mut best = None;
    for end in boundaries {
        if let Ok(v) = text[..end].trim().parse::<f64>() {
            best = Some((v, end));
        }
    }
    match best {
        Some((v, end)) if v.is_finite() => Ok((v, text[end..].trim())),
        _ => Err(ConversionError::InvalidValue(text.to_string())),
    }
}

/// 값 문자열을 변수 입력용 (숫자 텍스트, 단위 인덱스)로 해석한다.
/// 단위가 생략된 경우 인덱스는 `None` 이며 호출자가 기본 단위를 적용한다.
pub fn parse_value_with_unit(
    kind: QuantityKind,
    text: &str,
) -> Result<(f64, Option<usize>), ConversionError> {
    let (value, unit_str) = split_value_unit(text)?;
    if unit_str.is_empty() {
        return Ok((value, None));
    }
    let idx = unit_index(kind, unit_str)?;
    Ok((value, Some(idx)))
}
