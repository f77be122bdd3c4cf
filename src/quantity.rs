use serde::{Deserialize, Serialize};

use crate::units::*;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityKind {
    Voltage,
    Current,
    Resistance,
    Power,
    TemperatureDifference,
    ThermalResistance,
    Charge,
    Capacitance,
    Ratio,
}

impl QuantityKind {
    pub const ALL: &'static [QuantityKind] = &[
        QuantityKind::Voltage,
        QuantityKind::Current,
        QuantityKind::Resistance,
        QuantityKind::Power,
        QuantityKind::TemperatureDifference,
        QuantityKind::ThermalResistance,
        QuantityKind::Charge,
        QuantityKind::Capacitance,
        QuantityKind::Ratio,
    ];

    /// CLI 등에서 사용하는 식별자.
    pub fn id(self) -> &'static str {
        match self {
            QuantityKind::Voltage => "voltage",
            QuantityKind::Current => "current",
            QuantityKind::Resistance => "resistance",
            QuantityKind::Power => "power",
            QuantityKind::TemperatureDifference => "temperature-difference",
            QuantityKind::ThermalResistance => "thermal-resistance",
            QuantityKind::Charge => "charge",
            QuantityKind::Capacitance => "capacitance",
            QuantityKind::Ratio => "ratio",
        }
    }

    /// 식별자 또는 흔히 쓰는 약칭으로 물리량을 찾는다.
    pub fn from_id(s: &str) -> Option<Self> {
        let q = match s.trim().to_lowercase().as_str() {
            "voltage" | "v" => QuantityKind::Voltage,
            "current" | "i" => QuantityKind::Current,
            "resistance" | "r" => QuantityKind::Resistance,
            "power" | "p" => QuantityKind::Power,
            "temperature-difference" | "temperature" | "dt" => QuantityKind::TemperatureDifference,
            "thermal-resistance" | "rth" => QuantityKind::ThermalResistance,
            "charge" | "q" => QuantityKind::Charge,
            "capacitance" | "c" => QuantityKind::Capacitance,
            "ratio" | "percent" => QuantityKind::Ratio,
            _ => return None,
        };
        Some(q)
    }

    /// 선택 가능한 단위 목록. 순서는 변수의 단위 인덱스와 일치한다.
    pub fn units(self) -> Vec<Unit> {
        match self {
            QuantityKind::Voltage => VoltageUnit::unit_set(),
            QuantityKind::Current => CurrentUnit::unit_set(),
            QuantityKind::Resistance => ResistanceUnit::unit_set(),
            QuantityKind::Power => PowerUnit::unit_set(),
            QuantityKind::TemperatureDifference => TemperatureDiffUnit::unit_set(),
            QuantityKind::ThermalResistance => ThermalResistanceUnit::unit_set(),
            QuantityKind::Charge => ChargeUnit::unit_set(),
            QuantityKind::Capacitance => CapacitanceUnit::unit_set(),
            QuantityKind::Ratio => RatioUnit::unit_set(),
        }
    }
}

/// 내부 기준 단위로 환산된 값을 담는 컨테이너.
///
/// `value_base`는 kind 별 기준 단위(전압=V, 전류=A, 저항=Ω, 전력=W, 온도차=K,
/// 열저항=°C/W, 전하=C, 정전용량=F, 비율=1.0)로 저장한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityValue {
    pub kind: QuantityKind,
    pub value_base: f64,
}
