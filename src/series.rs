//! 표준 저항값 계열(E-series)과 최근접 표준값 탐색.
//!
//! 계열 값은 한 디케이드 `[1.0, 10.0)` 로 정규화되어 있고, 마지막에 10.0 경계값을 포함한다.
//! E12/E24 는 고정 표, E48/E96/E192 는 `10^(i/n)` 을 소수 둘째 자리로 반올림해 생성한다.

use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const E12: [f64; 13] = [
    1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2, 10.0,
];

const E24: [f64; 25] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1, 5.6,
    6.2, 6.8, 7.5, 8.2, 9.1, 10.0,
];

/// 계열 생성/검증 및 최근접 탐색 오류.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeriesError {
    /// 빈 계열
    #[error("계열이 비어 있습니다.")]
    Empty,
    /// 오름차순이 아닌 계열
    #[error("계열이 오름차순이 아닙니다 (인덱스 {index}).")]
    NotAscending { index: usize },
    /// 0 이하이거나 유한하지 않은 계열 값
    #[error("계열 값이 유효하지 않습니다: {0}")]
    InvalidEntry(f64),
    /// 계열 범위로 정규화할 수 없는 입력값
    #[error("입력값 {desired} 이(가) 계열 범위를 벗어났습니다.")]
    OutOfRange { desired: f64 },
    /// 알 수 없는 계열 이름
    #[error("알 수 없는 계열: {0}")]
    UnknownSeries(String),
}

/// 지원하는 표준 계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    E12,
    E24,
    E48,
    E96,
    E192,
}

impl SeriesKind {
    pub const ALL: &'static [SeriesKind] = &[
        SeriesKind::E12,
        SeriesKind::E24,
        SeriesKind::E48,
        SeriesKind::E96,
        SeriesKind::E192,
    ];

    /// 10.0 경계값을 포함한 정규화 계열 전체.
    pub fn values(self) -> Vec<f64> {
        match self {
            SeriesKind::E12 => E12.to_vec(),
            SeriesKind::E24 => E24.to_vec(),
            SeriesKind::E48 => build_log_series(48),
            SeriesKind::E96 => build_log_series(96),
            SeriesKind::E192 => build_log_series(192),
        }
    }

    pub fn series(self) -> Series {
        Series {
            values: self.values(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeriesKind::E12 => "e12",
            SeriesKind::E24 => "e24",
            SeriesKind::E48 => "e48",
            SeriesKind::E96 => "e96",
            SeriesKind::E192 => "e192",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

impl FromStr for SeriesKind {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "e12" | "12" => Ok(SeriesKind::E12),
            "e24" | "24" => Ok(SeriesKind::E24),
            "e48" | "48" => Ok(SeriesKind::E48),
            "e96" | "96" => Ok(SeriesKind::E96),
            "e192" | "192" => Ok(SeriesKind::E192),
            _ => Err(SeriesError::UnknownSeries(s.to_string())),
        }
    }
}

/// `10^(i/n)` (i = 0..n) 를 소수 둘째 자리로 반올림한 계열에 10.0 경계값을 붙여 만든다.
pub fn build_log_series(n: usize) -> Vec<f64> {
    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let v = 10f64.powf(i as f64 / n as f64);
            (v * 100.0).round() / 100.0
        })
        .collect();
    values.push(10.0);
    values
}

/// 검증된 오름차순 정규화 계열.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    /// 임의의 값 목록으로 계열을 만든다. 비어 있지 않고, 양의 유한값이며, 엄격한 오름차순이어야 한다.
    pub fn new(values: Vec<f64>) -> Result<Self, SeriesError> {
        if values.is_empty() {
            return Err(SeriesError::Empty);
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(SeriesError::InvalidEntry(*bad));
        }
        if let Some(index) = values.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SeriesError::NotAscending { index: index + 1 });
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 원하는 값에 가장 가까운 계열 값을 찾는다. [`find_closest`] 참고.
    pub fn find_closest(&self, desired: f64) -> Result<ClosestMatch, SeriesError> {
        find_closest(desired, &self.values)
    }
}

/// 최근접 탐색 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestMatch {
    /// 원래 디케이드로 되돌린 표준값
    pub value: f64,
    /// `(정규화 입력 - 계열 값) / 계열 값 × 100`, 부호 유지
    pub percent_diff: f64,
}

/// 입력값이 속한 디케이드 지수. 1~10 → 0, 10~100 → 1.
pub fn find_order(value: f64) -> i32 {
    value.log10().floor() as i32
}

/// 값을 주어진 디케이드 기준으로 1~10 범위로 나눈다.
pub fn scale_wrt_order(value: f64, order: i32) -> f64 {
    value / 10f64.powi(order)
}

fn percent_diff(scaled: f64, entry: f64) -> f64 {
    (scaled - entry) / entry * 100.0
}

/// 원하는 값에 가장 가까운 표준값을 계열에서 찾는다.
///
/// 입력을 디케이드 `[1, 10)` 로 정규화한 뒤 처음으로 `>= scaled` 인 항목과 바로 아래 항목의
/// 백분율 차이를 비교한다. 절댓값이 같으면 아래 항목을 택한다. 정규화 값이 첫 항목과 같으면
/// 첫 항목을 그대로 돌려준다. `series` 는 오름차순이어야 한다.
pub fn find_closest(desired: f64, series: &[f64]) -> Result<ClosestMatch, SeriesError> {
    if series.is_empty() {
        return Err(SeriesError::Empty);
    }
    if !desired.is_finite() || desired <= 0.0 {
        return Err(SeriesError::OutOfRange { desired });
    }

    let mut order = find_order(desired);
    let mut scaled = scale_wrt_order(desired, order);
    // 디케이드 경계에서의 부동소수 오차 보정
    if scaled >= 10.0 {
        order += 1;
        scaled = scale_wrt_order(desired, order);
    } else if scaled < 1.0 {
        order -= 1;
        scaled = scale_wrt_order(desired, order);
    }
    trace!("desired={desired} order={order} scaled={scaled}");

    let first = series[0];
    let last = series[series.len() - 1];
    if scaled < first || scaled > last {
        return Err(SeriesError::OutOfRange { desired });
    }

    let i = series
        .iter()
        .position(|entry| *entry >= scaled)
        .ok_or(SeriesError::OutOfRange { desired })?;

    let (value, diff) = if i == 0 {
        (first, percent_diff(scaled, first))
    } else {
        let lower = series[i - 1];
        let higher = series[i];
        let lower_diff = percent_diff(scaled, lower);
        let higher_diff = percent_diff(scaled, higher);
        trace!("lower={lower} ({lower_diff}%) higher={higher} ({higher_diff}%)");
        if lower_diff.abs() <= higher_diff.abs() {
            (lower, lower_diff)
        } else {
            (higher, higher_diff)
        }
    };

    Ok(ClosestMatch {
        value: value * 10f64.powi(order),
        percent_diff: diff,
    })
}
