use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::series::SeriesKind;
use crate::units::*;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 표시 자릿수 상한.
pub const MAX_DISPLAY_DIGITS: usize = 12;

/// 각 물리량별 기본 단위 설정을 담는다. 계산기 생성 시 선택 단위로 사용한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub voltage: VoltageUnit,
    pub current: CurrentUnit,
    pub resistance: ResistanceUnit,
    pub power: PowerUnit,
    pub temperature_diff: TemperatureDiffUnit,
    pub thermal_resistance: ThermalResistanceUnit,
    pub charge: ChargeUnit,
    pub capacitance: CapacitanceUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            voltage: VoltageUnit::Volt,
            current: CurrentUnit::Ampere,
            resistance: ResistanceUnit::Ohm,
            power: PowerUnit::Watt,
            temperature_diff: TemperatureDiffUnit::Celsius,
            thermal_resistance: ThermalResistanceUnit::CelsiusPerWatt,
            charge: ChargeUnit::NanoCoulomb,
            capacitance: CapacitanceUnit::NanoFarad,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (ko/en/auto)
    pub language: String,
    /// `RUST_LOG` 가 없을 때 사용하는 로그 필터
    pub log_level: String,
    /// 표준 저항 찾기의 기본 계열
    pub default_series: SeriesKind,
    /// 출력 변수 표시 자릿수
    pub display_digits: usize,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            log_level: "warn".to_string(),
            default_series: SeriesKind::E12,
            display_digits: 2,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!("wrote default config to {}", path.display());
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save_config(self, path.as_ref())
    }

    /// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
    /// 표시 자릿수는 [`MAX_DISPLAY_DIGITS`] 로 제한된다.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(src)?;
        Ok(cfg.clamped())
    }

    fn clamped(mut self) -> Self {
        if self.display_digits > MAX_DISPLAY_DIGITS {
            warn!(
                "display_digits {} exceeds {MAX_DISPLAY_DIGITS}, clamped",
                self.display_digits
            );
            self.display_digits = MAX_DISPLAY_DIGITS;
        }
        self
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// CLI 인자가 없으면 기본 경로를 돌려준다.
pub fn resolve_path(cli_path: Option<&Path>) -> PathBuf {
    cli_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
