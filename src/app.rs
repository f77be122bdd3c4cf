use std::path::Path;

use thiserror::Error;

use crate::calculators::CalculatorKind;
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{self, Translator};
use crate::series::SeriesError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::variable::CalcError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 계산기 변수 계산 오류
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    /// 표준 계열 오류
    #[error("계열 오류: {0}")]
    Series(#[from] SeriesError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정 변경은 `config_path` 에 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        let result = match ui_cli::main_menu(tr)? {
            MenuChoice::OhmsLaw => ui_cli::handle_calculator(tr, config, CalculatorKind::OhmsLaw),
            MenuChoice::HeatFlow => {
                ui_cli::handle_calculator(tr, config, CalculatorKind::HeatFlow)
            }
            MenuChoice::CapacitorCharge => {
                ui_cli::handle_calculator(tr, config, CalculatorKind::CapacitorCharge)
            }
            MenuChoice::StandardResistance => ui_cli::handle_standard_resistance(tr, config),
            MenuChoice::SeriesTable => ui_cli::handle_series_table(tr, config),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                Ok(())
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        // 입출력 오류가 아니면 메뉴로 돌아간다.
        match result {
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(err) => println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX)),
            Ok(()) => {}
        }
    }
    Ok(())
}
