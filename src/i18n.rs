use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_OHMS_LAW: &str = "main_menu.ohms_law";
    pub const MAIN_MENU_HEAT_FLOW: &str = "main_menu.heat_flow";
    pub const MAIN_MENU_CAPACITOR: &str = "main_menu.capacitor_charge";
    pub const MAIN_MENU_RESISTOR: &str = "main_menu.standard_resistance";
    pub const MAIN_MENU_SERIES: &str = "main_menu.series";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SOLVER_PROMPT_SOLVE: &str = "solver.prompt_solve";
    pub const SOLVER_PROMPT_VALUE: &str = "solver.prompt_value";
    pub const SOLVER_KEEP_HINT: &str = "solver.keep_hint";
    pub const SOLVER_RESULT_HEADING: &str = "solver.result_heading";
    pub const SOLVER_OUTPUT_MARK: &str = "solver.output_mark";
    pub const SOLVER_NOT_COMPUTED: &str = "solver.not_computed";

    pub const RESISTOR_HEADING: &str = "resistor.heading";
    pub const PROMPT_DESIRED_RESISTANCE: &str = "resistor.prompt_desired";
    pub const PROMPT_SERIES: &str = "resistor.prompt_series";
    pub const RESULT_CLOSEST: &str = "resistor.result_closest";
    pub const RESULT_DEVIATION: &str = "resistor.result_deviation";

    pub const SERIES_HEADING: &str = "series.heading";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_SERIES: &str = "settings.current_series";
    pub const SETTINGS_CURRENT_DIGITS: &str = "settings.current_digits";
    pub const SETTINGS_PROMPT_SERIES: &str = "settings.prompt_series";
    pub const SETTINGS_PROMPT_DIGITS: &str = "settings.prompt_digits";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const VAR_VOLTAGE: &str = "var.voltage";
    pub const VAR_CURRENT: &str = "var.current";
    pub const VAR_RESISTANCE: &str = "var.resistance";
    pub const VAR_POWER: &str = "var.power";
    pub const VAR_TEMPERATURE_RISE: &str = "var.temperature_rise";
    pub const VAR_THERMAL_RESISTANCE: &str = "var.thermal_resistance";
    pub const VAR_CHARGE: &str = "var.charge";
    pub const VAR_CAPACITANCE: &str = "var.capacitance";
    pub const VAR_DESIRED: &str = "var.desired";
    pub const VAR_ACTUAL: &str = "var.actual";
    pub const VAR_PERCENT_DIFF: &str = "var.percent_diff";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let s = match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        s.to_string()
    }

    /// 변수 이름의 표시 라벨. 번역이 없으면 이름을 그대로 쓴다.
    pub fn label(&self, variable: &str) -> String {
        let key = format!("var.{variable}");
        let text = self.t(&key);
        if text == MISSING {
            variable.to_string()
        } else {
            text
        }
    }
}

const MISSING: &str = "[missing translation]";

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

/// 중첩 테이블을 `a.b.c` 키의 평면 맵으로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "경고",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 전자 회로 계산기 ===",
        MAIN_MENU_OHMS_LAW => "1) 옴의 법칙",
        MAIN_MENU_HEAT_FLOW => "2) 열 흐름 (열저항)",
        MAIN_MENU_CAPACITOR => "3) 커패시터 전하량",
        MAIN_MENU_RESISTOR => "4) 표준 저항값 찾기",
        MAIN_MENU_SERIES => "5) E-series 표",
        MAIN_MENU_UNIT_CONVERSION => "6) 단위 변환기",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SOLVER_PROMPT_SOLVE => "계산할 항목 번호 (엔터 = 현재 유지): ",
        SOLVER_PROMPT_VALUE => "값 입력",
        SOLVER_KEEP_HINT => "(예: 4.7k, 10 mV / 엔터 = 유지)",
        SOLVER_RESULT_HEADING => "-- 결과 --",
        SOLVER_OUTPUT_MARK => "(계산값)",
        SOLVER_NOT_COMPUTED => "계산할 수 없음:",
        RESISTOR_HEADING => "\n-- 표준 저항값 찾기 --",
        PROMPT_DESIRED_RESISTANCE => "원하는 저항 (예: 4.7k): ",
        PROMPT_SERIES => "계열 (e12/e24/e48/e96/e192, 엔터 = 기본값): ",
        RESULT_CLOSEST => "가장 가까운 표준값:",
        RESULT_DEVIATION => "편차:",
        SERIES_HEADING => "\n-- E-series 정규화 표 --",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: mV, kohm, uF): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: V, ohm, nF): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_SERIES => "현재 기본 계열:",
        SETTINGS_CURRENT_DIGITS => "현재 표시 자릿수:",
        SETTINGS_PROMPT_SERIES => "새 기본 계열 (엔터 = 유지): ",
        SETTINGS_PROMPT_DIGITS => "새 표시 자릿수 (엔터 = 유지): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        VAR_VOLTAGE => "전압",
        VAR_CURRENT => "전류",
        VAR_RESISTANCE => "저항",
        VAR_POWER => "소비 전력",
        VAR_TEMPERATURE_RISE => "온도 상승",
        VAR_THERMAL_RESISTANCE => "열저항",
        VAR_CHARGE => "전하량",
        VAR_CAPACITANCE => "정전용량",
        VAR_DESIRED => "원하는 저항",
        VAR_ACTUAL => "표준 저항",
        VAR_PERCENT_DIFF => "편차",
        _ => MISSING,
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Electronics Toolbox ===",
        MAIN_MENU_OHMS_LAW => "1) Ohm's law",
        MAIN_MENU_HEAT_FLOW => "2) Heat flow (thermal resistance)",
        MAIN_MENU_CAPACITOR => "3) Capacitor charge",
        MAIN_MENU_RESISTOR => "4) Standard resistance finder",
        MAIN_MENU_SERIES => "5) E-series tables",
        MAIN_MENU_UNIT_CONVERSION => "6) Unit converter",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SOLVER_PROMPT_SOLVE => "Quantity to calculate (enter = keep current): ",
        SOLVER_PROMPT_VALUE => "Value",
        SOLVER_KEEP_HINT => "(ex: 4.7k, 10 mV / enter = keep)",
        SOLVER_RESULT_HEADING => "-- Result --",
        SOLVER_OUTPUT_MARK => "(calculated)",
        SOLVER_NOT_COMPUTED => "Cannot calculate:",
        RESISTOR_HEADING => "\n-- Standard Resistance Finder --",
        PROMPT_DESIRED_RESISTANCE => "Desired resistance (ex: 4.7k): ",
        PROMPT_SERIES => "Series (e12/e24/e48/e96/e192, enter = default): ",
        RESULT_CLOSEST => "Closest standard value:",
        RESULT_DEVIATION => "Deviation:",
        SERIES_HEADING => "\n-- Normalized E-series table --",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: mV, kohm, uF): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: V, ohm, nF): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_SERIES => "Current default series:",
        SETTINGS_CURRENT_DIGITS => "Current display digits:",
        SETTINGS_PROMPT_SERIES => "New default series (enter = keep): ",
        SETTINGS_PROMPT_DIGITS => "New display digits (enter = keep): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        VAR_VOLTAGE => "Voltage",
        VAR_CURRENT => "Current",
        VAR_RESISTANCE => "Resistance",
        VAR_POWER => "Dissipated power",
        VAR_TEMPERATURE_RISE => "Temperature rise",
        VAR_THERMAL_RESISTANCE => "Thermal resistance",
        VAR_CHARGE => "Charge",
        VAR_CAPACITANCE => "Capacitance",
        VAR_DESIRED => "Desired resistance",
        VAR_ACTUAL => "Standard resistance",
        VAR_PERCENT_DIFF => "Deviation",
        _ => return None,
    })
}
