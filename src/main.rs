use std::path::PathBuf;

use clap::{Parser, Subcommand};
use electronics_toolbox::app::{self, AppError};
use electronics_toolbox::calculators::{
    capacitor_charge, heat_flow, ohms_law, Calculator, CalculatorKind,
};
use electronics_toolbox::config::{self, Config};
use electronics_toolbox::i18n::{self, Translator};
use electronics_toolbox::series::SeriesKind;
use electronics_toolbox::ui_cli;

#[derive(Parser)]
#[command(name = "electronics_toolbox", version)]
#[command(about = "Electronics reference calculators", long_about = None)]
struct Cli {
    /// Config file path (default: config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language (ko, en, auto)
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ohm's law: V = I * R
    OhmsLaw {
        #[arg(long)]
        voltage: Option<String>,
        #[arg(long)]
        current: Option<String>,
        #[arg(long)]
        resistance: Option<String>,
        /// Variable to solve for (voltage, current, resistance)
        #[arg(long)]
        solve: Option<String>,
    },

    /// Heat flow through a thermal resistance: P = dT / Rth
    HeatFlow {
        #[arg(long)]
        power: Option<String>,
        #[arg(long)]
        temperature_rise: Option<String>,
        #[arg(long)]
        thermal_resistance: Option<String>,
        /// Variable to solve for (power, temperature_rise, thermal_resistance)
        #[arg(long)]
        solve: Option<String>,
    },

    /// Capacitor charge: Q = C * V
    CapacitorCharge {
        #[arg(long)]
        charge: Option<String>,
        #[arg(long)]
        capacitance: Option<String>,
        #[arg(long)]
        voltage: Option<String>,
        /// Variable to solve for (charge, capacitance, voltage)
        #[arg(long)]
        solve: Option<String>,
    },

    /// Closest standard resistor value
    Resistor {
        /// Desired resistance (e.g. "4.7k", "330", "1.2M")
        desired: String,
        /// E-series (e12, e24, e48, e96, e192)
        #[arg(long)]
        series: Option<SeriesKind>,
    },

    /// Print a normalized E-series table
    Series {
        /// e12, e24, e48, e96, e192
        series: SeriesKind,
    },

    /// Convert a value between units of one quantity
    Convert {
        /// voltage, current, resistance, power, temperature-difference,
        /// thermal-resistance, charge, capacitance, ratio
        quantity: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    let config_path = config::resolve_path(cli.config.as_deref());

    let mut cfg = match config::load_or_default(&config_path) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = Translator::new(&i18n::resolve_language(cli.lang.as_deref(), None));
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            std::process::exit(1);
        }
    };
    init_logger(&cfg);

    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, None);

    if let Err(err) = try_run(cli.command, &mut cfg, &config_path, &tr) {
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

// RUST_LOG 가 있으면 그것을, 없으면 설정의 log_level 을 쓴다.
fn init_logger(cfg: &Config) {
    let env = env_logger::Env::default().default_filter_or(cfg.log_level.as_str());
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn try_run(
    command: Option<Commands>,
    cfg: &mut Config,
    config_path: &std::path::Path,
    tr: &Translator,
) -> Result<(), AppError> {
    let Some(command) = command else {
        return app::run(cfg, config_path, tr);
    };
    match command {
        Commands::OhmsLaw {
            voltage,
            current,
            resistance,
            solve,
        } => run_solver(
            cfg,
            tr,
            CalculatorKind::OhmsLaw,
            &[
                (ohms_law::VOLTAGE, voltage.as_deref()),
                (ohms_law::CURRENT, current.as_deref()),
                (ohms_law::RESISTANCE, resistance.as_deref()),
            ],
            solve.as_deref(),
        ),
        Commands::HeatFlow {
            power,
            temperature_rise,
            thermal_resistance,
            solve,
        } => run_solver(
            cfg,
            tr,
            CalculatorKind::HeatFlow,
            &[
                (heat_flow::POWER, power.as_deref()),
                (heat_flow::TEMPERATURE_RISE, temperature_rise.as_deref()),
                (heat_flow::THERMAL_RESISTANCE, thermal_resistance.as_deref()),
            ],
            solve.as_deref(),
        ),
        Commands::CapacitorCharge {
            charge,
            capacitance,
            voltage,
            solve,
        } => run_solver(
            cfg,
            tr,
            CalculatorKind::CapacitorCharge,
            &[
                (capacitor_charge::CHARGE, charge.as_deref()),
                (capacitor_charge::CAPACITANCE, capacitance.as_deref()),
                (capacitor_charge::VOLTAGE, voltage.as_deref()),
            ],
            solve.as_deref(),
        ),
        Commands::Resistor { desired, series } => {
            let (finder, report) = ui_cli::find_resistor(cfg, &desired, series)?;
            ui_cli::print_resistor(tr, &finder, &report);
            ui_cli::ensure_computed(&report)
        }
        Commands::Series { series } => {
            ui_cli::print_series(series);
            Ok(())
        }
        Commands::Convert {
            quantity,
            value,
            from,
            to,
        } => {
            let result = ui_cli::convert_text(&quantity, &value, &from, &to)?;
            println!("{result} {}", to.trim());
            Ok(())
        }
    }
}

fn run_solver(
    cfg: &Config,
    tr: &Translator,
    kind: CalculatorKind,
    values: &[(&str, Option<&str>)],
    solve: Option<&str>,
) -> Result<(), AppError> {
    let mut calc = kind.build(cfg)?;
    let report = ui_cli::solve_once(calc.as_mut(), values, solve)?;
    ui_cli::print_group(tr, calc.group(), &report);
    ui_cli::ensure_computed(&report)
}
