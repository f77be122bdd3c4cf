use electronics_toolbox::calculators::{ohms_law, Calculator, CalculatorKind};
use electronics_toolbox::config::Config;
use electronics_toolbox::conversion::{
    self, parse_value_with_unit, split_value_unit, unit_index, ConversionError,
};
use electronics_toolbox::quantity::QuantityKind;
use electronics_toolbox::ui_cli;
use electronics_toolbox::units::{
    CapacitanceUnit, ResistanceUnit, ScaledUnit, ThermalResistanceUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn converts_between_scaled_units() {
    let r = conversion::convert(QuantityKind::Resistance, 4.7, "kohm", "Ω").expect("kΩ->Ω");
    assert_close("R", r, 4_700.0, 1e-12);

    let c = conversion::convert(QuantityKind::Capacitance, 100.0, "nF", "uF").expect("nF->uF");
    assert_close("C", c, 0.1, 1e-12);
    let c = conversion::convert(QuantityKind::Capacitance, 0.1, "µF", "pF").expect("µF->pF");
    assert_close("C", c, 100_000.0, 1e-9);

    let dt = conversion::convert(QuantityKind::TemperatureDifference, 9.0, "°F", "K")
        .expect("°F->K");
    assert_close("dT", dt, 5.0, 1e-12);

    let rth = conversion::convert(QuantityKind::ThermalResistance, 2.0, "°C/W", "°C/kW")
        .expect("°C/W->°C/kW");
    assert_close("Rth", rth, 2_000.0, 1e-9);

    let ppm = conversion::convert(QuantityKind::Ratio, 1.0, "%", "ppm").expect("%->ppm");
    assert_close("ratio", ppm, 10_000.0, 1e-9);

    let f = CapacitanceUnit::MicroFarad.unit().to_base(1.0);
    assert_close("µF base", f / 1e-6, 1.0, 1e-12);
}

#[test]
fn mega_and_milli_are_distinct() {
    assert_eq!(
        unit_index(QuantityKind::Resistance, "M"),
        Ok(ResistanceUnit::MegaOhm.index())
    );
    assert_eq!(
        unit_index(QuantityKind::Resistance, "m"),
        Ok(ResistanceUnit::MilliOhm.index())
    );
    assert_eq!(
        unit_index(QuantityKind::Resistance, "MΩ"),
        Ok(ResistanceUnit::MegaOhm.index())
    );
    assert_eq!(
        unit_index(QuantityKind::ThermalResistance, "c/w"),
        Ok(ThermalResistanceUnit::CelsiusPerWatt.index())
    );
}

#[test]
fn unknown_units_and_values_are_rejected() {
    assert_eq!(
        conversion::convert(QuantityKind::Voltage, 1.0, "furlong", "V"),
        Err(ConversionError::UnknownUnit("furlong".to_string()))
    );
    assert!(matches!(
        split_value_unit("abc"),
        Err(ConversionError::InvalidValue(_))
    ));
    assert!(matches!(
        split_value_unit(""),
        Err(ConversionError::InvalidValue(_))
    ));
}

#[test]
fn splits_value_and_unit_suffix() {
    assert_eq!(split_value_unit("4.7k"), Ok((4.7, "k")));
    assert_eq!(split_value_unit(" 10 mV "), Ok((10.0, "mV")));
    assert_eq!(split_value_unit("330"), Ok((330.0, "")));
    assert_eq!(split_value_unit("1e3Ω"), Ok((1000.0, "Ω")));
    assert_eq!(split_value_unit("-2.5mA"), Ok((-2.5, "mA")));
}

#[test]
fn parses_value_with_optional_unit() {
    assert_eq!(
        parse_value_with_unit(QuantityKind::Resistance, "1.2M"),
        Ok((1.2, Some(ResistanceUnit::MegaOhm.index())))
    );
    assert_eq!(
        parse_value_with_unit(QuantityKind::Resistance, "4.7 kΩ"),
        Ok((4.7, Some(ResistanceUnit::KiloOhm.index())))
    );
    assert_eq!(
        parse_value_with_unit(QuantityKind::Resistance, "330"),
        Ok((330.0, None))
    );
    assert!(matches!(
        parse_value_with_unit(QuantityKind::Capacitance, "10 kg"),
        Err(ConversionError::UnknownUnit(_))
    ));
}

#[test]
fn suffixed_values_drive_calculators() {
    let mut calc = CalculatorKind::OhmsLaw
        .build(&Config::default())
        .expect("ohms law");
    let report = ui_cli::solve_once(
        calc.as_mut(),
        &[
            (ohms_law::VOLTAGE, Some("5")),
            (ohms_law::CURRENT, None),
            (ohms_law::RESISTANCE, Some("1k")),
        ],
        None,
    )
    .expect("solve");
    assert!(ui_cli::ensure_computed(&report).is_ok());

    let group = calc.group();
    assert_eq!(group.solving(), Some(ohms_law::CURRENT));
    assert_close(
        "I",
        group.value(ohms_law::CURRENT).expect("I"),
        0.005,
        1e-12,
    );
    assert_eq!(
        group
            .variable(ohms_law::RESISTANCE)
            .expect("R")
            .selected_unit()
            .name,
        "kΩ"
    );
}

#[test]
fn explicit_solve_target_wins() {
    let mut calc = CalculatorKind::OhmsLaw
        .build(&Config::default())
        .expect("ohms law");
    let report = ui_cli::solve_once(
        calc.as_mut(),
        &[
            (ohms_law::VOLTAGE, Some("12")),
            (ohms_law::CURRENT, Some("20mA")),
            (ohms_law::RESISTANCE, Some("999")),
        ],
        Some(ohms_law::RESISTANCE),
    )
    .expect("solve");
    assert!(ui_cli::ensure_computed(&report).is_ok());
    assert_close(
        "R",
        calc.group().value(ohms_law::RESISTANCE).expect("R"),
        600.0,
        1e-9,
    );
}

#[test]
fn resistor_lookup_with_suffix() {
    let (finder, report) =
        ui_cli::find_resistor(&Config::default(), "4.3k", None).expect("lookup");
    assert!(ui_cli::ensure_computed(&report).is_ok());
    // E12 에는 4.3 이 없으므로 3.9 (+10.3%) 와 4.7 (-8.5%) 중 4.7
    assert_close("actual", finder.actual().expect("actual"), 4_700.0, 1e-9);

    let result = ui_cli::convert_text("capacitance", "22", "nF", "pF").expect("convert");
    assert_close("convert", result, 22_000.0, 1e-9);
    assert!(ui_cli::convert_text("mass", "1", "kg", "g").is_err());
}
