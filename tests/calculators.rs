use electronics_toolbox::calculators::{
    capacitor_charge, heat_flow, ohms_law, CalculatorKind, CapacitorCharge, HeatFlow, OhmsLaw,
};
use electronics_toolbox::calculators::Calculator;
use electronics_toolbox::config::Config;
use electronics_toolbox::group::CalculatorGroup;
use electronics_toolbox::units::{CurrentUnit, ScaledUnit, VoltageUnit};
use electronics_toolbox::variable::{CalcError, Severity, Validator, Variable};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn ohms_law_solving_current() -> OhmsLaw {
    let mut calc = OhmsLaw::new().expect("ohms law");
    let group = calc.group_mut();
    group.solve_for(ohms_law::CURRENT).expect("current solvable");
    group.set_raw(ohms_law::VOLTAGE, "10").expect("voltage");
    group.set_raw(ohms_law::RESISTANCE, "5").expect("resistance");
    calc
}

#[test]
fn ohms_law_solves_current() {
    let calc = ohms_law_solving_current();
    assert_close("I", calc.current().expect("current"), 2.0, 1e-12);
    assert_eq!(calc.group().solving(), Some(ohms_law::CURRENT));
    assert_eq!(calc.group().display(ohms_law::CURRENT).expect("display"), "2.00");
}

#[test]
fn ohms_law_defaults_to_resistance() {
    let calc = OhmsLaw::new().expect("ohms law");
    assert_eq!(calc.group().solving(), Some(ohms_law::RESISTANCE));
    assert!(calc
        .group()
        .variable(ohms_law::RESISTANCE)
        .expect("resistance")
        .is_output());
}

#[test]
fn switching_solve_target_round_trips() {
    let mut calc = ohms_law_solving_current();
    let group = calc.group_mut();

    // 이전 출력(전류)은 마지막 계산값을 입력으로 유지한다
    let report = group.solve_for(ohms_law::VOLTAGE).expect("voltage");
    assert_eq!(group.variable(ohms_law::CURRENT).expect("I").raw(), "2");
    let v = report
        .output(ohms_law::VOLTAGE)
        .cloned()
        .expect("voltage reported")
        .expect("voltage computed");
    assert_close("V", v, 10.0, 1e-12);

    group.solve_for(ohms_law::CURRENT).expect("current");
    assert_close("I", group.value(ohms_law::CURRENT).expect("I"), 2.0, 1e-12);
}

#[test]
fn division_by_zero_is_reported() {
    let mut calc = ohms_law_solving_current();
    let report = calc
        .group_mut()
        .set_raw(ohms_law::RESISTANCE, "0")
        .expect("resistance");
    assert_eq!(
        report.output(ohms_law::CURRENT),
        Some(&Err(CalcError::DivisionByZero(ohms_law::CURRENT.to_string())))
    );
    assert!(report.has_errors());
    assert_eq!(calc.group().display(ohms_law::CURRENT).expect("display"), "");
}

#[test]
fn non_numeric_input_is_reported() {
    let mut calc = ohms_law_solving_current();
    let report = calc
        .group_mut()
        .set_raw(ohms_law::VOLTAGE, "ten")
        .expect("voltage");
    assert!(matches!(
        report.output(ohms_law::CURRENT),
        Some(Err(CalcError::InvalidNumber { .. }))
    ));
}

#[test]
fn output_unit_change_only_rescales_display() {
    let mut calc = ohms_law_solving_current();
    let group = calc.group_mut();
    group
        .select_unit(ohms_law::CURRENT, CurrentUnit::MilliAmpere.index())
        .expect("mA");
    assert_eq!(group.display(ohms_law::CURRENT).expect("display"), "2000.00");
    assert_close("I", group.value(ohms_law::CURRENT).expect("I"), 2.0, 1e-12);
}

#[test]
fn input_unit_change_rescales_value() {
    let mut calc = ohms_law_solving_current();
    let group = calc.group_mut();
    group.select_unit_by_symbol(ohms_law::VOLTAGE, "mV").expect("mV");
    assert_close("I", group.value(ohms_law::CURRENT).expect("I"), 0.002, 1e-12);
    assert!(matches!(
        group.select_unit_by_symbol(ohms_law::VOLTAGE, "parsec"),
        Err(CalcError::UnknownUnit { .. })
    ));
    assert!(matches!(
        group.select_unit(ohms_law::VOLTAGE, 9),
        Err(CalcError::UnknownUnit { .. })
    ));
}

#[test]
fn clear_empties_inputs() {
    let mut calc = ohms_law_solving_current();
    let report = calc.group_mut().clear();
    assert!(matches!(
        report.output(ohms_law::CURRENT),
        Some(Err(CalcError::MissingInput(_)))
    ));
    assert_eq!(calc.group().variable(ohms_law::VOLTAGE).expect("V").raw(), "");
}

#[test]
fn outputs_reject_edits() {
    let mut calc = ohms_law_solving_current();
    let group = calc.group_mut();
    assert_eq!(
        group.set_raw(ohms_law::CURRENT, "3").map(|_| ()),
        Err(CalcError::ReadOnly(ohms_law::CURRENT.to_string()))
    );
    assert_eq!(
        group.set_raw("power", "3").map(|_| ()),
        Err(CalcError::UnknownVariable("power".to_string()))
    );
}

#[test]
fn heat_flow_relations() {
    let mut calc = HeatFlow::new().expect("heat flow");
    let group = calc.group_mut();
    assert_eq!(group.solving(), Some(heat_flow::THERMAL_RESISTANCE));

    group.set_raw(heat_flow::TEMPERATURE_RISE, "50").expect("dT");
    group.set_raw(heat_flow::POWER, "5").expect("P");
    assert_close("Rth", calc.thermal_resistance().expect("Rth"), 10.0, 1e-12);

    let group = calc.group_mut();
    group.solve_for(heat_flow::TEMPERATURE_RISE).expect("dT");
    group.set_raw(heat_flow::POWER, "2").expect("P");
    assert_close("dT", calc.temperature_rise().expect("dT"), 20.0, 1e-12);

    let group = calc.group_mut();
    group.solve_for(heat_flow::POWER).expect("P");
    group.select_unit_by_symbol(heat_flow::POWER, "mW").expect("mW");
    assert_close("P", calc.power().expect("P"), 2.0, 1e-12);
    assert_eq!(calc.group().display(heat_flow::POWER).expect("P"), "2000.00");
}

#[test]
fn heat_flow_fahrenheit_rise() {
    let mut calc = HeatFlow::new().expect("heat flow");
    let group = calc.group_mut();
    group.select_unit_by_symbol(heat_flow::TEMPERATURE_RISE, "°F").expect("°F");
    group.set_raw(heat_flow::TEMPERATURE_RISE, "18").expect("dT");
    group.set_raw(heat_flow::POWER, "1").expect("P");
    assert_close("Rth", calc.thermal_resistance().expect("Rth"), 10.0, 1e-9);
}

#[test]
fn capacitor_charge_relations() {
    let mut calc = CapacitorCharge::new().expect("capacitor");
    assert_eq!(calc.group().solving(), Some(capacitor_charge::VOLTAGE));

    let group = calc.group_mut();
    group.solve_for(capacitor_charge::CHARGE).expect("Q");
    group.set_raw(capacitor_charge::CAPACITANCE, "100").expect("C");
    group.set_raw(capacitor_charge::VOLTAGE, "5").expect("V");
    // 기본 단위 nC 로 표시
    assert_eq!(calc.group().display(capacitor_charge::CHARGE).expect("Q"), "500.00");
    let q = calc.charge().expect("Q");
    assert!((q - 5e-7).abs() < 1e-18, "Q={q}");

    let group = calc.group_mut();
    group.solve_for(capacitor_charge::CAPACITANCE).expect("C");
    group.set_raw(capacitor_charge::VOLTAGE, "0").expect("V");
    assert!(matches!(
        calc.capacitance(),
        Err(CalcError::DivisionByZero(_))
    ));
}

#[test]
fn kinds_build_configured_calculators() {
    let mut cfg = Config::default();
    cfg.default_units.voltage = VoltageUnit::MilliVolt;
    cfg.display_digits = 4;

    for kind in CalculatorKind::ALL {
        let calc = kind.build(&cfg).expect("build");
        assert_eq!(calc.kind(), *kind);
        assert_eq!(calc.group().name(), kind.id());
        for (name, _) in kind.fields() {
            let var = calc.group().variable(name).expect("field exists");
            assert!(var.round_to() >= 4, "{name}");
        }
    }

    let calc = CalculatorKind::OhmsLaw.build(&cfg).expect("ohms law");
    let voltage = calc.group().variable(ohms_law::VOLTAGE).expect("V");
    assert_eq!(voltage.selected_unit().name, "mV");
}

#[test]
fn circular_equations_are_detected() {
    let mut group = CalculatorGroup::builder("loop")
        .variable(Variable::output("a", vec![], 0, |r| r.value("b")))
        .variable(Variable::output("b", vec![], 0, |r| r.value("a")))
        .build()
        .expect("group");
    assert_eq!(
        group.value("a"),
        Err(CalcError::CircularDependency("a".to_string()))
    );
    let report = group.recompute();
    assert!(report.has_errors());
}

#[test]
fn error_validators_block_and_warnings_pass() {
    let mut group = CalculatorGroup::builder("validated")
        .variable(
            Variable::input("x", vec![], 0)
                .with_raw("3")
                .with_validator(Validator::custom("x < 5", Severity::Error, |v| v < 5.0))
                .with_validator(Validator::custom("x even", Severity::Warning, |v| {
                    v % 2.0 == 0.0
                })),
        )
        .variable(Variable::output("double", vec![], 0, |r| Ok(r.value("x")? * 2.0)))
        .build()
        .expect("group");

    let report = group.recompute();
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].severity, Severity::Warning);
    assert_close("double", group.value("double").expect("ok"), 6.0, 1e-12);

    let report = group.set_raw("x", "8").expect("x");
    assert!(matches!(
        report.output("double"),
        Some(Err(CalcError::Validation { .. }))
    ));
}

#[test]
fn linked_units_follow_first_variable() {
    let group = CalculatorGroup::builder("linked")
        .variable(Variable::input("a", VoltageUnit::unit_set(), 2))
        .variable(Variable::input("b", VoltageUnit::unit_set(), 0))
        .link_units(&["a", "b"])
        .build()
        .expect("group");
    assert_eq!(group.variable("b").expect("b").selected_unit().name, "kV");
}

#[test]
fn rejected_unit_leaves_linked_group_untouched() {
    let mut group = CalculatorGroup::builder("partial")
        .variable(Variable::input("a", VoltageUnit::unit_set(), 1).with_raw("2"))
        .variable(Variable::input("b", VoltageUnit::unit_set(), 0))
        .link_units(&["a", "b"])
        .build()
        .expect("group");
    let len = VoltageUnit::ALL.len();
    assert!(matches!(
        group.select_unit("b", len),
        Err(CalcError::UnknownUnit { .. })
    ));
    for name in ["a", "b"] {
        assert_eq!(group.variable(name).expect(name).selected_unit().name, "V");
    }
}

#[test]
fn links_require_matching_unit_lists() {
    let built = CalculatorGroup::builder("mismatch")
        .variable(Variable::input("v", VoltageUnit::unit_set(), 0))
        .variable(Variable::input("i", CurrentUnit::unit_set(), 0))
        .link_units(&["v", "i"])
        .build();
    assert_eq!(
        built.map(|_| ()),
        Err(CalcError::LinkMismatch {
            variable: "i".to_string(),
            first: "v".to_string(),
        })
    );
}
