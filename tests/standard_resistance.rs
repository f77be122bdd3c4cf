//! 표준 저항값 탐색 회귀 테스트.
use electronics_toolbox::calculators::standard_resistance::{
    StandardResistanceFinder, ACTUAL, DESIRED, PERCENT_DIFF,
};
use electronics_toolbox::calculators::Calculator;
use electronics_toolbox::series::{
    build_log_series, find_closest, find_order, Series, SeriesError, SeriesKind,
};
use electronics_toolbox::units::{ResistanceUnit, ScaledUnit};
use electronics_toolbox::variable::{CalcError, Severity};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn first_entry_is_exact_match() {
    let m = find_closest(1.0, &SeriesKind::E12.values()).expect("1.0 in e12");
    assert_close("value", m.value, 1.0, 1e-12);
    assert_close("diff", m.percent_diff, 0.0, 1e-12);
}

#[test]
fn exact_member_in_higher_decade() {
    let m = find_closest(47.0, &SeriesKind::E24.values()).expect("47 in e24");
    assert_close("value", m.value, 47.0, 1e-9);
    assert_close("diff", m.percent_diff, 0.0, 1e-9);
}

#[test]
fn picks_nearer_neighbour() {
    // 5.0 은 4.7(+6.38%)이 5.6(-10.7%)보다 가깝다
    let m = find_closest(5_000.0, &SeriesKind::E12.values()).expect("5k");
    assert_close("value", m.value, 4_700.0, 1e-9);
    assert_close("diff", m.percent_diff, 0.3 / 4.7 * 100.0, 1e-9);

    let m = find_closest(5_000.0, &SeriesKind::E24.values()).expect("5k e24");
    assert_close("value e24", m.value, 5_100.0, 1e-9);
    assert!(m.percent_diff < 0.0);
}

#[test]
fn sub_ohm_values_scale_down() {
    let m = find_closest(0.33, &SeriesKind::E12.values()).expect("0.33");
    assert_close("value", m.value, 0.33, 1e-9);
    assert_eq!(find_order(0.33), -1);
}

#[test]
fn equal_distance_prefers_lower_entry() {
    // 1.5 는 1.0 과 3.0 모두에 대해 50% 차이
    let m = find_closest(1.5, &[1.0, 3.0, 10.0]).expect("tie");
    assert_close("value", m.value, 1.0, 1e-12);
    assert_close("diff", m.percent_diff, 50.0, 1e-9);
}

#[test]
fn generated_series_entries() {
    let e48 = build_log_series(48);
    assert_eq!(e48.len(), 49);
    assert_eq!(e48[0], 1.0);
    // 10^(47/48)
    assert_close("e48[47]", e48[47], 9.53, 1e-12);
    assert_eq!(e48[48], 10.0);

    let e96 = build_log_series(96);
    assert_close("e96[95]", e96[95], 9.76, 1e-12);
    assert!(e96.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn result_is_always_a_series_member() {
    for kind in SeriesKind::ALL {
        let values = kind.values();
        for desired in [0.012, 1.0, 3.3, 27.4, 999.0, 1_234.5, 68_000.0, 2.2e6] {
            let m = find_closest(desired, &values).expect("in range");
            let order = 10f64.powi(find_order(m.value));
            let normalized = m.value / order;
            assert!(
                values.iter().any(|v| (v - normalized).abs() < 1e-9),
                "{kind}: {desired} -> {} not in series",
                m.value
            );
        }
    }
}

#[test]
fn deviation_is_decade_invariant() {
    let values = SeriesKind::E24.values();
    for x in [1.3, 2.05, 4.4, 7.77, 9.5] {
        let a = find_closest(x, &values).expect("x");
        let b = find_closest(x * 10.0, &values).expect("10x");
        let c = find_closest(x * 1_000.0, &values).expect("1000x");
        assert_close("10x", b.percent_diff, a.percent_diff, 1e-9);
        assert_close("1000x", c.percent_diff, a.percent_diff, 1e-9);
    }
}

#[test]
fn non_positive_input_is_out_of_range() {
    let values = SeriesKind::E12.values();
    for desired in [0.0, -4.7, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            find_closest(desired, &values),
            Err(SeriesError::OutOfRange { .. })
        ));
    }
    // 정규화 값이 계열 마지막 값보다 큼
    assert!(matches!(
        find_closest(5.0, &[1.0, 2.0]),
        Err(SeriesError::OutOfRange { .. })
    ));
    assert_eq!(find_closest(1.0, &[]), Err(SeriesError::Empty));
}

#[test]
fn custom_series_validation() {
    assert_eq!(Series::new(vec![]), Err(SeriesError::Empty));
    assert_eq!(
        Series::new(vec![1.0, 2.0, 1.5]),
        Err(SeriesError::NotAscending { index: 2 })
    );
    assert_eq!(
        Series::new(vec![0.0, 1.0]),
        Err(SeriesError::InvalidEntry(0.0))
    );

    let series = Series::new(vec![1.0, 2.0, 5.0, 10.0]).expect("valid");
    let m = series.find_closest(390.0).expect("390");
    assert_close("value", m.value, 500.0, 1e-9);
}

#[test]
fn series_kind_parsing() {
    assert_eq!("E96".parse::<SeriesKind>(), Ok(SeriesKind::E96));
    assert_eq!(" e12 ".parse::<SeriesKind>(), Ok(SeriesKind::E12));
    assert!(matches!(
        "e7".parse::<SeriesKind>(),
        Err(SeriesError::UnknownSeries(_))
    ));
    assert_eq!(SeriesKind::E192.to_string(), "E192");
}

#[test]
fn finder_computes_actual_and_deviation() {
    let mut finder = StandardResistanceFinder::new().expect("finder");
    let report = finder
        .group_mut()
        .set_raw(DESIRED, "5000")
        .expect("desired is input");
    assert!(!report.has_errors());
    assert_close("actual", finder.actual().expect("actual"), 4_700.0, 1e-9);
    // 편차 변수는 표준값 기준 (표준값 - 원하는 값) / 표준값
    assert_close(
        "percent_diff",
        finder.percent_diff().expect("diff"),
        -300.0 / 4_700.0,
        1e-12,
    );
    assert_eq!(
        finder.group().display(PERCENT_DIFF).expect("display"),
        "-6.383"
    );

    let m = finder.closest_match().expect("match");
    assert_close("finder diff", m.percent_diff, 300.0 / 47.0, 1e-9);
}

#[test]
fn changing_series_recomputes() {
    let mut finder = StandardResistanceFinder::new().expect("finder");
    assert_eq!(finder.series(), SeriesKind::E12);
    finder.group_mut().set_raw(DESIRED, "5000").expect("desired");

    let report = finder.set_series(SeriesKind::E24).expect("series");
    let actual = report.output(ACTUAL).cloned().expect("actual reported");
    assert_close("actual", actual.expect("computed"), 5_100.0, 1e-9);
    assert_eq!(finder.series(), SeriesKind::E24);
}

#[test]
fn cloned_finder_keeps_its_own_series() {
    let mut original = StandardResistanceFinder::new().expect("finder");
    original.group_mut().set_raw(DESIRED, "5000").expect("desired");
    let mut copy = original.clone();

    copy.set_series(SeriesKind::E24).expect("series");
    assert_eq!(copy.series(), SeriesKind::E24);
    assert_close("copy", copy.actual().expect("actual"), 5_100.0, 1e-9);

    // E12 에서 5000 은 4.7k 에 가깝다
    assert_eq!(original.series(), SeriesKind::E12);
    assert_close("original", original.actual().expect("actual"), 4_700.0, 1e-9);
    let m = original.closest_match().expect("match");
    assert_close("original match", m.value, 4_700.0, 1e-9);

    original.group_mut().recompute();
    assert_eq!(original.group().display(ACTUAL).expect("display"), "4700.00");
}

#[test]
fn desired_and_actual_share_units() {
    let mut finder = StandardResistanceFinder::new().expect("finder");
    let group = finder.group_mut();
    group
        .select_unit(DESIRED, ResistanceUnit::KiloOhm.index())
        .expect("kΩ");
    group.set_raw(DESIRED, "4.7").expect("desired");

    let actual = group.variable(ACTUAL).expect("actual");
    assert_eq!(actual.selected_unit().name, "kΩ");
    assert_eq!(actual.display(), "4.70");
    assert_close("base", group.value(ACTUAL).expect("value"), 4_700.0, 1e-9);

    group.select_unit_by_symbol(ACTUAL, "MΩ").expect("MΩ");
    assert_eq!(
        group.variable(DESIRED).expect("desired").selected_unit().name,
        "MΩ"
    );
}

#[test]
fn invalid_desired_blocks_computation() {
    let mut finder = StandardResistanceFinder::new().expect("finder");
    let report = finder.group_mut().set_raw(DESIRED, "abc").expect("input");
    assert_eq!(
        report.output(ACTUAL),
        Some(&Err(CalcError::InvalidNumber {
            variable: DESIRED.to_string(),
            raw: "abc".to_string(),
        }))
    );
    assert!(report
        .issues
        .iter()
        .any(|i| i.variable == DESIRED && i.severity == Severity::Error));
    assert_eq!(finder.group().display(ACTUAL).expect("display"), "");
}

#[test]
fn negative_desired_warns_and_reports_range_error() {
    let mut finder = StandardResistanceFinder::new().expect("finder");
    let report = finder.group_mut().set_raw(DESIRED, "-10").expect("input");
    assert!(report
        .issues
        .iter()
        .any(|i| i.severity == Severity::Warning));
    assert!(matches!(
        report.output(ACTUAL),
        Some(Err(CalcError::OutOfRange(SeriesError::OutOfRange { .. })))
    ));
}

#[test]
fn fixed_outputs_are_read_only() {
    let mut finder = StandardResistanceFinder::new().expect("finder");
    let group = finder.group_mut();
    assert_eq!(
        group.set_raw(ACTUAL, "100").map(|_| ()),
        Err(CalcError::ReadOnly(ACTUAL.to_string()))
    );
    assert_eq!(
        group.solve_for(DESIRED).map(|_| ()),
        Err(CalcError::NotSolvable(DESIRED.to_string()))
    );
}
