//! 단위 변환 테스트.
use print_cost_toolbox::{
    conversion::{convert, ConversionError},
    quantity::QuantityKind,
    units::{
        convert_duration, convert_mass, convert_power, DurationUnit, MassUnit, PowerUnit,
        HOURS_PER_YEAR,
    },
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
fn duration_roundtrip_through_minutes() {
    assert_close(
        "min→h",
        convert_duration(270.0, DurationUnit::Minute, DurationUnit::Hour),
        4.5,
        1e-12,
    );
    assert_close(
        "h→min",
        convert_duration(4.5, DurationUnit::Hour, DurationUnit::Minute),
        270.0,
        1e-12,
    );
    assert_close(
        "d→h",
        convert_duration(2.0, DurationUnit::Day, DurationUnit::Hour),
        48.0,
        1e-12,
    );
}

#[test]
fn five_years_is_depreciation_lifespan_hours() {
    // 감가상각 수명 환산과 같은 상수를 쓴다: 5년 = 43 800 h
    assert_close(
        "5y→h",
        convert_duration(5.0, DurationUnit::Year, DurationUnit::Hour),
        5.0 * HOURS_PER_YEAR,
        1e-12,
    );
    assert_close("HOURS_PER_YEAR", HOURS_PER_YEAR, 8_760.0, 0.0);
}

#[test]
fn mass_conversions() {
    assert_close(
        "g→kg",
        convert_mass(50.0, MassUnit::Gram, MassUnit::Kilogram),
        0.05,
        1e-12,
    );
    assert_close(
        "kg→g",
        convert_mass(1.25, MassUnit::Kilogram, MassUnit::Gram),
        1_250.0,
        1e-12,
    );
    // 1 lb = 0.453592 kg
    assert_close(
        "lb→kg",
        convert_mass(1.0, MassUnit::Pound, MassUnit::Kilogram),
        0.453_592,
        1e-9,
    );
}

#[test]
fn power_conversions() {
    assert_close(
        "W→kW",
        convert_power(200.0, PowerUnit::Watt, PowerUnit::Kilowatt),
        0.2,
        1e-12,
    );
    assert_close(
        "kW→W",
        convert_power(0.35, PowerUnit::Kilowatt, PowerUnit::Watt),
        350.0,
        1e-12,
    );
}

#[test]
fn stringly_convert_accepts_unit_aliases() {
    let cases = [
        (QuantityKind::Duration, 270.0, "min", "h", 4.5),
        (QuantityKind::Duration, 4.5, "hr", "minute", 270.0),
        (QuantityKind::Duration, 1.0, "y", "d", 365.0),
        (QuantityKind::Mass, 50.0, "g", "kg", 0.05),
        (QuantityKind::Mass, 2.0, "lbs", "g", 907.184),
        (QuantityKind::Power, 200.0, "w", "kw", 0.2),
        (QuantityKind::Power, 0.2, "kilowatt", "watt", 200.0),
    ];
    for (kind, value, from, to, expected) in cases {
        let got = convert(kind, value, from, to).expect("convert");
        assert_close(&format!("{from}→{to}"), got, expected, 1e-6);
    }
}

#[test]
fn stringly_convert_rejects_unknown_units() {
    let err = convert(QuantityKind::Mass, 1.0, "stone", "kg").unwrap_err();
    match err {
        ConversionError::UnknownUnit(u) => assert_eq!(u, "stone"),
    }
    // 다른 물리량의 단위도 그 물리량 밖에서는 거부한다.
    assert!(convert(QuantityKind::Duration, 1.0, "g", "kg").is_err());
    assert!(convert(QuantityKind::Power, 1.0, "min", "h").is_err());
}
