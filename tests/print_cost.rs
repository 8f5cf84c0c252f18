//! 비용 계산 회귀 테스트. 손으로 검산한 기준 시나리오 값을 활용한다.
use print_cost_toolbox::cost::{
    estimate_print_cost, CostBreakdown, DepreciationPlan, PrintJobInput,
};

fn assert_close(label: &str, actual: f64, expected: f64, abs_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= abs_tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.9}, tol {abs_tol})"
    );
}

fn base_input() -> PrintJobInput {
    // 270분, 50 g, 1.36 /kWh, 0.2 kW, 100 /kg
    PrintJobInput {
        duration_min: 270.0,
        filament_g: 50.0,
        electricity_rate_per_kwh: 1.36,
        printer_power_kw: 0.200,
        filament_rate_per_kg: 100.0,
        depreciation: DepreciationPlan::Off,
    }
}

fn total_of(b: &CostBreakdown) -> f64 {
    b.electricity_cost + b.filament_cost + b.depreciation_cost
}

#[test]
fn reference_job_without_depreciation() {
    // 4.5 h × 0.2 kW × 1.36 = 1.224, 50 g → 5.0, 합계 6.224
    let b = estimate_print_cost(base_input());
    assert_close("electricity", b.electricity_cost, 1.224, 1e-9);
    assert_close("filament", b.filament_cost, 5.0, 1e-9);
    assert_close("depreciation", b.depreciation_cost, 0.0, 0.0);
    assert_close("total", b.total_cost, 6.224, 1e-9);
}

#[test]
fn reference_job_with_depreciation() {
    // 2800 / (5 × 365 × 24 = 43 800 h) × 4.5 h = 0.287671232876712...
    let mut input = base_input();
    input.depreciation = DepreciationPlan::StraightLine {
        equipment_cost: 2800.0,
        lifespan_years: 5.0,
    };
    let b = estimate_print_cost(input);
    assert_close("electricity", b.electricity_cost, 1.224, 1e-9);
    assert_close("filament", b.filament_cost, 5.0, 1e-9);
    assert_close("depreciation", b.depreciation_cost, 0.287_671_232_876_712, 1e-9);
    assert_close("total", b.total_cost, 6.511_671_232_876_712, 1e-9);
}

#[test]
fn all_zero_inputs_give_zero_costs() {
    let b = estimate_print_cost(PrintJobInput {
        duration_min: 0.0,
        filament_g: 0.0,
        electricity_rate_per_kwh: 0.0,
        printer_power_kw: 0.0,
        filament_rate_per_kg: 0.0,
        depreciation: DepreciationPlan::Off,
    });
    assert_eq!(b.electricity_cost, 0.0);
    assert_eq!(b.filament_cost, 0.0);
    assert_eq!(b.depreciation_cost, 0.0);
    assert_eq!(b.total_cost, 0.0);
}

#[test]
fn total_is_exact_sum_of_components() {
    let cases = [
        base_input(),
        PrintJobInput {
            duration_min: 123.0,
            filament_g: 7.5,
            electricity_rate_per_kwh: 0.31,
            printer_power_kw: 0.35,
            filament_rate_per_kg: 89.99,
            depreciation: DepreciationPlan::StraightLine {
                equipment_cost: 1999.0,
                lifespan_years: 3.0,
            },
        },
        PrintJobInput {
            duration_min: 10_000.0,
            filament_g: 950.0,
            electricity_rate_per_kwh: 2.0,
            printer_power_kw: 1.1,
            filament_rate_per_kg: 250.0,
            depreciation: DepreciationPlan::StraightLine {
                equipment_cost: 12_000.0,
                lifespan_years: 7.5,
            },
        },
    ];
    for input in cases {
        let b = estimate_print_cost(input);
        // 합계는 별도 반올림 없이 세 항목의 부동소수 합과 일치해야 한다.
        assert_eq!(b.total_cost, total_of(&b));
    }
}

#[test]
fn depreciation_off_contributes_nothing() {
    let off = estimate_print_cost(base_input());
    let mut with = base_input();
    with.depreciation = DepreciationPlan::StraightLine {
        equipment_cost: 2800.0,
        lifespan_years: 5.0,
    };
    let on = estimate_print_cost(with);
    // 감가상각 외 항목은 플랜과 무관하다.
    assert_eq!(off.electricity_cost, on.electricity_cost);
    assert_eq!(off.filament_cost, on.filament_cost);
    assert_eq!(off.depreciation_cost, 0.0);
    assert!(on.depreciation_cost > 0.0);
}

#[test]
fn zero_duration_still_charges_filament() {
    let mut input = base_input();
    input.duration_min = 0.0;
    input.depreciation = DepreciationPlan::StraightLine {
        equipment_cost: 2800.0,
        lifespan_years: 5.0,
    };
    let b = estimate_print_cost(input);
    assert_eq!(b.electricity_cost, 0.0);
    assert_eq!(b.depreciation_cost, 0.0);
    assert_close("total", b.total_cost, 5.0, 1e-12);
}

#[test]
fn zero_weight_still_charges_electricity() {
    let mut input = base_input();
    input.filament_g = 0.0;
    let b = estimate_print_cost(input);
    assert_eq!(b.filament_cost, 0.0);
    assert_close("total", b.total_cost, 1.224, 1e-9);
}

#[test]
fn components_scale_linearly_with_duration() {
    let mut doubled = base_input();
    doubled.duration_min *= 2.0;
    doubled.depreciation = DepreciationPlan::StraightLine {
        equipment_cost: 2800.0,
        lifespan_years: 5.0,
    };
    let mut single = base_input();
    single.depreciation = doubled.depreciation;
    let b1 = estimate_print_cost(single);
    let b2 = estimate_print_cost(doubled);
    assert_close("electricity x2", b2.electricity_cost, 2.0 * b1.electricity_cost, 1e-9);
    assert_close("depreciation x2", b2.depreciation_cost, 2.0 * b1.depreciation_cost, 1e-9);
    // 필라멘트 비용은 시간과 무관하다.
    assert_eq!(b2.filament_cost, b1.filament_cost);
}

#[test]
fn zero_lifespan_propagates_non_finite_values() {
    // 계산 단계는 검증하지 않는다. 0년 수명은 0으로 나누기가 되어
    // 비유한값이 그대로 합계까지 전파된다. 입력 검증은 UI 몫이다.
    let mut input = base_input();
    input.depreciation = DepreciationPlan::StraightLine {
        equipment_cost: 2800.0,
        lifespan_years: 0.0,
    };
    let b = estimate_print_cost(input);
    assert!(!b.depreciation_cost.is_finite());
    assert!(!b.total_cost.is_finite());
}

#[test]
fn depreciation_plan_reports_enabled_state() {
    assert!(!DepreciationPlan::Off.is_enabled());
    assert!(DepreciationPlan::StraightLine {
        equipment_cost: 1.0,
        lifespan_years: 1.0,
    }
    .is_enabled());
    assert_eq!(DepreciationPlan::default(), DepreciationPlan::Off);
}
