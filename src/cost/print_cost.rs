use crate::cost::depreciation::DepreciationPlan;

/// 출력 비용 견적 입력.
///
/// 출력 작업 한 건의 값 묶음이다. 금액 필드는 모두 같은 통화를 쓴다고
/// 가정하며, 통화 표시는 표시 계층에서만 다룬다.
#[derive(Debug, Clone)]
pub struct PrintJobInput {
    /// 출력 시간 [분]
    pub duration_min: f64,
    /// 필라멘트 사용량 [g]
    pub filament_g: f64,
    /// 전기 단가 [통화/kWh]
    pub electricity_rate_per_kwh: f64,
    /// 프린터 소비 전력 [kW]
    pub printer_power_kw: f64,
    /// 필라멘트 단가 [통화/kg]
    pub filament_rate_per_kg: f64,
    /// 장비 감가상각 방식
    pub depreciation: DepreciationPlan,
}

/// 출력 비용 견적 결과. 네 항목 모두 같은 통화 단위다.
#[derive(Debug, Clone)]
pub struct CostBreakdown {
    /// 전기 요금 [통화]
    pub electricity_cost: f64,
    /// 필라멘트 비용 [통화]
    pub filament_cost: f64,
    /// 감가상각 비용 [통화]
    pub depreciation_cost: f64,
    /// 총 비용 [통화]
    pub total_cost: f64,
}

/// 출력 작업 하나의 비용 내역을 계산한다.
///
/// 합계는 세 항목의 단순 합이고 반올림하지 않는다(소수 2자리 표시는 표시
/// 계층 몫). 입력을 검증하거나 범위를 자르지 않으므로 수명 0 같은 입력은
/// 비유한값 그대로 결과에 남는다.
pub fn estimate_print_cost(input: PrintJobInput) -> CostBreakdown {
    let print_time_hours = input.duration_min / 60.0;
    let electricity_cost =
        print_time_hours * input.printer_power_kw * input.electricity_rate_per_kwh;
    let filament_cost = (input.filament_g / 1000.0) * input.filament_rate_per_kg;
    let depreciation_cost = input.depreciation.cost_for_hours(print_time_hours);
    CostBreakdown {
        electricity_cost,
        filament_cost,
        depreciation_cost,
        total_cost: electricity_cost + filament_cost + depreciation_cost,
    }
}
