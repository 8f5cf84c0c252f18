use crate::units::HOURS_PER_YEAR;

/// 장비 감가상각 방식.
///
/// 감가상각을 쓰지 않는 견적에는 장비 금액 필드 자체가 없다. `Off`이면
/// 감가 비용은 항상 0이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepreciationPlan {
    /// 감가상각 없음.
    Off,
    /// 정액법. 장비 가격을 수명 시간으로 나눠 출력 시간만큼 배분한다.
    StraightLine {
        /// 장비 구입가 [통화]
        equipment_cost: f64,
        /// 장비 수명 [년]
        lifespan_years: f64,
    },
}

impl DepreciationPlan {
    /// 출력 시간에 배분되는 감가 비용을 계산한다.
    ///
    /// 수명은 365일 × 24시간 기준으로 시간 환산한다. 수명 0은 나눗셈
    /// 결과(비유한값)를 그대로 돌려주며, 입력 검증은 호출부 몫이다.
    pub fn cost_for_hours(&self, print_time_hours: f64) -> f64 {
        match *self {
            DepreciationPlan::Off => 0.0,
            DepreciationPlan::StraightLine { equipment_cost, lifespan_years } => {
                let lifespan_hours = lifespan_years * HOURS_PER_YEAR;
                (equipment_cost / lifespan_hours) * print_time_hours
            }
        }
    }

    /// 감가상각 적용 여부.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, DepreciationPlan::Off)
    }
}

impl Default for DepreciationPlan {
    fn default() -> Self {
        DepreciationPlan::Off
    }
}
