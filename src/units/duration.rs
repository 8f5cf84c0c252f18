use serde::{Deserialize, Serialize};

/// 시간 단위. 내부 기준은 분(min)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    Minute,
    Hour,
    Day,
    Year,
}

/// 1년 환산 시간 [h]. 365일 × 24시간 기준, 윤년은 고려하지 않는다.
/// 감가상각 수명 환산도 이 값을 쓴다.
pub const HOURS_PER_YEAR: f64 = 365.0 * 24.0;

fn to_minutes(value: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Minute => value,
        DurationUnit::Hour => value * 60.0,
        DurationUnit::Day => value * 24.0 * 60.0,
        DurationUnit::Year => value * HOURS_PER_YEAR * 60.0,
    }
}

fn from_minutes(value: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Minute => value,
        DurationUnit::Hour => value / 60.0,
        DurationUnit::Day => value / (24.0 * 60.0),
        DurationUnit::Year => value / (HOURS_PER_YEAR * 60.0),
    }
}

/// 시간을 변환한다.
pub fn convert_duration(value: f64, from: DurationUnit, to: DurationUnit) -> f64 {
    let base = to_minutes(value, from);
    from_minutes(base, to)
}
