use serde::{Deserialize, Serialize};

/// 전력 단위. 내부 기준은 kW이다.
///
/// 프린터 명판은 W 표기가 많고 전기 요금은 kWh 단가로 계산하므로
/// 둘 사이만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
}

fn to_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::Kilowatt => value,
    }
}

fn from_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value * 1000.0,
        PowerUnit::Kilowatt => value,
    }
}

/// 전력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let base = to_kw(value, from);
    from_kw(base, to)
}
