use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
///
/// 필라멘트 사용량은 g, 스풀 단가는 kg 기준이므로 g↔kg 변환이 가장 잦다.
/// lb는 파운드 포장 스풀 표기용이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Gram,
    Kilogram,
    Pound,
}

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value / 1000.0,
        MassUnit::Kilogram => value,
        MassUnit::Pound => value * 0.453592,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value * 1000.0,
        MassUnit::Kilogram => value,
        MassUnit::Pound => value / 0.453592,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}
