/// 필라멘트 재질별 참고 밀도와 kg당 참고 단가 테이블을 제공한다.
/// 값은 참고용이며 실제 견적에는 구매 단가와 제조사 데이터시트로 보정해야 한다.

#[derive(Debug)]
pub struct FilamentData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// 밀도 [g/cm³]
    pub density_g_per_cm3: f64,
    /// 참고 단가 [통화/kg]
    pub reference_price_per_kg: f64,
}

pub fn filaments() -> &'static [FilamentData] {
    FILAMENTS
}

pub fn find_filament(code: &str) -> Option<&'static FilamentData> {
    FILAMENTS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

/// 모델 부피 [cm³]와 재질 코드로 예상 사용량 [g]을 계산한다.
pub fn weight_for_volume(code: &str, volume_cm3: f64) -> Option<f64> {
    let fil = find_filament(code)?;
    Some(fil.density_g_per_cm3 * volume_cm3)
}

const FILAMENTS: &[FilamentData] = &[
    FilamentData {
        code: "PLA",
        name: "Polylactic acid",
        notes: "범용 기본 소재; 출력 난도 낮음, 내열 약함",
        density_g_per_cm3: 1.24,
        reference_price_per_kg: 100.0,
    },
    FilamentData {
        code: "PETG",
        name: "PET glycol",
        notes: "내습/내충격 무난; 스트링 주의",
        density_g_per_cm3: 1.27,
        reference_price_per_kg: 110.0,
    },
    FilamentData {
        code: "ABS",
        name: "ABS",
        notes: "내열/후가공 용이; 수축 커서 챔버 권장",
        density_g_per_cm3: 1.04,
        reference_price_per_kg: 95.0,
    },
    FilamentData {
        code: "ASA",
        name: "ASA",
        notes: "ABS 계열 내후성 개선; 옥외 부품용",
        density_g_per_cm3: 1.07,
        reference_price_per_kg: 130.0,
    },
    FilamentData {
        code: "TPU",
        name: "TPU 95A",
        notes: "연질 탄성 소재; 저속 출력 필요",
        density_g_per_cm3: 1.21,
        reference_price_per_kg: 160.0,
    },
    FilamentData {
        code: "PA",
        name: "Nylon PA6",
        notes: "고강도/내마모; 흡습 심해 건조 보관 필수",
        density_g_per_cm3: 1.14,
        reference_price_per_kg: 220.0,
    },
    FilamentData {
        code: "PC",
        name: "Polycarbonate",
        notes: "고내열 구조용; 고온 베드/챔버 필요",
        density_g_per_cm3: 1.19,
        reference_price_per_kg: 250.0,
    },
    FilamentData {
        code: "HIPS",
        name: "HIPS",
        notes: "ABS 짝 서포트 겸 경량 부품용; 리모넨 용해",
        density_g_per_cm3: 1.03,
        reference_price_per_kg: 120.0,
    },
];

// NOTE:
// - Densities are typical vendor datasheet values for common 1.75 mm spools; blends vary.
// - Reference prices are rough 1 kg spool figures for prefill only; use the actual purchase price.
