use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ESTIMATE: &str = "main_menu.estimate";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_FILAMENTS: &str = "main_menu.filaments";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const ESTIMATE_HEADING: &str = "estimate.heading";
    pub const ESTIMATE_PROMPT_TIME: &str = "estimate.prompt_time";
    pub const ESTIMATE_PROMPT_WEIGHT: &str = "estimate.prompt_weight";
    pub const ESTIMATE_PROMPT_ELECTRICITY_RATE: &str = "estimate.prompt_electricity_rate";
    pub const ESTIMATE_PROMPT_PRINTER_POWER: &str = "estimate.prompt_printer_power";
    pub const ESTIMATE_PROMPT_FILAMENT_RATE: &str = "estimate.prompt_filament_rate";
    pub const ESTIMATE_PROMPT_DEPRECIATION: &str = "estimate.prompt_depreciation";
    pub const ESTIMATE_PROMPT_EQUIPMENT_COST: &str = "estimate.prompt_equipment_cost";
    pub const ESTIMATE_PROMPT_LIFESPAN: &str = "estimate.prompt_lifespan";
    pub const ESTIMATE_LIFESPAN_POSITIVE: &str = "estimate.lifespan_positive";
    pub const ESTIMATE_RESULT_HEADING: &str = "estimate.result_heading";
    pub const ESTIMATE_RESULT_TIME: &str = "estimate.result_time";
    pub const ESTIMATE_RESULT_ELECTRICITY: &str = "estimate.result_electricity";
    pub const ESTIMATE_RESULT_FILAMENT: &str = "estimate.result_filament";
    pub const ESTIMATE_RESULT_DEPRECIATION: &str = "estimate.result_depreciation";
    pub const ESTIMATE_RESULT_TOTAL: &str = "estimate.result_total";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const FILAMENTS_HEADING: &str = "filaments.heading";
    pub const FILAMENTS_COLUMNS: &str = "filaments.columns";
    pub const FILAMENTS_NOTE: &str = "filaments.note";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_CURRENCY: &str = "settings.current_currency";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const PROMPT_DEFAULT_TAG: &str = "prompt.default_tag";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const HELP_ESTIMATE: &str = "help.estimate";
    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_FILAMENTS: &str = "help.filaments";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/…)에 따라 번역기를 생성한다. ko 계열 외에는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "pl" => Some("pl-pl".into()),
        "pl-pl" => Some("pl-pl".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("pl") => Some("pl-pl".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "pl" => Some("pl-pl".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en-uk" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "pl-pl" | "pl" => parse_toml_to_map(include_str!("../locales/pl-pl.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Print Cost Toolbox ===",
        MAIN_MENU_ESTIMATE => "1) 출력 비용 견적",
        MAIN_MENU_UNIT_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_FILAMENTS => "3) 필라멘트 참고표",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ESTIMATE_HEADING => "\n-- 출력 비용 견적 --",
        ESTIMATE_PROMPT_TIME => "출력 시간 (예: 4h30m, 45m, 270=분): ",
        ESTIMATE_PROMPT_WEIGHT => "필라멘트 사용량 [g]: ",
        ESTIMATE_PROMPT_ELECTRICITY_RATE => "전기 단가 [통화/kWh]",
        ESTIMATE_PROMPT_PRINTER_POWER => "프린터 소비 전력 [kW]",
        ESTIMATE_PROMPT_FILAMENT_RATE => "필라멘트 단가 [통화/kg]",
        ESTIMATE_PROMPT_DEPRECIATION => "장비 감가상각 포함? (y/N): ",
        ESTIMATE_PROMPT_EQUIPMENT_COST => "장비 구입가 [통화]",
        ESTIMATE_PROMPT_LIFESPAN => "장비 수명 [년]",
        ESTIMATE_LIFESPAN_POSITIVE => "장비 수명은 0보다 커야 합니다.",
        ESTIMATE_RESULT_HEADING => "견적 결과:",
        ESTIMATE_RESULT_TIME => "출력 시간:",
        ESTIMATE_RESULT_ELECTRICITY => "전기 요금:",
        ESTIMATE_RESULT_FILAMENT => "필라멘트:",
        ESTIMATE_RESULT_DEPRECIATION => "감가상각:",
        ESTIMATE_RESULT_TOTAL => "총 비용:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 시간  2) 질량  3) 전력",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: min, g, W): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: h, kg, kW): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        FILAMENTS_HEADING => "\n-- 필라멘트 참고표 --",
        FILAMENTS_COLUMNS => "코드     밀도[g/cm³]   참고단가[/kg]   비고",
        FILAMENTS_NOTE => "참고: 단가는 선입력용 참고값입니다. 실제 구매가로 보정하세요.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_CURRENCY => "현재 통화 라벨:",
        SETTINGS_OPTIONS => "1) PLN  2) USD  3) EUR  4) KRW",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "통화 라벨이 변경되었습니다:",
        PROMPT_DEFAULT_TAG => "기본",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HELP_ESTIMATE => "도움말: 시간 → 사용량[g] → 단가 순서로 입력. 엔터만 치면 괄호의 기본값을 씁니다.",
        HELP_UNIT_CONVERSION => "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: min/h/d/y, g/kg/lb, W/kW).",
        HELP_FILAMENTS => "도움말: 밀도 × 부피[cm³] = 무게[g]. 단가 열은 견적 선입력 참고용입니다.",
        HELP_SETTINGS => "도움말: 통화는 표시 라벨일 뿐 환율 변환은 하지 않습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Print Cost Toolbox ===",
        MAIN_MENU_ESTIMATE => "1) Print cost estimate",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit Converter",
        MAIN_MENU_FILAMENTS => "3) Filament reference",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ESTIMATE_HEADING => "\n-- Print Cost Estimate --",
        ESTIMATE_PROMPT_TIME => "Print time (e.g. 4h30m, 45m, 270=minutes): ",
        ESTIMATE_PROMPT_WEIGHT => "Filament used [g]: ",
        ESTIMATE_PROMPT_ELECTRICITY_RATE => "Electricity rate [per kWh]",
        ESTIMATE_PROMPT_PRINTER_POWER => "Printer power [kW]",
        ESTIMATE_PROMPT_FILAMENT_RATE => "Filament price [per kg]",
        ESTIMATE_PROMPT_DEPRECIATION => "Include printer depreciation? (y/N): ",
        ESTIMATE_PROMPT_EQUIPMENT_COST => "Printer cost",
        ESTIMATE_PROMPT_LIFESPAN => "Printer lifespan [years]",
        ESTIMATE_LIFESPAN_POSITIVE => "Printer lifespan must be greater than zero.",
        ESTIMATE_RESULT_HEADING => "Estimate:",
        ESTIMATE_RESULT_TIME => "Print time:",
        ESTIMATE_RESULT_ELECTRICITY => "Electricity:",
        ESTIMATE_RESULT_FILAMENT => "Filament:",
        ESTIMATE_RESULT_DEPRECIATION => "Depreciation:",
        ESTIMATE_RESULT_TOTAL => "Total:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Duration  2) Mass  3) Power",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: min, g, W): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: h, kg, kW): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        FILAMENTS_HEADING => "\n-- Filament Reference --",
        FILAMENTS_COLUMNS => "Code     Density[g/cm³]   Ref.price[/kg]   Notes",
        FILAMENTS_NOTE => "Note: prices are prefill references only; use your actual purchase price.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_CURRENCY => "Current currency label:",
        SETTINGS_OPTIONS => "1) PLN  2) USD  3) EUR  4) KRW",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; currency unchanged.",
        SETTINGS_SAVED => "Currency label changed to:",
        PROMPT_DEFAULT_TAG => "default",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HELP_ESTIMATE => "Help: enter time, filament grams, then rates. Press enter alone to accept the default shown.",
        HELP_UNIT_CONVERSION => "Help: choose quantity → enter value → from/to units (min/h/d/y, g/kg/lb, W/kW).",
        HELP_FILAMENTS => "Help: density × volume [cm³] = weight [g]. The price column is a prefill reference.",
        HELP_SETTINGS => "Help: currency is a display label only; no exchange-rate conversion.",
        _ => return None,
    })
}
