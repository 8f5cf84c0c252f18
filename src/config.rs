use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 금액 표시에 쓰는 통화 라벨을 정의한다.
///
/// 계산은 통화 구분 없이 단가 입력을 그대로 쓰고 환율 변환도 하지 않는다.
/// 라벨은 결과 표시에만 붙는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// 폴란드 즈워티
    Pln,
    /// 미국 달러
    Usd,
    /// 유로
    Eur,
    /// 한국 원
    Krw,
}

impl Currency {
    /// 표시용 통화 코드.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Pln => "PLN",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Krw => "KRW",
        }
    }

    /// 선택 UI에 노출하는 전체 목록.
    pub fn all() -> &'static [Currency] {
        &[Currency::Pln, Currency::Usd, Currency::Eur, Currency::Krw]
    }
}

/// 견적 입력 칸의 선입력 기본값을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultRates {
    /// 전기 단가 [통화/kWh]
    pub electricity_rate_per_kwh: f64,
    /// 프린터 소비 전력 [kW]
    pub printer_power_kw: f64,
    /// 필라멘트 단가 [통화/kg]
    pub filament_rate_per_kg: f64,
    /// 장비 구입가 [통화]
    pub equipment_cost: f64,
    /// 장비 수명 [년]
    pub equipment_lifespan_years: f64,
}

impl Default for DefaultRates {
    fn default() -> Self {
        Self {
            electricity_rate_per_kwh: 1.36,
            printer_power_kw: 0.200,
            filament_rate_per_kg: 100.0,
            equipment_cost: 2800.0,
            equipment_lifespan_years: 5.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency: Currency,
    /// 표시 언어 코드. "auto"면 시스템 로캘을 따른다.
    pub language: String,
    /// 외부 언어팩 디렉터리. 없으면 내장 팩만 쓴다.
    pub language_pack_dir: Option<String>,
    /// GUI 창 불투명도 (0.3~1.0)
    pub window_alpha: f32,
    pub defaults: DefaultRates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Currency::Pln,
            language: "auto".to_string(),
            language_pack_dir: None,
            window_alpha: 1.0,
            defaults: DefaultRates::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
