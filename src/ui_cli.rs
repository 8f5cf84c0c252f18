use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, Currency};
use crate::conversion;
use crate::cost::{self, CostBreakdown, DepreciationPlan};
use crate::filament_db;
use crate::i18n::{keys, Translator};
use crate::print_time;
use crate::quantity::QuantityKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Estimate,
    UnitConversion,
    Filaments,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ESTIMATE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_FILAMENTS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Estimate),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Filaments),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 출력 비용 견적 메뉴를 처리한다.
pub fn handle_estimate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ESTIMATE_HEADING));
    println!("{}", tr.t(keys::HELP_ESTIMATE));
    let minutes = loop {
        let text = read_line(tr.t(keys::ESTIMATE_PROMPT_TIME))?;
        match print_time::parse_print_time(text.trim()) {
            Ok(m) => break m,
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    };
    let grams = read_f64(tr, tr.t(keys::ESTIMATE_PROMPT_WEIGHT))?;
    let d = &cfg.defaults;
    let electricity_rate = read_f64_or(
        tr,
        tr.t(keys::ESTIMATE_PROMPT_ELECTRICITY_RATE),
        d.electricity_rate_per_kwh,
    )?;
    let power = read_f64_or(tr, tr.t(keys::ESTIMATE_PROMPT_PRINTER_POWER), d.printer_power_kw)?;
    let filament_rate = read_f64_or(
        tr,
        tr.t(keys::ESTIMATE_PROMPT_FILAMENT_RATE),
        d.filament_rate_per_kg,
    )?;
    let answer = read_line(tr.t(keys::ESTIMATE_PROMPT_DEPRECIATION))?;
    let depreciation = if matches!(answer.trim(), "y" | "Y") {
        let equipment_cost =
            read_f64_or(tr, tr.t(keys::ESTIMATE_PROMPT_EQUIPMENT_COST), d.equipment_cost)?;
        // 수명 0은 계산 단계에서 걸러지지 않으므로 입력 단계에서 거른다.
        let lifespan_years = loop {
            let v = read_f64_or(
                tr,
                tr.t(keys::ESTIMATE_PROMPT_LIFESPAN),
                d.equipment_lifespan_years,
            )?;
            if v > 0.0 {
                break v;
            }
            println!("{}", tr.t(keys::ESTIMATE_LIFESPAN_POSITIVE));
        };
        DepreciationPlan::StraightLine {
            equipment_cost,
            lifespan_years,
        }
    } else {
        DepreciationPlan::Off
    };
    let breakdown = cost::estimate_print_cost(cost::PrintJobInput {
        duration_min: minutes,
        filament_g: grams,
        electricity_rate_per_kwh: electricity_rate,
        printer_power_kw: power,
        filament_rate_per_kg: filament_rate,
        depreciation,
    });
    print_breakdown(tr, cfg.currency, minutes, &breakdown);
    Ok(())
}

/// 견적 결과를 통화 라벨과 함께 소수 2자리로 출력한다.
pub fn print_breakdown(tr: &Translator, currency: Currency, duration_min: f64, b: &CostBreakdown) {
    let code = currency.code();
    println!("{}", tr.t(keys::ESTIMATE_RESULT_HEADING));
    println!(
        "{} {}",
        tr.t(keys::ESTIMATE_RESULT_TIME),
        print_time::format_minutes(duration_min)
    );
    println!(
        "{} {:.2} {code}",
        tr.t(keys::ESTIMATE_RESULT_ELECTRICITY),
        b.electricity_cost
    );
    println!("{} {:.2} {code}", tr.t(keys::ESTIMATE_RESULT_FILAMENT), b.filament_cost);
    println!(
        "{} {:.2} {code}",
        tr.t(keys::ESTIMATE_RESULT_DEPRECIATION),
        b.depreciation_cost
    );
    println!("{} {:.2} {code}", tr.t(keys::ESTIMATE_RESULT_TOTAL), b.total_cost);
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result} {}", tr.t(keys::UNIT_CONVERSION_RESULT), to_unit.trim());
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Duration),
        2 => Some(QuantityKind::Mass),
        3 => Some(QuantityKind::Power),
        _ => None,
    }
}

/// 필라멘트 참고표를 출력한다.
pub fn handle_filaments(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FILAMENTS_HEADING));
    println!("{}", tr.t(keys::FILAMENTS_COLUMNS));
    for f in filament_db::filaments() {
        println!(
            "{:<8} {:<13.2} {:<15.0} {}",
            f.code, f.density_g_per_cm3, f.reference_price_per_kg, f.notes
        );
    }
    println!("{}", tr.t(keys::FILAMENTS_NOTE));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_CURRENCY), cfg.currency.code());
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.currency = match sel.trim() {
        "1" => Currency::Pln,
        "2" => Currency::Usd,
        "3" => Currency::Eur,
        "4" => Currency::Krw,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.currency.code());
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 라벨 뒤에 기본값을 보여주고, 빈 입력이면 기본값을 그대로 쓴다.
fn read_f64_or(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    let prompt = format!("{label} ({} {default}): ", tr.t(keys::PROMPT_DEFAULT_TAG));
    loop {
        let s = read_line(&prompt)?;
        let t = s.trim();
        if t.is_empty() {
            return Ok(default);
        }
        match t.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
