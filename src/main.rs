use clap::{Args, Parser, Subcommand};

use print_cost_toolbox::cost::{estimate_print_cost, DepreciationPlan, PrintJobInput};
use print_cost_toolbox::i18n::{self, Translator};
use print_cost_toolbox::{app, config, print_time, ui_cli};

/// 터미널용 3D 출력 비용 계산기.
#[derive(Debug, Parser)]
#[command(name = "print_cost_toolbox_cli", version)]
struct Cli {
    /// 표시 언어 (auto/en-us/ko-kr/pl-pl)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 대화형 메뉴 없이 한 번에 견적을 출력한다.
    Estimate(EstimateArgs),
}

#[derive(Debug, Args)]
struct EstimateArgs {
    /// 출력 시간 (4h30m, 45m, 270=분)
    #[arg(long)]
    time: String,
    /// 필라멘트 사용량 [g]
    #[arg(long)]
    weight: f64,
    /// 전기 단가 [통화/kWh] (생략 시 설정 기본값)
    #[arg(long)]
    electricity_rate: Option<f64>,
    /// 프린터 소비 전력 [kW]
    #[arg(long)]
    power: Option<f64>,
    /// 필라멘트 단가 [통화/kg]
    #[arg(long)]
    filament_rate: Option<f64>,
    /// 장비 감가상각 포함
    #[arg(long)]
    depreciation: bool,
    /// 장비 구입가 [통화]
    #[arg(long)]
    equipment_cost: Option<f64>,
    /// 장비 수명 [년]
    #[arg(long)]
    lifespan_years: Option<f64>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    match cli.command {
        Some(Command::Estimate(args)) => run_estimate(&tr, &cfg, args),
        None => {
            app::run(&mut cfg, &tr)?;
            Ok(())
        }
    }
}

fn run_estimate(
    tr: &Translator,
    cfg: &config::Config,
    args: EstimateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let minutes = print_time::parse_print_time(&args.time)?;
    let d = &cfg.defaults;
    let depreciation = if args.depreciation {
        let lifespan_years = args.lifespan_years.unwrap_or(d.equipment_lifespan_years);
        if lifespan_years <= 0.0 {
            return Err(tr.t(i18n::keys::ESTIMATE_LIFESPAN_POSITIVE).into());
        }
        DepreciationPlan::StraightLine {
            equipment_cost: args.equipment_cost.unwrap_or(d.equipment_cost),
            lifespan_years,
        }
    } else {
        DepreciationPlan::Off
    };
    let breakdown = estimate_print_cost(PrintJobInput {
        duration_min: minutes,
        filament_g: args.weight,
        electricity_rate_per_kwh: args.electricity_rate.unwrap_or(d.electricity_rate_per_kwh),
        printer_power_kw: args.power.unwrap_or(d.printer_power_kw),
        filament_rate_per_kg: args.filament_rate.unwrap_or(d.filament_rate_per_kg),
        depreciation,
    });
    ui_cli::print_breakdown(tr, cfg.currency, minutes, &breakdown);
    Ok(())
}
