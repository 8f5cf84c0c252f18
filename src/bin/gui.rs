#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use print_cost_toolbox::{
    config::{self, Currency},
    conversion,
    cost::{estimate_print_cost, CostBreakdown, DepreciationPlan, PrintJobInput},
    filament_db, i18n, print_time,
    quantity::QuantityKind,
    units::HOURS_PER_YEAR,
};
use rfd::FileDialog;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/pl-pl)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_always_on_top()
        .with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Print Cost Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = [
        "PrintCost.png",
        "icon.png",
        "assets/icon.png",
        "../PrintCost.png",
    ];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

fn legend_toggle(ui: &mut egui::Ui, title: &str, body: &str, state: &mut bool) {
    ui.horizontal(|ui| {
        ui.checkbox(state, title);
    });
    if *state {
        ui.add(egui::Label::new(egui::RichText::new(body).small()).wrap(true));
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_pack_dir_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    show_formula_modal: bool,
    show_help_modal: bool,
    show_settings_modal: bool,
    apply_initial_view_size: bool,
    // 견적 폼
    est_hours: u32,
    est_minutes: u32,
    est_weight_text: String,
    est_electricity_rate: f64,
    est_power: f64,
    est_power_unit: String,
    est_filament_rate: f64,
    est_depreciation: bool,
    est_equipment_cost: f64,
    est_lifespan_years: f64,
    est_volume_material: String,
    est_volume_cm3: f64,
    est_result: Option<CostBreakdown>,
    est_error: Option<String>,
    show_legend_estimate: bool,
    // 단위 변환
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_kind: QuantityKind,
    conv_result: Option<String>,
    // 설정
    ui_scale: f32,
    always_on_top: bool,
    theme: ThemeChoice,
    custom_font_path: String,
    font_load_error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Estimate,
    UnitConv,
    Filaments,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 동봉 폰트
/// 2) 플랫폼 시스템 폰트(맑은 고딕, Noto/나눔 계열 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_candidates = [
        "assets/fonts/malgun.ttf",
        "assets/fonts/NotoSansKR-Regular.ttf",
        "assets/fonts/NanumGothic.ttf",
    ];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 2) 시스템 폰트 탐색 (Windows)
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 2b) 리눅스/맥에서 흔한 경로
    let unix_candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ];
    for cand in unix_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 3) 실패: 기본 폰트 유지, 설정에서 사용자 폰트 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let (conv_from, conv_to) = default_units_for_kind(QuantityKind::Duration);
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let has_overrides = tr.lookup("gui.nav.app_title").is_some();
        eprintln!("GUI language resolved: {lang_code}, overrides_loaded={has_overrides}");
        let lang_input = config.language.clone();
        let lang_pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        let d = config.defaults.clone();
        Self {
            config: config.clone(),
            tr,
            lang_input,
            lang_pack_dir_input,
            lang_save_status: None,
            tab: Tab::Estimate,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            show_formula_modal: false,
            show_help_modal: false,
            show_settings_modal: false,
            apply_initial_view_size: true,
            est_hours: 0,
            est_minutes: 0,
            est_weight_text: String::new(),
            est_electricity_rate: d.electricity_rate_per_kwh,
            est_power: d.printer_power_kw,
            est_power_unit: "kw".into(),
            est_filament_rate: d.filament_rate_per_kg,
            est_depreciation: false,
            est_equipment_cost: d.equipment_cost,
            est_lifespan_years: d.equipment_lifespan_years,
            est_volume_material: "PLA".into(),
            est_volume_cm3: 0.0,
            est_result: None,
            est_error: None,
            show_legend_estimate: false,
            conv_value: 60.0,
            conv_from: conv_from.into(),
            conv_to: conv_to.into(),
            conv_kind: QuantityKind::Duration,
            conv_result: None,
            ui_scale: 1.0,
            always_on_top: true,
            theme: ThemeChoice::System,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    /// 견적 폼 입력을 검증하고 비용 내역을 계산한다. 실패 사유는 est_error에 남는다.
    fn compute_estimate(&mut self) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        self.est_result = None;
        self.est_error = None;
        let grams: f64 = match self.est_weight_text.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.est_error = Some(txt(
                    "gui.estimate.weight_error",
                    "Enter a numeric filament weight.",
                ));
                return;
            }
        };
        // 수명 0은 계산 단계에서 걸러지지 않으므로 여기서 거른다.
        if self.est_depreciation && self.est_lifespan_years <= 0.0 {
            self.est_error = Some(txt(
                "gui.estimate.lifespan_error",
                "Printer lifespan must be greater than zero.",
            ));
            return;
        }
        let power_kw =
            conversion::convert(QuantityKind::Power, self.est_power, &self.est_power_unit, "kw")
                .unwrap_or(self.est_power);
        let depreciation = if self.est_depreciation {
            DepreciationPlan::StraightLine {
                equipment_cost: self.est_equipment_cost,
                lifespan_years: self.est_lifespan_years,
            }
        } else {
            DepreciationPlan::Off
        };
        self.est_result = Some(estimate_print_cost(PrintJobInput {
            duration_min: print_time::minutes_from_parts(self.est_hours, self.est_minutes),
            filament_g: grams,
            electricity_rate_per_kwh: self.est_electricity_rate,
            printer_power_kw: power_kw,
            filament_rate_per_kg: self.est_filament_rate,
            depreciation,
        }));
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Estimate, txt("gui.tab.estimate", "Cost Estimate")),
            (Tab::UnitConv, txt("gui.tab.unit_conv", "Unit Converter")),
            (Tab::Filaments, txt("gui.tab.filaments", "Filaments")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_estimate(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.estimate.heading", "Print Cost Estimate"),
            &txt(
                "gui.estimate.tip",
                "Estimate electricity, filament and depreciation cost for one print job.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("est_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.estimate.time.label", "Print time"),
                            &txt("gui.estimate.time.tip", "Hours and minutes from the slicer"),
                        );
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::DragValue::new(&mut self.est_hours)
                                    .clamp_range(0..=1000)
                                    .suffix(" h"),
                            );
                            ui.add(
                                egui::DragValue::new(&mut self.est_minutes)
                                    .clamp_range(0..=59)
                                    .suffix(" m"),
                            );
                        });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.estimate.weight.label", "Filament weight [g]"),
                            &txt("gui.estimate.weight.tip", "Material use from the slicer"),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut self.est_weight_text)
                                .desired_width(80.0),
                        );
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.estimate.volume.label", "From volume"),
                            &txt(
                                "gui.estimate.volume.tip",
                                "Fill the weight field as density x volume",
                            ),
                        );
                        ui.horizontal(|ui| {
                            egui::ComboBox::from_id_source("est_material")
                                .selected_text(self.est_volume_material.clone())
                                .show_ui(ui, |ui| {
                                    for f in filament_db::filaments() {
                                        ui.selectable_value(
                                            &mut self.est_volume_material,
                                            f.code.to_string(),
                                            f.code,
                                        );
                                    }
                                });
                            ui.add(
                                egui::DragValue::new(&mut self.est_volume_cm3)
                                    .speed(1.0)
                                    .suffix(" cm³"),
                            );
                            if ui.button(txt("gui.estimate.volume.apply", "Apply")).clicked() {
                                if let Some(w) = filament_db::weight_for_volume(
                                    &self.est_volume_material,
                                    self.est_volume_cm3,
                                ) {
                                    self.est_weight_text = format!("{w:.1}");
                                }
                            }
                        });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.estimate.electricity.label", "Electricity rate [per kWh]"),
                            &txt("gui.estimate.electricity.tip", "Your tariff per kWh"),
                        );
                        ui.add(egui::DragValue::new(&mut self.est_electricity_rate).speed(0.01));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.estimate.power.label", "Printer power"),
                            &txt("gui.estimate.power.tip", "Average draw while printing"),
                        );
                        ui.horizontal(|ui| {
                            ui.add(egui::DragValue::new(&mut self.est_power).speed(0.01));
                            unit_combo(ui, &mut self.est_power_unit, power_unit_options());
                        });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.estimate.filament_rate.label", "Filament price [per kg]"),
                            &txt(
                                "gui.estimate.filament_rate.tip",
                                "Spool price per kilogram; see the Filaments tab",
                            ),
                        );
                        ui.add(egui::DragValue::new(&mut self.est_filament_rate).speed(1.0));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.estimate.currency.label", "Currency"),
                            &txt("gui.estimate.currency.tip", "Display label only"),
                        );
                        egui::ComboBox::from_id_source("est_currency")
                            .selected_text(self.config.currency.code())
                            .show_ui(ui, |ui| {
                                for c in Currency::all() {
                                    ui.selectable_value(&mut self.config.currency, *c, c.code());
                                }
                            });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.estimate.depreciation.label", "Depreciation"),
                            &txt(
                                "gui.estimate.depreciation.tip",
                                "Spread the printer price over its lifetime hours",
                            ),
                        );
                        ui.checkbox(
                            &mut self.est_depreciation,
                            txt(
                                "gui.estimate.depreciation.enable",
                                "Include printer depreciation",
                            ),
                        );
                        ui.end_row();

                        if self.est_depreciation {
                            label_with_tip(
                                ui,
                                &txt("gui.estimate.equipment_cost.label", "Printer cost"),
                                &txt("gui.estimate.equipment_cost.tip", "Purchase price"),
                            );
                            ui.add(egui::DragValue::new(&mut self.est_equipment_cost).speed(10.0));
                            ui.end_row();

                            label_with_tip(
                                ui,
                                &txt("gui.estimate.lifespan.label", "Printer lifespan [years]"),
                                &txt("gui.estimate.lifespan.tip", "Expected service life"),
                            );
                            ui.add(egui::DragValue::new(&mut self.est_lifespan_years).speed(0.5));
                            ui.end_row();
                        }
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.estimate.run", "Calculate")).clicked() {
                    self.compute_estimate();
                }
                if let Some(err) = &self.est_error {
                    ui.label(err);
                }
            });
        });

        if let Some(b) = &self.est_result {
            let code = self.config.currency.code();
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                egui::Grid::new("est_result_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.estimate.result.electricity", "Electricity"));
                        ui.label(format!("{:.2} {code}", b.electricity_cost));
                        ui.end_row();
                        ui.label(txt("gui.estimate.result.filament", "Filament"));
                        ui.label(format!("{:.2} {code}", b.filament_cost));
                        ui.end_row();
                        ui.label(txt("gui.estimate.result.depreciation", "Depreciation"));
                        ui.label(format!("{:.2} {code}", b.depreciation_cost));
                        ui.end_row();
                        ui.strong(txt("gui.estimate.result.total", "Total"));
                        ui.strong(format!("{:.2} {code}", b.total_cost));
                        ui.end_row();
                    });
            });
        }

        ui.add_space(8.0);
        let legend_body = fill_template(
            &txt(
                "gui.estimate.legend.body",
                "Electricity = hours x power[kW] x rate. Filament = grams/1000 x price. \
                 Depreciation spreads the printer price over lifespan x {hours_per_year} h. \
                 Values are taken as-is; the currency label does no conversion.",
            ),
            &[("hours_per_year", format!("{HOURS_PER_YEAR:.0}"))],
        );
        legend_toggle(
            ui,
            &txt("gui.estimate.legend.title", "How the estimate works"),
            &legend_body,
            &mut self.show_legend_estimate,
        );
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.unit.heading", "Unit Converter"),
            &txt("gui.unit.tip", "Convert duration, mass and power values."),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.unit.quantity.label", "Quantity"),
                            &txt("gui.unit.quantity_tip", "Select the quantity type"),
                        );
                        let before = self.conv_kind;
                        let q_options = [
                            (
                                QuantityKind::Duration,
                                txt("gui.unit.quantity.duration", "Duration"),
                            ),
                            (QuantityKind::Mass, txt("gui.unit.quantity.mass", "Mass")),
                            (QuantityKind::Power, txt("gui.unit.quantity.power", "Power")),
                        ];
                        let selected_label = q_options
                            .iter()
                            .find(|(k, _)| *k == self.conv_kind)
                            .map(|(_, l)| l.clone())
                            .unwrap_or_default();
                        egui::ComboBox::from_id_source("conv_kind")
                            .selected_text(selected_label)
                            .show_ui(ui, |ui| {
                                for (k, label) in &q_options {
                                    ui.selectable_value(&mut self.conv_kind, *k, label.clone());
                                }
                            });
                        if before != self.conv_kind {
                            let (f, t) = default_units_for_kind(self.conv_kind);
                            self.conv_from = f.to_string();
                            self.conv_to = t.to_string();
                        }
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.value", "Value"),
                            &txt("gui.unit.value_tip", "Enter the value to convert"),
                        );
                        ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.from", "From unit"),
                            &txt("gui.unit.from_tip", "Current unit of the value"),
                        );
                        egui::ComboBox::from_id_source("conv_from")
                            .selected_text(unit_label(&self.conv_from, self.conv_kind))
                            .show_ui(ui, |ui| {
                                for (label, code) in unit_options(self.conv_kind) {
                                    ui.selectable_value(
                                        &mut self.conv_from,
                                        code.to_string(),
                                        *label,
                                    );
                                }
                            });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.to", "To unit"),
                            &txt("gui.unit.to_tip", "Desired unit after conversion"),
                        );
                        egui::ComboBox::from_id_source("conv_to")
                            .selected_text(unit_label(&self.conv_to, self.conv_kind))
                            .show_ui(ui, |ui| {
                                for (label, code) in unit_options(self.conv_kind) {
                                    ui.selectable_value(
                                        &mut self.conv_to,
                                        code.to_string(),
                                        *label,
                                    );
                                }
                            });
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.unit.run", "Convert")).clicked() {
                    self.conv_result = match conversion::convert(
                        self.conv_kind,
                        self.conv_value,
                        self.conv_from.trim(),
                        self.conv_to.trim(),
                    ) {
                        Ok(v) => Some(format!("{v:.6} {}", self.conv_to.trim())),
                        Err(e) => Some(format!("{}: {e}", txt("gui.unit.error_prefix", "Error"))),
                    };
                }
                if let Some(res) = &self.conv_result {
                    ui.label(res);
                }
            });
        });
    }

    fn ui_filaments(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.filament.heading", "Filament Reference"),
            &txt(
                "gui.filament.tip",
                "Typical densities and rough spool prices for common materials.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("fil_grid")
                .num_columns(5)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.strong(txt("gui.filament.col.code", "Code"));
                    ui.strong(txt("gui.filament.col.density", "Density [g/cm³]"));
                    ui.strong(txt("gui.filament.col.price", "Ref. price [/kg]"));
                    ui.strong(txt("gui.filament.col.notes", "Notes"));
                    ui.strong("");
                    ui.end_row();
                    for f in filament_db::filaments() {
                        ui.label(f.code);
                        ui.label(format!("{:.2}", f.density_g_per_cm3));
                        ui.label(format!("{:.0}", f.reference_price_per_kg));
                        ui.label(f.notes);
                        if ui
                            .button(txt("gui.filament.apply_price", "Use as price"))
                            .clicked()
                        {
                            self.est_filament_rate = f.reference_price_per_kg;
                        }
                        ui.end_row();
                    }
                });
        });
        ui.add_space(4.0);
        ui.small(txt(
            "gui.filament.note",
            "Reference values only; use your actual purchase price for estimates.",
        ));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        // 최초 1회 화면 크기 조정. 모니터 크기를 아직 모르면 다음 프레임에 다시 시도한다.
        if self.apply_initial_view_size {
            if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
                if monitor.x > 0.0 && monitor.y > 0.0 {
                    let target = egui::vec2(
                        (monitor.x * 0.50).max(760.0),
                        (monitor.y * 0.60).max(620.0),
                    );
                    ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                    self.apply_initial_view_size = false;
                }
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 테마와 투명도. 매 프레임 기본 비주얼에서 새로 만들기 때문에
        // 알파 곱이 누적되지 않는다.
        let mut style = (*ctx.style()).clone();
        style.visuals = match self.theme {
            ThemeChoice::System => match frame.info().system_theme {
                Some(eframe::Theme::Light) => egui::Visuals::light(),
                _ => egui::Visuals::dark(),
            },
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
        };
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Print Cost Toolbox"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui
                    .button(txt("gui.formula.button", "Formula reference"))
                    .clicked()
                {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.theme", "Theme"));
                    ui.horizontal(|ui| {
                        ui.selectable_value(
                            &mut self.theme,
                            ThemeChoice::System,
                            txt("gui.settings.theme_system", "System"),
                        );
                        ui.selectable_value(
                            &mut self.theme,
                            ThemeChoice::Light,
                            txt("gui.settings.theme_light", "Light"),
                        );
                        ui.selectable_value(
                            &mut self.theme,
                            ThemeChoice::Dark,
                            txt("gui.settings.theme_dark", "Dark"),
                        );
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider =
                        egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(
                                &mut self.lang_input,
                                "en-us".into(),
                                "English (US)",
                            );
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                            ui.selectable_value(&mut self.lang_input, "pl-pl".into(), "Polski");
                        });
                    ui.label(txt("gui.settings.pack_dir", "Language pack dir (optional)"));
                    ui.text_edit_singleline(&mut self.lang_pack_dir_input);

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui
                            .button(txt("gui.settings.font_pick", "Browse..."))
                            .clicked()
                        {
                            if let Some(path) = FileDialog::new()
                                .add_filter("font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_apply", "Apply")).clicked() {
                            match load_custom_font(ctx, &self.custom_font_path) {
                                Ok(()) => self.font_load_error = None,
                                Err(e) => self.font_load_error = Some(e),
                            }
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.label(err);
                    }

                    ui.separator();
                    if ui
                        .button(txt("gui.settings.save", "Save settings"))
                        .clicked()
                    {
                        self.config.language = self.lang_input.clone();
                        self.config.language_pack_dir =
                            if self.lang_pack_dir_input.trim().is_empty() {
                                None
                            } else {
                                Some(self.lang_pack_dir_input.trim().to_string())
                            };
                        self.config.window_alpha = self.window_alpha;
                        // 저장 즉시 번역기에도 반영한다.
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline estimator for 3D print job costs",
                    ));
                    ui.label(txt("gui.about.version", "Version: 1.0.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.currency",
                        "- Currency is a display label; no exchange rates are applied.",
                    ));
                    ui.label(txt(
                        "gui.about.time",
                        "- Print time comes from your slicer; the CLI also accepts 4h30m text.",
                    ));
                    ui.label(txt(
                        "gui.about.hint",
                        "Adjust language and font in settings if text looks wrong.",
                    ));
                });
        }

        // 계산식 모달
        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.label(txt(
                        "gui.formula.electricity",
                        "Electricity: (minutes / 60) x power[kW] x rate[/kWh].",
                    ));
                    ui.label(txt(
                        "gui.formula.filament",
                        "Filament: (grams / 1000) x price[/kg].",
                    ));
                    ui.label(txt(
                        "gui.formula.depreciation",
                        "Depreciation: printer price / (lifespan[y] x 365 x 24 h) x print hours.",
                    ));
                    ui.separator();
                    ui.label(txt(
                        "gui.formula.total",
                        "Total is the exact sum; rounding to 2 decimals happens only on display.",
                    ));
                });
        }

        // 좌측 내비게이션 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Estimate => self.ui_estimate(ui),
                    Tab::UnitConv => self.ui_unit_conv(ui),
                    Tab::Filaments => self.ui_filaments(ui),
                });
        });
    }
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Duration => ("min", "h"),
        QuantityKind::Mass => ("g", "kg"),
        QuantityKind::Power => ("w", "kw"),
    }
}

fn unit_options(kind: QuantityKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        QuantityKind::Duration => &[
            ("minutes", "min"),
            ("hours", "h"),
            ("days", "d"),
            ("years", "y"),
        ],
        QuantityKind::Mass => &[("g", "g"), ("kg", "kg"), ("lb", "lb")],
        QuantityKind::Power => &[("W", "w"), ("kW", "kw")],
    }
}

fn unit_label(code: &str, kind: QuantityKind) -> String {
    for (label, c) in unit_options(kind) {
        if code.eq_ignore_ascii_case(c) {
            return label.to_string();
        }
    }
    code.to_string()
}

fn unit_combo(ui: &mut egui::Ui, value: &mut String, options: &[(&str, &str)]) {
    let current = options
        .iter()
        .find(|(_, c)| value.eq_ignore_ascii_case(c))
        .map(|(l, _)| *l)
        .unwrap_or(value.as_str());
    egui::ComboBox::from_id_source(ui.next_auto_id())
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            for (label, code) in options {
                ui.selectable_value(value, code.to_string(), *label);
            }
        });
}

fn power_unit_options() -> &'static [(&'static str, &'static str)] {
    &[("kW", "kw"), ("W", "w")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_units_follow_kind() {
        assert_eq!(default_units_for_kind(QuantityKind::Duration), ("min", "h"));
        assert_eq!(default_units_for_kind(QuantityKind::Mass), ("g", "kg"));
        assert_eq!(default_units_for_kind(QuantityKind::Power), ("w", "kw"));
    }

    #[test]
    fn fill_template_replaces_vars() {
        let out = fill_template("{a} + {b}", &[("a", "1".to_string()), ("b", "2".to_string())]);
        assert_eq!(out, "1 + 2");
    }

    #[test]
    fn compute_estimate_matches_manual_total() {
        let mut app = GuiApp::new(config::Config::default());
        app.est_hours = 4;
        app.est_minutes = 30;
        app.est_weight_text = "50".into();
        app.compute_estimate();
        let b = app.est_result.expect("breakdown");
        assert!(app.est_error.is_none());
        assert!((b.electricity_cost - 1.224).abs() < 1e-9);
        assert!((b.filament_cost - 5.0).abs() < 1e-9);
        assert!((b.total_cost - 6.224).abs() < 1e-9);
    }

    #[test]
    fn compute_estimate_converts_watts() {
        let mut app = GuiApp::new(config::Config::default());
        app.est_hours = 1;
        app.est_minutes = 0;
        app.est_weight_text = "0".into();
        app.est_power = 200.0;
        app.est_power_unit = "w".into();
        app.compute_estimate();
        let b = app.est_result.expect("breakdown");
        assert!((b.electricity_cost - 0.2 * 1.36).abs() < 1e-9);
    }

    #[test]
    fn compute_estimate_rejects_non_numeric_weight() {
        let mut app = GuiApp::new(config::Config::default());
        app.est_weight_text = "abc".into();
        app.compute_estimate();
        assert!(app.est_result.is_none());
        assert!(app.est_error.is_some());
    }

    #[test]
    fn compute_estimate_rejects_zero_lifespan() {
        let mut app = GuiApp::new(config::Config::default());
        app.est_weight_text = "50".into();
        app.est_depreciation = true;
        app.est_lifespan_years = 0.0;
        app.compute_estimate();
        assert!(app.est_result.is_none());
        assert!(app.est_error.is_some());
    }
}
