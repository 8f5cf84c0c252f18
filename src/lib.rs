//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코드를 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod cost;
pub mod filament_db;
pub mod i18n;
pub mod print_time;
pub mod quantity;
pub mod ui_cli;
pub mod units;
