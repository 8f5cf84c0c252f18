//! 출력 비용 계산 모듈 모음.

pub mod depreciation;
pub mod print_cost;

pub use depreciation::DepreciationPlan;
pub use print_cost::{estimate_print_cost, CostBreakdown, PrintJobInput};
