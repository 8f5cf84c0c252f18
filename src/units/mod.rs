//! 단위 정의 및 변환 모듈 모음.

pub mod duration;
pub mod mass;
pub mod power;

pub use duration::{convert_duration, DurationUnit, HOURS_PER_YEAR};
pub use mass::{convert_mass, MassUnit};
pub use power::{convert_power, PowerUnit};
